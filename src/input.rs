use crate::extensions::path_ext::FileName;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Reads one postal code per line. Blank lines are skipped, order and duplicates are preserved.
#[instrument]
pub async fn load_postal_codes(path: &Path) -> Result<Vec<String>, InputError> {
    info!("📁 Loading postal codes from '{}'...", path.string_file_name());
    let content = fs::read_to_string(path).await.map_err(|source| InputError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let postal_codes = parse_postal_codes(&content);
    info!("📁 Loading postal codes from '{}'... OK, {} loaded", path.string_file_name(), postal_codes.len());
    Ok(postal_codes)
}

pub fn parse_postal_codes(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read postal codes from '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
