use fastrand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::instrument;
use zipcodes::Zipcode;

const US: &str = "US";

/// Samples `count` US ZIP codes from the embedded ZIP code database. Codes are drawn with replacement. Entries of
/// other countries, such as military post codes abroad, are skipped.
#[instrument(skip(rng))]
pub fn random_zip_codes(count: usize, rng: &mut Rng) -> Result<Vec<String>, FixtureError> {
    let zip_codes = zipcodes::filter_by(vec![|z: &Zipcode| z.country == US], None).map_err(|_| FixtureError::Database)?;
    if zip_codes.is_empty() {
        return Err(FixtureError::Database);
    }

    Ok((0..count)
        .map(|_| zip_codes[rng.usize(..zip_codes.len())].zip_code.clone())
        .collect())
}

/// Writes the ZIP codes newline separated, the format [`crate::input::load_postal_codes`] reads.
#[instrument(skip(zip_codes))]
pub async fn write_zip_codes(path: &Path, zip_codes: &[String]) -> Result<(), FixtureError> {
    fs::write(path, zip_codes.join("\n")).await.map_err(|source| FixtureError::Io {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("the ZIP code database could not be read")]
    Database,
    #[error("could not write ZIP codes to '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
