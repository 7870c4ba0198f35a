use clap::Parser;
use fastrand::Rng;
use std::path::PathBuf;
use tracing::info;
use zip_distance::AppError;
use zip_distance::fixture::{random_zip_codes, write_zip_codes};

#[derive(Parser, Debug)]
#[command(version, about = "Writes a file of random US ZIP codes to use as input")]
struct Cli {
    /// Number of ZIP codes to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// File to write the ZIP codes to
    #[arg(short, long, default_value = "zipcodes.txt")]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let cli = Cli::parse();
    let mut rng = cli.seed.map(Rng::with_seed).unwrap_or_default();

    let zip_codes = random_zip_codes(cli.count, &mut rng)?;
    write_zip_codes(&cli.output, &zip_codes).await?;

    info!("✅  Random US ZIP codes saved to {}:\n{}", cli.output.display(), zip_codes.join("\n"));
    Ok(())
}
