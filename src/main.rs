use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use zip_distance::app_config::AppConfig;
use zip_distance::input::load_postal_codes;
use zip_distance::ranking::render_report;
use zip_distance::{AppError, Resolver, geocoding, rank};

#[derive(Parser, Debug)]
#[command(version, about = "Ranks postal codes by their great-circle distance to a reference location")]
struct Cli {
    /// Configuration file name, without extension
    #[arg(short, long, default_value = "config")]
    config: String,

    /// File with one postal code per line, overrides the configured input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if dotenvy::dotenv().is_ok() {
        info!("✅  Loaded .env");
    }

    let config = AppConfig::load(&cli.config)?;
    info!("✅  Loaded configuration");

    let postal_codes = match cli.input.as_deref().or(config.input().file()) {
        Some(path) => load_postal_codes(path).await?,
        None => config.input().postal_codes().to_vec(),
    };

    let resolver = Resolver::new(geocoding::new_client()?, &config);
    let records = resolver.resolve_all(&postal_codes).await;

    let ranked = rank(records, config.reference());
    print!("{}", render_report(&ranked, config.report().include_miles()));

    Ok(())
}
