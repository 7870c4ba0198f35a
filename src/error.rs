use crate::fixture::FixtureError;
use crate::geocoding::GeocodingClientError;
use crate::input::InputError;
use config::ConfigError;
use thiserror::Error;

/// Errors that abort a run. Failures to resolve a single postal code never end up here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    GeocodingClient(#[from] GeocodingClientError),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}
