use crate::domain::GeoLocation;
use crate::geocoding::QueryMode;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const API_KEY_VARIABLE: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variables starting with this prefix override configuration keys, e.g.
/// `ZIP_DISTANCE_GEOCODING__QUERY_MODE=geocode`.
pub const ENV_PREFIX: &str = "ZIP_DISTANCE";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    reference: GeoLocation,
    geocoding: Geocoding,
    #[serde(default)]
    input: Input,
    #[serde(default)]
    report: Report,
}

impl AppConfig {
    /// Loads `<name>` (required) and `<name>_local` (optional), then applies [`ENV_PREFIX`] variables on top. The API key is
    /// taken from [`API_KEY_VARIABLE`] when it is set.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        Self::load_with(name, environment())
    }

    fn load_with(name: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(environment)
            .set_override_option("geocoding.api_key", env::var(API_KEY_VARIABLE).ok())?
            .build()?
            .try_deserialize()
    }

    pub fn reference(&self) -> &GeoLocation {
        &self.reference
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__")
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    #[serde(default = "default_geocoding_url")]
    url: String,
    api_key: String,
    #[serde(default)]
    query_mode: QueryMode,
    #[serde(default = "default_radius_m")]
    radius_m: u32,
}

fn default_geocoding_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_radius_m() -> u32 {
    50_000
}

impl Geocoding {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn query_mode(&self) -> QueryMode {
        self.query_mode
    }

    pub fn radius_m(&self) -> u32 {
        self.radius_m
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Input {
    file: Option<String>,
    #[serde(default)]
    postal_codes: Vec<String>,
}

impl Input {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref().map(Path::new)
    }

    pub fn postal_codes(&self) -> &[String] {
        &self.postal_codes
    }
}

#[derive(Debug, Deserialize)]
pub struct Report {
    #[serde(default = "default_include_miles")]
    include_miles: bool,
}

fn default_include_miles() -> bool {
    true
}

impl Default for Report {
    fn default() -> Self {
        Report {
            include_miles: default_include_miles(),
        }
    }
}

impl Report {
    pub fn include_miles(&self) -> bool {
        self.include_miles
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                reference: GeoLocation::new(34.0395, -118.2662),
                geocoding: Geocoding {
                    url: "https://geocoding.url".to_string(),
                    api_key: "key".to_string(),
                    query_mode: QueryMode::TextSearch,
                    radius_m: 50_000,
                },
                input: Input::default(),
                report: Report::default(),
            },
        }
    }

    pub fn geocoding_url(mut self, url: String) -> Self {
        self.config.geocoding.url = url;
        self
    }

    pub fn query_mode(mut self, query_mode: QueryMode) -> Self {
        self.config.geocoding.query_mode = query_mode;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
