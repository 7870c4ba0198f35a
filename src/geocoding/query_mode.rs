use serde::Deserialize;

/// How a postal code is sent to the geocoding provider.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Place text search for the postal code, biased towards the reference location within a radius.
    #[default]
    TextSearch,
    /// Geocode the postal code as a free-text address.
    Geocode,
}
