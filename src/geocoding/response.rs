use crate::domain::{GeoLocation, UNKNOWN_PLACE_NAME};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;

/// The envelope shared by the place text search and the geocode endpoints.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub status: Status,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
    /// A status this client does not know, kept verbatim for logging.
    Other(String),
}

impl From<&str> for Status {
    fn from(status: &str) -> Self {
        match status {
            "OK" => Status::Ok,
            "ZERO_RESULTS" => Status::ZeroResults,
            "OVER_QUERY_LIMIT" => Status::OverQueryLimit,
            "REQUEST_DENIED" => Status::RequestDenied,
            "INVALID_REQUEST" => Status::InvalidRequest,
            "NOT_FOUND" => Status::NotFound,
            "UNKNOWN_ERROR" => Status::UnknownError,
            other => Status::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let status = String::deserialize(deserializer)?;
        Ok(Status::from(status.as_str()))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status: &str = match self {
            Status::Ok => "OK",
            Status::ZeroResults => "ZERO_RESULTS",
            Status::OverQueryLimit => "OVER_QUERY_LIMIT",
            Status::RequestDenied => "REQUEST_DENIED",
            Status::InvalidRequest => "INVALID_REQUEST",
            Status::NotFound => "NOT_FOUND",
            Status::UnknownError => "UNKNOWN_ERROR",
            Status::Other(status) => status,
        };
        write!(f, "{}", status)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    // Only the geocode endpoint returns structured address components
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl PlaceResult {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.geometry.location.lat, self.geometry.location.lng)
    }

    /// Prefers the locality component, then the formatted address up to its first comma.
    pub fn place_name(&self) -> String {
        self.address_components
            .iter()
            .find(|component| component.types.iter().any(|t| t == "locality"))
            .map(|component| component.long_name.clone())
            .or_else(|| self.formatted_address.as_deref().and_then(first_address_part))
            .unwrap_or_else(|| UNKNOWN_PLACE_NAME.to_string())
    }
}

fn first_address_part(address: &str) -> Option<String> {
    address
        .split(',')
        .next()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
}
