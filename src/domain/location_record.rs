use crate::domain::GeoLocation;

pub const UNKNOWN_PLACE_NAME: &str = "Unknown";

/// A postal code together with the location the geocoding provider returned for it.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub postal_code: String,
    pub location: GeoLocation,
    pub place_name: String,
}

impl LocationRecord {
    pub fn new(postal_code: impl Into<String>, location: GeoLocation, place_name: impl Into<String>) -> Self {
        LocationRecord {
            postal_code: postal_code.into(),
            location,
            place_name: place_name.into(),
        }
    }

    /// Returns the sentinel record for a postal code that could not be resolved.
    pub fn unknown(postal_code: impl Into<String>) -> Self {
        Self::new(postal_code, GeoLocation::UNKNOWN, UNKNOWN_PLACE_NAME)
    }

    /// A record is resolved when it carries a real coordinate. A missing place name alone does not make it unresolved.
    pub fn is_resolved(&self) -> bool {
        !self.location.is_unknown()
    }
}
