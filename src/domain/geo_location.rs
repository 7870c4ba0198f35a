/// A point on the earth's surface in decimal degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// The sentinel location assigned to postal codes that could not be resolved.
    pub const UNKNOWN: GeoLocation = GeoLocation {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation { latitude, longitude }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_null_island_is_unknown() {
        assert!(GeoLocation::UNKNOWN.is_unknown());
        assert!(GeoLocation::new(-0.0, 0.0).is_unknown());
        assert!(!GeoLocation::new(0.0, -118.2662).is_unknown());
        assert!(!GeoLocation::new(33.7523035, -118.1298234).is_unknown());
    }
}
