use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(-90.0..=90.0).contains(&inner.latitude) {
            return Err(Error::custom(format!("invalid location latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(-180.0..=180.0).contains(&inner.longitude) {
            return Err(Error::custom(format!(
                "invalid location longitude: {}, must be between -180 and 180",
                inner.longitude
            )));
        }

        Ok(GeoLocation::new(inner.latitude, inner.longitude))
    }
}
