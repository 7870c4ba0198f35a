use crate::distance::meters_to_miles;
use crate::domain::{LocationRecord, Unit};

/// A [`LocationRecord`] enriched with its distance to the reference location.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedLocation {
    pub record: LocationRecord,
    pub distance_meters: f64,
    pub distance_miles: f64,
}

impl RankedLocation {
    pub fn new(record: LocationRecord, distance_meters: f64) -> Self {
        RankedLocation {
            record,
            distance_meters,
            distance_miles: meters_to_miles(distance_meters),
        }
    }

    pub fn distance_in(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Meters => self.distance_meters,
            Unit::Miles => self.distance_miles,
        }
    }
}
