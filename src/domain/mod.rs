mod geo_location;
mod location_record;
mod ranked_location;
mod unit;

pub use geo_location::GeoLocation;
pub use location_record::{LocationRecord, UNKNOWN_PLACE_NAME};
pub use ranked_location::RankedLocation;
pub use unit::Unit;
