use crate::distance::distance_meters;
use crate::domain::{GeoLocation, LocationRecord, RankedLocation};
use ordered_float::OrderedFloat;
use tracing::instrument;

/// Computes the distance of every record to `reference` and orders them nearest first. Records at equal distances
/// keep their input order.
#[instrument(skip_all, fields(count = records.len()))]
pub fn rank(records: Vec<LocationRecord>, reference: &GeoLocation) -> Vec<RankedLocation> {
    let mut ranked = records
        .into_iter()
        .map(|record| {
            let distance = distance_meters(&record.location, reference);
            RankedLocation::new(record, distance)
        })
        .collect::<Vec<_>>();

    ranked.sort_by_key(|location| OrderedFloat(location.distance_meters));
    ranked
}
