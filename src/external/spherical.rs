use geo_types::Point;

use super::Geometry;
use crate::entities::Coordinates;

/// Mean equatorial radius used by web map SDKs for their spherical helpers.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Spherical;

impl Geometry for Spherical {
    fn spherical_distance(&self, a: Coordinates, b: Coordinates) -> f64 {
        haversine(a.into(), b.into())
    }
}

pub fn haversine(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
