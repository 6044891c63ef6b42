use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Rejects non-finite values and anything outside the WGS84 ranges.
    pub fn validate(self) -> Result<Self, Error> {
        let valid = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);

        match valid {
            true => Ok(self),
            false => Err(invalid_input_error()),
        }
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

#[test]
fn validate_test() {
    assert!(Coordinates::new(39.95, -75.18).validate().is_ok());
    assert!(Coordinates::new(90.0, 180.0).validate().is_ok());
    assert!(Coordinates::new(90.5, 0.0).validate().is_err());
    assert!(Coordinates::new(0.0, -180.1).validate().is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
    assert!(Coordinates::new(0.0, f64::INFINITY).validate().is_err());
}

#[test]
fn point_conversion_test() {
    let point: Point<f64> = Coordinates::new(39.95, -75.18).into();
    assert_eq!(point.x(), -75.18);
    assert_eq!(point.y(), 39.95);
}

#[test]
fn query_string_test() {
    let location: String = Coordinates::new(32.7767, -96.797).into();
    assert_eq!(location, "32.7767,-96.797");
}
