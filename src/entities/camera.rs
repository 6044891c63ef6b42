use serde::{Deserialize, Serialize};

use crate::entities::{City, Coordinates};

const TILTED: f64 = 45.0;
const QUARTER_TURN: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub center: Coordinates,
    pub zoom: f64,
    pub tilt: f64,
    pub heading: f64,
}

impl Camera {
    pub fn for_city(city: &City) -> Self {
        Self {
            center: city.center,
            zoom: city.zoom,
            tilt: city.tilt,
            heading: city.heading,
        }
    }

    /// Switches between the flat view and the 45 degree perspective.
    pub fn toggle_tilt(&mut self) {
        self.tilt = match self.tilt > 0.0 {
            true => 0.0,
            false => TILTED,
        };
    }

    pub fn rotate(&mut self) {
        self.heading = (self.heading + QUARTER_TURN) % 360.0;
    }

    pub fn pan_to(&mut self, center: Coordinates) {
        self.center = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::for_city(City::find("philly").unwrap())
    }

    #[test]
    fn starts_from_city_preset() {
        let camera = camera();
        assert_eq!(camera.center, Coordinates::new(39.9524, -75.1780));
        assert_eq!(camera.zoom, 15.0);
        assert_eq!(camera.tilt, 45.0);
        assert_eq!(camera.heading, 90.0);
    }

    #[test]
    fn toggle_tilt_flips_between_flat_and_tilted() {
        let mut camera = camera();
        camera.toggle_tilt();
        assert_eq!(camera.tilt, 0.0);
        camera.toggle_tilt();
        assert_eq!(camera.tilt, 45.0);
    }

    #[test]
    fn rotate_wraps_heading() {
        let mut camera = camera();
        camera.rotate();
        assert_eq!(camera.heading, 180.0);
        camera.rotate();
        camera.rotate();
        assert_eq!(camera.heading, 0.0);
    }
}
