use serde::Serialize;

use crate::entities::Coordinates;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub center: Coordinates,
    pub zoom: f64,
    pub tilt: f64,
    pub heading: f64,
    pub highlights: &'static [&'static str],
}

pub static CITIES: [City; 2] = [
    City {
        id: "philly",
        name: "Philadelphia",
        description: "The historic heart of America. Navigate between the towering skyline of Center City and the academic hub of UPenn.",
        center: Coordinates {
            latitude: 39.9524,
            longitude: -75.1780,
        },
        zoom: 15.0,
        tilt: 45.0,
        heading: 90.0,
        highlights: &["Center City", "University of Pennsylvania", "Schuylkill River"],
    },
    City {
        id: "dallas",
        name: "Dallas",
        description: "A sprawling modern metropolis defined by its striking skyline, arts district, and deep cultural roots.",
        center: Coordinates {
            latitude: 32.7767,
            longitude: -96.7970,
        },
        zoom: 16.0,
        tilt: 45.0,
        heading: 0.0,
        highlights: &["Reunion Tower", "Arts District", "Deep Ellum"],
    },
];

impl City {
    pub fn all() -> &'static [City] {
        &CITIES
    }

    pub fn find(id: &str) -> Option<&'static City> {
        CITIES.iter().find(|city| city.id == id)
    }
}

#[test]
fn find_test() {
    assert_eq!(City::find("dallas").map(|city| city.name), Some("Dallas"));
    assert!(City::find("gotham").is_none());
    assert_eq!(City::all().len(), 2);
}
