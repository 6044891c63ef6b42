use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Value of the `mode` parameter understood by the directions service.
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

#[test]
fn serde_test() {
    let json = serde_json::to_string(&TravelMode::Bicycling).unwrap();
    assert_eq!(json, "\"BICYCLING\"");

    let mode: TravelMode = serde_json::from_str("\"TRANSIT\"").unwrap();
    assert_eq!(mode, TravelMode::Transit);
    assert_eq!(mode.query_value(), "transit");

    assert!(serde_json::from_str::<TravelMode>("\"FLYING\"").is_err());
}
