use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, TravelMode, Waypoint};

pub const FALLBACK_DURATION: &str = "N/A";
pub const FALLBACK_START_LABEL: &str = "Direct Path";
pub const FALLBACK_END_LABEL: &str = "(API Billing Required)";

/// First leg of a provider-computed route, texts as the provider formats them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
    pub polyline: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    Primary,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePath {
    Encoded { points: String },
    Direct { from: Coordinates, to: Coordinates },
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: Uuid,
    pub destination: Uuid,
    pub travel_mode: TravelMode,
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
    pub source: RouteSource,
    pub path: RoutePath,
}

impl Route {
    pub fn primary(
        origin: &Waypoint,
        destination: &Waypoint,
        travel_mode: TravelMode,
        leg: RouteLeg,
    ) -> Self {
        let path = match leg.polyline {
            Some(points) => RoutePath::Encoded { points },
            None => RoutePath::Unavailable,
        };

        Self {
            origin: origin.id,
            destination: destination.id,
            travel_mode,
            distance: leg.distance,
            duration: leg.duration,
            start_address: leg.start_address,
            end_address: leg.end_address,
            source: RouteSource::Primary,
            path,
        }
    }

    /// Straight-line stand-in used when the provider cannot route.
    pub fn fallback(
        origin: &Waypoint,
        destination: &Waypoint,
        travel_mode: TravelMode,
        distance_meters: f64,
    ) -> Self {
        Self {
            origin: origin.id,
            destination: destination.id,
            travel_mode,
            distance: format_kilometers(distance_meters),
            duration: FALLBACK_DURATION.into(),
            start_address: FALLBACK_START_LABEL.into(),
            end_address: FALLBACK_END_LABEL.into(),
            source: RouteSource::Fallback,
            path: RoutePath::Direct {
                from: origin.coordinates,
                to: destination.coordinates,
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RouteSource::Fallback
    }
}

pub fn format_kilometers(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
