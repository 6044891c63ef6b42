use serde::Serialize;
use uuid::Uuid;

use crate::entities::{Camera, Route, TravelMode, Waypoint};

/// Change notifications published by a session, in the order they happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SessionOpened {
        city: &'static str,
        camera: Camera,
    },
    WaypointAdded {
        waypoint: Waypoint,
    },
    SelectionChanged {
        selected: Vec<Uuid>,
    },
    TravelModeChanged {
        travel_mode: TravelMode,
    },
    RoutingStarted {
        origin: Uuid,
        destination: Uuid,
        travel_mode: TravelMode,
    },
    RouteResolved {
        route: Route,
    },
    RouteCleared,
    CameraMoved {
        camera: Camera,
    },
    SessionClosed,
}
