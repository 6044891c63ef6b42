use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Camera, City, Coordinates, Route, TravelMode, Waypoint};
use crate::error::Error;
use crate::session::Snapshot;

#[async_trait]
pub trait SessionAPI {
    async fn list_cities(&self) -> Vec<City>;
    async fn open_session(&self, city_id: String) -> Result<Snapshot, Error>;
    async fn find_session(&self) -> Result<Snapshot, Error>;
    async fn close_session(&self) -> Result<(), Error>;
}

#[async_trait]
pub trait WaypointAPI {
    /// Adds a waypoint at `coordinates`, or under the camera center when absent.
    async fn create_waypoint(&self, coordinates: Option<Coordinates>) -> Result<Waypoint, Error>;
    async fn list_waypoints(&self) -> Result<Vec<Waypoint>, Error>;
}

#[async_trait]
pub trait SelectionAPI {
    async fn toggle_waypoint(&self, id: Uuid) -> Result<Vec<Uuid>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn set_travel_mode(&self, travel_mode: TravelMode) -> Result<Option<Route>, Error>;
    async fn request_route(&self) -> Result<Option<Route>, Error>;
    async fn find_route(&self) -> Result<Option<Route>, Error>;
}

#[async_trait]
pub trait CameraAPI {
    async fn toggle_tilt(&self) -> Result<Camera, Error>;
    async fn rotate_camera(&self) -> Result<Camera, Error>;
    async fn pan_camera(&self, center: Coordinates) -> Result<Camera, Error>;
}

pub trait API: SessionAPI + WaypointAPI + SelectionAPI + RouteAPI + CameraAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
