use uuid::Uuid;

use crate::{
    entities::{Coordinates, Waypoint},
    error::Error,
};

#[derive(Debug, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn add(&mut self, coordinates: Coordinates) -> Result<&Waypoint, Error> {
        let waypoint = Waypoint::new(coordinates.validate()?);
        self.waypoints.push(waypoint);

        Ok(&self.waypoints[self.waypoints.len() - 1])
    }

    /// All waypoints in creation order.
    pub fn list(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn get(&self, id: &Uuid) -> Option<&Waypoint> {
        self.waypoints.iter().find(|waypoint| &waypoint.id == id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.get(id).is_some()
    }
}
