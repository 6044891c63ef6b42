use super::Engine;

use async_trait::async_trait;

use crate::{
    api::WaypointAPI,
    entities::{Coordinates, Waypoint},
    error::Error,
};

#[async_trait]
impl WaypointAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_waypoint(&self, coordinates: Option<Coordinates>) -> Result<Waypoint, Error> {
        self.with_session(|session| match coordinates {
            Some(coordinates) => session.add_waypoint(coordinates),
            None => session.drop_waypoint(),
        })
        .await
    }

    async fn list_waypoints(&self) -> Result<Vec<Waypoint>, Error> {
        self.with_session(|session| Ok(session.waypoints().to_vec()))
            .await
    }
}
