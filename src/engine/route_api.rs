use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Route, TravelMode},
    error::Error,
};

#[async_trait]
impl RouteAPI for Engine {
    /// Switches the travel mode and, when a route is already shown,
    /// recomputes it for the new mode.
    #[tracing::instrument(skip(self))]
    async fn set_travel_mode(&self, travel_mode: TravelMode) -> Result<Option<Route>, Error> {
        let ticket = self
            .with_session(|session| Ok(session.set_travel_mode(travel_mode)))
            .await?;

        match ticket {
            Some(ticket) => self.drive(ticket).await,
            None => Ok(None),
        }
    }

    /// Routes between the selected pair. `None` when the selection is not a
    /// pair, another request is in flight, or the result went stale.
    #[tracing::instrument(skip(self))]
    async fn request_route(&self) -> Result<Option<Route>, Error> {
        let ticket = self
            .with_session(|session| Ok(session.request_route()))
            .await?;

        match ticket {
            Some(ticket) => self.drive(ticket).await,
            None => {
                tracing::debug!("no route requested");
                Ok(None)
            }
        }
    }

    async fn find_route(&self) -> Result<Option<Route>, Error> {
        self.with_session(|session| Ok(session.route().cloned()))
            .await
    }
}
