mod camera_api;
mod route_api;
mod selection_api;
mod session_api;
mod waypoint_api;

use async_channel::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::{
    api::API,
    config::Config,
    entities::Route,
    error::{invalid_state_error, timeout_error, Error},
    external::{Directions, Geometry, GoogleMaps, Spherical},
    session::{Completion, Event, RouteTicket, Session},
};

pub type DynDirections = Arc<dyn Directions + Send + Sync>;
pub type DynGeometry = Arc<dyn Geometry + Send + Sync>;

pub struct Engine {
    directions: DynDirections,
    geometry: DynGeometry,
    route_timeout: Duration,
    session: Mutex<Option<Session>>,
    events: Option<Sender<Event>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("route_timeout", &self.route_timeout)
            .finish_non_exhaustive()
    }
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self::with_providers(
            Arc::new(GoogleMaps::new(config)),
            Arc::new(Spherical),
            config.route_timeout,
        )
    }

    pub fn with_providers(
        directions: DynDirections,
        geometry: DynGeometry,
        route_timeout: Duration,
    ) -> Self {
        Self {
            directions,
            geometry,
            route_timeout,
            session: Mutex::new(None),
            events: None,
        }
    }

    /// Session events are forwarded to the returned receiver from now on.
    pub fn subscribe(&mut self) -> Receiver<Event> {
        let (sender, receiver) = async_channel::unbounded();
        self.events = Some(sender);

        receiver
    }

    /// Runs `f` against the open session and forwards whatever it published.
    async fn with_session<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Session) -> Result<T, Error>,
    {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(invalid_state_error)?;

        let result = f(session);
        self.forward(session);

        result
    }

    fn forward(&self, session: &mut Session) {
        let events = session.drain_events();

        if let Some(sender) = &self.events {
            for event in events {
                if sender.try_send(event).is_err() {
                    tracing::debug!("event subscriber is gone");
                    break;
                }
            }
        }
    }

    /// Drives a ticket to completion. Returns the committed route, or `None`
    /// when the outcome went stale before it could be applied.
    async fn drive(&self, ticket: RouteTicket) -> Result<Option<Route>, Error> {
        let mut ticket = ticket;

        loop {
            let route = self.resolve(&ticket).await;

            let mut guard = self.session.lock().await;
            let session = match guard.as_mut() {
                Some(session) => session,
                None => return Ok(None),
            };

            let completion = session.complete_route(ticket, route);
            self.forward(session);

            match completion {
                Completion::Committed(route) => return Ok(Some(route)),
                Completion::Discarded => return Ok(None),
                Completion::Retry(next) => ticket = next,
            }
        }
    }

    /// Asks the routing provider, falling back to a straight line on any
    /// failure or when the provider does not answer in time.
    #[tracing::instrument(
        skip_all,
        fields(
            generation = ticket.generation(),
            origin = %ticket.origin.id,
            destination = %ticket.destination.id,
            travel_mode = ?ticket.travel_mode,
        )
    )]
    async fn resolve(&self, ticket: &RouteTicket) -> Route {
        let request = self.directions.compute_route(
            ticket.origin.coordinates,
            ticket.destination.coordinates,
            ticket.travel_mode,
        );

        let outcome = match tokio::time::timeout(self.route_timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(timeout_error()),
        };

        match outcome {
            Ok(leg) => Route::primary(&ticket.origin, &ticket.destination, ticket.travel_mode, leg),
            Err(err) => {
                match err.is_provider_failure() {
                    true => tracing::warn!("routing provider failed, using fallback: {}", err),
                    false => tracing::error!("routing request rejected, using fallback: {}", err),
                }

                let meters = self
                    .geometry
                    .spherical_distance(ticket.origin.coordinates, ticket.destination.coordinates);
                Route::fallback(&ticket.origin, &ticket.destination, ticket.travel_mode, meters)
            }
        }
    }
}

impl API for Engine {}
