//! Single-user map session: waypoints, the selected pair, the travel mode and
//! the route derived from them. Nothing here performs I/O; route requests are
//! handed out as [`RouteTicket`]s and their outcome is fed back through
//! [`Session::complete_route`].

mod events;
mod router;
mod selection;
mod waypoints;

pub use events::Event;
pub use router::{Completion, RouteController, RouteState, RouteTicket};
pub use selection::{Selection, Toggle};
pub use waypoints::WaypointStore;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    entities::{Camera, City, Coordinates, Route, TravelMode, Waypoint},
    error::{invalid_input_error, Error},
};

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub city: &'static str,
    pub camera: Camera,
    pub waypoints: Vec<Waypoint>,
    pub selected: Vec<Uuid>,
    pub travel_mode: TravelMode,
    pub state: RouteState,
    pub is_routing: bool,
    pub route: Option<Route>,
}

#[derive(Debug)]
pub struct Session {
    city: &'static City,
    camera: Camera,
    waypoints: WaypointStore,
    selection: Selection,
    travel_mode: TravelMode,
    router: RouteController,
    events: Vec<Event>,
}

impl Session {
    pub fn open(city: &'static City) -> Self {
        let camera = Camera::for_city(city);

        let mut session = Self {
            city,
            camera,
            waypoints: WaypointStore::default(),
            selection: Selection::default(),
            travel_mode: TravelMode::default(),
            router: RouteController::default(),
            events: vec![],
        };
        session.publish(Event::SessionOpened {
            city: city.id,
            camera,
        });

        session
    }

    pub fn city(&self) -> &'static City {
        self.city
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        self.waypoints.list()
    }

    pub fn selected(&self) -> &[Uuid] {
        self.selection.ids()
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn route(&self) -> Option<&Route> {
        self.router.route()
    }

    pub fn is_routing(&self) -> bool {
        self.router.is_routing()
    }

    pub fn state(&self) -> RouteState {
        self.router.state(self.selection.len())
    }

    pub fn add_waypoint(&mut self, coordinates: Coordinates) -> Result<Waypoint, Error> {
        let waypoint = self.waypoints.add(coordinates)?.clone();
        self.publish(Event::WaypointAdded {
            waypoint: waypoint.clone(),
        });

        Ok(waypoint)
    }

    /// Drops a waypoint under the current camera center.
    pub fn drop_waypoint(&mut self) -> Result<Waypoint, Error> {
        self.add_waypoint(self.camera.center)
    }

    /// Toggles a waypoint in or out of the selection and returns the
    /// resulting selection, in pick order.
    pub fn toggle(&mut self, id: Uuid) -> Result<Vec<Uuid>, Error> {
        if !self.waypoints.contains(&id) {
            return Err(invalid_input_error());
        }

        if let Toggle::Reseeded = self.selection.toggle(id) {
            tracing::debug!(waypoint = %id, "selection full, starting a new pair");
        }
        let selected = self.selection.ids().to_vec();
        self.publish(Event::SelectionChanged {
            selected: selected.clone(),
        });

        Ok(selected)
    }

    /// Returns a ticket when the change requires the route to be recomputed.
    pub fn set_travel_mode(&mut self, travel_mode: TravelMode) -> Option<RouteTicket> {
        if self.travel_mode == travel_mode {
            return None;
        }

        self.travel_mode = travel_mode;
        self.publish(Event::TravelModeChanged { travel_mode })
    }

    /// Starts a route computation for the selected pair. `None` when fewer or
    /// more than two waypoints are selected or a request is already running.
    pub fn request_route(&mut self) -> Option<RouteTicket> {
        let (origin, destination) = self.selected_pair()?;
        let ticket = self
            .router
            .begin(&origin, &destination, self.travel_mode)?;

        self.publish(Event::RoutingStarted {
            origin: origin.id,
            destination: destination.id,
            travel_mode: ticket.travel_mode,
        });

        Some(ticket)
    }

    pub fn complete_route(&mut self, ticket: RouteTicket, route: Route) -> Completion {
        let pair = self.selected_pair();
        let completion = self.router.complete(
            ticket,
            route,
            pair.as_ref().map(|(origin, destination)| (origin, destination)),
            self.travel_mode,
        );

        match &completion {
            Completion::Committed(route) => {
                self.publish(Event::RouteResolved {
                    route: route.clone(),
                });
            }
            Completion::Retry(next) => {
                self.publish(Event::RoutingStarted {
                    origin: next.origin.id,
                    destination: next.destination.id,
                    travel_mode: next.travel_mode,
                });
            }
            Completion::Discarded => {}
        }

        completion
    }

    pub fn toggle_tilt(&mut self) -> Camera {
        self.camera.toggle_tilt();
        self.publish(Event::CameraMoved {
            camera: self.camera,
        });

        self.camera
    }

    pub fn rotate(&mut self) -> Camera {
        self.camera.rotate();
        self.publish(Event::CameraMoved {
            camera: self.camera,
        });

        self.camera
    }

    pub fn pan_to(&mut self, center: Coordinates) -> Result<Camera, Error> {
        self.camera.pan_to(center.validate()?);
        self.publish(Event::CameraMoved {
            camera: self.camera,
        });

        Ok(self.camera)
    }

    pub fn close(&mut self) {
        self.router.invalidate();
        self.selection.clear();
        self.publish(Event::SessionClosed);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            city: self.city.id,
            camera: self.camera,
            waypoints: self.waypoints.list().to_vec(),
            selected: self.selection.ids().to_vec(),
            travel_mode: self.travel_mode,
            state: self.state(),
            is_routing: self.is_routing(),
            route: self.router.route().cloned(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn selected_pair(&self) -> Option<(Waypoint, Waypoint)> {
        let (origin, destination) = self.selection.pair()?;

        match (self.waypoints.get(&origin), self.waypoints.get(&destination)) {
            (Some(origin), Some(destination)) => Some((origin.clone(), destination.clone())),
            _ => None,
        }
    }

    fn publish(&mut self, event: Event) -> Option<RouteTicket> {
        self.events.push(event.clone());
        self.react(&event)
    }

    /// The route controller's subscription to selection and mode changes.
    fn react(&mut self, event: &Event) -> Option<RouteTicket> {
        match event {
            Event::SelectionChanged { selected } if selected.len() != 2 => {
                if self.router.invalidate() {
                    self.events.push(Event::RouteCleared);
                }
                None
            }
            Event::TravelModeChanged { .. } => match self.router.on_travel_mode_changed() {
                true => self.request_route(),
                false => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn philly() -> Session {
        Session::open(City::find("philly").unwrap())
    }

    fn selected_pair(session: &mut Session) -> (Uuid, Uuid) {
        let a = session.add_waypoint(Coordinates::new(39.95, -75.18)).unwrap().id;
        let b = session.add_waypoint(Coordinates::new(39.95, -75.16)).unwrap().id;
        session.toggle(a).unwrap();
        session.toggle(b).unwrap();

        (a, b)
    }

    fn resolve(session: &mut Session, ticket: RouteTicket) -> Completion {
        let route = Route::fallback(&ticket.origin, &ticket.destination, ticket.travel_mode, 1706.76);
        session.complete_route(ticket, route)
    }

    #[test]
    fn open_publishes_camera() {
        let mut session = philly();

        assert_eq!(
            session.drain_events(),
            vec![Event::SessionOpened {
                city: "philly",
                camera: session.camera(),
            }]
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn drop_waypoint_uses_camera_center() {
        let mut session = philly();
        session.pan_to(Coordinates::new(39.96, -75.19)).unwrap();

        let waypoint = session.drop_waypoint().unwrap();

        assert_eq!(waypoint.coordinates, Coordinates::new(39.96, -75.19));
        assert_eq!(session.waypoints(), &[waypoint]);
    }

    #[test]
    fn toggle_rejects_unknown_waypoints() {
        let mut session = philly();
        assert!(session.toggle(Uuid::new_v4()).is_err());
        assert!(session.selected().is_empty());
    }

    #[test]
    fn request_requires_two_selected() {
        let mut session = philly();
        let a = session.drop_waypoint().unwrap().id;
        assert_eq!(session.state(), RouteState::Idle);
        assert!(session.request_route().is_none());

        session.toggle(a).unwrap();
        assert!(session.request_route().is_none());
        assert!(!session.is_routing());
    }

    #[test]
    fn route_lifecycle() {
        let mut session = philly();
        let (a, b) = selected_pair(&mut session);
        assert_eq!(session.state(), RouteState::Ready);

        let ticket = session.request_route().unwrap();
        assert_eq!((ticket.origin.id, ticket.destination.id), (a, b));
        assert_eq!(session.state(), RouteState::Routing);
        assert!(session.request_route().is_none());

        assert!(matches!(resolve(&mut session, ticket), Completion::Committed(_)));
        assert_eq!(session.state(), RouteState::Resolved);
        assert_eq!(session.route().map(|route| route.distance.as_str()), Some("1.71 km"));
    }

    #[test]
    fn shrinking_selection_clears_route() {
        let mut session = philly();
        let (a, _) = selected_pair(&mut session);
        let ticket = session.request_route().unwrap();
        resolve(&mut session, ticket);
        session.drain_events();

        session.toggle(a).unwrap();

        assert!(session.route().is_none());
        assert_eq!(session.state(), RouteState::Idle);
        assert_eq!(
            session.drain_events(),
            vec![
                Event::SelectionChanged {
                    selected: session.selected().to_vec()
                },
                Event::RouteCleared,
            ]
        );
    }

    #[test]
    fn third_click_reseeds_and_clears_route() {
        let mut session = philly();
        selected_pair(&mut session);
        let ticket = session.request_route().unwrap();
        resolve(&mut session, ticket);

        let c = session.add_waypoint(Coordinates::new(39.96, -75.17)).unwrap().id;
        assert_eq!(session.toggle(c).unwrap(), vec![c]);
        assert!(session.route().is_none());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut session = philly();
        let (a, _) = selected_pair(&mut session);
        let ticket = session.request_route().unwrap();

        session.toggle(a).unwrap();
        session.toggle(a).unwrap();

        assert!(matches!(resolve(&mut session, ticket), Completion::Discarded));
        assert!(session.route().is_none());
        assert_eq!(session.state(), RouteState::Ready);
    }

    #[test]
    fn mode_change_with_route_requests_again() {
        let mut session = philly();
        let (a, b) = selected_pair(&mut session);
        let ticket = session.request_route().unwrap();
        resolve(&mut session, ticket);

        let ticket = session.set_travel_mode(TravelMode::Walking).unwrap();

        assert_eq!(ticket.travel_mode, TravelMode::Walking);
        assert_eq!((ticket.origin.id, ticket.destination.id), (a, b));
        assert!(session.set_travel_mode(TravelMode::Walking).is_none());
    }

    #[test]
    fn mode_change_without_route_requests_nothing() {
        let mut session = philly();
        selected_pair(&mut session);

        assert!(session.set_travel_mode(TravelMode::Transit).is_none());
        assert_eq!(session.travel_mode(), TravelMode::Transit);
        assert!(!session.is_routing());
    }

    #[test]
    fn camera_controls() {
        let mut session = philly();

        assert_eq!(session.toggle_tilt().tilt, 0.0);
        assert_eq!(session.rotate().heading, 180.0);
        assert!(session.pan_to(Coordinates::new(91.0, 0.0)).is_err());
    }

    #[test]
    fn close_discards_everything_transient() {
        let mut session = philly();
        selected_pair(&mut session);
        let ticket = session.request_route().unwrap();
        session.drain_events();

        session.close();

        assert!(!session.is_routing());
        assert!(session.selected().is_empty());
        assert!(matches!(resolve(&mut session, ticket), Completion::Discarded));
        assert_eq!(session.drain_events(), vec![Event::SessionClosed]);
    }
}
