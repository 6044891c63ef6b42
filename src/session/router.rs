use serde::Serialize;
use uuid::Uuid;

use crate::entities::{Route, TravelMode, Waypoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteState {
    Idle,
    Ready,
    Routing,
    Resolved,
}

/// A route computation handed out to the caller. Its owner and generation
/// tie the eventual completion back to the controller and request cycle it
/// was issued in.
#[derive(Clone, Debug)]
pub struct RouteTicket {
    owner: Uuid,
    generation: u64,
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: TravelMode,
}

impl RouteTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub enum Completion {
    Committed(Route),
    Discarded,
    Retry(RouteTicket),
}

#[derive(Debug)]
pub struct RouteController {
    id: Uuid,
    generation: u64,
    in_flight: Option<u64>,
    route: Option<Route>,
}

impl Default for RouteController {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            in_flight: None,
            route: None,
        }
    }
}

impl RouteController {
    pub fn is_routing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn state(&self, selected: usize) -> RouteState {
        if self.is_routing() {
            RouteState::Routing
        } else if selected != 2 {
            RouteState::Idle
        } else if self.route.is_some() {
            RouteState::Resolved
        } else {
            RouteState::Ready
        }
    }

    #[tracing::instrument(skip_all, fields(origin = %origin.id, destination = %destination.id))]
    pub fn begin(
        &mut self,
        origin: &Waypoint,
        destination: &Waypoint,
        travel_mode: TravelMode,
    ) -> Option<RouteTicket> {
        if self.is_routing() {
            tracing::debug!("route request ignored while another is in flight");
            return None;
        }

        if origin.id == destination.id {
            tracing::debug!("route request ignored for identical endpoints");
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);

        Some(RouteTicket {
            owner: self.id,
            generation: self.generation,
            origin: origin.clone(),
            destination: destination.clone(),
            travel_mode,
        })
    }

    /// Returns true when a travel mode change should issue a fresh request
    /// right away. Only a shown route is recomputed; one in flight is re-run
    /// for the new mode once it completes.
    pub fn on_travel_mode_changed(&self) -> bool {
        !self.is_routing() && self.route.is_some()
    }

    /// Drops the current result and orphans any in-flight request.
    /// Returns whether anything was discarded.
    pub fn invalidate(&mut self) -> bool {
        let discarded = self.route.take().is_some() || self.in_flight.is_some();

        self.generation += 1;
        self.in_flight = None;

        discarded
    }

    pub fn complete(
        &mut self,
        ticket: RouteTicket,
        route: Route,
        current_pair: Option<(&Waypoint, &Waypoint)>,
        current_mode: TravelMode,
    ) -> Completion {
        if ticket.owner != self.id || self.in_flight != Some(ticket.generation) {
            tracing::debug!(generation = ticket.generation, "discarding stale route");
            return Completion::Discarded;
        }

        self.in_flight = None;

        let (origin, destination) = match current_pair {
            Some((origin, destination))
                if origin.id == ticket.origin.id && destination.id == ticket.destination.id =>
            {
                (origin, destination)
            }
            _ => {
                tracing::debug!("discarding route for a pair no longer selected");
                return Completion::Discarded;
            }
        };

        if ticket.travel_mode != current_mode {
            // Without a shown route a mode change never requests on its own.
            if self.route.is_none() {
                tracing::debug!("discarding route computed for a previous travel mode");
                return Completion::Discarded;
            }

            return match self.begin(origin, destination, current_mode) {
                Some(next) => Completion::Retry(next),
                None => Completion::Discarded,
            };
        }

        self.route = Some(route.clone());
        Completion::Committed(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;

    fn pair() -> (Waypoint, Waypoint) {
        (
            Waypoint::new(Coordinates::new(39.95, -75.18)),
            Waypoint::new(Coordinates::new(39.95, -75.16)),
        )
    }

    fn fallback(ticket: &RouteTicket) -> Route {
        Route::fallback(&ticket.origin, &ticket.destination, ticket.travel_mode, 1706.76)
    }

    #[test]
    fn only_one_request_in_flight() {
        let (a, b) = pair();
        let mut controller = RouteController::default();

        let ticket = controller.begin(&a, &b, TravelMode::Driving);
        assert!(ticket.is_some());
        assert!(controller.is_routing());
        assert_eq!(controller.state(2), RouteState::Routing);

        assert!(controller.begin(&a, &b, TravelMode::Driving).is_none());
    }

    #[test]
    fn identical_endpoints_are_ignored() {
        let (a, _) = pair();
        let mut controller = RouteController::default();

        assert!(controller.begin(&a, &a, TravelMode::Driving).is_none());
        assert!(!controller.is_routing());
    }

    #[test]
    fn completion_commits_the_route() {
        let (a, b) = pair();
        let mut controller = RouteController::default();
        assert_eq!(controller.state(2), RouteState::Ready);

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        let route = fallback(&ticket);
        let completion = controller.complete(ticket, route.clone(), Some((&a, &b)), TravelMode::Driving);

        assert!(matches!(completion, Completion::Committed(ref committed) if committed == &route));
        assert_eq!(controller.route(), Some(&route));
        assert_eq!(controller.state(2), RouteState::Resolved);
        assert_eq!(controller.state(1), RouteState::Idle);
    }

    #[test]
    fn invalidated_request_is_discarded() {
        let (a, b) = pair();
        let mut controller = RouteController::default();

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        assert!(controller.invalidate());
        assert!(!controller.is_routing());

        let route = fallback(&ticket);
        let completion = controller.complete(ticket, route, Some((&a, &b)), TravelMode::Driving);

        assert!(matches!(completion, Completion::Discarded));
        assert!(controller.route().is_none());
    }

    #[test]
    fn invalidate_reports_whether_anything_was_dropped() {
        let mut controller = RouteController::default();
        assert!(!controller.invalidate());
    }

    #[test]
    fn mode_change_with_result_requests_again() {
        let (a, b) = pair();
        let mut controller = RouteController::default();
        assert!(!controller.on_travel_mode_changed());

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        let route = fallback(&ticket);
        controller.complete(ticket, route, Some((&a, &b)), TravelMode::Driving);

        assert!(controller.on_travel_mode_changed());
    }

    #[test]
    fn mode_change_in_flight_retries_on_completion() {
        let (a, b) = pair();
        let mut controller = RouteController::default();
        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        let route = fallback(&ticket);
        controller.complete(ticket, route, Some((&a, &b)), TravelMode::Driving);

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        assert!(!controller.on_travel_mode_changed());

        let route = fallback(&ticket);
        match controller.complete(ticket, route, Some((&a, &b)), TravelMode::Walking) {
            Completion::Retry(next) => {
                assert_eq!(next.travel_mode, TravelMode::Walking);
                assert_eq!(next.origin.id, a.id);
                assert_eq!(next.destination.id, b.id);
            }
            other => panic!("unexpected completion: {:?}", other),
        }
        assert!(controller.is_routing());
    }

    #[test]
    fn mode_change_during_first_request_issues_nothing() {
        let (a, b) = pair();
        let mut controller = RouteController::default();

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        assert!(!controller.on_travel_mode_changed());

        let route = fallback(&ticket);
        let completion = controller.complete(ticket, route, Some((&a, &b)), TravelMode::Walking);

        assert!(matches!(completion, Completion::Discarded));
        assert!(!controller.is_routing());
        assert!(controller.route().is_none());
        assert_eq!(controller.state(2), RouteState::Ready);
    }

    #[test]
    fn ticket_from_another_controller_is_discarded() {
        let (a, b) = pair();
        let mut replaced = RouteController::default();
        let mut controller = RouteController::default();

        let old = replaced.begin(&a, &b, TravelMode::Driving).unwrap();
        let current = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        assert_eq!(old.generation(), current.generation());

        let route = fallback(&old);
        let completion = controller.complete(old, route, Some((&a, &b)), TravelMode::Driving);

        assert!(matches!(completion, Completion::Discarded));
        assert!(controller.is_routing());

        let route = fallback(&current);
        let completion = controller.complete(current, route, Some((&a, &b)), TravelMode::Driving);
        assert!(matches!(completion, Completion::Committed(_)));
    }

    #[test]
    fn completion_for_another_pair_is_discarded() {
        let (a, b) = pair();
        let c = Waypoint::new(Coordinates::new(39.96, -75.17));
        let mut controller = RouteController::default();

        let ticket = controller.begin(&a, &b, TravelMode::Driving).unwrap();
        let route = fallback(&ticket);
        let completion = controller.complete(ticket, route, Some((&a, &c)), TravelMode::Driving);

        assert!(matches!(completion, Completion::Discarded));
        assert!(!controller.is_routing());
    }
}
