//! Presentation-side boundary. A [`MapSurface`] is whatever actually draws
//! the map; [`MapView`] replays session events onto it and owns the handles
//! the surface hands back for each marker.

use async_channel::Receiver;
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{Camera, Route, Waypoint};
use crate::session::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

pub trait MapSurface {
    fn place_marker(&mut self, waypoint: &Waypoint) -> MarkerHandle;
    fn style_marker(&mut self, handle: MarkerHandle, selected: bool);
    fn remove_marker(&mut self, handle: MarkerHandle);
    fn draw_route(&mut self, route: &Route);
    fn clear_route(&mut self);
    fn move_camera(&mut self, camera: &Camera);
}

pub struct MapView<S> {
    surface: S,
    markers: HashMap<Uuid, MarkerHandle>,
}

impl<S: MapSurface> MapView<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn marker(&self, id: &Uuid) -> Option<MarkerHandle> {
        self.markers.get(id).copied()
    }

    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::SessionOpened { camera, .. } => {
                self.teardown();
                self.surface.move_camera(camera);
            }
            Event::WaypointAdded { waypoint } => {
                if !self.markers.contains_key(&waypoint.id) {
                    let handle = self.surface.place_marker(waypoint);
                    self.markers.insert(waypoint.id, handle);
                }
            }
            Event::SelectionChanged { selected } => {
                for (id, handle) in &self.markers {
                    self.surface.style_marker(*handle, selected.contains(id));
                }
            }
            Event::RouteResolved { route } => self.surface.draw_route(route),
            Event::RouteCleared => self.surface.clear_route(),
            Event::CameraMoved { camera } => self.surface.move_camera(camera),
            Event::SessionClosed => self.teardown(),
            Event::TravelModeChanged { .. } | Event::RoutingStarted { .. } => {}
        }
    }

    /// Releases every marker and the drawn route.
    pub fn teardown(&mut self) {
        for (_, handle) in self.markers.drain() {
            self.surface.remove_marker(handle);
        }
        self.surface.clear_route();
    }
}

/// Applies events until the engine side of the channel goes away.
pub async fn run<S: MapSurface>(mut view: MapView<S>, events: Receiver<Event>) {
    while let Ok(event) = events.recv().await {
        view.apply(&event);
    }

    view.teardown();
}

/// Surface for headless runs: logs what a real map would draw.
#[derive(Debug, Default)]
pub struct TracingSurface {
    next_handle: u64,
}

impl MapSurface for TracingSurface {
    fn place_marker(&mut self, waypoint: &Waypoint) -> MarkerHandle {
        self.next_handle += 1;
        tracing::info!(
            marker = self.next_handle,
            "marker at {},{}",
            waypoint.coordinates.latitude,
            waypoint.coordinates.longitude
        );

        MarkerHandle(self.next_handle)
    }

    fn style_marker(&mut self, handle: MarkerHandle, selected: bool) {
        tracing::debug!(marker = handle.0, selected, "marker restyled");
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        tracing::debug!(marker = handle.0, "marker removed");
    }

    fn draw_route(&mut self, route: &Route) {
        tracing::info!(
            source = ?route.source,
            "route {} / {} from {} to {}",
            route.distance,
            route.duration,
            route.start_address,
            route.end_address
        );
    }

    fn clear_route(&mut self) {
        tracing::debug!("route cleared");
    }

    fn move_camera(&mut self, camera: &Camera) {
        tracing::debug!(
            zoom = camera.zoom,
            tilt = camera.tilt,
            heading = camera.heading,
            "camera moved"
        );
    }
}
