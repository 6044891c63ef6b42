mod camera;
mod city;
mod coordinates;
mod route;
mod travel_mode;
mod waypoint;

pub use camera::Camera;
pub use city::City;
pub use coordinates::Coordinates;
pub use route::{Route, RouteLeg, RoutePath, RouteSource};
pub use travel_mode::TravelMode;
pub use waypoint::Waypoint;
