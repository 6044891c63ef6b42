pub mod cameras;
pub mod routes;
pub mod sessions;
pub mod waypoints;
