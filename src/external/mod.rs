pub mod google_maps;
pub mod spherical;

use async_trait::async_trait;

use crate::{
    entities::{Coordinates, RouteLeg, TravelMode},
    error::Error,
};

pub use google_maps::GoogleMaps;
pub use spherical::Spherical;

/// Routing provider: computes a route between two points for a travel mode.
#[async_trait]
pub trait Directions {
    async fn compute_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        travel_mode: TravelMode,
    ) -> Result<RouteLeg, Error>;
}

pub trait Geometry {
    /// Great-circle distance in meters.
    fn spherical_distance(&self, a: Coordinates, b: Coordinates) -> f64;
}
