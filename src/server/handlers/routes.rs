use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, RouteAPI};
use crate::entities::{Route, TravelMode};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct TravelModeParams {
    travel_mode: TravelMode,
}

#[derive(Serialize, Deserialize)]
pub struct RouteResponse {
    route: Option<Route>,
}

pub async fn set_travel_mode(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<TravelModeParams>,
) -> Result<Json<RouteResponse>, Error> {
    let route = api.set_travel_mode(params.travel_mode).await?;

    Ok(RouteResponse { route }.into())
}

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<RouteResponse>, Error> {
    let route = api.request_route().await?;

    Ok(RouteResponse { route }.into())
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<RouteResponse>, Error> {
    let route = api.find_route().await?;

    Ok(RouteResponse { route }.into())
}
