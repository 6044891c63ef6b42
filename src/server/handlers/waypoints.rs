use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{DynAPI, SelectionAPI, WaypointAPI};
use crate::entities::{Coordinates, Waypoint};
use crate::error::{invalid_input_error, Error};

/// Both fields or neither; without a position the waypoint is dropped under
/// the camera center.
#[derive(Default, Serialize, Deserialize)]
pub struct CreateParams {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct SelectionResponse {
    selected: Vec<Uuid>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Waypoint>, Error> {
    let coordinates = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
        (None, None) => None,
        _ => return Err(invalid_input_error()),
    };

    let waypoint = api.create_waypoint(coordinates).await?;

    Ok(waypoint.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Waypoint>>, Error> {
    let waypoints = api.list_waypoints().await?;

    Ok(waypoints.into())
}

pub async fn toggle(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<SelectionResponse>, Error> {
    let selected = api.toggle_waypoint(id).await?;

    Ok(SelectionResponse { selected }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SessionAPI;
    use crate::engine::testing::{engine, Behavior, FakeDirections};
    use std::sync::Arc;

    fn api() -> DynAPI {
        Arc::new(engine(FakeDirections::new(Behavior::Succeed)))
    }

    #[tokio::test]
    async fn half_a_position_is_rejected() {
        let api = api();
        api.open_session("philly".into()).await.unwrap();

        let params = CreateParams {
            latitude: Some(39.95),
            longitude: None,
        };
        let err = create(Extension(api.clone()), Json(params)).await.unwrap_err();

        assert_eq!(err.code, 101);
        assert!(api.list_waypoints().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_toggle() {
        let api = api();
        api.open_session("philly".into()).await.unwrap();

        let Json(waypoint) = create(Extension(api.clone()), Json(CreateParams::default()))
            .await
            .unwrap();
        let Json(response) = toggle(Extension(api.clone()), Path(waypoint.id))
            .await
            .unwrap();

        assert_eq!(response.selected, vec![waypoint.id]);
    }
}
