use axum::extract::{Extension, Json};

use crate::api::{CameraAPI, DynAPI};
use crate::entities::{Camera, Coordinates};
use crate::error::Error;

pub async fn toggle_tilt(Extension(api): Extension<DynAPI>) -> Result<Json<Camera>, Error> {
    let camera = api.toggle_tilt().await?;

    Ok(camera.into())
}

pub async fn rotate(Extension(api): Extension<DynAPI>) -> Result<Json<Camera>, Error> {
    let camera = api.rotate_camera().await?;

    Ok(camera.into())
}

pub async fn pan(
    Extension(api): Extension<DynAPI>,
    Json(center): Json<Coordinates>,
) -> Result<Json<Camera>, Error> {
    let camera = api.pan_camera(center).await?;

    Ok(camera.into())
}
