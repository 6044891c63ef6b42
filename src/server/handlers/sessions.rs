use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, SessionAPI};
use crate::entities::City;
use crate::error::Error;
use crate::session::Snapshot;

#[derive(Serialize, Deserialize)]
pub struct OpenParams {
    city_id: String,
}

pub async fn list_cities(Extension(api): Extension<DynAPI>) -> Json<Vec<City>> {
    api.list_cities().await.into()
}

pub async fn open(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<OpenParams>,
) -> Result<Json<Snapshot>, Error> {
    let snapshot = api.open_session(params.city_id).await?;

    Ok(snapshot.into())
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<Snapshot>, Error> {
    let snapshot = api.find_session().await?;

    Ok(snapshot.into())
}

pub async fn close(Extension(api): Extension<DynAPI>) -> Result<StatusCode, Error> {
    api.close_session().await?;

    Ok(StatusCode::NO_CONTENT)
}
