mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, put},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{cameras, routes, sessions, waypoints};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/cities", get(sessions::list_cities))
        .route(
            "/session",
            get(sessions::find).post(sessions::open).delete(sessions::close),
        )
        .route("/waypoints", get(waypoints::list).post(waypoints::create))
        .route("/waypoints/:id/toggle", patch(waypoints::toggle))
        .route("/travel_mode", put(routes::set_travel_mode))
        .route("/route", get(routes::find).post(routes::create))
        .route("/camera/tilt", patch(cameras::toggle_tilt))
        .route("/camera/rotate", patch(cameras::rotate))
        .route("/camera/center", patch(cameras::pan))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server stopped: {}", err);
            unexpected_error()
        })
}
