use super::Engine;

use async_trait::async_trait;

use crate::{
    api::CameraAPI,
    entities::{Camera, Coordinates},
    error::Error,
};

#[async_trait]
impl CameraAPI for Engine {
    async fn toggle_tilt(&self) -> Result<Camera, Error> {
        self.with_session(|session| Ok(session.toggle_tilt())).await
    }

    async fn rotate_camera(&self) -> Result<Camera, Error> {
        self.with_session(|session| Ok(session.rotate())).await
    }

    #[tracing::instrument(skip(self))]
    async fn pan_camera(&self, center: Coordinates) -> Result<Camera, Error> {
        self.with_session(|session| session.pan_to(center)).await
    }
}

#[test]
fn camera_controls_need_a_session() {
    use crate::api::SessionAPI;
    use crate::engine::testing::{engine, Behavior, FakeDirections};
    use tokio_test::{assert_err, assert_ok, block_on};

    let engine = engine(FakeDirections::new(Behavior::Succeed));
    assert_err!(block_on(engine.rotate_camera()));

    assert_ok!(block_on(engine.open_session("philly".into())));

    let camera = assert_ok!(block_on(engine.toggle_tilt()));
    assert_eq!(camera.tilt, 0.0);

    let camera = assert_ok!(block_on(engine.rotate_camera()));
    assert_eq!(camera.heading, 180.0);

    assert_err!(block_on(engine.pan_camera(Coordinates::new(0.0, 200.0))));
}
