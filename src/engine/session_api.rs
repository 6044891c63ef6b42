use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SessionAPI,
    entities::City,
    error::{invalid_input_error, invalid_state_error, Error},
    session::{Session, Snapshot},
};

#[async_trait]
impl SessionAPI for Engine {
    async fn list_cities(&self) -> Vec<City> {
        City::all().to_vec()
    }

    /// Opens a fresh session on `city_id`, tearing down the current one.
    #[tracing::instrument(skip(self))]
    async fn open_session(&self, city_id: String) -> Result<Snapshot, Error> {
        let city = City::find(&city_id).ok_or_else(invalid_input_error)?;

        let mut guard = self.session.lock().await;

        if let Some(mut previous) = guard.take() {
            tracing::info!("closing session on {}", previous.city().id);
            previous.close();
            self.forward(&mut previous);
        }

        let mut session = Session::open(city);
        let snapshot = session.snapshot();
        self.forward(&mut session);
        *guard = Some(session);

        tracing::info!("opened session on {}", city.name);

        Ok(snapshot)
    }

    async fn find_session(&self) -> Result<Snapshot, Error> {
        self.with_session(|session| Ok(session.snapshot())).await
    }

    #[tracing::instrument(skip(self))]
    async fn close_session(&self) -> Result<(), Error> {
        let mut guard = self.session.lock().await;
        let mut session = guard.take().ok_or_else(invalid_state_error)?;

        session.close();
        self.forward(&mut session);

        tracing::info!("closed session on {}", session.city().id);

        Ok(())
    }
}
