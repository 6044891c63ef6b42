use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{api::SelectionAPI, error::Error};

#[async_trait]
impl SelectionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn toggle_waypoint(&self, id: Uuid) -> Result<Vec<Uuid>, Error> {
        self.with_session(|session| session.toggle(id)).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::api::{SelectionAPI, SessionAPI, WaypointAPI};
    use crate::engine::testing::{engine, Behavior, FakeDirections};
    use crate::session::Event;

    #[tokio::test]
    async fn publishes_selection_changes() {
        let mut engine = engine(FakeDirections::new(Behavior::Succeed));
        let events = engine.subscribe();
        engine.open_session("philly".into()).await.unwrap();
        let a = engine.create_waypoint(None).await.unwrap().id;
        let b = engine.create_waypoint(None).await.unwrap().id;
        let c = engine.create_waypoint(None).await.unwrap().id;
        while events.try_recv().is_ok() {}

        assert_eq!(engine.toggle_waypoint(a).await.unwrap(), vec![a]);
        assert_eq!(engine.toggle_waypoint(b).await.unwrap(), vec![a, b]);
        assert_eq!(engine.toggle_waypoint(c).await.unwrap(), vec![c]);

        let sizes: Vec<usize> = std::iter::from_fn(|| events.try_recv().ok())
            .filter_map(|event| match event {
                Event::SelectionChanged { selected } => Some(selected.len()),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![1, 2, 1]);
    }

    #[tokio::test]
    async fn foreign_ids_are_rejected() {
        let engine = engine(FakeDirections::new(Behavior::Succeed));
        engine.open_session("philly".into()).await.unwrap();

        let err = engine.toggle_waypoint(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.code, 101);
    }
}
