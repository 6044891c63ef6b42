use citynav::config::Config;
use citynav::engine::Engine;
use citynav::render::{self, MapView, TracingSurface};
use citynav::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut engine = Engine::new(&config);
    let events = engine.subscribe();

    tokio::spawn(render::run(MapView::new(TracingSurface::default()), events));

    if let Err(err) = serve(engine, config.bind_address).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
