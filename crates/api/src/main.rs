use std::sync::Arc;

use gridbase_api::app::{AppState, build_app};
use gridbase_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gridbase_observability::init("gridbase-api");

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config)?);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
