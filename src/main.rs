mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use store::MongoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("item-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = MongoStore::from_config(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let router = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
