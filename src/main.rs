mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("course-site starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let app = routes::app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
