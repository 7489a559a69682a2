mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("HTTP client init failed");

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.api_upstream, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
