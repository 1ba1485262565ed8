mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    match config.auth.url.as_deref() {
        Some(url) if !config.auth.is_offline() => tracing::info!(auth_url = url, "identity provider configured"),
        _ => tracing::warn!("ACADEMY_AUTH_URL not set, accounts are kept in browser memory only"),
    }

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "academy listening");
    axum::serve(listener, app).await.expect("server failed");
}
