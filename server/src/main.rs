mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    tracing::info!(api_base_url = %config.api_base_url, "backend configured");

    let app = routes::app(&config).expect("leptos app init failed");
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "admin console listening");
    axum::serve(listener, app).await.expect("server failed");
}
