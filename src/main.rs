mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing `.env` is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let addr = config.bind_addr();
    tracing::info!(
        backend = %config.backend_url,
        dist = %config.dist_dir.display(),
        timeout_secs = config.proxy_timeout.as_secs(),
        "preview config loaded"
    );

    let state = state::AppState::new(config)?;
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "blog preview server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
