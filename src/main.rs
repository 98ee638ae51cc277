use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geonation_agent::{app, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing once for the whole process
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geonation_agent=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting GeoNation agent");

    let port = config.port;
    let state = AppState::new(config)?;

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
