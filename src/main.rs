//! Pricing service binary

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use program_pricing::{
    app,
    config::Config,
    pricing::{PricingEngine, PricingTables},
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("program_pricing=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.socket_addr()?;

    let tables = PricingTables::standard();
    info!(
        "Loaded pricing tables: {} programs, {} discount tiers",
        tables.base_price_by_program.len(),
        tables.session_discount_tiers.len()
    );
    let state = AppState::new(PricingEngine::new(tables));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Pricing API listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Pricing API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
