use clap::Parser;
use std::sync::Arc;

use morris::{handlers, GameService, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr()?;

    let state = Arc::new(GameService::in_memory());
    let app = handlers::build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running on http://{}", listener.local_addr()?);
    log::info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
