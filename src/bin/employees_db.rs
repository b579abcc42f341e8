use std::future::Future;
use std::io;

use employees_db::{
    config::APP_CONFIG, database::ConnectionManager, transport::Transport,
    utils::tracing::init_standard_tracing,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    init_standard_tracing(env!("CARGO_CRATE_NAME"), &APP_CONFIG.log_level);

    let manager = ConnectionManager::from_config(&APP_CONFIG);
    manager.connect().await?;

    let db = manager.get_handle()?;
    tracing::info!(database = db.name(), "Ready, waiting for shutdown signal");

    close_on_shutdown(&manager, tokio::signal::ctrl_c()).await;
    Ok(())
}

/// Closes the connection once `shutdown` resolves, even if it resolves with an error.
async fn close_on_shutdown<T, F>(manager: &ConnectionManager<T>, shutdown: F)
where
    T: Transport,
    F: Future<Output = io::Result<()>>,
{
    if let Err(error) = shutdown.await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
    }

    manager.close().await;
}
