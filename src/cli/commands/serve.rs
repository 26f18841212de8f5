use anyhow::Context;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::store::UserStore;

/// Bind the listener and serve until the process is terminated.
/// A bind failure is returned to the caller and ends the process.
pub async fn handle(config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(UserStore::new(&config.store.users_file));
    let bind_addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    let local_addr = listener.local_addr().context("failed to read bound address")?;

    tracing::info!(
        users_file = %config.store.users_file.display(),
        "Server listening on http://{}",
        local_addr
    );

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
