use anyhow::Context;
use foliochat::{app, config::Config, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    tracing::info!(addr = %config.addr, "listening");

    let state = AppState::new(config);

    let chats = state.chats.clone();
    let idle = state.config.session_idle;
    let period = std::time::Duration::try_from(idle)
        .unwrap_or_default()
        .max(std::time::Duration::from_secs(1));
    tokio::spawn(async move {
        let mut sweep = tokio::time::interval(period);
        loop {
            sweep.tick().await;
            let dropped = chats.prune(idle).await;
            if dropped > 0 {
                tracing::debug!(dropped, "dropped idle chat states");
            }
        }
    });

    axum::serve(listener, app(state)).await?;
    Ok(())
}
