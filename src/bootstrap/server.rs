use resmap_api::AppState;
use resmap_config::Config;
use resmap_events::{AppEvent, EventBus};
use anyhow::Result;
use std::sync::Arc;

/// Prepares resource locations and builds the shared state for `config`
pub async fn initialize_state(config: &Config, events: &Arc<EventBus>) -> Result<AppState> {
    resmap_watcher::prepare_locations(config, events).await;

    let state = AppState::new(
        config.server.context_path.clone(),
        config.server.streaming_threshold_mb,
    );
    let patterns = state.apply_config(config)?;

    if state.is_autodetect() {
        events.emit(AppEvent::MappingsRefreshed { patterns });
    } else {
        events.emit(AppEvent::MappingsConfigured { patterns });
    }

    Ok(state)
}

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.rsplit(':').next().unwrap_or("unknown");
            tracing::error!("Port {} is already in use", port);
            tracing::error!("Stop the other application or change the port in the config file");
            #[cfg(target_os = "windows")]
            tracing::error!("Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("Find process: lsof -i :{}", port);
        } else {
            tracing::error!("Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
