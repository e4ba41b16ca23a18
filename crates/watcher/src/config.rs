use super::errors::WatcherError;
use super::models::ConfigWatcher;
use resmap_api::AppState;
use resmap_config::Config;
use resmap_events::{AppEvent, EventBus};
use resmap_filesystem::FileSystem;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

type Result<T> = std::result::Result<T, WatcherError>;

const RELOAD_CHANNEL_SIZE: usize = 16;

impl ConfigWatcher {
    pub fn new(
        config: Arc<RwLock<Config>>,
        config_path: String,
        state: AppState,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            config,
            config_path,
            state,
            events,
        }
    }

    pub async fn get_config(&self) -> Config {
        self.config.read().await.clone()
    }

    pub async fn start_watching(self: Arc<Self>) -> Result<tokio::task::JoinHandle<()>> {
        let (tx, rx) = tokio::sync::mpsc::channel(RELOAD_CHANNEL_SIZE);

        let mut watcher: RecommendedWatcher = notify::recommended_watcher(
            move |res: std::result::Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(
                        event.kind,
                        notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                    ) {
                        let _ = tx.blocking_send(());
                    }
                }
            },
        )?;

        watcher.watch(Path::new(&self.config_path), RecursiveMode::NonRecursive)?;

        let handle = tokio::spawn(async move {
            // Dropping the watcher stops notifications
            let _watcher = watcher;
            self.watch_config_file(rx).await;
        });

        Ok(handle)
    }

    async fn watch_config_file(&self, mut rx: tokio::sync::mpsc::Receiver<()>) {
        while rx.recv().await.is_some() {
            let debounce_ms = {
                let config_read = self.config.read().await;
                config_read.resources.config_watch_debounce_ms
            };

            tokio::time::sleep(tokio::time::Duration::from_millis(debounce_ms)).await;

            // Editors emit several events per save
            while rx.try_recv().is_ok() {}

            match self.reload().await {
                Ok(_) => {}
                Err(WatcherError::ConfigMissing(path)) => {
                    tracing::warn!("Config file {} deleted, ignoring event", path);
                }
                Err(e) => {
                    self.events.emit(AppEvent::ConfigError {
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    /// Re-reads the configuration file and applies its resource mappings.
    ///
    /// On failure the running configuration is left untouched.
    pub async fn reload(&self) -> Result<Vec<String>> {
        if !Path::new(&self.config_path).exists() {
            return Err(WatcherError::ConfigMissing(self.config_path.clone()));
        }

        let new_config = Config::from_file_with_events(&self.config_path, Some(&self.events)).await?;

        {
            let config_read = self.config.read().await;
            warn_on_restart_settings(&config_read, &new_config);
        }

        prepare_locations(&new_config, &self.events).await;

        let patterns = self.state.apply_config(&new_config)?;
        let pinned = new_config.resources.public_patterns.is_some();

        *self.config.write().await = new_config;

        if pinned {
            self.events.emit(AppEvent::MappingsConfigured {
                patterns: patterns.clone(),
            });
        } else {
            self.events.emit(AppEvent::MappingsRefreshed {
                patterns: patterns.clone(),
            });
        }
        self.events.emit(AppEvent::ConfigReloaded);

        tracing::info!("Configuration reloaded from {}", self.config_path);
        Ok(patterns)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Creates or reports the locations of every enabled mapping
pub async fn prepare_locations(config: &Config, events: &Arc<EventBus>) {
    for mapping in config.resources.enabled_mappings() {
        for location in &mapping.locations {
            if config.resources.create_locations {
                match FileSystem::ensure_location(location).await {
                    Ok((path, true)) => events.emit(AppEvent::LocationCreated {
                        path: path.display().to_string(),
                    }),
                    Ok((_, false)) => {}
                    Err(e) => events.emit(AppEvent::Error {
                        context: format!("Failed to create location '{}'", location),
                        error: e.to_string(),
                    }),
                }
                continue;
            }

            let exists = FileSystem::resolve_location(location)
                .map(|path| path.is_dir())
                .unwrap_or(false);
            if !exists {
                events.emit(AppEvent::LocationMissing {
                    pattern: mapping.pattern.clone(),
                    path: location.clone(),
                });
            }
        }
    }
}

/// Server settings are bound once at startup
fn warn_on_restart_settings(old: &Config, new: &Config) {
    if old.server.host != new.server.host || old.server.port != new.server.port {
        tracing::warn!("Listen address changed, restart to apply");
    }
    if old.server.context_path != new.server.context_path {
        tracing::warn!("Context path changed, restart to apply");
    }
    if old.server.streaming_threshold_mb != new.server.streaming_threshold_mb {
        tracing::warn!("Streaming threshold changed, restart to apply");
    }
}
