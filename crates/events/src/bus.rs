use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "resmap - Static Resource Server".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr, base_url } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server".white(), addr.cyan());
                println!("  {} {}", "URL   ".white(), base_url.blue());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { mappings_count } => {
                if mappings_count == 0 {
                    println!("  {} No resource mappings configured", "⚠".yellow());
                } else {
                    println!("  {} {} resource mapping(s)", "✓".green(), mappings_count.to_string().cyan());
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }
            AppEvent::ConfigReloaded => {
                tracing::info!("Configuration reloaded successfully");
            }
            AppEvent::ConfigError { error } => {
                tracing::error!("Configuration error: {}", error);
            }

            // Resource locations
            AppEvent::LocationCreated { path } => {
                if !self.silent_mode {
                    println!("  {} Created location {}", "+".green(), path.cyan());
                }
            }
            AppEvent::LocationMissing { pattern, path } => {
                tracing::warn!("Location '{}' of '{}' does not exist", path, pattern);
            }

            // Resource URL mappings
            AppEvent::MappingsRefreshed { patterns } => {
                if patterns.is_empty() {
                    println!("  {} No public resource mappings", "⚠".yellow());
                } else {
                    println!("  {} Public URLs for {}", "↻".blue(), patterns.join(", ").cyan());
                }
            }
            AppEvent::MappingsConfigured { patterns } => {
                println!("  {} Public URLs pinned to {}", "✓".green(), patterns.join(", ").cyan());
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
