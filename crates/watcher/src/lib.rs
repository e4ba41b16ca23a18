mod config;
mod errors;
mod models;

pub use errors::WatcherError;
pub use models::ConfigWatcher;
pub use config::prepare_locations;
