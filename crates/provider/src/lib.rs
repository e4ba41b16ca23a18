mod errors;
mod lookup;
mod models;
mod provider;

pub use errors::ProviderError;
pub use models::ResourceUrlProvider;
