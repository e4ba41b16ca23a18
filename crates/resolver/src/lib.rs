mod chain;
mod errors;
mod handler;
mod location;
mod validator;

pub use chain::{ResolverChain, ResourceResolver};
pub use errors::ResolverError;
pub use handler::ResourceHandler;
pub use location::PathResourceResolver;
pub use validator::validate_resource_path;
