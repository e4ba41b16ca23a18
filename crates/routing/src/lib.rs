mod comparator;
mod errors;
mod mapping;
mod matcher;
mod path_helper;

pub use comparator::PatternSpecificity;
pub use errors::RoutingError;
pub use mapping::{Handler, HandlerMatch, MappingContext, RouteTable, UrlHandlerMapping};
pub use matcher::{AntPathMatcher, PathMatcher};
pub use path_helper::{ResourceRequest, UrlPathHelper};
