use crate::{PathMatcher, RoutingError};
use resmap_resolver::ResourceHandler;
use std::collections::BTreeMap;
use std::sync::Arc;

/// What a URL pattern is routed to
#[derive(Debug, Clone)]
pub enum Handler {
    /// Static resources served through a resolver chain
    Resource(Arc<ResourceHandler>),
    /// Any other route, identified by name
    Endpoint(String),
}

impl Handler {
    pub fn as_resource(&self) -> Option<&Arc<ResourceHandler>> {
        match self {
            Handler::Resource(handler) => Some(handler),
            Handler::Endpoint(_) => None,
        }
    }
}

/// Result of matching a lookup path against a mapping
#[derive(Debug, Clone)]
pub struct HandlerMatch<'a> {
    pub pattern: &'a str,
    pub handler: &'a Handler,
    pub path_within_mapping: String,
}

/// URL pattern to handler associations, consulted by `order` (lowest first)
#[derive(Debug, Clone)]
pub struct UrlHandlerMapping {
    name: String,
    order: i32,
    url_map: BTreeMap<String, Handler>,
}

impl UrlHandlerMapping {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
            url_map: BTreeMap::new(),
        }
    }

    /// Registers a handler; patterns without a leading slash get one
    pub fn register(&mut self, pattern: &str, handler: Handler) -> Result<(), RoutingError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(RoutingError::InvalidPattern(format!(
                "empty pattern in mapping '{}'",
                self.name
            )));
        }

        let pattern = if pattern.starts_with('/') {
            pattern.to_string()
        } else {
            format!("/{}", pattern)
        };

        if self.url_map.contains_key(&pattern) {
            return Err(RoutingError::DuplicatePattern {
                pattern,
                mapping: self.name.clone(),
            });
        }

        tracing::trace!("Mapped '{}' in '{}'", pattern, self.name);
        self.url_map.insert(pattern, handler);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn url_map(&self) -> &BTreeMap<String, Handler> {
        &self.url_map
    }

    /// Finds the handler for a lookup path: exact entries first, then the
    /// most specific matching pattern
    pub fn lookup(&self, lookup_path: &str, matcher: &dyn PathMatcher) -> Option<HandlerMatch<'_>> {
        if let Some((pattern, handler)) = self.url_map.get_key_value(lookup_path) {
            return Some(HandlerMatch {
                pattern,
                handler,
                path_within_mapping: lookup_path.to_string(),
            });
        }

        let (pattern, handler) = self
            .url_map
            .iter()
            .filter(|(pattern, _)| matcher.matches(pattern, lookup_path))
            .min_by(|(a, _), (b, _)| matcher.compare_patterns(lookup_path, a, b))?;

        Some(HandlerMatch {
            pattern: pattern.as_str(),
            handler,
            path_within_mapping: matcher.extract_path_within_pattern(pattern, lookup_path),
        })
    }
}

/// Source of the handler mappings a refresh scans
pub trait MappingContext: Send + Sync {
    fn handler_mappings(&self) -> &[UrlHandlerMapping];
}

/// All handler mappings of the running application
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    mappings: Vec<UrlHandlerMapping>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mappings(mappings: Vec<UrlHandlerMapping>) -> Self {
        let mut table = Self { mappings };
        table.mappings.sort_by_key(UrlHandlerMapping::order);
        table
    }

    pub fn add_mapping(&mut self, mapping: UrlHandlerMapping) {
        self.mappings.push(mapping);
        self.mappings.sort_by_key(UrlHandlerMapping::order);
    }

    pub fn mappings(&self) -> &[UrlHandlerMapping] {
        &self.mappings
    }

    pub fn lookup(&self, lookup_path: &str, matcher: &dyn PathMatcher) -> Option<HandlerMatch<'_>> {
        self.mappings
            .iter()
            .find_map(|mapping| mapping.lookup(lookup_path, matcher))
    }
}

impl MappingContext for RouteTable {
    fn handler_mappings(&self) -> &[UrlHandlerMapping] {
        &self.mappings
    }
}
