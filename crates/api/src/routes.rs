use crate::handlers::{list_mappings, resource_url, serve_resource, AppState};
use axum::{routing::get, Router};
use resmap_config::ResourceSettings;
use resmap_resolver::ResourceHandler;
use resmap_routing::{Handler, RouteTable, RoutingError, UrlHandlerMapping};
use std::path::PathBuf;
use std::sync::Arc;

pub const RESOURCE_URL_PATH: &str = "/resource-url";
pub const MAPPINGS_PATH: &str = "/mappings";

/// Handler routes, unlayered and without state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(RESOURCE_URL_PATH, get(resource_url))
        .route(MAPPINGS_PATH, get(list_mappings))
        .fallback(serve_resource)
}

/// Route table mirroring [`routes`]: API endpoints first, then the
/// configured resource mappings
pub fn build_route_table(resources: &ResourceSettings) -> Result<RouteTable, RoutingError> {
    let mut api = UrlHandlerMapping::new("api", 0);
    api.register(RESOURCE_URL_PATH, Handler::Endpoint("resource_url".to_string()))?;
    api.register(MAPPINGS_PATH, Handler::Endpoint("mappings".to_string()))?;

    let mut static_resources = UrlHandlerMapping::new("resources", 1);
    for mapping in resources.enabled_mappings() {
        let locations = mapping.locations.iter().map(PathBuf::from).collect();
        let handler = ResourceHandler::new(locations);
        static_resources.register(&mapping.pattern, Handler::Resource(Arc::new(handler)))?;
    }

    Ok(RouteTable::from_mappings(vec![api, static_resources]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resmap_config::ResourceMapping;

    #[test]
    fn test_route_table_from_settings() {
        let mut resources = resmap_config::Config::from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap()
        .resources;
        resources.mappings = vec![
            ResourceMapping {
                pattern: "/resources/**".to_string(),
                locations: vec!["public".to_string(), "vendor".to_string()],
                enabled: true,
            },
            ResourceMapping {
                pattern: "/old/**".to_string(),
                locations: vec!["old".to_string()],
                enabled: false,
            },
        ];

        let table = build_route_table(&resources).unwrap();
        let mappings = table.mappings();

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].name(), "api");
        assert!(mappings[0].url_map().contains_key(RESOURCE_URL_PATH));

        let handler = mappings[1].url_map()["/resources/**"].as_resource().unwrap();
        assert_eq!(handler.locations(), &[PathBuf::from("public"), PathBuf::from("vendor")]);
        assert!(!mappings[1].url_map().contains_key("/old/**"));
    }
}
