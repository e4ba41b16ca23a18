mod models;
mod state;
mod disk;
mod resources;
mod public_url;
mod mappings;

pub use models::AppState;
pub use resources::serve_resource;
pub use public_url::resource_url;
pub use mappings::list_mappings;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use resmap_config::Config;
    use std::path::Path;
    use tower::ServiceExt;

    struct Fixture {
        _dir: tempfile::TempDir,
        public: String,
        docs: String,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(public.join("css")).unwrap();
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(public.join("app.js"), "console.log(1)").unwrap();
        std::fs::write(public.join("css/site.css"), "body {}").unwrap();
        std::fs::write(docs.join("index.html"), "<h1>docs</h1>").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();

        Fixture {
            public: display(&public),
            docs: display(&docs),
            _dir: dir,
        }
    }

    fn display(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    fn config(fixture: &Fixture, context_path: &str, resources: &str) -> Config {
        Config::from_toml(&format!(
            r#"
[server]
host = "127.0.0.1"
port = 8080
base_url = "http://localhost:8080"
context_path = "{}"

[resources]
{}

[[resources.mappings]]
pattern = "/resources/**"
locations = ['{}']

[[resources.mappings]]
pattern = "/docs/**"
locations = ['{}']
"#,
            context_path, resources, fixture.public, fixture.docs
        ))
        .unwrap()
    }

    fn app(state: AppState) -> Router {
        let context_path = state.context_path().to_string();
        let app = routes().with_state(state);
        if context_path.is_empty() {
            app
        } else {
            Router::new().nest(&context_path, app)
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn json(body: &str) -> serde_json::Value {
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_serves_resources() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let (status, body) = get(app(state.clone()), "/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");

        let (status, body) = get(app(state.clone()), "/docs/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>docs</h1>");

        let (status, body) = get(app(state.clone()), "/resources/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json(&body)["error"]["code"], "NOT_FOUND");

        let (status, _) = get(app(state), "/unmapped/app.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_content_type_from_extension() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let response = app(state)
            .oneshot(Request::builder().uri("/resources/css/site.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/css");
    }

    #[tokio::test]
    async fn test_streams_above_threshold() {
        let fixture = fixture();
        let mut state = AppState::from_config(&config(&fixture, "", "")).unwrap();
        state.streaming_threshold_bytes = 4;

        let (status, body) = get(app(state), "/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[test]
    fn test_huge_streaming_threshold_saturates() {
        let state = AppState::new(String::new(), u64::MAX);
        assert_eq!(state.streaming_threshold_bytes, u64::MAX);

        let state = AppState::new(String::new(), 8);
        assert_eq!(state.streaming_threshold_bytes, 8 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_rejects_traversal() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let (status, body) = get(app(state), "/resources/..%2Fsecret.txt").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"]["code"], "INVALID_PATH");
    }

    #[tokio::test]
    async fn test_resource_url_by_lookup_path() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let (status, body) = get(app(state.clone()), "/resource-url?path=/resources/css/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["public_url"], "/resources/css/site.css");

        let (status, _) = get(app(state.clone()), "/resource-url?path=/unmapped/app.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get(app(state), "/resource-url").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_resource_url_for_missing_resource_is_inconsistent() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let (status, body) = get(app(state), "/resource-url?path=/resources/missing.js").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&body)["error"]["code"], "INCONSISTENT_CONFIGURATION");
    }

    #[tokio::test]
    async fn test_context_path() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "/ctx", "")).unwrap();

        let (status, body) = get(app(state.clone()), "/ctx/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");

        let (status, body) = get(app(state.clone()), "/ctx/resource-url?url=/ctx/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["public_url"], "/ctx/resources/app.js");

        let (status, body) = get(app(state.clone()), "/ctx/resource-url?path=/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["public_url"], "/resources/app.js");

        let (status, body) = get(app(state), "/ctx/resource-url?url=/x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"]["code"], "LOOKUP_PATH_MISMATCH");
    }

    #[tokio::test]
    async fn test_mappings_are_detected() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let (status, body) = get(app(state), "/mappings").await;
        let body = json(&body);

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["autodetect"], true);
        assert_eq!(body["mappings"][0]["pattern"], "/docs/**");
        assert_eq!(body["mappings"][1]["pattern"], "/resources/**");
        assert_eq!(body["mappings"][1]["locations"][0], fixture.public.as_str());
    }

    #[tokio::test]
    async fn test_explicit_public_patterns() {
        let fixture = fixture();
        let state = AppState::from_config(&config(
            &fixture,
            "",
            r#"public_patterns = ["/docs/**"]"#,
        ))
        .unwrap();
        assert!(!state.is_autodetect());

        let (_, body) = get(app(state.clone()), "/mappings").await;
        let body = json(&body);
        assert_eq!(body["autodetect"], false);
        assert_eq!(body["mappings"].as_array().unwrap().len(), 1);

        // Still served, just not exposed for public URL lookup
        let (status, _) = get(app(state.clone()), "/resources/app.js").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(app(state), "/resource-url?path=/resources/app.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_reload_refreshes_detected_mappings() {
        let fixture = fixture();
        let state = AppState::from_config(&config(&fixture, "", "")).unwrap();

        let mut reloaded = config(&fixture, "", "");
        reloaded.resources.mappings.retain(|m| m.pattern == "/docs/**");

        let patterns = state.apply_config(&reloaded).unwrap();
        assert_eq!(patterns, vec!["/docs/**"]);
    }

    #[test]
    fn test_reload_keeps_explicit_mappings() {
        let fixture = fixture();
        let state = AppState::from_config(&config(
            &fixture,
            "",
            r#"public_patterns = ["/docs/**"]"#,
        ))
        .unwrap();

        // Detection stays off even when the reloaded config drops the list
        let patterns = state.apply_config(&config(&fixture, "", "")).unwrap();
        assert_eq!(patterns, vec!["/docs/**"]);
        assert!(!state.is_autodetect());
    }
}
