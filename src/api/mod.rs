//! HTTP host for the static site
//!
//! Serves the pages, layout fragments and locale dictionaries from the
//! configured site root, next to the health endpoints.

pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(&state.config.site.root).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repository::Repository;
    use crate::services::{clock::SystemClock, fetch::FsFetcher, Services};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(root: &TempDir) -> Router {
        let mut config = AppConfig::default();
        config.site.root = root.path().to_path_buf();
        let services = Services::new(
            Repository::in_memory(),
            Arc::new(FsFetcher::new(root.path())),
            Arc::new(SystemClock),
            config.site.clone(),
            &config.locale,
        )
        .unwrap();
        create_router(AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let root = TempDir::new().unwrap();
        let (status, body) = get(app(&root), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"healthy\""));
    }

    #[tokio::test]
    async fn test_ready_requires_default_dictionary() {
        let root = TempDir::new().unwrap();
        let (status, body) = get(app(&root), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("\"en\""));

        std::fs::create_dir(root.path().join("locales")).unwrap();
        std::fs::write(root.path().join("locales/en.json"), "{}").unwrap();
        let (status, _) = get(app(&root), "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serves_site_files() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("book-tour.html"), "<form id=\"bookingForm\">").unwrap();

        let (status, body) = get(app(&root), "/book-tour.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("bookingForm"));

        let (status, _) = get(app(&root), "/payment.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
