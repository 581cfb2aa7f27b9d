//! HTTP route handlers for the query API.
//!
//! All routes are read-only JSON views over the configuration snapshot. Every
//! response is recomputed per request, so the API routes are marked
//! `Cache-Control: no-store`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod config;
pub mod health;
pub mod mensaje;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_API, CONFIG_PATH, HEALTH_PATH, MENSAJE_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and layers.
///
/// Unknown paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    let enable_cors = state.config.enable_cors;

    let api_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .route(MENSAJE_PATH, get(mensaje::mensaje))
        .route(CONFIG_PATH, get(config::show))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ));

    let router = Router::new().merge(api_routes).with_state(state);

    let router = if enable_cors {
        router.layer(create_cors_layer())
    } else {
        router
    };

    // Request ID middleware - creates root span with request_id for correlation
    router.layer(middleware::from_fn(request_id_layer))
}

/// CORS layer allowing any origin, method and header. There is no allow-list.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::response::Response;
    use http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(vars: &[(&str, &str)]) -> Router {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        });
        create_router(AppState::new(config))
    }

    async fn get_response(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn get_json(router: Router, uri: &str) -> Value {
        let response = get_response(router, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let body = get_json(app(&[("NODE_ENV", "staging")]), "/api/health").await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Backend funcionando!");
        assert_eq!(body["environment"], "staging");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_health_timestamp_non_decreasing() {
        let router = app(&[]);
        let first = get_json(router.clone(), "/api/health").await;
        let second = get_json(router, "/api/health").await;
        let parse = |v: &Value| {
            chrono::DateTime::parse_from_rfc3339(v["timestamp"].as_str().unwrap()).unwrap()
        };
        assert!(parse(&first) <= parse(&second));
    }

    #[tokio::test]
    async fn test_config_defaults() {
        let body = get_json(app(&[]), "/api/config").await;
        assert_eq!(
            body,
            json!({
                "environment": "development",
                "logLevel": "info",
                "cors": false,
                "database": {"host": "localhost", "port": "5432", "name": "myapp"}
            })
        );
    }

    #[tokio::test]
    async fn test_config_omits_user_and_password() {
        let body = get_json(
            app(&[("DATABASE_USER", "svc"), ("DATABASE_PASSWORD", "hunter2")]),
            "/api/config",
        )
        .await;
        let database = body["database"].as_object().unwrap();
        assert!(!database.contains_key("user"));
        assert!(!database.contains_key("password"));
        assert!(!body.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_mensaje_production_with_cors() {
        let body = get_json(
            app(&[("ENABLE_CORS", "true"), ("NODE_ENV", "production")]),
            "/api/mensaje",
        )
        .await;
        assert_eq!(
            body["mensaje"],
            "Hola desde Kubernetes - Ambiente: production!"
        );
        assert_eq!(body["config"]["environment"], "production");
    }

    #[tokio::test]
    async fn test_mensaje_projection() {
        let body = get_json(app(&[("DATABASE_PASSWORD", "hunter2")]), "/api/mensaje").await;
        assert_eq!(
            body,
            json!({
                "mensaje": "Hola desde Kubernetes - Ambiente: development!",
                "config": {
                    "environment": "development",
                    "logLevel": "info",
                    "database": {"host": "localhost", "name": "myapp", "user": "user"}
                }
            })
        );
        assert!(!body.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_api_responses_not_cacheable() {
        for uri in ["/api/health", "/api/mensaje", "/api/config"] {
            let response = get_response(app(&[]), uri).await;
            assert_eq!(response.headers()[CACHE_CONTROL], "no-store");
            assert!(response.headers().contains_key("x-request-id"));
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get_response(app(&[]), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_headers_only_when_enabled() {
        let request = |router: Router| async move {
            router
                .oneshot(
                    Request::builder()
                        .uri("/api/mensaje")
                        .header("origin", "http://localhost:30000")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap()
        };

        let enabled = request(app(&[("ENABLE_CORS", "true")])).await;
        assert_eq!(enabled.headers()["access-control-allow-origin"], "*");

        let disabled = request(app(&[("ENABLE_CORS", "TRUE")])).await;
        assert!(!disabled
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let response = app(&[("ENABLE_CORS", "true")])
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/config")
                    .header("origin", "http://example.com")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
