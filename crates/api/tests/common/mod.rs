#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use tupermiso_api::auth::jwt::JwtConfig;
use tupermiso_api::config::ServerConfig;
use tupermiso_api::router::build_app_router;
use tupermiso_api::state::AppState;
use tupermiso_core::service::ServiceKind;
use tupermiso_registry::{GeminiClient, GeminiConfig, RegistryClients, UpstreamConfig};

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// A `ServerConfig` for `service` with safe defaults.
///
/// Token-issuing services get a fixed JWT secret so tests can mint tokens.
pub fn test_config(service: ServiceKind) -> ServerConfig {
    ServerConfig {
        service,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: service.issues_tokens().then(test_jwt),
    }
}

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 120,
    }
}

/// The full router of `service`, with the same middleware stack as `main.rs`.
pub fn build_test_app(pool: PgPool, service: ServiceKind) -> Router {
    let config = test_config(service);
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// The `back` router with every registry pointed at `registry_url` and the
/// chatbot at `gemini`.
pub fn build_back_app(pool: PgPool, registry_url: &str, gemini: GeminiConfig) -> Router {
    let config = test_config(ServiceKind::Back);
    let registry = RegistryClients::new(&UpstreamConfig::single_host(registry_url))
        .expect("client should build");
    let state = AppState::new(pool, config.clone())
        .with_registry(registry)
        .with_gemini(GeminiClient::new(gemini));
    build_app_router(state, &config)
}

pub fn no_gemini() -> GeminiConfig {
    GeminiConfig {
        api_key: None,
        model: GeminiConfig::DEFAULT_MODEL.to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
