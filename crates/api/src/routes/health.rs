//! `GET /` and `GET /health`, mounted for every service.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
}

async fn greeting(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = state.config.service.greeting().to_string();
    Json(MessageResponse { message })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match tupermiso_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        service: state.config.service.name(),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
