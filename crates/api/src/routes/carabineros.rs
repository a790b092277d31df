//! Route definitions for Carabineros (stolen-vehicle reports).
//!
//! ```text
//! GET    /encargo_patente/{ppu}    get_encargo
//! POST   /encargo_patente/         create_encargo
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::carabineros;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/encargo_patente/{ppu}", get(carabineros::get_encargo))
        .route("/encargo_patente/", post(carabineros::create_encargo))
}
