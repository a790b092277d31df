//! Route definitions for PRT (technical inspections).
//!
//! ```text
//! GET    /revision_tecnica/{ppu}    get_revision_tecnica
//! POST   /revision_tecnica/         create_revision_tecnica
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prt;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/revision_tecnica/{ppu}", get(prt::get_revision_tecnica))
        .route("/revision_tecnica/", post(prt::create_revision_tecnica))
}
