//! Route definitions for AACH (SOAP insurance policies).
//!
//! ```text
//! GET    /soap/{ppu}        get_soap
//! POST   /create_soap/      create_soap
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::aach;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/soap/{ppu}", get(aach::get_soap))
        .route("/create_soap/", post(aach::create_soap))
}
