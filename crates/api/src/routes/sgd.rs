//! Route definitions for SGD (Clave Única).
//!
//! ```text
//! GET    /validar_clave_unica/{rut}/{contrasena}    validar_clave_unica
//! POST   /validar_clave_unica/                      validar_clave_unica_body
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sgd;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/validar_clave_unica/{rut}/{contrasena}",
            get(sgd::validar_clave_unica),
        )
        .route(
            "/validar_clave_unica/",
            post(sgd::validar_clave_unica_body),
        )
}
