//! Route definitions for TGR (circulation permits and portal login).
//!
//! ```text
//! GET    /consultar_permiso/{ppu}     get_permiso
//! GET    /consultar_permiso_id/{id}   get_permiso_por_id
//! POST   /subir_permiso/              subir_permiso
//! POST   /validar_credenciales/       validar_credenciales
//! GET    /permiso_count/{year}        count_permisos
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tgr;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/consultar_permiso/{ppu}", get(tgr::get_permiso))
        .route("/consultar_permiso_id/{id}", get(tgr::get_permiso_por_id))
        .route("/subir_permiso/", post(tgr::subir_permiso))
        .route("/validar_credenciales/", post(tgr::validar_credenciales))
        .route("/permiso_count/{year}", get(tgr::count_permisos))
}
