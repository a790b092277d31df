//! Route definitions for MTT.
//!
//! ```text
//! GET    /multas_pasajero/?rut=        list_multas_pasajero
//! GET    /registro_transporte/?ppu=    get_registro_transporte
//! DELETE /delete_multas_rpi/?rut=      delete_multas_rpi
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::mtt;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/multas_pasajero/", get(mtt::list_multas_pasajero))
        .route("/registro_transporte/", get(mtt::get_registro_transporte))
        .route("/delete_multas_rpi/", delete(mtt::delete_multas_rpi))
}
