//! Route definitions for SII.
//!
//! ```text
//! GET    /tasacion_fiscal?codigo_sii=             get_tasacion_fiscal
//! GET    /factura_venta?num_factura=              get_factura_venta
//! GET    /factura_venta_num_chasis?num_chasis=    get_factura_por_chasis
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::sii;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasacion_fiscal", get(sii::get_tasacion_fiscal))
        .route("/factura_venta", get(sii::get_factura_venta))
        .route("/factura_venta_num_chasis", get(sii::get_factura_por_chasis))
}
