//! Route definitions for SRCEI (vehicle registry and traffic fines).
//!
//! ```text
//! GET    /padron/{rut}             list_padron_por_rut
//! GET    /padron/vehiculo/{ppu}    get_padron_vehiculo
//! GET    /multas_transito/{ppu}    list_multas_transito
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::srcei;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/padron/{rut}", get(srcei::list_padron_por_rut))
        .route("/padron/vehiculo/{ppu}", get(srcei::get_padron_vehiculo))
        .route("/multas_transito/{ppu}", get(srcei::list_multas_transito))
}
