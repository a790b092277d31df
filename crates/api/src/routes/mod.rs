pub mod aach;
pub mod back;
pub mod carabineros;
pub mod health;
pub mod mtt;
pub mod prt;
pub mod sgd;
pub mod sii;
pub mod srcei;
pub mod tgr;

use axum::Router;
use tupermiso_core::service::ServiceKind;

use crate::state::AppState;

/// The endpoints served when the process runs as `service`.
///
/// Paths keep the trailing slashes the front ends already call.
pub fn service_routes(service: ServiceKind) -> Router<AppState> {
    match service {
        ServiceKind::Aach => aach::router(),
        ServiceKind::Carabineros => carabineros::router(),
        ServiceKind::Mtt => mtt::router(),
        ServiceKind::Prt => prt::router(),
        ServiceKind::Sgd => sgd::router(),
        ServiceKind::Sii => sii::router(),
        ServiceKind::Srcei => srcei::router(),
        ServiceKind::Tgr => tgr::router(),
        ServiceKind::Back => back::router(),
    }
}
