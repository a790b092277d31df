//! Route definitions for the `back` aggregator.
//!
//! ```text
//! REGISTRY LOOKUPS:
//! GET    /consultar_patente/{ppu}                     consultar_patente
//! GET    /consultar_permiso_circulacion/{ppu}         consultar_permiso_circulacion
//! GET    /consultar_permiso_circulacion_id/{id}       consultar_permiso_circulacion_id
//! GET    /consultar_revision_tecnica/{ppu}            consultar_revision_tecnica
//! GET    /consultar_soap/{ppu}                        consultar_soap
//! GET    /consultar_encargo/{ppu}                     consultar_encargo
//! GET    /consultar_multas/{ppu}                      consultar_multas
//! GET    /consultar-multas-rpi/{rut}                  consultar_multas_rpi
//! GET    /vehiculos_rut/{rut}                         vehiculos_rut
//!
//! PERMITS:
//! GET    /consultar_valor_permiso/{ppu}               consultar_valor_permiso
//! POST   /emitir_permiso_circulacion/                 emitir_permiso_circulacion
//!
//! PORTAL:
//! POST   /guardar_vehiculo/                           guardar_vehiculo
//! GET    /mis_vehiculos_guardados/{rut}               mis_vehiculos_guardados
//! POST   /mis_permisos_emitidos/                      registrar_permiso_emitido
//! GET    /mis_permisos_emitidos/{rut}                 mis_permisos_emitidos
//!
//! AUDIT LOGS:
//! POST   /logs_consulta_propietario/                  log_consulta_propietario
//! POST   /logs_fiscalizacion/                         log_fiscalizacion
//!
//! DASHBOARD:
//! POST   /login_admin                                 login_admin
//! POST   /calcular-metricas                           calcular_metricas
//! POST   /calcular-metricas/{scope}/{period}/{from}/{to}  calcular_metricas_path
//!
//! CHATBOT:
//! POST   /chatbot/gemini                              chatbot_gemini
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::back::{admin, chatbot, logs, lookups, permits, portal};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Registry lookups.
        .route("/consultar_patente/{ppu}", get(lookups::consultar_patente))
        .route(
            "/consultar_permiso_circulacion/{ppu}",
            get(lookups::consultar_permiso_circulacion),
        )
        .route(
            "/consultar_permiso_circulacion_id/{id}",
            get(lookups::consultar_permiso_circulacion_id),
        )
        .route(
            "/consultar_revision_tecnica/{ppu}",
            get(lookups::consultar_revision_tecnica),
        )
        .route("/consultar_soap/{ppu}", get(lookups::consultar_soap))
        .route("/consultar_encargo/{ppu}", get(lookups::consultar_encargo))
        .route("/consultar_multas/{ppu}", get(lookups::consultar_multas))
        .route(
            "/consultar-multas-rpi/{rut}",
            get(lookups::consultar_multas_rpi),
        )
        .route("/vehiculos_rut/{rut}", get(lookups::vehiculos_rut))
        // Permits.
        .route(
            "/consultar_valor_permiso/{ppu}",
            get(permits::consultar_valor_permiso),
        )
        .route(
            "/emitir_permiso_circulacion/",
            post(permits::emitir_permiso_circulacion),
        )
        // Portal.
        .route("/guardar_vehiculo/", post(portal::guardar_vehiculo))
        .route(
            "/mis_vehiculos_guardados/{rut}",
            get(portal::mis_vehiculos_guardados),
        )
        .route(
            "/mis_permisos_emitidos/",
            post(portal::registrar_permiso_emitido),
        )
        .route(
            "/mis_permisos_emitidos/{rut}",
            get(portal::mis_permisos_emitidos),
        )
        // Audit logs.
        .route(
            "/logs_consulta_propietario/",
            post(logs::log_consulta_propietario),
        )
        .route("/logs_fiscalizacion/", post(logs::log_fiscalizacion))
        // Dashboard.
        .route("/login_admin", post(admin::login_admin))
        .route("/calcular-metricas", post(admin::calcular_metricas))
        .route(
            "/calcular-metricas/{scope}/{period_type}/{from_date}/{to_date}",
            post(admin::calcular_metricas_path),
        )
        // Chatbot.
        .route("/chatbot/gemini", post(chatbot::chatbot_gemini))
}
