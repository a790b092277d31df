//! Audit logs written by the owner and inspector apps.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;
use tupermiso_db::models::logs::{CreateLogConsultaPropietario, CreateLogFiscalizacion};
use tupermiso_db::repositories::{LogConsultaRepo, LogFiscalizacionRepo};

use crate::error::AppResult;
use crate::response::LogCreatedResponse;
use crate::state::AppState;

/// POST /logs_consulta_propietario/
pub async fn log_consulta_propietario(
    State(state): State<AppState>,
    Json(mut input): Json<CreateLogConsultaPropietario>,
) -> AppResult<impl IntoResponse> {
    input.rut = Rut::parse(&input.rut)?.to_string();
    input.ppu = validate_plate(&input.ppu)?;

    let log = LogConsultaRepo::create(&state.pool, &input).await?;
    tracing::debug!(log_id = log.id, ppu = %log.ppu, "Owner lookup logged");

    Ok((StatusCode::CREATED, Json(LogCreatedResponse::new(log.id))))
}

/// POST /logs_fiscalizacion/
pub async fn log_fiscalizacion(
    State(state): State<AppState>,
    Json(mut input): Json<CreateLogFiscalizacion>,
) -> AppResult<impl IntoResponse> {
    input.rut_fiscalizador = Rut::parse(&input.rut_fiscalizador)?.to_string();
    input.ppu = validate_plate(&input.ppu)?;

    let log = LogFiscalizacionRepo::create(&state.pool, &input).await?;
    tracing::debug!(log_id = log.id, ppu = %log.ppu, "Inspection logged");

    Ok((StatusCode::CREATED, Json(LogCreatedResponse::new(log.id))))
}
