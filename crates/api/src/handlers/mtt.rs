//! Handlers for MTT: RPI passenger fines and the transport register.

use axum::extract::{Query, State};
use axum::Json;

use tupermiso_db::models::multa_rpi::MultaRpi;
use tupermiso_db::models::reg_transporte::RegistroTransporte;
use tupermiso_db::repositories::{MultaRpiRepo, RegTransporteRepo};

use crate::error::{AppError, AppResult};
use crate::query::{PpuQuery, RutQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

const SIN_MULTAS: &str = "No se encontraron multas para este RUT.";

/// GET /multas_pasajero/?rut=
///
/// 404 when the owner has no fines, so callers can tell "none" from "some".
pub async fn list_multas_pasajero(
    State(state): State<AppState>,
    Query(params): Query<RutQuery>,
) -> AppResult<Json<Vec<MultaRpi>>> {
    let rut = params.rut()?;

    let multas = MultaRpiRepo::list_by_rut(&state.pool, &rut.to_string()).await?;
    if multas.is_empty() {
        return Err(AppError::not_found(SIN_MULTAS));
    }
    Ok(Json(multas))
}

/// GET /registro_transporte/?ppu=
pub async fn get_registro_transporte(
    State(state): State<AppState>,
    Query(params): Query<PpuQuery>,
) -> AppResult<Json<RegistroTransporte>> {
    let ppu = params.plate()?;

    let registro = RegTransporteRepo::find_by_ppu(&state.pool, &ppu)
        .await?
        .ok_or_else(|| {
            AppError::not_found("No se encontró el registro de transporte para este PPU.")
        })?;

    Ok(Json(registro))
}

/// DELETE /delete_multas_rpi/?rut=
///
/// Clears every fine of an owner once they are paid.
pub async fn delete_multas_rpi(
    State(state): State<AppState>,
    Query(params): Query<RutQuery>,
) -> AppResult<Json<MessageResponse>> {
    let rut = params.rut()?;

    let deleted = MultaRpiRepo::delete_by_rut(&state.pool, &rut.to_string()).await?;
    if deleted == 0 {
        return Err(AppError::not_found(SIN_MULTAS));
    }

    tracing::info!(rut = %rut, deleted, "RPI fines deleted");
    Ok(Json(MessageResponse {
        message: format!("Se eliminaron {deleted} multas para el RUT {rut}."),
    }))
}
