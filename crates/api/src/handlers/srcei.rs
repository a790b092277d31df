//! Handlers for SRCEI: vehicle registry and traffic fines.

use axum::extract::{Path, State};
use axum::Json;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;
use tupermiso_db::models::multa_transito::MultaTransito;
use tupermiso_db::models::padron::Padron;
use tupermiso_db::repositories::{MultaTransitoRepo, PadronRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /padron/{rut}
///
/// An owner with no vehicles gets an empty list, not a 404.
pub async fn list_padron_por_rut(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> AppResult<Json<Vec<Padron>>> {
    let rut = Rut::parse(&rut)?;
    let vehiculos = PadronRepo::list_by_rut(&state.pool, &rut.to_string()).await?;
    Ok(Json(vehiculos))
}

/// GET /padron/vehiculo/{ppu}
pub async fn get_padron_vehiculo(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<Padron>> {
    let ppu = validate_plate(&ppu)?;

    let padron = PadronRepo::find_by_ppu(&state.pool, &ppu)
        .await?
        .ok_or_else(|| AppError::not_found("Padrón no encontrado"))?;

    Ok(Json(padron))
}

/// GET /multas_transito/{ppu}
pub async fn list_multas_transito(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<Vec<MultaTransito>>> {
    let ppu = validate_plate(&ppu)?;
    let multas = MultaTransitoRepo::list_by_ppu(&state.pool, &ppu).await?;
    Ok(Json(multas))
}
