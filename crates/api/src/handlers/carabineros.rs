//! Handlers for Carabineros: stolen-vehicle reports.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tupermiso_core::ppu::validate_plate;
use tupermiso_db::models::encargo::{CreateEncargoPatente, EncargoPatente};
use tupermiso_db::repositories::EncargoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /encargo_patente/{ppu}
pub async fn get_encargo(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<EncargoPatente>> {
    let ppu = validate_plate(&ppu)?;

    let encargo = EncargoRepo::find_by_ppu(&state.pool, &ppu)
        .await?
        .ok_or_else(|| AppError::not_found("Encargo no encontrado"))?;

    Ok(Json(encargo))
}

/// POST /encargo_patente/
pub async fn create_encargo(
    State(state): State<AppState>,
    Json(mut input): Json<CreateEncargoPatente>,
) -> AppResult<impl IntoResponse> {
    input.ppu = validate_plate(&input.ppu)?;

    let encargo = EncargoRepo::create(&state.pool, &input).await?;
    tracing::info!(ppu = %encargo.ppu, encargo = encargo.encargo, "Theft report filed");

    Ok((StatusCode::CREATED, Json(encargo)))
}
