//! Handlers for PRT: technical inspections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::vigencia::{today, Vigencia};
use tupermiso_db::models::revision_tecnica::{
    CreateRevisionTecnica, RevisionTecnica, ESTADO_APROBADA, ESTADO_RECHAZADA,
};
use tupermiso_db::repositories::RevisionTecnicaRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RevisionResponse {
    #[serde(flatten)]
    pub revision: RevisionTecnica,
    pub vigencia: Vigencia,
}

/// GET /revision_tecnica/{ppu}
///
/// The latest approved inspection; rejected ones never count.
pub async fn get_revision_tecnica(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<RevisionResponse>> {
    let ppu = validate_plate(&ppu)?;

    let revision = RevisionTecnicaRepo::find_latest_approved(&state.pool, &ppu)
        .await?
        .ok_or_else(|| {
            AppError::not_found("No hay revisiones técnicas aprobadas para este PPU")
        })?;

    let vigencia = Vigencia::from_expiry(revision.fecha_vencimiento, today());
    Ok(Json(RevisionResponse { revision, vigencia }))
}

/// POST /revision_tecnica/
pub async fn create_revision_tecnica(
    State(state): State<AppState>,
    Json(mut input): Json<CreateRevisionTecnica>,
) -> AppResult<impl IntoResponse> {
    input.ppu = validate_plate(&input.ppu)?;
    input.validate()?;
    input.estado = input.estado.trim().to_lowercase();
    if input.estado != ESTADO_APROBADA && input.estado != ESTADO_RECHAZADA {
        return Err(AppError::BadRequest(
            "Estado inválido. Debe ser 'aprobada' o 'rechazada'".into(),
        ));
    }

    let revision = RevisionTecnicaRepo::create(&state.pool, &input).await?;
    tracing::info!(
        ppu = %revision.ppu,
        estado = %revision.estado,
        "Technical inspection recorded"
    );

    Ok((StatusCode::CREATED, Json(revision)))
}
