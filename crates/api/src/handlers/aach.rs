//! Handlers for AACH: SOAP insurance policies.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::types::{Clp, Date};
use tupermiso_core::vigencia::{today, Vigencia};
use tupermiso_db::models::soap::{CreateSoap, Soap};
use tupermiso_db::repositories::SoapRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A policy with its validity at today's date.
#[derive(Debug, Serialize)]
pub struct SoapResponse {
    #[serde(flatten)]
    pub soap: Soap,
    pub vigencia: Vigencia,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSoapRequest {
    pub ppu: String,
    #[validate(length(min = 1, max = 50, message = "La compañía debe tener entre 1 y 50 caracteres"))]
    pub compania: String,
    pub rige_desde: Date,
    pub rige_hasta: Date,
    #[validate(range(min = 0, message = "La prima no puede ser negativa"))]
    pub prima: Clp,
}

// ---------------------------------------------------------------------------
// GET /soap/{ppu}
// ---------------------------------------------------------------------------

/// The policy with the latest `rige_hasta` for a plate.
pub async fn get_soap(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<SoapResponse>> {
    let ppu = validate_plate(&ppu)?;

    let soap = SoapRepo::find_latest_by_ppu(&state.pool, &ppu)
        .await?
        .ok_or_else(|| AppError::not_found("SOAP no encontrado"))?;

    let vigencia = Vigencia::from_expiry(soap.rige_hasta, today());
    Ok(Json(SoapResponse { soap, vigencia }))
}

// ---------------------------------------------------------------------------
// POST /create_soap/
// ---------------------------------------------------------------------------

pub async fn create_soap(
    State(state): State<AppState>,
    Json(input): Json<CreateSoapRequest>,
) -> AppResult<impl IntoResponse> {
    let ppu = validate_plate(&input.ppu)?;
    input.validate()?;
    if input.rige_hasta < input.rige_desde {
        return Err(AppError::BadRequest(
            "La fecha de término no puede ser anterior a la de inicio".into(),
        ));
    }

    let soap = SoapRepo::create(
        &state.pool,
        &CreateSoap {
            ppu,
            compania: input.compania.trim().to_string(),
            rige_desde: input.rige_desde,
            rige_hasta: input.rige_hasta,
            prima: input.prima,
        },
    )
    .await?;

    tracing::info!(num_poliza = soap.num_poliza, ppu = %soap.ppu, "SOAP policy created");
    Ok((StatusCode::CREATED, Json(soap)))
}
