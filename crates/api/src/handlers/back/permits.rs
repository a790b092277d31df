//! Permit fee quote and permit issuance.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use tupermiso_core::permit_fee::{resolve_permit_fee, FeeSource};
use tupermiso_core::ppu::validate_plate;
use tupermiso_core::types::Clp;
use tupermiso_registry::RegistryClients;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ValorPermisoResponse {
    pub valor: Clp,
}

/// GET /consultar_valor_permiso/{ppu}
///
/// A plate TGR already knows is a renewal priced from its SII appraisal.
/// A plate TGR answers 404 for is a first issue priced from the purchase
/// invoice, found through the chassis number on the SRCEI registration.
pub async fn consultar_valor_permiso(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<ValorPermisoResponse>> {
    let ppu = validate_plate(&ppu)?;
    let registry = state.registry()?;

    let source = match registry.permiso(&ppu).await {
        Ok(permiso) => {
            let tasacion = registry
                .tasacion_fiscal(&permiso.codigo_sii)
                .await
                .map_err(|e| AppError::from_registry(e, "El Código SII no existe"))?;
            FeeSource::Renewal {
                tipo_vehiculo: permiso.tipo_vehiculo,
                carga: permiso.carga,
                sii_valor_permiso: tasacion.valor_permiso,
                combustible: tasacion.combustible,
            }
        }
        Err(e) if e.is_not_found() => first_issue(registry, &ppu).await?,
        Err(e) => return Err(e.into()),
    };

    let valor = resolve_permit_fee(&source);
    tracing::info!(ppu = %ppu, valor, source = ?source, "Permit fee quoted");
    Ok(Json(ValorPermisoResponse { valor }))
}

async fn first_issue(registry: &RegistryClients, ppu: &str) -> AppResult<FeeSource> {
    let padron = registry
        .padron_vehiculo(ppu)
        .await
        .map_err(|e| AppError::from_registry(e, "La PPU no existe"))?;

    let factura = registry
        .factura_por_chasis(&padron.num_chasis)
        .await
        .map_err(|e| AppError::from_registry(e, "La factura no existe"))?;

    Ok(FeeSource::FirstIssue {
        tipo_vehiculo: factura.tipo_vehiculo,
        carga: factura.carga,
        precio_neto: factura.precio_neto,
        combustible: factura.combustible,
    })
}

/// POST /emitir_permiso_circulacion/
///
/// Forwards the permit to TGR; TGR's rejection (duplicate plate, bad PPU)
/// is relayed with its own status.
pub async fn emitir_permiso_circulacion(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let permiso = state
        .registry()?
        .subir_permiso(&body)
        .await
        .map_err(AppError::relay)?;

    tracing::info!(ppu = ?permiso.get("ppu"), "Permit issued through TGR");
    Ok((StatusCode::CREATED, Json(permiso)))
}
