//! Handlers for SII: fiscal appraisals and purchase invoices.

use axum::extract::{Query, State};
use axum::Json;

use tupermiso_db::models::factura::FacturaCompra;
use tupermiso_db::models::tasacion::TasacionFiscal;
use tupermiso_db::repositories::{FacturaRepo, TasacionRepo};

use crate::error::{AppError, AppResult};
use crate::query::{CodigoSiiQuery, NumChasisQuery, NumFacturaQuery};
use crate::state::AppState;

/// GET /tasacion_fiscal?codigo_sii=
pub async fn get_tasacion_fiscal(
    State(state): State<AppState>,
    Query(params): Query<CodigoSiiQuery>,
) -> AppResult<Json<TasacionFiscal>> {
    let codigo = required(params.codigo_sii.as_deref(), "Debe ingresar un Código SII.")?;

    let tasacion = TasacionRepo::find_by_codigo(&state.pool, codigo)
        .await?
        .ok_or_else(|| AppError::not_found("El Código SII no existe"))?;

    Ok(Json(tasacion))
}

/// GET /factura_venta?num_factura=
pub async fn get_factura_venta(
    State(state): State<AppState>,
    Query(params): Query<NumFacturaQuery>,
) -> AppResult<Json<FacturaCompra>> {
    let num_factura = params
        .num_factura
        .ok_or_else(|| AppError::BadRequest("Debe ingresar un N° de Factura.".into()))?;

    let factura = FacturaRepo::find_by_numero(&state.pool, num_factura)
        .await?
        .ok_or_else(|| AppError::not_found("El N° de Factura no existe"))?;

    Ok(Json(factura))
}

/// GET /factura_venta_num_chasis?num_chasis=
pub async fn get_factura_por_chasis(
    State(state): State<AppState>,
    Query(params): Query<NumChasisQuery>,
) -> AppResult<Json<FacturaCompra>> {
    let chasis = required(params.num_chasis.as_deref(), "Debe ingresar un N° de chasis.")?;

    let factura = FacturaRepo::find_by_chasis(&state.pool, chasis)
        .await?
        .ok_or_else(|| AppError::not_found("La factura no existe"))?;

    Ok(Json(factura))
}

fn required<'a>(value: Option<&'a str>, message: &str) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(message.into())),
    }
}
