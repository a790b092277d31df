//! Owners' saved vehicles and paid permits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;
use tupermiso_db::models::mis_permisos::{CreatePermisoEmitido, PermisoEmitido};
use tupermiso_db::models::mis_vehiculos::{CreateMiVehiculo, MiVehiculo};
use tupermiso_db::repositories::{MisPermisosRepo, MisVehiculosRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const VEHICULO_GUARDADO: &str = "El vehículo ya está guardado para este usuario";
const PERMISO_GUARDADO: &str =
    "El permiso ya está guardado para este RUT y PPU en la fecha especificada.";

// ---------------------------------------------------------------------------
// Saved vehicles
// ---------------------------------------------------------------------------

/// POST /guardar_vehiculo/
pub async fn guardar_vehiculo(
    State(state): State<AppState>,
    Json(mut input): Json<CreateMiVehiculo>,
) -> AppResult<impl IntoResponse> {
    input.rut = Rut::parse(&input.rut)?.to_string();
    input.ppu = validate_plate(&input.ppu)?;
    input.validate()?;

    if MisVehiculosRepo::exists(&state.pool, &input.rut, &input.ppu).await? {
        return Err(AppError::BadRequest(VEHICULO_GUARDADO.into()));
    }

    let vehiculo = MisVehiculosRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::from(e).duplicate_as_bad_request(VEHICULO_GUARDADO))?;
    tracing::info!(rut = %vehiculo.rut, ppu = %vehiculo.ppu, "Vehicle saved");

    Ok((StatusCode::CREATED, Json(vehiculo)))
}

/// GET /mis_vehiculos_guardados/{rut}
pub async fn mis_vehiculos_guardados(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> AppResult<Json<Vec<MiVehiculo>>> {
    let rut = Rut::parse(&rut)?;
    let vehiculos = MisVehiculosRepo::list_by_rut(&state.pool, &rut.to_string()).await?;
    Ok(Json(vehiculos))
}

// ---------------------------------------------------------------------------
// Paid permits
// ---------------------------------------------------------------------------

/// POST /mis_permisos_emitidos/
pub async fn registrar_permiso_emitido(
    State(state): State<AppState>,
    Json(mut input): Json<CreatePermisoEmitido>,
) -> AppResult<impl IntoResponse> {
    input.rut = Rut::parse(&input.rut)?.to_string();
    input.ppu = validate_plate(&input.ppu)?;
    input.validate()?;

    if MisPermisosRepo::exists(&state.pool, &input.rut, &input.ppu, input.fecha_emision).await? {
        return Err(AppError::BadRequest(PERMISO_GUARDADO.into()));
    }

    let permiso = MisPermisosRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::from(e).duplicate_as_bad_request(PERMISO_GUARDADO))?;
    tracing::info!(
        rut = %permiso.rut,
        ppu = %permiso.ppu,
        valor = permiso.valor_permiso,
        "Permit payment recorded"
    );

    Ok((StatusCode::CREATED, Json(permiso)))
}

/// GET /mis_permisos_emitidos/{rut}
pub async fn mis_permisos_emitidos(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> AppResult<Json<Vec<PermisoEmitido>>> {
    let rut = Rut::parse(&rut)?;
    let permisos = MisPermisosRepo::list_by_rut(&state.pool, &rut.to_string()).await?;
    Ok(Json(permisos))
}
