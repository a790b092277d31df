//! Read-through lookups against the registry services.
//!
//! Calls are made one after the other; nothing is cached.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Datelike;
use serde::Serialize;
use serde_json::Value;

use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;
use tupermiso_core::types::{Clp, Date, DbId};
use tupermiso_core::vigencia::{is_current, today, FinesStatus, VehicleStatus, Vigencia};
use tupermiso_registry::types::{EncargoRecord, PadronRecord, PermisoRecord};
use tupermiso_registry::RegistryError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const PERMISO_NO_ENCONTRADO: &str = "Permiso de circulación no encontrado";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PermisoConVigencia {
    #[serde(flatten)]
    pub permiso: PermisoRecord,
    pub vigencia: bool,
}

#[derive(Debug, Serialize)]
pub struct SoapResponse {
    pub num_poliza: DbId,
    pub ppu: String,
    pub rige_desde: Date,
    pub rige_hasta: Date,
    pub prima: Clp,
    pub vigencia: String,
    /// `Vigente` when the policy started in the current calendar year.
    pub vigencia_permiso: Vigencia,
}

#[derive(Debug, Serialize)]
pub struct MultasResponse {
    pub estado: FinesStatus,
    pub ppu: String,
    pub multas: Vec<Value>,
    pub total_multas: usize,
}

#[derive(Debug, Serialize)]
pub struct MultasRpiResponse {
    pub rut_propietario: String,
    pub cantidad_multas: usize,
    pub mensaje: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VehiculoPropietario {
    pub ppu: String,
    pub marca: String,
    pub modelo: String,
    pub estado: VehicleStatus,
}

// ---------------------------------------------------------------------------
// SRCEI / TGR / PRT / AACH / Carabineros
// ---------------------------------------------------------------------------

/// GET /consultar_patente/{ppu}
pub async fn consultar_patente(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<PadronRecord>> {
    let ppu = validate_plate(&ppu)?;
    let padron = state
        .registry()?
        .padron_vehiculo(&ppu)
        .await
        .map_err(|e| AppError::from_registry(e, "Patente no encontrada"))?;
    Ok(Json(padron))
}

/// GET /consultar_permiso_circulacion/{ppu}
pub async fn consultar_permiso_circulacion(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<PermisoConVigencia>> {
    let ppu = validate_plate(&ppu)?;
    let permiso = state
        .registry()?
        .permiso(&ppu)
        .await
        .map_err(|e| AppError::from_registry(e, PERMISO_NO_ENCONTRADO))?;
    Ok(Json(with_vigencia(permiso)))
}

/// GET /consultar_permiso_circulacion_id/{id}
pub async fn consultar_permiso_circulacion_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PermisoConVigencia>> {
    let permiso = state
        .registry()?
        .permiso_por_id(id)
        .await
        .map_err(|e| AppError::from_registry(e, PERMISO_NO_ENCONTRADO))?;
    Ok(Json(with_vigencia(permiso)))
}

fn with_vigencia(permiso: PermisoRecord) -> PermisoConVigencia {
    let vigencia = is_current(permiso.fecha_expiracion, today());
    PermisoConVigencia { permiso, vigencia }
}

/// GET /consultar_revision_tecnica/{ppu}
pub async fn consultar_revision_tecnica(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<Value>> {
    let ppu = validate_plate(&ppu)?;
    let revision = state
        .registry()?
        .revision_tecnica(&ppu)
        .await
        .map_err(|e| AppError::from_registry(e, "Revisión técnica no encontrada"))?;
    Ok(Json(revision))
}

/// GET /consultar_soap/{ppu}
pub async fn consultar_soap(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<SoapResponse>> {
    let ppu = validate_plate(&ppu)?;
    let soap = state
        .registry()?
        .soap(&ppu)
        .await
        .map_err(|e| {
            AppError::from_registry(e, "No se encontró información para la patente proporcionada")
        })?;

    let vigencia_permiso = if soap.rige_desde.year() == today().year() {
        Vigencia::Vigente
    } else {
        Vigencia::NoVigente
    };

    Ok(Json(SoapResponse {
        num_poliza: soap.num_poliza,
        ppu: soap.ppu,
        rige_desde: soap.rige_desde,
        rige_hasta: soap.rige_hasta,
        prima: soap.prima,
        vigencia: soap.vigencia,
        vigencia_permiso,
    }))
}

/// GET /consultar_encargo/{ppu}
///
/// Carabineros' own status (404 included) is relayed to the caller.
pub async fn consultar_encargo(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<EncargoRecord>> {
    let ppu = validate_plate(&ppu)?;
    let encargo = state
        .registry()?
        .encargo(&ppu)
        .await
        .map_err(AppError::relay)?;
    Ok(Json(encargo))
}

// ---------------------------------------------------------------------------
// Fines
// ---------------------------------------------------------------------------

/// GET /consultar_multas/{ppu}
///
/// A plate SRCEI knows nothing about is reported as having no fines.
pub async fn consultar_multas(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<MultasResponse>> {
    let ppu = ppu.to_uppercase();
    if !ppu.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(bad_plate(&ppu));
    }

    let multas = match state.registry()?.multas_transito(&ppu).await {
        Ok(multas) => multas,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) if e.status() == Some(400) => return Err(bad_plate(&ppu)),
        Err(e) => return Err(e.into()),
    };

    Ok(Json(MultasResponse {
        estado: FinesStatus::from_count(multas.len()),
        total_multas: multas.len(),
        ppu,
        multas,
    }))
}

fn bad_plate(ppu: &str) -> AppError {
    AppError::BadRequest(format!("Formato de patente inválido: {ppu}"))
}

/// GET /consultar-multas-rpi/{rut}
pub async fn consultar_multas_rpi(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> AppResult<Json<MultasRpiResponse>> {
    let rut = Rut::parse(&rut)?.to_string();

    let (cantidad_multas, mensaje) = match state.registry()?.multas_pasajero(&rut).await {
        Ok(multas) => (multas.len(), "Cuenta con multas de RPI"),
        Err(e) if e.is_not_found() => (0, "No se encontraron multas para el RUT proporcionado"),
        Err(e) => return Err(e.into()),
    };

    Ok(Json(MultasRpiResponse {
        rut_propietario: rut,
        cantidad_multas,
        mensaje,
    }))
}

// ---------------------------------------------------------------------------
// Owner's vehicles
// ---------------------------------------------------------------------------

/// GET /vehiculos_rut/{rut}
///
/// Each registered vehicle is tagged with the state of its permit. A failed
/// permit lookup marks that vehicle `desconocido` instead of failing the list.
pub async fn vehiculos_rut(
    State(state): State<AppState>,
    Path(rut): Path<String>,
) -> AppResult<Json<Vec<VehiculoPropietario>>> {
    let rut = Rut::parse(&rut)?.to_string();
    let registry = state.registry()?;

    let padron = match registry.padron_por_rut(&rut).await {
        Ok(vehiculos) => vehiculos,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let hoy = today();
    let mut vehiculos = Vec::with_capacity(padron.len());
    for vehiculo in padron {
        let estado = match registry.permiso(&vehiculo.ppu).await {
            Ok(permiso) => VehicleStatus::from_permit_expiry(Some(permiso.fecha_expiracion), hoy),
            Err(RegistryError::Status { .. }) => VehicleStatus::SinPermiso,
            Err(e) => {
                tracing::warn!(ppu = %vehiculo.ppu, error = %e, "Permit lookup failed");
                VehicleStatus::Desconocido
            }
        };
        vehiculos.push(VehiculoPropietario {
            ppu: vehiculo.ppu,
            marca: vehiculo.marca,
            modelo: vehiculo.modelo,
            estado,
        });
    }

    Ok(Json(vehiculos))
}
