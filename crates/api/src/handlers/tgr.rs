//! Handlers for TGR: circulation permits and portal credentials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tupermiso_core::error::CoreError;
use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;
use tupermiso_core::types::DbId;
use tupermiso_db::models::permiso::{CreatePermisoCirculacion, PermisoCirculacion};
use tupermiso_db::repositories::{CredencialRepo, PermisoRepo};

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::TokenResponse;
use crate::state::AppState;

const PERMISO_NO_ENCONTRADO: &str = "Permiso de circulación no encontrado";
const PPU_REGISTRADO: &str = "El PPU ya está registrado";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CredencialesRequest {
    #[serde(default)]
    pub rut: String,
    #[serde(default)]
    pub contrasena: String,
}

#[derive(Debug, Serialize)]
pub struct CredencialInfo {
    pub rut: String,
    pub nombre: String,
    pub rol: String,
}

#[derive(Debug, Serialize)]
pub struct PermisoCountResponse {
    pub year: i32,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Permits
// ---------------------------------------------------------------------------

/// GET /consultar_permiso/{ppu}
pub async fn get_permiso(
    State(state): State<AppState>,
    Path(ppu): Path<String>,
) -> AppResult<Json<PermisoCirculacion>> {
    let ppu = validate_plate(&ppu)?;

    let permiso = PermisoRepo::find_by_ppu(&state.pool, &ppu)
        .await?
        .ok_or_else(|| AppError::not_found(PERMISO_NO_ENCONTRADO))?;

    Ok(Json(permiso))
}

/// GET /consultar_permiso_id/{id}
pub async fn get_permiso_por_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PermisoCirculacion>> {
    let permiso = PermisoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(PERMISO_NO_ENCONTRADO))?;

    Ok(Json(permiso))
}

/// POST /subir_permiso/
///
/// A plate holds at most one permit; a second upload is rejected with 400.
pub async fn subir_permiso(
    State(state): State<AppState>,
    Json(mut input): Json<CreatePermisoCirculacion>,
) -> AppResult<impl IntoResponse> {
    input.ppu = validate_plate(&input.ppu)?;
    input.rut = Rut::parse(&input.rut)?.to_string();
    input.validate()?;

    if PermisoRepo::exists_by_ppu(&state.pool, &input.ppu).await? {
        return Err(AppError::BadRequest(PPU_REGISTRADO.into()));
    }
    if input.fecha_expiracion < input.fecha_emision {
        return Err(AppError::BadRequest(
            "La fecha de expiración no puede ser anterior a la de emisión".into(),
        ));
    }

    let permiso = PermisoRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::from(e).duplicate_as_bad_request(PPU_REGISTRADO))?;
    tracing::info!(
        id = permiso.id,
        ppu = %permiso.ppu,
        valor = permiso.valor_permiso,
        "Circulation permit issued"
    );

    Ok((StatusCode::CREATED, Json(permiso)))
}

/// GET /permiso_count/{year}
pub async fn count_permisos(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<PermisoCountResponse>> {
    let count = PermisoRepo::count_by_year(&state.pool, year).await?;
    Ok(Json(PermisoCountResponse { year, count }))
}

// ---------------------------------------------------------------------------
// Portal login
// ---------------------------------------------------------------------------

/// POST /validar_credenciales/
pub async fn validar_credenciales(
    State(state): State<AppState>,
    Json(input): Json<CredencialesRequest>,
) -> AppResult<Json<TokenResponse<CredencialInfo>>> {
    if input.rut.trim().is_empty() || input.contrasena.is_empty() {
        return Err(AppError::BadRequest(
            "RUT y contraseña son obligatorios".into(),
        ));
    }
    let rut = Rut::parse(&input.rut).map_err(|_| AppError::BadRequest("RUT inválido".into()))?;

    let rejected = || AppError::Core(CoreError::Unauthorized("Credenciales inválidas".into()));

    let credencial = CredencialRepo::find_by_rut(&state.pool, &rut.to_string())
        .await?
        .ok_or_else(rejected)?;

    let ok = verify_password(&input.contrasena, &credencial.contrasena_hash)
        .map_err(|e| AppError::InternalError(format!("Stored hash is unreadable: {e}")))?;
    if !ok {
        tracing::info!(rut = %rut, "Portal login rejected");
        return Err(rejected());
    }

    let jwt = state.jwt()?;
    let token = jwt
        .issue(&credencial.rut, &credencial.rol)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(rut = %credencial.rut, rol = %credencial.rol, "Portal login");
    Ok(Json(TokenResponse::bearer(
        token,
        CredencialInfo {
            rut: credencial.rut,
            nombre: credencial.nombre,
            rol: credencial.rol,
        },
        jwt.expires_in_secs(),
    )))
}
