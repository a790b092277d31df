//! Handlers for SGD: Clave Única password checks.
//!
//! A wrong password and an unknown RUT produce the same 404 so the endpoint
//! cannot be used to probe which RUTs are enrolled.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use tupermiso_core::rut::Rut;
use tupermiso_db::models::clave_unica::ClaveUnica;
use tupermiso_db::repositories::ClaveUnicaRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

const RECHAZO: &str = "Usuario no encontrado o contraseña incorrecta";

#[derive(Debug, Deserialize)]
pub struct ValidarClaveUnicaRequest {
    pub rut: String,
    pub contrasena: String,
}

/// GET /validar_clave_unica/{rut}/{contrasena}
pub async fn validar_clave_unica(
    State(state): State<AppState>,
    Path((rut, contrasena)): Path<(String, String)>,
) -> AppResult<Json<ClaveUnica>> {
    check(&state, &rut, &contrasena).await.map(Json)
}

/// POST /validar_clave_unica/
pub async fn validar_clave_unica_body(
    State(state): State<AppState>,
    Json(input): Json<ValidarClaveUnicaRequest>,
) -> AppResult<Json<ClaveUnica>> {
    check(&state, &input.rut, &input.contrasena).await.map(Json)
}

async fn check(state: &AppState, rut: &str, contrasena: &str) -> AppResult<ClaveUnica> {
    let rut = Rut::parse(rut).map_err(|_| AppError::BadRequest("RUT inválido".into()))?;

    let Some(clave) = ClaveUnicaRepo::find_by_rut(&state.pool, &rut.to_string()).await? else {
        return Err(AppError::not_found(RECHAZO));
    };

    let ok = verify_password(contrasena, &clave.contrasena_hash)
        .map_err(|e| AppError::InternalError(format!("Stored hash is unreadable: {e}")))?;
    if !ok {
        tracing::info!(rut = %rut, "Clave Única rejected");
        return Err(AppError::not_found(RECHAZO));
    }

    Ok(clave)
}
