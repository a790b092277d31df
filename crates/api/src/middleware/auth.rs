//! Bearer-token extractors.
//!
//! Tokens are minted by `POST /login_admin` (and by TGR for the owner
//! portal); both use the same secret and claim layout.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tupermiso_core::error::CoreError;

use crate::auth::jwt::ROLE_ADMIN;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Holder of a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Canonical RUT taken from `sub`.
    pub rut: String,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

/// The raw token from `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> AppResult<&str> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Token de acceso requerido"))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Formato de autorización inválido. Use: Bearer <token>"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state
            .jwt()?
            .verify(token)
            .map_err(|_| unauthorized("Token inválido o expirado"))?;

        Ok(AuthUser {
            rut: claims.sub,
            role: claims.role,
        })
    }
}

/// An [`AuthUser`] whose token carries the `admin` role; 403 otherwise.
///
/// ```ignore
/// async fn panel(State(state): State<AppState>, RequireAdmin(admin): RequireAdmin) { .. }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::info!(rut = %user.rut, role = %user.role, "Dashboard access denied");
            return Err(AppError::Core(CoreError::Forbidden(
                "Se requiere rol de administrador".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
