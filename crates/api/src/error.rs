use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tupermiso_core::error::CoreError;
use tupermiso_registry::RegistryError;

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const NOT_FOUND_MESSAGE: &str = "Resource not found";
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Everything a handler can fail with.
///
/// Every variant renders as `{"error": .., "code": ..}`. Database and
/// transport details are logged and never reach the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A call to another service failed; reported as 404 or 500.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A downstream reply passed through with its own status.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound(message.into()))
    }

    /// A downstream 404 becomes `not_found(message)`; other failures stay
    /// registry errors.
    pub fn from_registry(err: RegistryError, message: &str) -> Self {
        if err.is_not_found() {
            Self::not_found(message)
        } else {
            AppError::Registry(err)
        }
    }

    /// Pass a downstream non-2xx reply through with its status and message.
    /// Transport failures are still 500.
    pub fn relay(err: RegistryError) -> Self {
        let RegistryError::Status { status, body } = err else {
            return AppError::Registry(err);
        };
        match StatusCode::from_u16(status) {
            Ok(status) => AppError::Upstream {
                status,
                message: upstream_message(&body),
            },
            Err(_) => AppError::Registry(RegistryError::Status { status, body }),
        }
    }

    /// A unique-constraint violation reported as a 400 with `message`.
    ///
    /// Covers the insert that loses a race against an identical request
    /// after both passed the existence check.
    pub fn duplicate_as_bad_request(self, message: &str) -> Self {
        let unique = matches!(
            &self,
            AppError::Database(sqlx::Error::Database(db))
                if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
        );
        if unique {
            AppError::BadRequest(message.to_string())
        } else {
            self
        }
    }

    fn status_code_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound(m)) => (StatusCode::NOT_FOUND, "NOT_FOUND", m.clone()),
            AppError::Core(CoreError::Validation(m)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", m.clone())
            }
            AppError::Core(CoreError::Conflict(m)) => (StatusCode::CONFLICT, "CONFLICT", m.clone()),
            AppError::Core(CoreError::Unauthorized(m)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", m.clone())
            }
            AppError::Core(CoreError::Forbidden(m)) => (StatusCode::FORBIDDEN, "FORBIDDEN", m.clone()),
            AppError::Core(CoreError::Internal(m)) | AppError::InternalError(m) => {
                tracing::error!(error = %m, "Internal error");
                internal()
            }
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", m.clone()),
            AppError::Database(err) => sqlx_parts(err),
            AppError::Registry(err) if err.is_not_found() => not_found(),
            AppError::Registry(err) => {
                tracing::error!(error = %err, "Downstream service call failed");
                internal()
            }
            AppError::Upstream { status, message } => {
                tracing::warn!(%status, %message, "Relaying downstream error");
                (*status, "UPSTREAM_ERROR", message.clone())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.status_code_message();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

fn not_found() -> (StatusCode, &'static str, String) {
    (StatusCode::NOT_FOUND, "NOT_FOUND", NOT_FOUND_MESSAGE.to_string())
}

/// `RowNotFound` is 404 and a violated `uq_*` constraint is 409. Anything
/// else is logged and sanitized to 500.
fn sqlx_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return not_found();
    }
    if let sqlx::Error::Database(db) = err {
        let unique = db.code().as_deref() == Some(PG_UNIQUE_VIOLATION);
        if let Some(constraint) = db.constraint().filter(|c| unique && c.starts_with("uq_")) {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value for {constraint}"),
            );
        }
    }
    tracing::error!(error = %err, "Database error");
    internal()
}

/// The message inside a downstream error body: its `error` or `detail`
/// string, or the raw body when it has neither.
pub fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "detail"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
