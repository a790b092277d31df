//! Shared response types for API handlers.

use serde::Serialize;
use tupermiso_core::types::DbId;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Reply to an appended audit-log row.
#[derive(Debug, Serialize)]
pub struct LogCreatedResponse {
    pub message: &'static str,
    pub log_id: DbId,
}

impl LogCreatedResponse {
    pub fn new(log_id: DbId) -> Self {
        Self {
            message: "Log entry created successfully",
            log_id,
        }
    }
}

/// Bearer token issued by a login endpoint.
///
/// `expires_in` is in seconds.
#[derive(Debug, Serialize)]
pub struct TokenResponse<U: Serialize> {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_info: U,
    pub expires_in: i64,
}

impl<U: Serialize> TokenResponse<U> {
    pub fn bearer(access_token: String, user_info: U, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            user_info,
            expires_in,
        }
    }
}
