//! Clave Única credentials (SGD).

use serde::Serialize;
use sqlx::FromRow;
use tupermiso_core::types::DbId;

/// A row from the `clave_unica` table. The hash is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClaveUnica {
    pub id: DbId,
    pub rut: String,
    #[serde(skip_serializing)]
    pub contrasena_hash: String,
}
