//! Dashboard administrators (back).

use sqlx::FromRow;
use tupermiso_core::types::DbId;

/// A row from the `usuarios_admin` table.
#[derive(Debug, Clone, FromRow)]
pub struct UsuarioAdmin {
    pub id: DbId,
    pub rut: String,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for provisioning an administrator. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUsuarioAdmin {
    pub rut: String,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
}
