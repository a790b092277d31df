//! Payment log of permits issued through the portal (back).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use tupermiso_core::types::{Clp, DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermisoEmitido {
    pub id: DbId,
    pub rut: String,
    pub ppu: String,
    pub fecha_emision: Timestamp,
    pub valor_permiso: Clp,
    pub tarjeta: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePermisoEmitido {
    pub rut: String,
    pub ppu: String,
    pub fecha_emision: Timestamp,
    #[validate(range(min = 0, message = "El valor del permiso no puede ser negativo"))]
    pub valor_permiso: Clp,
    /// Masked card number as shown on the receipt.
    #[validate(length(min = 1, max = 16, message = "La tarjeta debe tener entre 1 y 16 caracteres"))]
    pub tarjeta: String,
}
