//! Technical inspections (PRT).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use tupermiso_core::types::{Date, DbId};

/// Inspection outcome stored in `revision_tecnica.estado`.
pub const ESTADO_APROBADA: &str = "aprobada";
pub const ESTADO_RECHAZADA: &str = "rechazada";

/// A row from the `revision_tecnica` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RevisionTecnica {
    pub id_rev_tecnica: DbId,
    pub ppu: String,
    pub fecha: Date,
    pub codigo_planta: String,
    pub planta: String,
    pub nom_certificado: String,
    pub fecha_vencimiento: Date,
    pub estado: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRevisionTecnica {
    pub ppu: String,
    pub fecha: Date,
    #[validate(length(min = 1, max = 20))]
    pub codigo_planta: String,
    #[validate(length(min = 1, max = 100))]
    pub planta: String,
    #[validate(length(min = 1, max = 100))]
    pub nom_certificado: String,
    pub fecha_vencimiento: Date,
    pub estado: String,
}
