//! SOAP insurance policies (AACH).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::{Clp, Date, DbId};

/// A row from the `soap` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Soap {
    pub num_poliza: DbId,
    pub ppu: String,
    pub compania: String,
    pub rige_desde: Date,
    pub rige_hasta: Date,
    pub prima: Clp,
}

/// DTO for registering a new policy. `num_poliza` is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSoap {
    pub ppu: String,
    pub compania: String,
    pub rige_desde: Date,
    pub rige_hasta: Date,
    pub prima: Clp,
}
