//! Stolen-vehicle reports (Carabineros).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::DbId;

/// A row from the `encargo_patente` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EncargoPatente {
    pub id: DbId,
    pub ppu: String,
    pub encargo: bool,
    pub patente_delantera: bool,
    pub patente_trasera: bool,
    pub vin: bool,
    pub motor: bool,
}

/// DTO for filing a report. Part flags default to `false` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEncargoPatente {
    pub ppu: String,
    pub encargo: bool,
    #[serde(default)]
    pub patente_delantera: bool,
    #[serde(default)]
    pub patente_trasera: bool,
    #[serde(default)]
    pub vin: bool,
    #[serde(default)]
    pub motor: bool,
}
