//! Traffic fines per plate (SRCEI).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::DbId;

/// A row from the `multas_transito` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MultaTransito {
    pub id: DbId,
    pub ppu: String,
    pub rol_causa: i32,
    pub jpl: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMultaTransito {
    pub ppu: String,
    pub rol_causa: i32,
    pub jpl: i32,
}
