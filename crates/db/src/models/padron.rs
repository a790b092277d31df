//! Vehicle registry (SRCEI).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::Date;

/// A row from the `padron` table, keyed by plate.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Padron {
    pub ppu: String,
    pub rut: String,
    pub tipo_vehiculo: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub color: String,
    pub cilindrada: i32,
    pub num_motor: String,
    pub num_chasis: String,
    pub fecha_inscripcion: Date,
}
