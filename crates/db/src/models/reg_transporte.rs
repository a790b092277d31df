//! National passenger-transport register entries (MTT).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reg_transporte` table, keyed by plate.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RegistroTransporte {
    pub ppu: String,
    pub fecha_entrada_rnt: NaiveDateTime,
    pub tipo_servicio: String,
    pub capacidad: i32,
    pub estado_vehiculo: String,
    pub fecha_vencimiento_certificado: NaiveDateTime,
    pub region: i32,
    pub anio_fabricacion: i32,
    pub cinturon_obligatorio: bool,
    pub antiguedad_vehiculo: i32,
    pub marca: String,
    pub modelo: String,
}
