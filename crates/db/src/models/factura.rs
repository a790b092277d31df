//! Purchase invoices (SII).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::Clp;

/// A row from the `factura_compra` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FacturaCompra {
    pub num_factura: i64,
    pub num_chasis: String,
    pub tipo_vehiculo: String,
    pub precio_neto: Clp,
    pub puertas: i32,
    pub asientos: i32,
    pub combustible: String,
    pub peso: String,
    pub transmision: String,
    pub traccion: String,
    pub cilindrada: i32,
    /// Load capacity in kilograms.
    pub carga: i32,
    pub tipo_sello: String,
}
