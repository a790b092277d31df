//! Fiscal appraisals (SII).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::Clp;

/// A row from the `tasacion_fiscal` table, keyed by SII vehicle code.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TasacionFiscal {
    pub codigo_sii: String,
    pub tipo: String,
    pub anio: i32,
    pub marca: String,
    pub modelo: String,
    pub version: String,
    pub combustible: String,
    pub cilindrada: i32,
    pub potencia: i32,
    pub marchas: i32,
    pub transmision: String,
    pub traccion: String,
    pub puertas: i32,
    pub pais: String,
    pub equipamiento: String,
    pub tasacion: Clp,
    pub num_ejes: i32,
    pub valor_permiso: Clp,
}
