//! Registro de Pasajeros Infractores fines (MTT).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::{Clp, DbId};

/// A row from the `multas_rpi` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MultaRpi {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub rut: String,
    pub rol_causa: String,
    pub anio_causa: i32,
    pub nombre_jpl: String,
    pub monto_multa: Clp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMultaRpi {
    pub rut: String,
    pub rol_causa: String,
    pub anio_causa: i32,
    pub nombre_jpl: String,
    pub monto_multa: Clp,
}
