//! Audit logs written by the front ends through `back`.
//!
//! Both logs are append-only; rows are never updated.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tupermiso_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Owner lookups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogConsultaPropietario {
    pub id: DbId,
    pub rut: String,
    pub ppu: String,
    pub fecha: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLogConsultaPropietario {
    pub rut: String,
    pub ppu: String,
    pub fecha: Timestamp,
}

// ---------------------------------------------------------------------------
// Roadside inspections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogFiscalizacion {
    pub id: DbId,
    pub ppu: String,
    pub rut_fiscalizador: String,
    pub fecha: Timestamp,
    pub vigencia_permiso: bool,
    pub vigencia_revision: bool,
    pub vigencia_soap: bool,
    pub encargo_robo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLogFiscalizacion {
    pub ppu: String,
    pub rut_fiscalizador: String,
    pub fecha: Timestamp,
    pub vigencia_permiso: bool,
    pub vigencia_revision: bool,
    pub vigencia_soap: bool,
    pub encargo_robo: bool,
}
