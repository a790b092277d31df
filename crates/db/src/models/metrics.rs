//! Aggregate rows backing the dashboard metrics.

use serde::Serialize;
use sqlx::FromRow;
use tupermiso_core::types::{Clp, Timestamp};

// ---------------------------------------------------------------------------
// Fiscalización
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct FiscalizacionTotals {
    pub total: i64,
    pub al_dia: i64,
    pub con_problemas: i64,
}

/// Inspections per bucket split by outcome.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CondicionPorPeriodo {
    pub periodo: String,
    pub al_dia: i64,
    pub con_problemas: i64,
}

/// Event count per bucket in thousands, rounded to two decimals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MilesPorPeriodo {
    pub periodo: String,
    pub miles: f64,
}

// ---------------------------------------------------------------------------
// Consultas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct ConsultasTotals {
    pub total_consultas: i64,
    pub usuarios_unicos: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct ConsultasPorPeriodo {
    pub periodo: String,
    pub consultas: i64,
    pub usuarios_unicos: i64,
}

// ---------------------------------------------------------------------------
// Permisos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, FromRow)]
pub struct PermisosTotals {
    pub total_permisos: i64,
    pub recaudacion_total: Clp,
    pub valor_promedio: f64,
}

/// Latest issued permits shown in the dashboard table. Card numbers are omitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermisoReciente {
    pub ppu: String,
    pub rut: String,
    pub fecha_emision: Timestamp,
    pub valor_permiso: Clp,
}
