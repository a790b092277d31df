//! Aggregate queries behind the admin dashboard.
//!
//! Every query is bounded by a [`MetricsWindow`]: both dates are inclusive and
//! compared against the event's calendar date. Time series are bucketed with
//! `to_char` using the window's period pattern, so labels sort lexically.

use sqlx::PgPool;
use tupermiso_core::metrics::MetricsWindow;

use crate::models::logs::{LogConsultaPropietario, LogFiscalizacion};
use crate::models::metrics::{
    CondicionPorPeriodo, ConsultasPorPeriodo, ConsultasTotals, FiscalizacionTotals,
    MilesPorPeriodo, PermisoReciente, PermisosTotals,
};

/// Rows returned by the inspection table.
pub const FISCALIZACION_TABLE_LIMIT: i64 = 100;
/// Rows returned by the lookup table.
pub const CONSULTAS_TABLE_LIMIT: i64 = 50;
/// Rows returned by the permit table.
pub const PERMISOS_TABLE_LIMIT: i64 = 100;

/// An inspection is "al día" when every document is valid and there is no theft report.
const AL_DIA: &str = "vigencia_permiso AND vigencia_revision AND vigencia_soap AND NOT encargo_robo";

pub struct MetricsRepo;

impl MetricsRepo {
    // -----------------------------------------------------------------------
    // Fiscalización
    // -----------------------------------------------------------------------

    pub async fn fiscalizacion_totals(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<FiscalizacionTotals, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*)::BIGINT AS total,
                    COUNT(*) FILTER (WHERE {AL_DIA})::BIGINT AS al_dia,
                    COUNT(*) FILTER (WHERE NOT ({AL_DIA}))::BIGINT AS con_problemas
             FROM log_fiscalizacion
             WHERE fecha::date BETWEEN $1 AND $2"
        );
        sqlx::query_as::<_, FiscalizacionTotals>(&query)
            .bind(window.from)
            .bind(window.to)
            .fetch_one(pool)
            .await
    }

    pub async fn fiscalizacion_por_condicion(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<CondicionPorPeriodo>, sqlx::Error> {
        let query = format!(
            "SELECT to_char(fecha, $3) AS periodo,
                    COUNT(*) FILTER (WHERE {AL_DIA})::BIGINT AS al_dia,
                    COUNT(*) FILTER (WHERE NOT ({AL_DIA}))::BIGINT AS con_problemas
             FROM log_fiscalizacion
             WHERE fecha::date BETWEEN $1 AND $2
             GROUP BY 1
             ORDER BY 1"
        );
        sqlx::query_as::<_, CondicionPorPeriodo>(&query)
            .bind(window.from)
            .bind(window.to)
            .bind(window.period.sql_format())
            .fetch_all(pool)
            .await
    }

    pub async fn fiscalizacion_miles(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<MilesPorPeriodo>, sqlx::Error> {
        sqlx::query_as::<_, MilesPorPeriodo>(
            "SELECT to_char(fecha, $3) AS periodo,
                    ROUND(COUNT(*) / 1000.0, 2)::FLOAT8 AS miles
             FROM log_fiscalizacion
             WHERE fecha::date BETWEEN $1 AND $2
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(window.period.sql_format())
        .fetch_all(pool)
        .await
    }

    /// Latest inspections in the window, newest first.
    pub async fn fiscalizaciones_recientes(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<LogFiscalizacion>, sqlx::Error> {
        sqlx::query_as::<_, LogFiscalizacion>(
            "SELECT id, ppu, rut_fiscalizador, fecha, vigencia_permiso, vigencia_revision,
                    vigencia_soap, encargo_robo
             FROM log_fiscalizacion
             WHERE fecha::date BETWEEN $1 AND $2
             ORDER BY fecha DESC, id DESC
             LIMIT $3",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(FISCALIZACION_TABLE_LIMIT)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Consultas
    // -----------------------------------------------------------------------

    pub async fn consultas_totals(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<ConsultasTotals, sqlx::Error> {
        sqlx::query_as::<_, ConsultasTotals>(
            "SELECT COUNT(*)::BIGINT AS total_consultas,
                    COUNT(DISTINCT rut)::BIGINT AS usuarios_unicos
             FROM log_consultas_propietarios
             WHERE fecha::date BETWEEN $1 AND $2",
        )
        .bind(window.from)
        .bind(window.to)
        .fetch_one(pool)
        .await
    }

    pub async fn consultas_por_periodo(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<ConsultasPorPeriodo>, sqlx::Error> {
        sqlx::query_as::<_, ConsultasPorPeriodo>(
            "SELECT to_char(fecha, $3) AS periodo,
                    COUNT(*)::BIGINT AS consultas,
                    COUNT(DISTINCT rut)::BIGINT AS usuarios_unicos
             FROM log_consultas_propietarios
             WHERE fecha::date BETWEEN $1 AND $2
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(window.period.sql_format())
        .fetch_all(pool)
        .await
    }

    pub async fn consultas_recientes(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<LogConsultaPropietario>, sqlx::Error> {
        sqlx::query_as::<_, LogConsultaPropietario>(
            "SELECT id, rut, ppu, fecha
             FROM log_consultas_propietarios
             WHERE fecha::date BETWEEN $1 AND $2
             ORDER BY fecha DESC, id DESC
             LIMIT $3",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(CONSULTAS_TABLE_LIMIT)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Permisos
    // -----------------------------------------------------------------------

    pub async fn permisos_totals(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<PermisosTotals, sqlx::Error> {
        sqlx::query_as::<_, PermisosTotals>(
            "SELECT COUNT(*)::BIGINT AS total_permisos,
                    COALESCE(SUM(valor_permiso), 0)::BIGINT AS recaudacion_total,
                    COALESCE(ROUND(AVG(valor_permiso), 0), 0)::FLOAT8 AS valor_promedio
             FROM mis_permisos_emitidos
             WHERE fecha_emision::date BETWEEN $1 AND $2",
        )
        .bind(window.from)
        .bind(window.to)
        .fetch_one(pool)
        .await
    }

    pub async fn permisos_miles(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<MilesPorPeriodo>, sqlx::Error> {
        sqlx::query_as::<_, MilesPorPeriodo>(
            "SELECT to_char(fecha_emision, $3) AS periodo,
                    ROUND(COUNT(*) / 1000.0, 2)::FLOAT8 AS miles
             FROM mis_permisos_emitidos
             WHERE fecha_emision::date BETWEEN $1 AND $2
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(window.period.sql_format())
        .fetch_all(pool)
        .await
    }

    pub async fn permisos_recientes(
        pool: &PgPool,
        window: &MetricsWindow,
    ) -> Result<Vec<PermisoReciente>, sqlx::Error> {
        sqlx::query_as::<_, PermisoReciente>(
            "SELECT ppu, rut, fecha_emision, valor_permiso
             FROM mis_permisos_emitidos
             WHERE fecha_emision::date BETWEEN $1 AND $2
             ORDER BY fecha_emision DESC, id DESC
             LIMIT $3",
        )
        .bind(window.from)
        .bind(window.to)
        .bind(PERMISOS_TABLE_LIMIT)
        .fetch_all(pool)
        .await
    }
}
