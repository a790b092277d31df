//! Repositories for the append-only audit logs.

use sqlx::PgPool;

use crate::models::logs::{
    CreateLogConsultaPropietario, CreateLogFiscalizacion, LogConsultaPropietario,
    LogFiscalizacion,
};

// ---------------------------------------------------------------------------
// Owner lookups
// ---------------------------------------------------------------------------

const CONSULTA_COLUMNS: &str = "id, rut, ppu, fecha";

pub struct LogConsultaRepo;

impl LogConsultaRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateLogConsultaPropietario,
    ) -> Result<LogConsultaPropietario, sqlx::Error> {
        let query = format!(
            "INSERT INTO log_consultas_propietarios (rut, ppu, fecha) VALUES ($1, $2, $3)
             RETURNING {CONSULTA_COLUMNS}"
        );
        sqlx::query_as::<_, LogConsultaPropietario>(&query)
            .bind(&input.rut)
            .bind(&input.ppu)
            .bind(input.fecha)
            .fetch_one(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Roadside inspections
// ---------------------------------------------------------------------------

const FISCALIZACION_COLUMNS: &str = "id, ppu, rut_fiscalizador, fecha, vigencia_permiso, \
                                     vigencia_revision, vigencia_soap, encargo_robo";

pub struct LogFiscalizacionRepo;

impl LogFiscalizacionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateLogFiscalizacion,
    ) -> Result<LogFiscalizacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO log_fiscalizacion
                 (ppu, rut_fiscalizador, fecha, vigencia_permiso, vigencia_revision,
                  vigencia_soap, encargo_robo)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {FISCALIZACION_COLUMNS}"
        );
        sqlx::query_as::<_, LogFiscalizacion>(&query)
            .bind(&input.ppu)
            .bind(&input.rut_fiscalizador)
            .bind(input.fecha)
            .bind(input.vigencia_permiso)
            .bind(input.vigencia_revision)
            .bind(input.vigencia_soap)
            .bind(input.encargo_robo)
            .fetch_one(pool)
            .await
    }
}
