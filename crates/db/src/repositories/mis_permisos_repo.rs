//! Repository for the `mis_permisos_emitidos` table.

use sqlx::PgPool;
use tupermiso_core::types::Timestamp;

use crate::models::mis_permisos::{CreatePermisoEmitido, PermisoEmitido};

const COLUMNS: &str = "id, rut, ppu, fecha_emision, valor_permiso, tarjeta";

pub struct MisPermisosRepo;

impl MisPermisosRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePermisoEmitido,
    ) -> Result<PermisoEmitido, sqlx::Error> {
        let query = format!(
            "INSERT INTO mis_permisos_emitidos (rut, ppu, fecha_emision, valor_permiso, tarjeta)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PermisoEmitido>(&query)
            .bind(&input.rut)
            .bind(&input.ppu)
            .bind(input.fecha_emision)
            .bind(input.valor_permiso)
            .bind(&input.tarjeta)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(
        pool: &PgPool,
        rut: &str,
        ppu: &str,
        fecha_emision: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM mis_permisos_emitidos
                 WHERE rut = $1 AND ppu = $2 AND fecha_emision = $3
             )",
        )
        .bind(rut)
        .bind(ppu)
        .bind(fecha_emision)
        .fetch_one(pool)
        .await
    }

    /// Permits paid by an owner, newest first.
    pub async fn list_by_rut(
        pool: &PgPool,
        rut: &str,
    ) -> Result<Vec<PermisoEmitido>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mis_permisos_emitidos
             WHERE rut = $1
             ORDER BY fecha_emision DESC, id DESC"
        );
        sqlx::query_as::<_, PermisoEmitido>(&query)
            .bind(rut)
            .fetch_all(pool)
            .await
    }
}
