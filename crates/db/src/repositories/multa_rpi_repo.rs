//! Repository for the `multas_rpi` table.

use sqlx::PgPool;

use crate::models::multa_rpi::{CreateMultaRpi, MultaRpi};

const COLUMNS: &str = "id, rut, rol_causa, anio_causa, nombre_jpl, monto_multa";

/// Provides queries for RPI passenger fines.
pub struct MultaRpiRepo;

impl MultaRpiRepo {
    pub async fn create(pool: &PgPool, input: &CreateMultaRpi) -> Result<MultaRpi, sqlx::Error> {
        let query = format!(
            "INSERT INTO multas_rpi (rut, rol_causa, anio_causa, nombre_jpl, monto_multa)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MultaRpi>(&query)
            .bind(&input.rut)
            .bind(&input.rol_causa)
            .bind(input.anio_causa)
            .bind(&input.nombre_jpl)
            .bind(input.monto_multa)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_rut(pool: &PgPool, rut: &str) -> Result<Vec<MultaRpi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM multas_rpi WHERE rut = $1 ORDER BY id");
        sqlx::query_as::<_, MultaRpi>(&query)
            .bind(rut)
            .fetch_all(pool)
            .await
    }

    /// Delete every fine for a RUT. Returns the number of deleted rows.
    pub async fn delete_by_rut(pool: &PgPool, rut: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM multas_rpi WHERE rut = $1")
            .bind(rut)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
