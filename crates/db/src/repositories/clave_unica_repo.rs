//! Repository for the `clave_unica` table.

use sqlx::PgPool;

use crate::models::clave_unica::ClaveUnica;

const COLUMNS: &str = "id, rut, contrasena_hash";

pub struct ClaveUnicaRepo;

impl ClaveUnicaRepo {
    /// Insert a credential. `contrasena_hash` must be an Argon2 PHC string.
    pub async fn create(
        pool: &PgPool,
        rut: &str,
        contrasena_hash: &str,
    ) -> Result<ClaveUnica, sqlx::Error> {
        let query = format!(
            "INSERT INTO clave_unica (rut, contrasena_hash) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClaveUnica>(&query)
            .bind(rut)
            .bind(contrasena_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_rut(pool: &PgPool, rut: &str) -> Result<Option<ClaveUnica>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clave_unica WHERE rut = $1");
        sqlx::query_as::<_, ClaveUnica>(&query)
            .bind(rut)
            .fetch_optional(pool)
            .await
    }
}
