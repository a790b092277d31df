//! Repository for the `credenciales` table.

use sqlx::PgPool;

use crate::models::permiso::{CreateCredencial, Credencial};

const COLUMNS: &str = "id, rut, nombre, contrasena_hash, rol";

pub struct CredencialRepo;

impl CredencialRepo {
    pub async fn create(pool: &PgPool, input: &CreateCredencial) -> Result<Credencial, sqlx::Error> {
        let query = format!(
            "INSERT INTO credenciales (rut, nombre, contrasena_hash, rol)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Credencial>(&query)
            .bind(&input.rut)
            .bind(&input.nombre)
            .bind(&input.contrasena_hash)
            .bind(&input.rol)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_rut(pool: &PgPool, rut: &str) -> Result<Option<Credencial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM credenciales WHERE rut = $1");
        sqlx::query_as::<_, Credencial>(&query)
            .bind(rut)
            .fetch_optional(pool)
            .await
    }
}
