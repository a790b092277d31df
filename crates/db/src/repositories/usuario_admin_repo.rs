//! Repository for the `usuarios_admin` table.

use sqlx::PgPool;

use crate::models::admin::{CreateUsuarioAdmin, UsuarioAdmin};

const COLUMNS: &str = "id, rut, nombre, email, password_hash";

pub struct UsuarioAdminRepo;

impl UsuarioAdminRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateUsuarioAdmin,
    ) -> Result<UsuarioAdmin, sqlx::Error> {
        let query = format!(
            "INSERT INTO usuarios_admin (rut, nombre, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UsuarioAdmin>(&query)
            .bind(&input.rut)
            .bind(&input.nombre)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_rut(
        pool: &PgPool,
        rut: &str,
    ) -> Result<Option<UsuarioAdmin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios_admin WHERE rut = $1");
        sqlx::query_as::<_, UsuarioAdmin>(&query)
            .bind(rut)
            .fetch_optional(pool)
            .await
    }
}
