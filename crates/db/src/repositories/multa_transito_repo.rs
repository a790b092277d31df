//! Repository for the `multas_transito` table.

use sqlx::PgPool;

use crate::models::multa_transito::{CreateMultaTransito, MultaTransito};

const COLUMNS: &str = "id, ppu, rol_causa, jpl";

pub struct MultaTransitoRepo;

impl MultaTransitoRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMultaTransito,
    ) -> Result<MultaTransito, sqlx::Error> {
        let query = format!(
            "INSERT INTO multas_transito (ppu, rol_causa, jpl) VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MultaTransito>(&query)
            .bind(&input.ppu)
            .bind(input.rol_causa)
            .bind(input.jpl)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_ppu(pool: &PgPool, ppu: &str) -> Result<Vec<MultaTransito>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM multas_transito WHERE ppu = $1 ORDER BY id");
        sqlx::query_as::<_, MultaTransito>(&query)
            .bind(ppu)
            .fetch_all(pool)
            .await
    }
}
