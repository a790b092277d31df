//! Repository for the `encargo_patente` table.

use sqlx::PgPool;

use crate::models::encargo::{CreateEncargoPatente, EncargoPatente};

const COLUMNS: &str = "id, ppu, encargo, patente_delantera, patente_trasera, vin, motor";

/// Provides queries for stolen-vehicle reports.
pub struct EncargoRepo;

impl EncargoRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEncargoPatente,
    ) -> Result<EncargoPatente, sqlx::Error> {
        let query = format!(
            "INSERT INTO encargo_patente (ppu, encargo, patente_delantera, patente_trasera, vin, motor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EncargoPatente>(&query)
            .bind(&input.ppu)
            .bind(input.encargo)
            .bind(input.patente_delantera)
            .bind(input.patente_trasera)
            .bind(input.vin)
            .bind(input.motor)
            .fetch_one(pool)
            .await
    }

    /// The most recent report filed for a plate.
    pub async fn find_by_ppu(
        pool: &PgPool,
        ppu: &str,
    ) -> Result<Option<EncargoPatente>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM encargo_patente WHERE ppu = $1 ORDER BY id DESC LIMIT 1"
        );
        sqlx::query_as::<_, EncargoPatente>(&query)
            .bind(ppu)
            .fetch_optional(pool)
            .await
    }
}
