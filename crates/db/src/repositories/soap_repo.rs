//! Repository for the `soap` table.

use sqlx::PgPool;

use crate::models::soap::{CreateSoap, Soap};

const COLUMNS: &str = "num_poliza, ppu, compania, rige_desde, rige_hasta, prima";

/// Provides queries for SOAP policies.
pub struct SoapRepo;

impl SoapRepo {
    /// Insert a new policy, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSoap) -> Result<Soap, sqlx::Error> {
        let query = format!(
            "INSERT INTO soap (ppu, compania, rige_desde, rige_hasta, prima)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Soap>(&query)
            .bind(&input.ppu)
            .bind(&input.compania)
            .bind(input.rige_desde)
            .bind(input.rige_hasta)
            .bind(input.prima)
            .fetch_one(pool)
            .await
    }

    /// The policy with the latest `rige_hasta` for a plate.
    pub async fn find_latest_by_ppu(pool: &PgPool, ppu: &str) -> Result<Option<Soap>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM soap
             WHERE ppu = $1
             ORDER BY rige_hasta DESC, num_poliza DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Soap>(&query)
            .bind(ppu)
            .fetch_optional(pool)
            .await
    }
}
