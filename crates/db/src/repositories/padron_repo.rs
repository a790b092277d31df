//! Repository for the `padron` table.

use sqlx::PgPool;

use crate::models::padron::Padron;

const COLUMNS: &str = "ppu, rut, tipo_vehiculo, marca, modelo, anio, color, cilindrada, \
                       num_motor, num_chasis, fecha_inscripcion";

/// Provides queries for the vehicle registry.
pub struct PadronRepo;

impl PadronRepo {
    pub async fn create(pool: &PgPool, input: &Padron) -> Result<Padron, sqlx::Error> {
        let query = format!(
            "INSERT INTO padron ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Padron>(&query)
            .bind(&input.ppu)
            .bind(&input.rut)
            .bind(&input.tipo_vehiculo)
            .bind(&input.marca)
            .bind(&input.modelo)
            .bind(input.anio)
            .bind(&input.color)
            .bind(input.cilindrada)
            .bind(&input.num_motor)
            .bind(&input.num_chasis)
            .bind(input.fecha_inscripcion)
            .fetch_one(pool)
            .await
    }

    /// Every vehicle registered to an owner, oldest registration first.
    pub async fn list_by_rut(pool: &PgPool, rut: &str) -> Result<Vec<Padron>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM padron WHERE rut = $1 ORDER BY fecha_inscripcion, ppu"
        );
        sqlx::query_as::<_, Padron>(&query)
            .bind(rut)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_ppu(pool: &PgPool, ppu: &str) -> Result<Option<Padron>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM padron WHERE ppu = $1");
        sqlx::query_as::<_, Padron>(&query)
            .bind(ppu)
            .fetch_optional(pool)
            .await
    }
}
