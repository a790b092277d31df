//! Repository for the `mis_vehiculos` table.

use sqlx::PgPool;

use crate::models::mis_vehiculos::{CreateMiVehiculo, MiVehiculo};

const COLUMNS: &str = "id, rut, ppu, nombre_vehiculo, fecha_agregado";

pub struct MisVehiculosRepo;

impl MisVehiculosRepo {
    pub async fn create(pool: &PgPool, input: &CreateMiVehiculo) -> Result<MiVehiculo, sqlx::Error> {
        let query = format!(
            "INSERT INTO mis_vehiculos (rut, ppu, nombre_vehiculo, fecha_agregado)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MiVehiculo>(&query)
            .bind(&input.rut)
            .bind(&input.ppu)
            .bind(&input.nombre_vehiculo)
            .bind(input.fecha_agregado)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, rut: &str, ppu: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM mis_vehiculos WHERE rut = $1 AND ppu = $2)",
        )
        .bind(rut)
        .bind(ppu)
        .fetch_one(pool)
        .await
    }

    /// Saved vehicles for an owner, newest first.
    pub async fn list_by_rut(pool: &PgPool, rut: &str) -> Result<Vec<MiVehiculo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mis_vehiculos WHERE rut = $1 ORDER BY fecha_agregado DESC, id DESC"
        );
        sqlx::query_as::<_, MiVehiculo>(&query)
            .bind(rut)
            .fetch_all(pool)
            .await
    }
}
