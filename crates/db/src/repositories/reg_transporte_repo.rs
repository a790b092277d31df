//! Repository for the `reg_transporte` table.

use sqlx::PgPool;

use crate::models::reg_transporte::RegistroTransporte;

const COLUMNS: &str = "ppu, fecha_entrada_rnt, tipo_servicio, capacidad, estado_vehiculo, \
                       fecha_vencimiento_certificado, region, anio_fabricacion, \
                       cinturon_obligatorio, antiguedad_vehiculo, marca, modelo";

pub struct RegTransporteRepo;

impl RegTransporteRepo {
    pub async fn create(
        pool: &PgPool,
        input: &RegistroTransporte,
    ) -> Result<RegistroTransporte, sqlx::Error> {
        let query = format!(
            "INSERT INTO reg_transporte ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegistroTransporte>(&query)
            .bind(&input.ppu)
            .bind(input.fecha_entrada_rnt)
            .bind(&input.tipo_servicio)
            .bind(input.capacidad)
            .bind(&input.estado_vehiculo)
            .bind(input.fecha_vencimiento_certificado)
            .bind(input.region)
            .bind(input.anio_fabricacion)
            .bind(input.cinturon_obligatorio)
            .bind(input.antiguedad_vehiculo)
            .bind(&input.marca)
            .bind(&input.modelo)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_ppu(
        pool: &PgPool,
        ppu: &str,
    ) -> Result<Option<RegistroTransporte>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reg_transporte WHERE ppu = $1");
        sqlx::query_as::<_, RegistroTransporte>(&query)
            .bind(ppu)
            .fetch_optional(pool)
            .await
    }
}
