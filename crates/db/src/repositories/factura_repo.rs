//! Repository for the `factura_compra` table.

use sqlx::PgPool;

use crate::models::factura::FacturaCompra;

const COLUMNS: &str = "num_factura, num_chasis, tipo_vehiculo, precio_neto, puertas, asientos, \
                       combustible, peso, transmision, traccion, cilindrada, carga, tipo_sello";

pub struct FacturaRepo;

impl FacturaRepo {
    pub async fn create(pool: &PgPool, input: &FacturaCompra) -> Result<FacturaCompra, sqlx::Error> {
        let query = format!(
            "INSERT INTO factura_compra ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FacturaCompra>(&query)
            .bind(input.num_factura)
            .bind(&input.num_chasis)
            .bind(&input.tipo_vehiculo)
            .bind(input.precio_neto)
            .bind(input.puertas)
            .bind(input.asientos)
            .bind(&input.combustible)
            .bind(&input.peso)
            .bind(&input.transmision)
            .bind(&input.traccion)
            .bind(input.cilindrada)
            .bind(input.carga)
            .bind(&input.tipo_sello)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_numero(
        pool: &PgPool,
        num_factura: i64,
    ) -> Result<Option<FacturaCompra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM factura_compra WHERE num_factura = $1");
        sqlx::query_as::<_, FacturaCompra>(&query)
            .bind(num_factura)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_chasis(
        pool: &PgPool,
        num_chasis: &str,
    ) -> Result<Option<FacturaCompra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM factura_compra WHERE num_chasis = $1");
        sqlx::query_as::<_, FacturaCompra>(&query)
            .bind(num_chasis)
            .fetch_optional(pool)
            .await
    }
}
