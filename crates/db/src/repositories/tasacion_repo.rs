//! Repository for the `tasacion_fiscal` table.

use sqlx::PgPool;

use crate::models::tasacion::TasacionFiscal;

const COLUMNS: &str = "codigo_sii, tipo, anio, marca, modelo, version, combustible, cilindrada, \
                       potencia, marchas, transmision, traccion, puertas, pais, equipamiento, \
                       tasacion, num_ejes, valor_permiso";

pub struct TasacionRepo;

impl TasacionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &TasacionFiscal,
    ) -> Result<TasacionFiscal, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasacion_fiscal ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TasacionFiscal>(&query)
            .bind(&input.codigo_sii)
            .bind(&input.tipo)
            .bind(input.anio)
            .bind(&input.marca)
            .bind(&input.modelo)
            .bind(&input.version)
            .bind(&input.combustible)
            .bind(input.cilindrada)
            .bind(input.potencia)
            .bind(input.marchas)
            .bind(&input.transmision)
            .bind(&input.traccion)
            .bind(input.puertas)
            .bind(&input.pais)
            .bind(&input.equipamiento)
            .bind(input.tasacion)
            .bind(input.num_ejes)
            .bind(input.valor_permiso)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_codigo(
        pool: &PgPool,
        codigo_sii: &str,
    ) -> Result<Option<TasacionFiscal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasacion_fiscal WHERE codigo_sii = $1");
        sqlx::query_as::<_, TasacionFiscal>(&query)
            .bind(codigo_sii)
            .fetch_optional(pool)
            .await
    }
}
