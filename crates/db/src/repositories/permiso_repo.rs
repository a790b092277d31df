//! Repository for the `permiso_circulacion` table.

use sqlx::PgPool;
use tupermiso_core::types::DbId;

use crate::models::permiso::{CreatePermisoCirculacion, PermisoCirculacion};

const COLUMNS: &str = "id, ppu, rut, nombre, fecha_emision, fecha_expiracion, valor_permiso, \
                       motor, chasis, tipo_vehiculo, color, marca, modelo, anio, carga, \
                       tipo_sello, combustible, cilindrada, transmision, pts, ast, \
                       equipamiento, codigo_sii, tasacion";

/// Provides queries for circulation permits.
pub struct PermisoRepo;

impl PermisoRepo {
    /// Insert a permit. Fails with `uq_permiso_circulacion_ppu` if the plate
    /// already has one.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePermisoCirculacion,
    ) -> Result<PermisoCirculacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO permiso_circulacion
                 (ppu, rut, nombre, fecha_emision, fecha_expiracion, valor_permiso, motor,
                  chasis, tipo_vehiculo, color, marca, modelo, anio, carga, tipo_sello,
                  combustible, cilindrada, transmision, pts, ast, equipamiento, codigo_sii,
                  tasacion)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PermisoCirculacion>(&query)
            .bind(&input.ppu)
            .bind(&input.rut)
            .bind(&input.nombre)
            .bind(input.fecha_emision)
            .bind(input.fecha_expiracion)
            .bind(input.valor_permiso)
            .bind(input.motor)
            .bind(&input.chasis)
            .bind(&input.tipo_vehiculo)
            .bind(&input.color)
            .bind(&input.marca)
            .bind(&input.modelo)
            .bind(input.anio)
            .bind(input.carga)
            .bind(&input.tipo_sello)
            .bind(&input.combustible)
            .bind(input.cilindrada)
            .bind(&input.transmision)
            .bind(input.pts)
            .bind(input.ast)
            .bind(&input.equipamiento)
            .bind(&input.codigo_sii)
            .bind(input.tasacion)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_ppu(
        pool: &PgPool,
        ppu: &str,
    ) -> Result<Option<PermisoCirculacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permiso_circulacion WHERE ppu = $1");
        sqlx::query_as::<_, PermisoCirculacion>(&query)
            .bind(ppu)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PermisoCirculacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permiso_circulacion WHERE id = $1");
        sqlx::query_as::<_, PermisoCirculacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists_by_ppu(pool: &PgPool, ppu: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM permiso_circulacion WHERE ppu = $1)",
        )
        .bind(ppu)
        .fetch_one(pool)
        .await
    }

    /// Number of permits whose `fecha_emision` falls in `year`.
    pub async fn count_by_year(pool: &PgPool, year: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM permiso_circulacion
             WHERE EXTRACT(YEAR FROM fecha_emision)::INTEGER = $1",
        )
        .bind(year)
        .fetch_one(pool)
        .await
    }
}
