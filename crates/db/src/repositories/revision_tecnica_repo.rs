//! Repository for the `revision_tecnica` table.

use sqlx::PgPool;

use crate::models::revision_tecnica::{CreateRevisionTecnica, RevisionTecnica, ESTADO_APROBADA};

const COLUMNS: &str = "id_rev_tecnica, ppu, fecha, codigo_planta, planta, nom_certificado, \
                       fecha_vencimiento, estado";

/// Provides queries for technical inspections.
pub struct RevisionTecnicaRepo;

impl RevisionTecnicaRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRevisionTecnica,
    ) -> Result<RevisionTecnica, sqlx::Error> {
        let query = format!(
            "INSERT INTO revision_tecnica
                 (ppu, fecha, codigo_planta, planta, nom_certificado, fecha_vencimiento, estado)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RevisionTecnica>(&query)
            .bind(&input.ppu)
            .bind(input.fecha)
            .bind(&input.codigo_planta)
            .bind(&input.planta)
            .bind(&input.nom_certificado)
            .bind(input.fecha_vencimiento)
            .bind(&input.estado)
            .fetch_one(pool)
            .await
    }

    /// The most recent approved inspection for a plate. Rejections are ignored.
    pub async fn find_latest_approved(
        pool: &PgPool,
        ppu: &str,
    ) -> Result<Option<RevisionTecnica>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM revision_tecnica
             WHERE ppu = $1 AND estado = $2
             ORDER BY fecha DESC, id_rev_tecnica DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, RevisionTecnica>(&query)
            .bind(ppu)
            .bind(ESTADO_APROBADA)
            .fetch_optional(pool)
            .await
    }
}
