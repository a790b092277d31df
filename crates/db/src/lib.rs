//! PostgreSQL persistence for the TU PERMISO services.
//!
//! Every service owns its own database. The schema for each lives under
//! `migrations/<service>/` and is applied by [`run_migrations`] for the
//! service the process is running.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tupermiso_core::service::ServiceKind;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

static AACH: Migrator = sqlx::migrate!("./migrations/aach");
static CARABINEROS: Migrator = sqlx::migrate!("./migrations/carabineros");
static MTT: Migrator = sqlx::migrate!("./migrations/mtt");
static PRT: Migrator = sqlx::migrate!("./migrations/prt");
static SGD: Migrator = sqlx::migrate!("./migrations/sgd");
static SII: Migrator = sqlx::migrate!("./migrations/sii");
static SRCEI: Migrator = sqlx::migrate!("./migrations/srcei");
static TGR: Migrator = sqlx::migrate!("./migrations/tgr");
static BACK: Migrator = sqlx::migrate!("./migrations/back");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// The migration set owned by `service`.
pub fn migrator(service: ServiceKind) -> &'static Migrator {
    match service {
        ServiceKind::Aach => &AACH,
        ServiceKind::Carabineros => &CARABINEROS,
        ServiceKind::Mtt => &MTT,
        ServiceKind::Prt => &PRT,
        ServiceKind::Sgd => &SGD,
        ServiceKind::Sii => &SII,
        ServiceKind::Srcei => &SRCEI,
        ServiceKind::Tgr => &TGR,
        ServiceKind::Back => &BACK,
    }
}

/// Apply all pending migrations for `service`.
pub async fn run_migrations(pool: &DbPool, service: ServiceKind) -> Result<(), MigrateError> {
    let migrator = migrator(service);
    tracing::debug!(service = %service, count = migrator.iter().count(), "Applying migrations");
    migrator.run(pool).await
}
