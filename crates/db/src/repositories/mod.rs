//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod clave_unica_repo;
pub mod credencial_repo;
pub mod encargo_repo;
pub mod factura_repo;
pub mod log_repo;
pub mod metrics_repo;
pub mod mis_permisos_repo;
pub mod mis_vehiculos_repo;
pub mod multa_rpi_repo;
pub mod multa_transito_repo;
pub mod padron_repo;
pub mod permiso_repo;
pub mod reg_transporte_repo;
pub mod revision_tecnica_repo;
pub mod soap_repo;
pub mod tasacion_repo;
pub mod usuario_admin_repo;

pub use clave_unica_repo::ClaveUnicaRepo;
pub use credencial_repo::CredencialRepo;
pub use encargo_repo::EncargoRepo;
pub use factura_repo::FacturaRepo;
pub use log_repo::{LogConsultaRepo, LogFiscalizacionRepo};
pub use metrics_repo::MetricsRepo;
pub use mis_permisos_repo::MisPermisosRepo;
pub use mis_vehiculos_repo::MisVehiculosRepo;
pub use multa_rpi_repo::MultaRpiRepo;
pub use multa_transito_repo::MultaTransitoRepo;
pub use padron_repo::PadronRepo;
pub use permiso_repo::PermisoRepo;
pub use reg_transporte_repo::RegTransporteRepo;
pub use revision_tecnica_repo::RevisionTecnicaRepo;
pub use soap_repo::SoapRepo;
pub use tasacion_repo::TasacionRepo;
pub use usuario_admin_repo::UsuarioAdminRepo;
