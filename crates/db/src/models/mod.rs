//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Modules are grouped by the service that owns the table.

pub mod admin;
pub mod clave_unica;
pub mod encargo;
pub mod factura;
pub mod logs;
pub mod metrics;
pub mod mis_permisos;
pub mod mis_vehiculos;
pub mod multa_rpi;
pub mod multa_transito;
pub mod padron;
pub mod permiso;
pub mod reg_transporte;
pub mod revision_tecnica;
pub mod soap;
pub mod tasacion;
