//! Vehicles bookmarked by an owner (back).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use tupermiso_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MiVehiculo {
    pub id: DbId,
    pub rut: String,
    pub ppu: String,
    pub nombre_vehiculo: String,
    pub fecha_agregado: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMiVehiculo {
    pub rut: String,
    pub ppu: String,
    #[validate(length(min = 1, max = 100, message = "El nombre del vehículo debe tener entre 1 y 100 caracteres"))]
    pub nombre_vehiculo: String,
    pub fecha_agregado: Timestamp,
}
