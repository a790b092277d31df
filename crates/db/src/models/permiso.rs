//! Circulation permits and portal credentials (TGR).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use tupermiso_core::types::{Clp, Date, DbId};

// ---------------------------------------------------------------------------
// Permiso de circulación
// ---------------------------------------------------------------------------

/// A row from the `permiso_circulacion` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermisoCirculacion {
    pub id: DbId,
    pub ppu: String,
    pub rut: String,
    pub nombre: String,
    pub fecha_emision: Date,
    pub fecha_expiracion: Date,
    pub valor_permiso: Clp,
    pub motor: i64,
    pub chasis: String,
    pub tipo_vehiculo: String,
    pub color: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub carga: i32,
    pub tipo_sello: String,
    pub combustible: String,
    pub cilindrada: i32,
    pub transmision: String,
    pub pts: i32,
    pub ast: i32,
    pub equipamiento: String,
    pub codigo_sii: String,
    pub tasacion: Clp,
}

/// DTO for issuing a permit. An `id` sent by the client is ignored.
///
/// Bounds mirror the `permiso_circulacion` columns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePermisoCirculacion {
    pub ppu: String,
    pub rut: String,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub fecha_emision: Date,
    pub fecha_expiracion: Date,
    #[validate(range(min = 0, message = "El valor del permiso no puede ser negativo"))]
    pub valor_permiso: Clp,
    pub motor: i64,
    #[validate(length(max = 50))]
    pub chasis: String,
    #[validate(length(max = 50))]
    pub tipo_vehiculo: String,
    #[validate(length(max = 50))]
    pub color: String,
    #[validate(length(max = 50))]
    pub marca: String,
    #[validate(length(max = 50))]
    pub modelo: String,
    pub anio: i32,
    pub carga: i32,
    #[validate(length(max = 50))]
    pub tipo_sello: String,
    #[validate(length(max = 50))]
    pub combustible: String,
    pub cilindrada: i32,
    #[validate(length(max = 50))]
    pub transmision: String,
    pub pts: i32,
    pub ast: i32,
    #[validate(length(max = 100))]
    pub equipamiento: String,
    #[validate(length(max = 20))]
    pub codigo_sii: String,
    pub tasacion: Clp,
}

// ---------------------------------------------------------------------------
// Credenciales
// ---------------------------------------------------------------------------

pub const ROL_USUARIO: &str = "usuario";
pub const ROL_ADMINISTRADOR: &str = "administrador";

/// A row from the `credenciales` table.
#[derive(Debug, Clone, FromRow)]
pub struct Credencial {
    pub id: DbId,
    pub rut: String,
    pub nombre: String,
    pub contrasena_hash: String,
    pub rol: String,
}

/// DTO for provisioning a credential. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateCredencial {
    pub rut: String,
    pub nombre: String,
    pub contrasena_hash: String,
    pub rol: String,
}
