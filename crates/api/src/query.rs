//! Shared query parameter types for API handlers.
//!
//! Every field is optional so a missing parameter reaches the handler and is
//! reported with the same message as an empty one.

use serde::Deserialize;
use tupermiso_core::error::CoreError;
use tupermiso_core::ppu::validate_plate;
use tupermiso_core::rut::Rut;

/// `?ppu=`
#[derive(Debug, Deserialize)]
pub struct PpuQuery {
    pub ppu: Option<String>,
}

impl PpuQuery {
    /// The validated, upper-cased plate.
    pub fn plate(&self) -> Result<String, CoreError> {
        validate_plate(self.ppu.as_deref().unwrap_or_default())
    }
}

/// `?rut=`
#[derive(Debug, Deserialize)]
pub struct RutQuery {
    pub rut: Option<String>,
}

impl RutQuery {
    pub fn rut(&self) -> Result<Rut, CoreError> {
        Rut::parse(self.rut.as_deref().unwrap_or_default())
    }
}

/// `?codigo_sii=`
#[derive(Debug, Deserialize)]
pub struct CodigoSiiQuery {
    pub codigo_sii: Option<String>,
}

/// `?num_factura=`
#[derive(Debug, Deserialize)]
pub struct NumFacturaQuery {
    pub num_factura: Option<i64>,
}

/// `?num_chasis=`
#[derive(Debug, Deserialize)]
pub struct NumChasisQuery {
    pub num_chasis: Option<String>,
}
