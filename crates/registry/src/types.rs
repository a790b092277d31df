//! Wire shapes of the registry responses the aggregator reads.
//!
//! Only the fields `back` uses are typed; responses forwarded unchanged are
//! handled as [`serde_json::Value`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET /padron/vehiculo/{ppu}` and each item of `GET /padron/{rut}` (SRCEI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadronRecord {
    pub ppu: String,
    pub rut: String,
    pub tipo_vehiculo: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub color: String,
    pub cilindrada: i32,
    pub num_motor: String,
    pub num_chasis: String,
    pub fecha_inscripcion: NaiveDate,
}

/// `GET /consultar_permiso/{ppu}` and `GET /consultar_permiso_id/{id}` (TGR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermisoRecord {
    pub id: i64,
    pub ppu: String,
    pub rut: String,
    pub nombre: String,
    pub fecha_emision: NaiveDate,
    pub fecha_expiracion: NaiveDate,
    pub valor_permiso: i64,
    pub motor: i64,
    pub chasis: String,
    pub tipo_vehiculo: String,
    pub color: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub carga: i64,
    pub tipo_sello: String,
    pub combustible: String,
    pub cilindrada: i32,
    pub transmision: String,
    pub pts: i32,
    pub ast: i32,
    pub equipamiento: String,
    pub codigo_sii: String,
    pub tasacion: i64,
}

/// `GET /soap/{ppu}` (AACH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoapRecord {
    pub num_poliza: i64,
    pub ppu: String,
    pub compania: String,
    pub rige_desde: NaiveDate,
    pub rige_hasta: NaiveDate,
    pub prima: i64,
    pub vigencia: String,
}

/// `GET /encargo_patente/{ppu}` (Carabineros), without the row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncargoRecord {
    pub encargo: bool,
    pub patente_delantera: bool,
    pub patente_trasera: bool,
    pub vin: bool,
    pub motor: bool,
}

/// `GET /tasacion_fiscal?codigo_sii=` (SII).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasacionRecord {
    pub codigo_sii: String,
    pub combustible: String,
    pub tasacion: i64,
    pub valor_permiso: i64,
}

/// `GET /factura_venta_num_chasis?num_chasis=` (SII).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FacturaRecord {
    pub num_factura: i64,
    pub num_chasis: String,
    pub tipo_vehiculo: String,
    pub precio_neto: i64,
    pub combustible: String,
    pub carga: i64,
}
