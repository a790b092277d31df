//! PPU (Placa Patente Única) normalization and format validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

static VEHICULO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}\d{2}$").expect("valid regex"));
static VEHICULO_ANTIGUO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{4}$").expect("valid regex"));
static MOTO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}\d{2}$").expect("valid regex"));
static MOTO_ANTIGUA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{3}$").expect("valid regex"));

/// Plate formats issued in Chile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateKind {
    /// Four letters and two digits (`BBBB12`), issued since 2007.
    Vehiculo,
    /// Two letters and four digits (`AB1234`).
    VehiculoAntiguo,
    /// Three letters and two digits (`BBB12`).
    Moto,
    /// Two letters and three digits (`AB123`).
    MotoAntigua,
}

/// Trim and upper-case a plate. Does not validate.
pub fn normalize_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Detect the plate format of an already-normalized plate.
pub fn detect_plate_kind(plate: &str) -> Option<PlateKind> {
    if VEHICULO_RE.is_match(plate) {
        Some(PlateKind::Vehiculo)
    } else if VEHICULO_ANTIGUO_RE.is_match(plate) {
        Some(PlateKind::VehiculoAntiguo)
    } else if MOTO_RE.is_match(plate) {
        Some(PlateKind::Moto)
    } else if MOTO_ANTIGUA_RE.is_match(plate) {
        Some(PlateKind::MotoAntigua)
    } else {
        None
    }
}

/// Validate a PPU received from a client and return its normalized form.
///
/// Lower-case input is accepted; separators, spaces and any other
/// non-alphanumeric characters are not.
pub fn validate_plate(raw: &str) -> Result<String, CoreError> {
    if raw.is_empty() {
        return Err(CoreError::Validation("Debe ingresar un PPU.".into()));
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::Validation(
            "PPU no puede contener caracteres especiales o espacios".into(),
        ));
    }

    let plate = normalize_plate(raw);
    match detect_plate_kind(&plate) {
        Some(_) => Ok(plate),
        None => Err(CoreError::Validation(format!(
            "Formato de PPU inválido: {raw}"
        ))),
    }
}

/// Returns `true` if `raw` is an acceptable PPU.
pub fn is_valid_plate(raw: &str) -> bool {
    validate_plate(raw).is_ok()
}
