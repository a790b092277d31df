//! Document validity ("vigencia") at a given date.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Validity label attached to SOAP policies, technical inspections and permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vigencia {
    #[serde(rename = "Vigente")]
    Vigente,
    #[serde(rename = "No Vigente")]
    NoVigente,
}

impl Vigencia {
    /// A document is valid through its expiry date inclusive.
    pub fn from_expiry(expiry: NaiveDate, today: NaiveDate) -> Self {
        if is_current(expiry, today) {
            Self::Vigente
        } else {
            Self::NoVigente
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vigente => "Vigente",
            Self::NoVigente => "No Vigente",
        }
    }
}

/// `true` while `expiry` has not passed.
pub fn is_current(expiry: NaiveDate, today: NaiveDate) -> bool {
    expiry >= today
}

/// Permit status of a vehicle listed for an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Vigente,
    Vencido,
    SinPermiso,
    /// The permit lookup itself failed.
    Desconocido,
}

impl VehicleStatus {
    pub fn from_permit_expiry(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expiry {
            Some(date) if is_current(date, today) => Self::Vigente,
            Some(_) => Self::Vencido,
            None => Self::SinPermiso,
        }
    }
}

/// Traffic-fine standing of a plate: clean (`vigente`) or with pending fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinesStatus {
    #[serde(rename = "vigente")]
    Vigente,
    #[serde(rename = "no vigente")]
    NoVigente,
}

impl FinesStatus {
    pub fn from_count(total_fines: usize) -> Self {
        if total_fines == 0 {
            Self::Vigente
        } else {
            Self::NoVigente
        }
    }
}

/// Today's date in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
