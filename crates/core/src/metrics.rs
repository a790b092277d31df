//! Dashboard metric windows: which log to aggregate, how to bucket it, and
//! over which date range.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which dashboard the metrics feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsScope {
    /// Roadside inspections (`log_fiscalizacion`).
    Fiscalizacion,
    /// Owner lookups (`log_consultas_propietarios`).
    Consultas,
    /// Issued permits (`mis_permisos_emitidos`).
    Permisos,
}

impl MetricsScope {
    pub const ALL: [MetricsScope; 3] = [Self::Fiscalizacion, Self::Consultas, Self::Permisos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiscalizacion => "fiscalizacion",
            Self::Consultas => "consultas",
            Self::Permisos => "permisos",
        }
    }
}

impl fmt::Display for MetricsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricsScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(
                    "Scope inválido. Debe ser uno de: fiscalizacion, consultas, permisos".into(),
                )
            })
    }
}

/// Bucket size for time-series charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodType {
    #[serde(rename = "DIA")]
    Dia,
    #[serde(rename = "MES")]
    Mes,
    #[serde(rename = "AÑO", alias = "ANIO")]
    Anio,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dia => "DIA",
            Self::Mes => "MES",
            Self::Anio => "AÑO",
        }
    }

    /// PostgreSQL `to_char` pattern producing the bucket label.
    pub fn sql_format(&self) -> &'static str {
        match self {
            Self::Dia => "YYYY-MM-DD",
            Self::Mes => "YYYY-MM",
            Self::Anio => "YYYY",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIA" => Ok(Self::Dia),
            "MES" => Ok(Self::Mes),
            "AÑO" | "ANIO" => Ok(Self::Anio),
            _ => Err(CoreError::Validation(
                "Period type inválido. Debe ser uno de: DIA, MES, AÑO".into(),
            )),
        }
    }
}

/// A validated metrics request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsWindow {
    pub scope: MetricsScope,
    pub period: PeriodType,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl MetricsWindow {
    /// Parse the raw request parameters. Both dates are inclusive.
    pub fn new(scope: &str, period: &str, from: &str, to: &str) -> Result<Self, CoreError> {
        let scope = scope.parse()?;
        let period = period.parse()?;
        let from = parse_date(from)?;
        let to = parse_date(to)?;

        if from > to {
            return Err(CoreError::Validation(
                "La fecha de inicio no puede ser mayor que la fecha de fin".into(),
            ));
        }

        Ok(Self {
            scope,
            period,
            from,
            to,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(format!(
            "Formato de fecha inválido: {raw}. Use YYYY-MM-DD"
        ))
    })
}

/// `part / total` as a percentage rounded to one decimal; 0 when `total` is 0.
pub fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}
