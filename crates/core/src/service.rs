//! Catalogue of the services that make up TU PERMISO.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// One of the eight registry microservices, or the `back` aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Asociación de Aseguradores de Chile: SOAP policies.
    Aach,
    /// Stolen-vehicle reports.
    Carabineros,
    /// Ministerio de Transportes: passenger-transport register and RPI fines.
    Mtt,
    /// Plantas de Revisión Técnica: technical inspections.
    Prt,
    /// Secretaría de Gobierno Digital: Clave Única credentials.
    Sgd,
    /// Servicio de Impuestos Internos: fiscal appraisals and purchase invoices.
    Sii,
    /// Registro Civil: vehicle registry and traffic fines.
    Srcei,
    /// Tesorería General de la República: circulation permits.
    Tgr,
    /// Aggregator serving the web and mobile front ends.
    Back,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 9] = [
        Self::Aach,
        Self::Carabineros,
        Self::Mtt,
        Self::Prt,
        Self::Sgd,
        Self::Sii,
        Self::Srcei,
        Self::Tgr,
        Self::Back,
    ];

    /// The eight services `back` calls.
    pub const REGISTRIES: [ServiceKind; 8] = [
        Self::Aach,
        Self::Carabineros,
        Self::Mtt,
        Self::Prt,
        Self::Sgd,
        Self::Sii,
        Self::Srcei,
        Self::Tgr,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aach => "aach",
            Self::Carabineros => "carabineros",
            Self::Mtt => "mtt",
            Self::Prt => "prt",
            Self::Sgd => "sgd",
            Self::Sii => "sii",
            Self::Srcei => "srcei",
            Self::Tgr => "tgr",
            Self::Back => "back",
        }
    }

    /// Port used when running everything on one host.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Srcei => 5001,
            Self::Prt => 5002,
            Self::Aach => 5003,
            Self::Sgd => 5004,
            Self::Sii => 5005,
            Self::Carabineros => 5006,
            Self::Tgr => 5007,
            Self::Mtt => 5008,
            Self::Back => 8000,
        }
    }

    /// In-cluster DNS name of the service (`aach-api`, ...).
    pub fn k8s_host(&self) -> String {
        format!("{}-api", self.name())
    }

    /// Message returned by `GET /`.
    pub fn greeting(&self) -> &'static str {
        match self {
            Self::Aach => "API AACH - Seguro Obligatorio de Accidentes Personales",
            Self::Carabineros => "API de Carabineros - Encargos por Robo",
            Self::Mtt => "API MTT - Registro de Pasajeros Infractores",
            Self::Prt => "API de Revisión Técnica (PRT)",
            Self::Sgd => "API de la Secretaría de Gobierno Digital",
            Self::Sii => "API SII - Tasación Fiscal y Factura Venta",
            Self::Srcei => "API de SRCEI",
            Self::Tgr => "API de la Tesorería General de la República",
            Self::Back => "API TU PERMISO",
        }
    }

    /// Services that sign bearer tokens and therefore need `JWT_SECRET`.
    pub fn issues_tokens(&self) -> bool {
        matches!(self, Self::Tgr | Self::Back)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| CoreError::Validation(format!("Unknown service: {s}")))
    }
}
