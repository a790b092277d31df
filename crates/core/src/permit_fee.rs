//! Circulation permit fee ("permiso de circulación") calculation.
//!
//! The fee is a marginal tax on the vehicle value expressed in UTM, with
//! fixed-rate overrides for cargo, agricultural and light vehicles and a
//! discount for electric and hybrid vehicles.

use serde::{Deserialize, Serialize};

use crate::types::Clp;

/// Value of one UTM in pesos.
pub const UTM_CLP: i64 = 67_429;

/// Marginal brackets as `(upper bound in UTM, rate)`. The last bracket is open.
const BRACKETS: [(f64, f64); 5] = [
    (60.0, 0.01),
    (120.0, 0.02),
    (250.0, 0.03),
    (400.0, 0.04),
    (f64::INFINITY, 0.045),
];

/// Loads at or below this weight (kg) never pay a cargo fixed rate.
const LIGHT_LOAD_KG: i64 = 1_750;
const MEDIUM_LOAD_KG: i64 = 5_000;
const HEAVY_LOAD_KG: i64 = 10_000;

/// Fuel types that pay a quarter of the computed fee.
const DISCOUNTED_FUELS: [&str; 2] = ["Eléctrico", "Híbrido"];

/// Compute the bracket-based permit fee for a vehicle valued at `vehicle_value` pesos.
///
/// The result is truncated to whole pesos. Non-positive values pay nothing.
pub fn calculate_permit_fee(vehicle_value: Clp) -> Clp {
    if vehicle_value <= 0 {
        return 0;
    }

    let value_utm = vehicle_value as f64 / UTM_CLP as f64;
    let mut fee_utm = 0.0;
    let mut lower = 0.0;

    for (upper, rate) in BRACKETS {
        if value_utm <= lower {
            break;
        }
        fee_utm += (value_utm.min(upper) - lower) * rate;
        lower = upper;
    }

    (fee_utm * UTM_CLP as f64) as Clp
}

/// Fixed-rate fee for a vehicle type and load capacity, or 0 if none applies.
pub fn fixed_rate_fee(tipo_vehiculo: &str, carga_kg: i64) -> Clp {
    if tipo_vehiculo == "Camión"
        || tipo_vehiculo.starts_with("Remolque")
        || tipo_vehiculo.starts_with("Carro")
    {
        return load_tier_fee(carga_kg, [1.0, 2.0, 3.0]);
    }
    if tipo_vehiculo == "Tracto Camión" || tipo_vehiculo.starts_with("Semirremolque") {
        return load_tier_fee(carga_kg, [0.5, 1.0, 1.5]);
    }
    if tipo_vehiculo.starts_with("Tractor")
        || tipo_vehiculo.starts_with("Industrial")
        || tipo_vehiculo.starts_with("Maquinaria")
    {
        return utm_to_clp(0.5);
    }
    if tipo_vehiculo.starts_with("Bici")
        || tipo_vehiculo.starts_with("Triciclo")
        || tipo_vehiculo.contains("Scooter")
    {
        return utm_to_clp(0.2);
    }
    0
}

fn load_tier_fee(carga_kg: i64, tiers_utm: [f64; 3]) -> Clp {
    let utm = match carga_kg {
        c if c <= LIGHT_LOAD_KG => return 0,
        c if c <= MEDIUM_LOAD_KG => tiers_utm[0],
        c if c <= HEAVY_LOAD_KG => tiers_utm[1],
        _ => tiers_utm[2],
    };
    utm_to_clp(utm)
}

fn utm_to_clp(utm: f64) -> Clp {
    (utm * UTM_CLP as f64) as Clp
}

/// Electric and hybrid vehicles pay 25% of `fee`, truncated.
pub fn apply_fuel_discount(fee: Clp, combustible: &str) -> Clp {
    if DISCOUNTED_FUELS.contains(&combustible) {
        fee / 4
    } else {
        fee
    }
}

/// Where the inputs for a fee calculation come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeeSource {
    /// The vehicle already has a permit; the SII appraisal carries the base fee.
    Renewal {
        tipo_vehiculo: String,
        carga: i64,
        sii_valor_permiso: Clp,
        combustible: String,
    },
    /// No previous permit; the purchase invoice's net price is taxed.
    FirstIssue {
        tipo_vehiculo: String,
        carga: i64,
        precio_neto: Clp,
        combustible: String,
    },
}

/// Resolve the permit fee to charge.
///
/// A non-zero fixed rate wins outright and is never discounted.
pub fn resolve_permit_fee(source: &FeeSource) -> Clp {
    match source {
        FeeSource::Renewal {
            tipo_vehiculo,
            carga,
            sii_valor_permiso,
            combustible,
        } => match fixed_rate_fee(tipo_vehiculo, *carga) {
            0 => apply_fuel_discount(*sii_valor_permiso, combustible),
            fixed => fixed,
        },
        FeeSource::FirstIssue {
            tipo_vehiculo,
            carga,
            precio_neto,
            combustible,
        } => match fixed_rate_fee(tipo_vehiculo, *carga) {
            0 => apply_fuel_discount(calculate_permit_fee(*precio_neto), combustible),
            fixed => fixed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_pays_nothing() {
        assert_eq!(calculate_permit_fee(0), 0);
        assert_eq!(calculate_permit_fee(-5), 0);
    }

    #[test]
    fn first_bracket_is_one_percent() {
        // Exactly 60 UTM.
        assert_eq!(calculate_permit_fee(60 * UTM_CLP), 40_457);
    }

    #[test]
    fn third_bracket_accumulates_lower_brackets() {
        // 0.6 + 1.2 UTM from the first two brackets, 3% on the excess over 120 UTM.
        assert_eq!(calculate_permit_fee(10_000_000), 178_627);
    }

    #[test]
    fn top_bracket_applies_above_400_utm() {
        assert_eq!(calculate_permit_fee(30_000_000), 925_197);
    }

    #[test]
    fn truck_load_tiers() {
        assert_eq!(fixed_rate_fee("Camión", 1_750), 0);
        assert_eq!(fixed_rate_fee("Camión", 1_751), UTM_CLP);
        assert_eq!(fixed_rate_fee("Camión", 5_000), UTM_CLP);
        assert_eq!(fixed_rate_fee("Camión", 10_000), 2 * UTM_CLP);
        assert_eq!(fixed_rate_fee("Camión", 10_001), 3 * UTM_CLP);
        assert_eq!(fixed_rate_fee("Remolque Plano", 6_000), 2 * UTM_CLP);
        assert_eq!(fixed_rate_fee("Carro de arrastre", 12_000), 3 * UTM_CLP);
    }

    #[test]
    fn tractor_trailer_pays_half_rates() {
        assert_eq!(fixed_rate_fee("Tracto Camión", 3_000), 33_714);
        assert_eq!(fixed_rate_fee("Semirremolque", 8_000), UTM_CLP);
        assert_eq!(fixed_rate_fee("Semirremolque Cama Baja", 20_000), 101_143);
        assert_eq!(fixed_rate_fee("Tracto Camión", 1_000), 0);
    }

    #[test]
    fn machinery_and_light_vehicles() {
        assert_eq!(fixed_rate_fee("Tractor Agrícola", 0), 33_714);
        assert_eq!(fixed_rate_fee("Maquinaria Industrial", 0), 33_714);
        assert_eq!(fixed_rate_fee("Bicimoto", 0), 13_485);
        assert_eq!(fixed_rate_fee("Triciclo", 0), 13_485);
        assert_eq!(fixed_rate_fee("Scooter Eléctrico", 0), 13_485);
        assert_eq!(fixed_rate_fee("Moto Scooter", 0), 13_485);
        assert_eq!(fixed_rate_fee("Automóvil", 20_000), 0);
    }

    #[test]
    fn fuel_discount_applies_to_electric_and_hybrid_only() {
        assert_eq!(apply_fuel_discount(100_001, "Eléctrico"), 25_000);
        assert_eq!(apply_fuel_discount(100_000, "Híbrido"), 25_000);
        assert_eq!(apply_fuel_discount(100_000, "Gasolina"), 100_000);
        assert_eq!(apply_fuel_discount(100_000, "electrico"), 100_000);
    }

    #[test]
    fn renewal_uses_sii_value_with_discount() {
        let source = FeeSource::Renewal {
            tipo_vehiculo: "Automóvil".into(),
            carga: 0,
            sii_valor_permiso: 200_000,
            combustible: "Híbrido".into(),
        };
        assert_eq!(resolve_permit_fee(&source), 50_000);
    }

    #[test]
    fn fixed_rate_skips_discount() {
        let source = FeeSource::Renewal {
            tipo_vehiculo: "Camión".into(),
            carga: 4_000,
            sii_valor_permiso: 500_000,
            combustible: "Eléctrico".into(),
        };
        assert_eq!(resolve_permit_fee(&source), UTM_CLP);
    }

    #[test]
    fn first_issue_taxes_net_price() {
        let source = FeeSource::FirstIssue {
            tipo_vehiculo: "Automóvil".into(),
            carga: 0,
            precio_neto: 10_000_000,
            combustible: "Gasolina".into(),
        };
        assert_eq!(resolve_permit_fee(&source), 178_627);
    }
}
