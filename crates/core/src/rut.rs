//! Chilean RUT (Rol Único Tributario) parsing and check-digit validation.
//!
//! Accepted input: `12345678-5`, `12.345.678-5`, `1234567-4`, `10000013-k`.
//! The hyphen before the check digit is mandatory and surrounding whitespace
//! is rejected. Parsed values render in canonical form (`12345678-5`, no dots,
//! upper-case `K`), which is also how RUTs are stored.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Body digits followed by the check digit, once dots and hyphen are removed.
static RUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{7,8})([0-9K])$").expect("valid regex"));

/// Multipliers cycle 2..=7 starting from the rightmost body digit.
const FIRST_WEIGHT: u32 = 2;
const LAST_WEIGHT: u32 = 7;

/// A validated RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rut {
    body: u32,
    check_digit: char,
}

impl Rut {
    /// Parse and validate a RUT string.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        if input.is_empty() {
            return Err(CoreError::Validation("Debe ingresar un RUT.".into()));
        }
        if input.trim() != input || !input.contains('-') {
            return Err(invalid());
        }

        let compact = input.replace(['.', '-'], "").to_uppercase();
        let caps = RUT_RE.captures(&compact).ok_or_else(invalid)?;

        let body: u32 = caps[1].parse().map_err(|_| invalid())?;
        let given = caps[2].chars().next().ok_or_else(invalid)?;

        if check_digit(body) != given {
            return Err(invalid());
        }

        Ok(Self {
            body,
            check_digit: given,
        })
    }

    /// Returns `true` if the input is a well-formed RUT with a correct check digit.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn body(&self) -> u32 {
        self.body
    }

    pub fn check_digit(&self) -> char {
        self.check_digit
    }
}

fn invalid() -> CoreError {
    CoreError::Validation("RUT inválido o con formato incorrecto.".into())
}

/// Compute the mod-11 check digit for a RUT body.
///
/// `11 - (sum mod 11)`, where 11 maps to `0` and 10 maps to `K`.
pub fn check_digit(body: u32) -> char {
    let mut sum = 0;
    let mut weight = FIRST_WEIGHT;
    let mut rest = body;

    while rest > 0 {
        sum += (rest % 10) * weight;
        rest /= 10;
        weight = if weight == LAST_WEIGHT {
            FIRST_WEIGHT
        } else {
            weight + 1
        };
    }

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body, self.check_digit)
    }
}

impl FromStr for Rut {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn check_digit_known_values() {
        assert_eq!(check_digit(12_345_678), '5');
        assert_eq!(check_digit(11_111_111), '1');
        assert_eq!(check_digit(1_234_567), '4');
        assert_eq!(check_digit(10_000_013), 'K');
        assert_eq!(check_digit(10_000_004), '0');
    }

    #[test]
    fn parses_plain_and_dotted_forms() {
        let plain = Rut::parse("12345678-5").unwrap();
        let dotted = Rut::parse("12.345.678-5").unwrap();
        assert_eq!(plain, dotted);
        assert_eq!(plain.to_string(), "12345678-5");
    }

    #[test]
    fn lowercase_k_is_canonicalized() {
        let rut = Rut::parse("10000013-k").unwrap();
        assert_eq!(rut.check_digit(), 'K');
        assert_eq!(rut.to_string(), "10000013-K");
    }

    #[test]
    fn seven_digit_body_is_accepted() {
        assert!(Rut::is_valid("1234567-4"));
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        assert_matches!(Rut::parse("12345678-9"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn hyphen_is_mandatory() {
        assert!(!Rut::is_valid("123456785"));
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert!(!Rut::is_valid(" 12345678-5"));
        assert!(!Rut::is_valid("12345678-5 "));
    }

    #[test]
    fn empty_input_has_its_own_message() {
        let err = Rut::parse("").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Debe ingresar un RUT.");
    }

    #[test]
    fn too_short_or_long_bodies_are_rejected() {
        assert!(!Rut::is_valid("123456-0"));
        assert!(!Rut::is_valid("123456789-0"));
    }

    #[test]
    fn serde_round_trips_through_canonical_form() {
        let rut: Rut = serde_json::from_str("\"12.345.678-5\"").unwrap();
        assert_eq!(serde_json::to_string(&rut).unwrap(), "\"12345678-5\"");
        assert!(serde_json::from_str::<Rut>("\"12345678-0\"").is_err());
    }
}
