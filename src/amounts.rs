use std::fmt;

use serde::de::{self, Deserializer, Visitor};

use crate::errors::FeeError;

/// Parses a non-negative integer (satoshis or sat/byte) from its decimal string form.
///
/// Signs, decimal points, exponents and non-finite spellings such as `NaN` are rejected,
/// so a fee or amount can never silently turn negative or fractional.
pub fn parse_sats(value: &str) -> Result<u64, FeeError> {
    let digits = value.trim();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FeeError::InvalidArgument(format!(
            "'{value}' is not a non-negative integer"
        )));
    }

    digits
        .parse::<u64>()
        .map_err(|e| FeeError::InvalidArgument(format!("'{value}' is out of range: {e}")))
}

/// Serde helper accepting either an integer or a decimal digit string.
pub fn deserialize_sats<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SatsVisitor)
}

struct SatsVisitor;

impl Visitor<'_> for SatsVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a decimal digit string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value).map_err(|_| E::custom(format!("negative value {value}")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u64, E> {
        // Integral floats show up in some estimator payloads, e.g. `12.0`.
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
            Ok(value as u64)
        } else {
            Err(E::custom(format!("{value} is not a non-negative integer")))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
        parse_sats(value).map_err(E::custom)
    }
}
