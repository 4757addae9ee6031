use serde::Deserialize;
use serde_json::Value;

use crate::types::{EstimatePoint, ExternalEstimate};

/// Result of validating an untrusted external estimate before it is merged into a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEstimate {
    // At least one point with a non-zero fee.
    Valid(Vec<EstimatePoint>),
    // Absent, null, or without usable points.
    Empty,
    // The payload did not have the expected shape.
    Malformed(String),
}

impl ParsedEstimate {
    pub fn from_estimate(estimate: Option<&ExternalEstimate>) -> Self {
        let Some(estimate) = estimate else {
            return ParsedEstimate::Empty;
        };

        // Zero fee observations carry no information about what it takes to confirm.
        let points: Vec<EstimatePoint> = estimate
            .fees
            .iter()
            .filter(|point| point.min_fee > 0)
            .copied()
            .collect();

        if points.is_empty() {
            ParsedEstimate::Empty
        } else {
            ParsedEstimate::Valid(points)
        }
    }

    pub fn from_json(value: Option<&Value>) -> Self {
        let value = match value {
            None | Some(Value::Null) => return ParsedEstimate::Empty,
            Some(value @ Value::Object(_)) => value,
            // serde would read a bare array positionally as `{ fees: [...] }`.
            Some(other) => {
                return ParsedEstimate::Malformed(format!(
                    "expected an object with a `fees` list, got {}",
                    other
                ))
            }
        };

        match ExternalEstimate::deserialize(value) {
            Ok(estimate) => ParsedEstimate::from_estimate(Some(&estimate)),
            Err(e) => ParsedEstimate::Malformed(e.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedEstimate::Valid(_))
    }
}

impl From<Option<&ExternalEstimate>> for ParsedEstimate {
    fn from(estimate: Option<&ExternalEstimate>) -> Self {
        ParsedEstimate::from_estimate(estimate)
    }
}
