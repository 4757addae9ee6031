use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    amounts::deserialize_sats,
    constants::{
        DEFAULT_HIGH_FEE_MAX_DELAY, DEFAULT_HIGH_FEE_MAX_MINUTES, DEFAULT_LOW_FEE_MAX_DELAY,
        DEFAULT_LOW_FEE_MAX_MINUTES, DEFAULT_STANDARD_FEE_HIGH_MAX_DELAY,
        DEFAULT_STANDARD_FEE_HIGH_MAX_MINUTES, DEFAULT_STANDARD_FEE_LOW_MAX_DELAY,
        DEFAULT_STANDARD_FEE_LOW_MAX_MINUTES,
    },
    errors::FeeError,
};

/// Tiered fee configuration.
///
/// Rates are in sat/byte, amounts in satoshis. A `FeeSchedule` can only be built through
/// [`FeeSchedule::new`] (or deserialized, which goes through the same checks), so
/// every value upholds:
/// - `low_fee <= standard_fee_low <= standard_fee_high <= high_fee`
/// - `standard_fee_low_amount <= standard_fee_high_amount`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "FeeScheduleFields")]
pub struct FeeSchedule {
    low_fee: u64,
    standard_fee_low: u64,
    standard_fee_high: u64,
    high_fee: u64,
    standard_fee_low_amount: u64,
    standard_fee_high_amount: u64,
}

impl FeeSchedule {
    pub fn new(
        low_fee: u64,
        standard_fee_low: u64,
        standard_fee_high: u64,
        high_fee: u64,
        standard_fee_low_amount: u64,
        standard_fee_high_amount: u64,
    ) -> Result<Self, FeeError> {
        if !(low_fee <= standard_fee_low
            && standard_fee_low <= standard_fee_high
            && standard_fee_high <= high_fee)
        {
            return Err(FeeError::InvalidArgument(format!(
                "fee rates must be non-decreasing, got low {low_fee}, standard {standard_fee_low}..{standard_fee_high}, high {high_fee}"
            )));
        }

        if standard_fee_low_amount > standard_fee_high_amount {
            return Err(FeeError::InvalidArgument(format!(
                "standard fee band is inverted: {standard_fee_low_amount} > {standard_fee_high_amount}"
            )));
        }

        Ok(Self {
            low_fee,
            standard_fee_low,
            standard_fee_high,
            high_fee,
            standard_fee_low_amount,
            standard_fee_high_amount,
        })
    }

    pub fn low_fee(&self) -> u64 {
        self.low_fee
    }

    pub fn standard_fee_low(&self) -> u64 {
        self.standard_fee_low
    }

    pub fn standard_fee_high(&self) -> u64 {
        self.standard_fee_high
    }

    pub fn high_fee(&self) -> u64 {
        self.high_fee
    }

    pub fn standard_fee_low_amount(&self) -> u64 {
        self.standard_fee_low_amount
    }

    pub fn standard_fee_high_amount(&self) -> u64 {
        self.standard_fee_high_amount
    }

    /// Returns the four per-byte rates in tier order: low, standard low, standard high, high.
    pub fn rates(&self) -> [u64; 4] {
        [
            self.low_fee,
            self.standard_fee_low,
            self.standard_fee_high,
            self.high_fee,
        ]
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "low {} | standard {}..{} (for {}..{} sats) | high {} sat/byte",
            self.low_fee,
            self.standard_fee_low,
            self.standard_fee_high,
            self.standard_fee_low_amount,
            self.standard_fee_high_amount,
            self.high_fee
        )
    }
}

// Wire shape of a schedule. Values may come as integers or decimal strings, and the
// legacy camelCase names are still accepted.
#[derive(Deserialize)]
struct FeeScheduleFields {
    #[serde(alias = "lowFee", deserialize_with = "deserialize_sats")]
    low_fee: u64,
    #[serde(alias = "standardFeeLow", deserialize_with = "deserialize_sats")]
    standard_fee_low: u64,
    #[serde(alias = "standardFeeHigh", deserialize_with = "deserialize_sats")]
    standard_fee_high: u64,
    #[serde(alias = "highFee", deserialize_with = "deserialize_sats")]
    high_fee: u64,
    #[serde(alias = "standardFeeLowAmount", deserialize_with = "deserialize_sats")]
    standard_fee_low_amount: u64,
    #[serde(alias = "standardFeeHighAmount", deserialize_with = "deserialize_sats")]
    standard_fee_high_amount: u64,
}

impl TryFrom<FeeScheduleFields> for FeeSchedule {
    type Error = FeeError;

    fn try_from(fields: FeeScheduleFields) -> Result<Self, Self::Error> {
        FeeSchedule::new(
            fields.low_fee,
            fields.standard_fee_low,
            fields.standard_fee_high,
            fields.high_fee,
            fields.standard_fee_low_amount,
            fields.standard_fee_high_amount,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeePolicy {
    // Cheapest rate, slowest confirmation.
    Low,
    // Rate interpolated over the standard band according to the transaction amount.
    Standard,
    // Fastest confirmation.
    High,
    // Caller supplied rate.
    Custom,
}

impl FromStr for FeePolicy {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(FeePolicy::Low),
            "standard" => Ok(FeePolicy::Standard),
            "high" => Ok(FeePolicy::High),
            "custom" => Ok(FeePolicy::Custom),
            _ => Err(FeeError::InvalidArgument(format!("unknown fee policy '{s}'"))),
        }
    }
}

impl fmt::Display for FeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FeePolicy::Low => "low",
                FeePolicy::Standard => "standard",
                FeePolicy::High => "high",
                FeePolicy::Custom => "custom",
            }
        )
    }
}

/// A single observation from an external fee estimator.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EstimatePoint {
    // sat/byte that was enough to confirm within the delays below
    #[serde(deserialize_with = "deserialize_sats")]
    pub min_fee: u64,
    // worst case delay in blocks
    pub max_delay: u32,
    // worst case delay in minutes
    pub max_minutes: u32,
}

impl EstimatePoint {
    pub fn new(min_fee: u64, max_delay: u32, max_minutes: u32) -> Self {
        Self {
            min_fee,
            max_delay,
            max_minutes,
        }
    }
}

/// Raw external fee estimate, as handed over by whatever component fetched it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalEstimate {
    #[serde(default)]
    pub fees: Vec<EstimatePoint>,
}

impl ExternalEstimate {
    pub fn new(fees: Vec<EstimatePoint>) -> Self {
        Self { fees }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfirmationTarget {
    pub max_delay: u32,
    pub max_minutes: u32,
}

impl ConfirmationTarget {
    pub fn new(max_delay: u32, max_minutes: u32) -> Self {
        Self {
            max_delay,
            max_minutes,
        }
    }

    pub fn accepts(&self, point: &EstimatePoint) -> bool {
        point.max_delay <= self.max_delay && point.max_minutes <= self.max_minutes
    }

    fn within(&self, other: &ConfirmationTarget) -> bool {
        self.max_delay <= other.max_delay && self.max_minutes <= other.max_minutes
    }
}

/// Confirmation targets used to map estimate points onto the four fee tiers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfirmationTargets {
    pub low_fee: ConfirmationTarget,
    pub standard_fee_low: ConfirmationTarget,
    pub standard_fee_high: ConfirmationTarget,
    pub high_fee: ConfirmationTarget,
}

impl ConfirmationTargets {
    /// Targets in tier order: low, standard low, standard high, high.
    pub fn tiers(&self) -> [ConfirmationTarget; 4] {
        [
            self.low_fee,
            self.standard_fee_low,
            self.standard_fee_high,
            self.high_fee,
        ]
    }

    /// Each tier must be at least as strict as the one before it.
    pub fn validate(&self) -> Result<(), FeeError> {
        let tiers = self.tiers();

        for pair in tiers.windows(2) {
            if !pair[1].within(&pair[0]) {
                return Err(FeeError::InvalidArgument(format!(
                    "confirmation targets must tighten from low to high fee, {:?} is looser than {:?}",
                    pair[1], pair[0]
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfirmationTargets {
    fn default() -> Self {
        Self {
            low_fee: ConfirmationTarget::new(
                DEFAULT_LOW_FEE_MAX_DELAY,
                DEFAULT_LOW_FEE_MAX_MINUTES,
            ),
            standard_fee_low: ConfirmationTarget::new(
                DEFAULT_STANDARD_FEE_LOW_MAX_DELAY,
                DEFAULT_STANDARD_FEE_LOW_MAX_MINUTES,
            ),
            standard_fee_high: ConfirmationTarget::new(
                DEFAULT_STANDARD_FEE_HIGH_MAX_DELAY,
                DEFAULT_STANDARD_FEE_HIGH_MAX_MINUTES,
            ),
            high_fee: ConfirmationTarget::new(
                DEFAULT_HIGH_FEE_MAX_DELAY,
                DEFAULT_HIGH_FEE_MAX_MINUTES,
            ),
        }
    }
}
