use tracing::{info, warn};

use crate::{
    config::Config,
    errors::{ConfigError, FeeError},
    estimate::ParsedEstimate,
    reconciler::reconcile,
    selector::select_rate,
    types::{ConfirmationTargets, ExternalEstimate, FeePolicy, FeeSchedule},
};

/// Provider of the latest external fee estimate. Fetching, retries and caching live behind
/// this trait; `Ok(None)` means there is nothing newer than the baseline.
pub trait FeeEstimateSource {
    fn fetch_estimate(&self) -> Result<Option<ExternalEstimate>, FeeError>;
}

/// Serves an estimate that was obtained elsewhere, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticFeeEstimateSource(Option<ExternalEstimate>);

impl StaticFeeEstimateSource {
    pub fn new(estimate: Option<ExternalEstimate>) -> Self {
        StaticFeeEstimateSource(estimate)
    }
}

impl FeeEstimateSource for StaticFeeEstimateSource {
    fn fetch_estimate(&self) -> Result<Option<ExternalEstimate>, FeeError> {
        Ok(self.0.clone())
    }
}

pub trait MiningFeesApi {
    /// Baseline schedule refreshed with the current external estimate.
    fn schedule(&self) -> FeeSchedule;

    fn fee_per_byte(
        &self,
        native_amount: u64,
        policy: FeePolicy,
        custom_rate: Option<u64>,
    ) -> Result<u64, FeeError>;
}

pub struct MiningFees<S>
where
    S: FeeEstimateSource,
{
    baseline: FeeSchedule,
    targets: ConfirmationTargets,
    source: S,
}

impl<S> MiningFees<S>
where
    S: FeeEstimateSource,
{
    pub fn new(
        baseline: FeeSchedule,
        targets: ConfirmationTargets,
        source: S,
    ) -> Result<Self, FeeError> {
        targets.validate()?;

        Ok(Self {
            baseline,
            targets,
            source,
        })
    }

    pub fn from_config(config: &Config, source: S) -> Result<Self, ConfigError> {
        let mining_fees = MiningFees::new(config.baseline, config.targets(), source)?;
        Ok(mining_fees)
    }

    pub fn baseline(&self) -> &FeeSchedule {
        &self.baseline
    }
}

impl<S> MiningFeesApi for MiningFees<S>
where
    S: FeeEstimateSource,
{
    fn schedule(&self) -> FeeSchedule {
        let estimate = match self.source.fetch_estimate() {
            Ok(estimate) => estimate,
            Err(e) => {
                warn!("Fee estimate unavailable, using baseline schedule: {}", e);
                None
            }
        };

        let parsed = ParsedEstimate::from_estimate(estimate.as_ref());
        reconcile(&self.baseline, &parsed, &self.targets)
    }

    fn fee_per_byte(
        &self,
        native_amount: u64,
        policy: FeePolicy,
        custom_rate: Option<u64>,
    ) -> Result<u64, FeeError> {
        let schedule = self.schedule();
        let rate = select_rate(native_amount, policy, custom_rate, &schedule)?;

        info!(
            "Selected {} sat/byte for {} sats with {} fee policy",
            rate, native_amount, policy
        );

        Ok(rate)
    }
}
