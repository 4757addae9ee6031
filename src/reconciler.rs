use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    estimate::ParsedEstimate,
    types::{ConfirmationTarget, ConfirmationTargets, EstimatePoint, ExternalEstimate, FeeSchedule},
};

/// Refreshes the per-byte rates of `baseline` from an external estimate.
///
/// Each tier takes the cheapest observed fee among the points that meet its confirmation
/// target. The amount band is always kept from `baseline`. Whenever the estimate is empty,
/// malformed or leaves a tier without data, a copy of `baseline` is returned instead:
/// a bad estimate must never block building a transaction.
pub fn reconcile(
    baseline: &FeeSchedule,
    external: &ParsedEstimate,
    targets: &ConfirmationTargets,
) -> FeeSchedule {
    let points = match external {
        ParsedEstimate::Valid(points) => points,
        ParsedEstimate::Empty => {
            debug!("No external fee estimate, keeping baseline schedule");
            return *baseline;
        }
        ParsedEstimate::Malformed(reason) => {
            warn!("Ignoring malformed fee estimate: {}", reason);
            return *baseline;
        }
    };

    let tiers = targets.tiers().map(|target| cheapest_within(points, &target));

    let [Some(low_fee), Some(standard_fee_low), Some(standard_fee_high), Some(high_fee)] = tiers
    else {
        warn!(
            "Fee estimate with {} points does not cover every fee tier ({:?}), keeping baseline schedule",
            points.len(),
            tiers
        );
        return *baseline;
    };

    let [low_fee, standard_fee_low, standard_fee_high, high_fee] =
        clamp_non_decreasing([low_fee, standard_fee_low, standard_fee_high, high_fee]);

    match FeeSchedule::new(
        low_fee,
        standard_fee_low,
        standard_fee_high,
        high_fee,
        baseline.standard_fee_low_amount(),
        baseline.standard_fee_high_amount(),
    ) {
        Ok(schedule) => {
            debug!("Reconciled fee schedule: {}", schedule);
            schedule
        }
        Err(e) => {
            warn!("Reconciled fee schedule rejected, keeping baseline: {}", e);
            *baseline
        }
    }
}

/// [`reconcile`] over a typed estimate with the default confirmation targets.
pub fn reconcile_estimate(
    baseline: &FeeSchedule,
    external: Option<&ExternalEstimate>,
) -> FeeSchedule {
    reconcile(
        baseline,
        &ParsedEstimate::from_estimate(external),
        &ConfirmationTargets::default(),
    )
}

/// [`reconcile`] over an undecoded JSON payload with the default confirmation targets.
pub fn reconcile_json(baseline: &FeeSchedule, external: Option<&Value>) -> FeeSchedule {
    reconcile(
        baseline,
        &ParsedEstimate::from_json(external),
        &ConfirmationTargets::default(),
    )
}

fn cheapest_within(points: &[EstimatePoint], target: &ConfirmationTarget) -> Option<u64> {
    points
        .iter()
        .filter(|point| target.accepts(point))
        .map(|point| point.min_fee)
        .min()
}

// Running maximum: a cheaper rate never ends up above a faster tier.
fn clamp_non_decreasing(mut rates: [u64; 4]) -> [u64; 4] {
    for i in 1..rates.len() {
        rates[i] = rates[i].max(rates[i - 1]);
    }
    rates
}
