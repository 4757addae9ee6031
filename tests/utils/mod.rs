#![allow(dead_code)]

use mining_fees::types::{EstimatePoint, ExternalEstimate, FeeSchedule};
use std::path::{Path, PathBuf};

/// Removes the directory created by `write_config` for `path`.
pub fn remove_config(path: &str) {
    if let Some(dir) = Path::new(path).parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

pub fn generate_random_string() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Writes `contents` to a fresh config file under `test_output` and returns its path.
pub fn write_config(contents: &str) -> String {
    let dir = PathBuf::from(format!("test_output/config/{}", generate_random_string()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fees.yaml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

pub fn schedule(
    low_fee: u64,
    standard_fee_low: u64,
    standard_fee_high: u64,
    high_fee: u64,
    standard_fee_low_amount: u64,
    standard_fee_high_amount: u64,
) -> FeeSchedule {
    FeeSchedule::new(
        low_fee,
        standard_fee_low,
        standard_fee_high,
        high_fee,
        standard_fee_low_amount,
        standard_fee_high_amount,
    )
    .unwrap()
}

pub fn baseline_schedule() -> FeeSchedule {
    schedule(11, 55, 333, 666, 1_111_111, 22_222_222)
}

pub fn band_schedule() -> FeeSchedule {
    schedule(10, 50, 100, 350, 100_000, 200_000)
}

/// Estimate covering every tier of the default confirmation targets.
pub fn complete_estimate() -> ExternalEstimate {
    ExternalEstimate::new(vec![
        // too slow for any tier
        EstimatePoint::new(2, 5000, 50_000),
        EstimatePoint::new(10, 300, 3000),
        EstimatePoint::new(91, 20, 240),
        EstimatePoint::new(220, 2, 30),
        EstimatePoint::new(300, 0, 15),
        EstimatePoint::new(400, 0, 10),
    ])
}

/// Same observations as `complete_estimate`, as an estimator would send them.
pub fn complete_estimate_json() -> serde_json::Value {
    serde_json::json!({
        "fees": [
            { "minFee": 0, "maxFee": 0, "dayCount": 12, "memCount": 0, "minDelay": 4, "maxDelay": 9000, "minMinutes": 60, "maxMinutes": 90000 },
            { "minFee": 2, "maxFee": 9, "dayCount": 5, "memCount": 3, "minDelay": 30, "maxDelay": 5000, "minMinutes": 300, "maxMinutes": 50000 },
            { "minFee": 10, "maxFee": 90, "dayCount": 40, "memCount": 12, "minDelay": 3, "maxDelay": 300, "minMinutes": 30, "maxMinutes": 3000 },
            { "minFee": 91, "maxFee": 219, "dayCount": 300, "memCount": 20, "minDelay": 1, "maxDelay": 20, "minMinutes": 10, "maxMinutes": 240 },
            { "minFee": 220, "maxFee": 299, "dayCount": 900, "memCount": 40, "minDelay": 0, "maxDelay": 2, "minMinutes": 0, "maxMinutes": 30 },
            { "minFee": 300, "maxFee": 399, "dayCount": 1500, "memCount": 80, "minDelay": 0, "maxDelay": 0, "minMinutes": 0, "maxMinutes": 15 },
            { "minFee": 400, "maxFee": 500, "dayCount": 2000, "memCount": 90, "minDelay": 0, "maxDelay": 0, "minMinutes": 0, "maxMinutes": 10 }
        ]
    })
}
