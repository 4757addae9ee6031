use anyhow::{bail, Context, Ok, Result};
use console::style;
use mining_fees::amounts::parse_sats;
use mining_fees::config::Config;
use mining_fees::fee::fee_for_vsize;
use mining_fees::mining_fees::{MiningFees, MiningFeesApi, StaticFeeEstimateSource};
use mining_fees::types::{ExternalEstimate, FeePolicy};
use tracing::{info, warn};

// Size used to show what the selected rate costs for a typical one-in two-out transaction.
const SAMPLE_TX_VSIZE: u64 = 226;

const USAGE: &str = "usage: mining-fees <amount_sats> <low|standard|high|custom> [custom_rate|-] [estimate.json]";

fn main() -> Result<()> {
    let config = Config::load()?;

    let log_level = match config.log_level {
        Some(ref level) => level.parse().unwrap_or(tracing::Level::INFO),
        None => tracing::Level::INFO,
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!(USAGE);
    }

    let native_amount = parse_sats(&args[0]).context("Invalid amount")?;
    let policy: FeePolicy = args[1].parse().context("Invalid fee policy")?;
    let custom_rate = match args.get(2).map(String::as_str) {
        None | Some("-") => None,
        Some(rate) => Some(parse_sats(rate).context("Invalid custom rate")?),
    };

    let estimate = match args.get(3) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Error reading fee estimate {}", path))?;
            // A bad estimate never blocks the fee decision.
            serde_json::from_str::<ExternalEstimate>(&raw)
                .map_err(|e| warn!("Ignoring fee estimate {}: {}", path, e))
                .ok()
        }
        None => None,
    };

    info!("Baseline schedule: {}", config.baseline);

    let mining_fees = MiningFees::from_config(&config, StaticFeeEstimateSource::new(estimate))?;
    let schedule = mining_fees.schedule();
    let rate = mining_fees
        .fee_per_byte(native_amount, policy, custom_rate)
        .context("Error selecting fee rate")?;
    let sample_fee = fee_for_vsize(rate, SAMPLE_TX_VSIZE)?;

    println!("{} {}", style("Schedule").cyan(), schedule);
    println!(
        "{} {} sat/byte for {} sats ({} policy), {} for {} vbytes",
        style("Fee rate").green(),
        style(rate).yellow(),
        native_amount,
        policy,
        sample_fee,
        SAMPLE_TX_VSIZE
    );

    Ok(())
}
