use crate::{
    amounts::parse_sats,
    errors::FeeError,
    types::{FeePolicy, FeeSchedule},
};

/// Picks the sat/byte rate for a transaction moving `native_amount` satoshis.
///
/// - `Low` and `High` return the matching schedule rate.
/// - `Custom` returns `custom_rate` untouched and fails if it is missing.
/// - `Standard` interpolates linearly between `standard_fee_low` and `standard_fee_high`
///   over the standard amount band, clamping outside of it. Results are rounded half up,
///   so 62.5 becomes 63.
pub fn select_rate(
    native_amount: u64,
    policy: FeePolicy,
    custom_rate: Option<u64>,
    schedule: &FeeSchedule,
) -> Result<u64, FeeError> {
    match policy {
        FeePolicy::Custom => custom_rate.ok_or_else(|| {
            FeeError::InvalidArgument("custom fee policy requires a custom rate".to_string())
        }),
        FeePolicy::Low => Ok(schedule.low_fee()),
        FeePolicy::High => Ok(schedule.high_fee()),
        FeePolicy::Standard => Ok(standard_rate(native_amount, schedule)),
    }
}

/// Same as [`select_rate`] for callers holding decimal strings.
pub fn select_rate_from_str(
    native_amount: &str,
    policy: &str,
    custom_rate: Option<&str>,
    schedule: &FeeSchedule,
) -> Result<u64, FeeError> {
    let native_amount = parse_sats(native_amount)?;
    let policy = policy.parse::<FeePolicy>()?;
    let custom_rate = custom_rate.map(parse_sats).transpose()?;

    select_rate(native_amount, policy, custom_rate, schedule)
}

fn standard_rate(native_amount: u64, schedule: &FeeSchedule) -> u64 {
    let low_amount = schedule.standard_fee_low_amount();
    let high_amount = schedule.standard_fee_high_amount();
    let fee_low = schedule.standard_fee_low();
    let fee_high = schedule.standard_fee_high();

    // A collapsed band (low_amount == high_amount) is caught here, before any division.
    if native_amount <= low_amount {
        return fee_low;
    }

    if native_amount >= high_amount {
        return fee_high;
    }

    // low_amount < native_amount < high_amount, so the band width is non-zero.
    let offset = u128::from(native_amount - low_amount);
    let width = u128::from(high_amount - low_amount);
    let spread = u128::from(fee_high - fee_low);

    let numerator = offset * spread;
    let mut step = numerator / width;
    if 2 * (numerator % width) >= width {
        step += 1;
    }

    // step <= spread, so this cannot exceed fee_high.
    fee_low + step as u64
}
