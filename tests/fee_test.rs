use bitcoin::{Amount, FeeRate};
use mining_fees::errors::FeeError;
use mining_fees::fee::{fee_for_vsize, to_fee_rate};

#[test]
fn fee_rate_conversion() -> Result<(), anyhow::Error> {
    assert_eq!(to_fee_rate(15)?, FeeRate::from_sat_per_vb_unchecked(15));
    assert_eq!(to_fee_rate(0)?, FeeRate::ZERO);

    Ok(())
}

#[test]
fn total_fee_for_size() -> Result<(), anyhow::Error> {
    assert_eq!(fee_for_vsize(15, 226)?, Amount::from_sat(3390));
    assert_eq!(fee_for_vsize(300, 0)?, Amount::ZERO);

    Ok(())
}

#[test]
fn overflowing_rates_are_rejected() {
    assert!(matches!(to_fee_rate(u64::MAX), Err(FeeError::InvalidArgument(_))));
    assert!(matches!(
        fee_for_vsize(u64::MAX / 1000, 1_000_000),
        Err(FeeError::InvalidArgument(_))
    ));
}
