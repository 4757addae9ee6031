use bitcoin::{Amount, FeeRate};

use crate::errors::FeeError;

// Rates in this crate are quoted per byte. For fee purposes a byte is treated as a
// virtual byte, which is exact for legacy transactions.

pub fn to_fee_rate(sat_per_byte: u64) -> Result<FeeRate, FeeError> {
    FeeRate::from_sat_per_vb(sat_per_byte).ok_or_else(|| {
        FeeError::InvalidArgument(format!("fee rate {sat_per_byte} sat/byte overflows"))
    })
}

/// Total fee for a transaction of `vsize` virtual bytes at `sat_per_byte`.
pub fn fee_for_vsize(sat_per_byte: u64, vsize: u64) -> Result<Amount, FeeError> {
    to_fee_rate(sat_per_byte)?.fee_vb(vsize).ok_or_else(|| {
        FeeError::InvalidArgument(format!(
            "fee for {vsize} vbytes at {sat_per_byte} sat/byte overflows"
        ))
    })
}
