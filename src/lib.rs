#![allow(clippy::needless_return)]

pub mod amounts;
pub mod config;
pub mod constants;
pub mod errors;
pub mod estimate;
pub mod fee;
pub mod mining_fees;
pub mod reconciler;
pub mod selector;
pub mod types;
