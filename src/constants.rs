// Default confirmation targets used to bin external estimate points into fee tiers.
// A point counts toward a tier when both its max delay in blocks and in minutes are
// within the tier limits.

// Roughly one week of blocks.
pub const DEFAULT_LOW_FEE_MAX_DELAY: u32 = 1008;
pub const DEFAULT_LOW_FEE_MAX_MINUTES: u32 = 10_080;

// Roughly six hours.
pub const DEFAULT_STANDARD_FEE_LOW_MAX_DELAY: u32 = 36;
pub const DEFAULT_STANDARD_FEE_LOW_MAX_MINUTES: u32 = 360;

// Within three blocks.
pub const DEFAULT_STANDARD_FEE_HIGH_MAX_DELAY: u32 = 3;
pub const DEFAULT_STANDARD_FEE_HIGH_MAX_MINUTES: u32 = 45;

// Next block.
pub const DEFAULT_HIGH_FEE_MAX_DELAY: u32 = 0;
pub const DEFAULT_HIGH_FEE_MAX_MINUTES: u32 = 20;
