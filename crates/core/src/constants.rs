use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Progress percentage at or above which a goal counts as near completion
pub const GOAL_NEAR_COMPLETION_PCT: Decimal = dec!(75);
