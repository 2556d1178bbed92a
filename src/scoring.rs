//! Thresholds, weights and rounding shared by the health engine, the
//! aggregator and the insight builders.

/// Booths scoring below this are counted as risk zones.
pub const RISK_THRESHOLD: f64 = 50.0;
/// Booths scoring at or above this are counted as opportunity zones.
pub const OPPORTUNITY_THRESHOLD: f64 = 70.0;
/// Upper bound (exclusive) for the high-risk booth table.
pub const HIGH_RISK_LIST_THRESHOLD: f64 = 55.0;
/// Lower bound (inclusive) for booths that join an opportunity cluster.
pub const OPPORTUNITY_CLUSTER_THRESHOLD: f64 = 65.0;

pub const SWING_WEIGHT: f64 = 0.4;
pub const TURNOUT_WEIGHT: f64 = 0.3;
pub const VOTE_SHARE_WEIGHT: f64 = 0.3;

/// Swing beyond +/- this many points saturates the swing score.
pub const SWING_LIMIT: f64 = 20.0;

pub const CADRE_TARGET: f64 = 75.0;
pub const TURNOUT_SENSITIVITY_BASE: f64 = 0.55;

pub const CLUSTER_HIGH_SWING: f64 = 4.0;
pub const CLUSTER_MEDIUM_SWING: f64 = 2.5;
pub const MIN_CLUSTER_SIZE: usize = 2;
pub const MAX_CLUSTERS: usize = 5;

pub const DEFAULT_HIGH_RISK_LIMIT: usize = 10;
pub const DEFAULT_HEAT_GRID_COLS: usize = 8;

/// Rounds half-up (`floor(x + 0.5)`), so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

pub fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
