//! Booth health index: swing, turnout and vote share blended into a 0-100
//! score.

use crate::models::{BoothClass, BoothElectionRow, BoothHealthResult};
use crate::scoring::{
    OPPORTUNITY_THRESHOLD, RISK_THRESHOLD, SWING_LIMIT, SWING_WEIGHT, TURNOUT_WEIGHT,
    VOTE_SHARE_WEIGHT, clamp_pct, round1,
};

pub const UNKNOWN_ZONE: &str = "Unknown";

fn swing_to_score(swing: f64) -> f64 {
    let clamped = swing.clamp(-SWING_LIMIT, SWING_LIMIT);
    50.0 + clamped / SWING_LIMIT * 50.0
}

pub fn compute_booth_health(row: &BoothElectionRow) -> BoothHealthResult {
    let total_votes = row.our_votes.saturating_add(row.opponent_votes).max(1);
    let vote_share_pct = clamp_pct(row.our_votes as f64 / total_votes as f64 * 100.0);
    let turnout_pct = if row.voter_count > 0 {
        clamp_pct(row.total_turnout as f64 / row.voter_count as f64 * 100.0)
    } else {
        0.0
    };
    let swing_pct = row.swing_pct.filter(|swing| swing.is_finite()).unwrap_or(0.0);

    let health_index = swing_to_score(swing_pct) * SWING_WEIGHT
        + turnout_pct * TURNOUT_WEIGHT
        + vote_share_pct * VOTE_SHARE_WEIGHT;

    BoothHealthResult {
        booth_id: row.booth_id.clone(),
        booth_number: row.booth_number.clone(),
        health_index: round1(health_index),
        swing_pct,
        turnout_pct: round1(turnout_pct),
        vote_share_pct: round1(vote_share_pct),
        zone: row.region.clone().unwrap_or_else(|| UNKNOWN_ZONE.to_string()),
        constituency_id: row.constituency_id.clone(),
        voter_count: row.voter_count,
    }
}

pub fn compute_booth_health_batch(rows: &[BoothElectionRow]) -> Vec<BoothHealthResult> {
    rows.iter().map(compute_booth_health).collect()
}

pub fn classify_booth(health: f64) -> BoothClass {
    if health < RISK_THRESHOLD {
        BoothClass::Risk
    } else if health >= OPPORTUNITY_THRESHOLD {
        BoothClass::Opportunity
    } else {
        BoothClass::Neutral
    }
}
