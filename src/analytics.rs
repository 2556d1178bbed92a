use crate::models::{
    BoothHealthResult, CadrePerformancePoint, SeatMetrics, SentimentPoint, SwingTrendInput,
    SwingTrendPoint, TurnoutInput, TurnoutPoint, TurnoutSimulation, TurnoutSimulationPoint,
    VoteShareInput, VoteShareProjectionPoint, ZoneHealth,
};
use crate::scoring::{
    CADRE_TARGET, OPPORTUNITY_THRESHOLD, RISK_THRESHOLD, TURNOUT_SENSITIVITY_BASE, round_half_up,
    round1,
};
use std::collections::BTreeMap;

pub fn compute_seat_metrics(results: &[BoothHealthResult]) -> SeatMetrics {
    if results.is_empty() {
        return SeatMetrics::default();
    }

    let count = results.len() as f64;
    let avg_health = results.iter().map(|b| b.health_index).sum::<f64>() / count;
    let avg_swing = results.iter().map(|b| b.swing_pct).sum::<f64>() / count;
    let risk_zone_count = results
        .iter()
        .filter(|b| b.health_index < RISK_THRESHOLD)
        .count();
    let opportunity_zone_count = results
        .iter()
        .filter(|b| b.health_index >= OPPORTUNITY_THRESHOLD)
        .count();

    let seat_health = (50.0 + avg_swing * 5.0 + avg_health * 0.3).clamp(0.0, 100.0);
    let cadre_index = (avg_health / CADRE_TARGET * 100.0).clamp(0.0, 100.0);

    SeatMetrics {
        seat_health_score: round1(seat_health),
        avg_booth_health_index: round1(avg_health),
        risk_zone_count,
        opportunity_zone_count,
        cadre_performance_index: round1(cadre_index),
        turnout_sensitivity_score: round1(TURNOUT_SENSITIVITY_BASE + avg_swing * 0.01),
        avg_swing: round1(avg_swing),
    }
}

pub fn build_swing_trend(periods: &[SwingTrendInput]) -> Vec<SwingTrendPoint> {
    periods
        .iter()
        .map(|p| SwingTrendPoint {
            name: p.period.clone(),
            swing: p.swing,
            projection: p.projection.unwrap_or(p.swing),
        })
        .collect()
}

pub fn build_vote_share_projection(items: &[VoteShareInput]) -> Vec<VoteShareProjectionPoint> {
    items
        .iter()
        .map(|v| VoteShareProjectionPoint {
            name: v.booth_name.clone(),
            our_votes: v.our_votes,
            opponent_votes: v.opponent_votes,
            projected: v
                .projected
                .unwrap_or_else(|| round_half_up(v.our_votes as f64 * 1.05) as u64),
        })
        .collect()
}

pub fn build_turnout_data(items: &[TurnoutInput]) -> Vec<TurnoutPoint> {
    items
        .iter()
        .map(|t| TurnoutPoint {
            name: t.year.clone(),
            turnout: t.turnout,
        })
        .collect()
}

/// Sentiment split per period, driven by the period-over-period swing delta.
pub fn build_sentiment_from_swing(swing_by_period: &[SwingTrendPoint]) -> Vec<SentimentPoint> {
    let mut previous: Option<f64> = None;
    swing_by_period
        .iter()
        .map(|point| {
            let delta = previous.map_or(0.0, |prev| point.swing - prev);
            previous = Some(point.swing);

            let favorable = (45.0 + delta * 5.0).clamp(30.0, 60.0);
            let unfavorable = (20.0 - delta * 2.0).clamp(10.0, 30.0);
            let neutral = 100.0 - favorable - unfavorable;
            SentimentPoint {
                name: point.name.clone(),
                favorable: round_half_up(favorable) as i64,
                neutral: round_half_up(neutral) as i64,
                unfavorable: round_half_up(unfavorable) as i64,
            }
        })
        .collect()
}

pub fn build_cadre_performance(regions: &[ZoneHealth]) -> Vec<CadrePerformancePoint> {
    regions
        .iter()
        .map(|r| CadrePerformancePoint {
            name: r.name.clone(),
            performance: round_half_up(r.avg_health) as i64,
            target: CADRE_TARGET,
        })
        .collect()
}

/// Average health per zone, zones in lexical order.
pub fn zone_health(results: &[BoothHealthResult]) -> Vec<ZoneHealth> {
    let mut by_zone: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for result in results {
        let entry = by_zone.entry(result.zone.as_str()).or_default();
        entry.0 += result.health_index;
        entry.1 += 1;
    }
    by_zone
        .into_iter()
        .map(|(name, (sum, count))| ZoneHealth {
            name: name.to_string(),
            avg_health: sum / count as f64,
        })
        .collect()
}

/// Packs per-booth risk (`100 - health`) into rows of `cols`.
pub fn build_risk_heat_grid(results: &[BoothHealthResult], cols: usize) -> Vec<Vec<i64>> {
    let risk_scores: Vec<i64> = results
        .iter()
        .map(|b| round_half_up(100.0 - b.health_index) as i64)
        .collect();
    let rows: Vec<Vec<i64>> = risk_scores
        .chunks(cols.max(1))
        .map(|chunk| chunk.to_vec())
        .collect();
    if rows.is_empty() { vec![vec![0]] } else { rows }
}

pub const SIMULATOR_SENSITIVITY: f64 = TURNOUT_SENSITIVITY_BASE;
pub const SIMULATOR_DELTA_RANGE: std::ops::RangeInclusive<i64> = -10..=10;
const SIMULATED_TURNOUT_MIN: f64 = 50.0;
const SIMULATED_TURNOUT_MAX: f64 = 95.0;

/// Baseline the turnout simulator projects from.
#[derive(Debug, Clone)]
pub struct TurnoutBaseline {
    pub turnout: f64,
    pub margin: f64,
    pub history: Vec<TurnoutSimulationPoint>,
}

impl Default for TurnoutBaseline {
    fn default() -> Self {
        let history = [
            ("2019", 65.0, 2.1),
            ("2020", 68.0, 2.4),
            ("2021", 72.0, 2.8),
            ("2022", 71.0, 2.6),
            ("2023", 69.0, 2.5),
            ("2024", 74.0, 3.2),
        ]
        .into_iter()
        .map(|(name, turnout, margin)| TurnoutSimulationPoint {
            name: name.to_string(),
            turnout,
            margin,
        })
        .collect();
        Self {
            turnout: 72.0,
            margin: 3.2,
            history,
        }
    }
}

/// Projects the seat margin for a turnout shift of `delta` points.
pub fn simulate_turnout(baseline: &TurnoutBaseline, delta: i64) -> TurnoutSimulation {
    let delta_f = delta as f64;
    let projected_margin = round1(baseline.margin + delta_f * SIMULATOR_SENSITIVITY);

    let simulated = vec![
        TurnoutSimulationPoint {
            name: "Baseline".to_string(),
            turnout: baseline.turnout,
            margin: baseline.margin,
        },
        TurnoutSimulationPoint {
            name: "Simulated".to_string(),
            turnout: (baseline.turnout + delta_f)
                .clamp(SIMULATED_TURNOUT_MIN, SIMULATED_TURNOUT_MAX),
            margin: projected_margin,
        },
    ];

    let mut history = baseline.history.clone();
    let last_turnout = history.last().map_or(baseline.turnout, |p| p.turnout);
    history.push(TurnoutSimulationPoint {
        name: "Projected".to_string(),
        turnout: last_turnout + delta_f,
        margin: projected_margin,
    });

    TurnoutSimulation {
        turnout_delta: delta,
        projected_margin,
        simulated,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(health: f64, swing: f64, zone: &str) -> BoothHealthResult {
        BoothHealthResult {
            booth_id: format!("b-{health}"),
            booth_number: "1".to_string(),
            health_index: health,
            swing_pct: swing,
            turnout_pct: 70.0,
            vote_share_pct: 50.0,
            zone: zone.to_string(),
            constituency_id: None,
            voter_count: 1000,
        }
    }

    #[test]
    fn seat_metrics_empty_is_all_zero() {
        assert_eq!(compute_seat_metrics(&[]), SeatMetrics::default());
        let zero = compute_seat_metrics(&[]);
        assert_eq!(zero.seat_health_score, 0.0);
        assert_eq!(zero.turnout_sensitivity_score, 0.0);
    }

    #[test]
    fn seat_metrics_counts_zones_and_scores() {
        let results = [
            result(40.0, 2.0, "A"),
            result(60.0, 2.0, "A"),
            result(80.0, 2.0, "B"),
        ];
        let metrics = compute_seat_metrics(&results);
        assert_eq!(metrics.risk_zone_count, 1);
        assert_eq!(metrics.opportunity_zone_count, 1);
        assert_eq!(metrics.avg_booth_health_index, 60.0);
        // 50 + 2*5 + 60*0.3
        assert_eq!(metrics.seat_health_score, 78.0);
        assert_eq!(metrics.cadre_performance_index, 80.0);
        assert_eq!(metrics.turnout_sensitivity_score, 0.6);
        assert_eq!(metrics.avg_swing, 2.0);
    }

    #[test]
    fn seat_metrics_clamp_scores() {
        let metrics = compute_seat_metrics(&[result(100.0, 20.0, "A")]);
        assert_eq!(metrics.seat_health_score, 100.0);
        assert_eq!(metrics.cadre_performance_index, 100.0);

        let metrics = compute_seat_metrics(&[result(0.0, -20.0, "A")]);
        assert_eq!(metrics.seat_health_score, 0.0);
        assert_eq!(metrics.cadre_performance_index, 0.0);
    }

    #[test]
    fn swing_trend_projection_defaults_to_swing() {
        let trend = build_swing_trend(&[
            SwingTrendInput {
                period: "2019".to_string(),
                swing: 2.1,
                projection: None,
            },
            SwingTrendInput {
                period: "2024".to_string(),
                swing: 3.0,
                projection: Some(3.5),
            },
        ]);
        assert_eq!(trend[0].projection, 2.1);
        assert_eq!(trend[1].projection, 3.5);
    }

    #[test]
    fn vote_projection_defaults_to_five_percent_uplift() {
        let points = build_vote_share_projection(&[
            VoteShareInput {
                booth_name: "Booth 1".to_string(),
                our_votes: 1250,
                opponent_votes: 980,
                projected: None,
            },
            VoteShareInput {
                booth_name: "Booth 2".to_string(),
                our_votes: 1100,
                opponent_votes: 1050,
                projected: Some(1180),
            },
        ]);
        assert_eq!(points[0].projected, 1313);
        assert_eq!(points[1].projected, 1180);
    }

    #[test]
    fn turnout_data_keeps_order() {
        let points = build_turnout_data(&[
            TurnoutInput {
                year: "2019".to_string(),
                turnout: 65.0,
            },
            TurnoutInput {
                year: "2024".to_string(),
                turnout: 74.0,
            },
        ]);
        assert_eq!(points[0].name, "2019");
        assert_eq!(points[1].turnout, 74.0);
    }

    #[test]
    fn sentiment_tracks_swing_delta() {
        let series = build_swing_trend(&[
            SwingTrendInput {
                period: "W1".to_string(),
                swing: 2.0,
                projection: None,
            },
            SwingTrendInput {
                period: "W2".to_string(),
                swing: 3.0,
                projection: None,
            },
            SwingTrendInput {
                period: "W3".to_string(),
                swing: -7.0,
                projection: None,
            },
        ]);
        let sentiment = build_sentiment_from_swing(&series);
        assert_eq!(
            sentiment[0],
            SentimentPoint {
                name: "W1".to_string(),
                favorable: 45,
                neutral: 35,
                unfavorable: 20
            }
        );
        assert_eq!((sentiment[1].favorable, sentiment[1].neutral, sentiment[1].unfavorable), (50, 32, 18));
        // delta -10 saturates both bands
        assert_eq!((sentiment[2].favorable, sentiment[2].neutral, sentiment[2].unfavorable), (30, 40, 30));
    }

    #[test]
    fn cadre_performance_uses_fixed_target() {
        let points = build_cadre_performance(&[ZoneHealth {
            name: "Zone A".to_string(),
            avg_health: 81.5,
        }]);
        assert_eq!(points[0].performance, 82);
        assert_eq!(points[0].target, 75.0);
    }

    #[test]
    fn zone_health_averages_per_zone() {
        let zones = zone_health(&[
            result(60.0, 0.0, "South"),
            result(40.0, 0.0, "North"),
            result(80.0, 0.0, "South"),
        ]);
        assert_eq!(
            zones,
            vec![
                ZoneHealth {
                    name: "North".to_string(),
                    avg_health: 40.0
                },
                ZoneHealth {
                    name: "South".to_string(),
                    avg_health: 70.0
                },
            ]
        );
    }

    #[test]
    fn risk_heat_grid_empty_defaults_to_single_cell() {
        assert_eq!(build_risk_heat_grid(&[], 8), vec![vec![0]]);
    }

    #[test]
    fn risk_heat_grid_packs_rows() {
        let results: Vec<_> = [90.0, 80.0, 70.0, 60.0, 50.0]
            .iter()
            .map(|h| result(*h, 0.0, "A"))
            .collect();
        assert_eq!(
            build_risk_heat_grid(&results, 2),
            vec![vec![10, 20], vec![30, 40], vec![50]]
        );
    }

    #[test]
    fn turnout_simulation_projects_margin() {
        let baseline = TurnoutBaseline::default();
        let sim = simulate_turnout(&baseline, 2);
        assert_eq!(sim.projected_margin, 4.3);
        assert_eq!(sim.simulated[1].turnout, 74.0);
        assert_eq!(sim.history.len(), 7);
        assert_eq!(sim.history[6].turnout, 76.0);

        let low = simulate_turnout(&baseline, -10);
        assert_eq!(low.projected_margin, -2.3);
        assert_eq!(low.simulated[1].turnout, 62.0);
    }
}
