use crate::models::{
    BoothHealthResult, HighRiskBooth, LeadershipView, OpportunityCluster, Potential, SeatMetrics,
    SeatStatus,
};
use crate::scoring::{
    CLUSTER_HIGH_SWING, CLUSTER_MEDIUM_SWING, HIGH_RISK_LIST_THRESHOLD, MAX_CLUSTERS,
    MIN_CLUSTER_SIZE, OPPORTUNITY_CLUSTER_THRESHOLD, OPPORTUNITY_THRESHOLD, RISK_THRESHOLD,
    round_half_up, round1,
};

/// Weakest booths first, at most `limit` of them.
pub fn map_to_high_risk_booths(results: &[BoothHealthResult], limit: usize) -> Vec<HighRiskBooth> {
    let mut weak: Vec<&BoothHealthResult> = results
        .iter()
        .filter(|r| r.health_index < HIGH_RISK_LIST_THRESHOLD)
        .collect();
    weak.sort_by(|a, b| a.health_index.total_cmp(&b.health_index));

    weak.into_iter()
        .take(limit)
        .map(|r| HighRiskBooth {
            booth: format!("B-{}", r.booth_number),
            zone: r.zone.clone(),
            swing: round1(r.swing_pct),
            turnout: round_half_up(r.turnout_pct) as i64,
            health: round_half_up(r.health_index) as i64,
        })
        .collect()
}

fn potential_for(avg_swing: f64) -> Potential {
    if avg_swing >= CLUSTER_HIGH_SWING {
        Potential::High
    } else if avg_swing >= CLUSTER_MEDIUM_SWING {
        Potential::Medium
    } else {
        Potential::Low
    }
}

/// Strong booths grouped by zone, zones kept in first-seen order.
pub fn map_to_opportunity_clusters(results: &[BoothHealthResult]) -> Vec<OpportunityCluster> {
    let mut by_zone: Vec<(&str, Vec<&BoothHealthResult>)> = Vec::new();
    for result in results
        .iter()
        .filter(|r| r.health_index >= OPPORTUNITY_CLUSTER_THRESHOLD)
    {
        match by_zone.iter_mut().find(|(zone, _)| *zone == result.zone) {
            Some((_, members)) => members.push(result),
            None => by_zone.push((result.zone.as_str(), vec![result])),
        }
    }

    by_zone
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_CLUSTER_SIZE)
        .take(MAX_CLUSTERS)
        .enumerate()
        .map(|(idx, (zone, members))| {
            let avg_swing =
                members.iter().map(|b| b.swing_pct).sum::<f64>() / members.len() as f64;
            OpportunityCluster {
                cluster: format!("C{} ({}, {} booths)", idx + 1, zone, members.len()),
                zone: zone.to_string(),
                booths: members.len(),
                avg_swing: round1(avg_swing),
                potential: potential_for(avg_swing),
            }
        })
        .collect()
}

/// Inputs to the written strategic summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryContext {
    pub seat_health: f64,
    pub risk_count: usize,
    pub opportunity_count: usize,
    pub avg_swing: f64,
    pub turnout_sensitivity: f64,
    pub high_risk_booths: Vec<String>,
    pub opportunity_zones: Vec<String>,
}

impl SummaryContext {
    pub fn new(
        metrics: &SeatMetrics,
        high_risk: &[HighRiskBooth],
        clusters: &[OpportunityCluster],
    ) -> Self {
        Self {
            seat_health: metrics.seat_health_score,
            risk_count: metrics.risk_zone_count,
            opportunity_count: metrics.opportunity_zone_count,
            avg_swing: metrics.avg_swing,
            turnout_sensitivity: metrics.turnout_sensitivity_score,
            high_risk_booths: high_risk.iter().map(|b| b.booth.clone()).collect(),
            opportunity_zones: clusters.iter().map(|c| c.zone.clone()).collect(),
        }
    }
}

pub fn strategic_summary_text(context: &SummaryContext) -> String {
    let mut parts = vec![format!(
        "Seat health at {}%. {} risk booths and {} opportunity booths identified.",
        context.seat_health, context.risk_count, context.opportunity_count
    )];
    if context.avg_swing != 0.0 {
        let sign = if context.avg_swing > 0.0 { "+" } else { "" };
        parts.push(format!("Average swing {sign}{}%.", context.avg_swing));
    }
    parts.push(format!(
        "Turnout sensitivity {}; marginal booth focus recommended.",
        context.turnout_sensitivity
    ));
    if !context.high_risk_booths.is_empty() {
        let top: Vec<&str> = context
            .high_risk_booths
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        parts.push(format!(
            "Prioritise doorstep engagement in {}.",
            top.join(", ")
        ));
    }
    if !context.opportunity_zones.is_empty() {
        let top: Vec<&str> = context
            .opportunity_zones
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        parts.push(format!("Consolidate gains in {}.", top.join(", ")));
    }
    parts.join(" ")
}

pub fn seat_status(seat_health: f64) -> SeatStatus {
    if seat_health >= OPPORTUNITY_THRESHOLD {
        SeatStatus::GoodShape
    } else if seat_health >= RISK_THRESHOLD {
        SeatStatus::NeedsAttention
    } else {
        SeatStatus::AtRisk
    }
}

pub fn leadership_view(metrics: &SeatMetrics) -> LeadershipView {
    LeadershipView {
        seat_health: metrics.seat_health_score,
        status: seat_status(metrics.seat_health_score),
        risk_booths: metrics.risk_zone_count,
        opportunity_booths: metrics.opportunity_zone_count,
        avg_swing: metrics.avg_swing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(number: &str, health: f64, swing: f64, zone: &str) -> BoothHealthResult {
        BoothHealthResult {
            booth_id: format!("id-{number}"),
            booth_number: number.to_string(),
            health_index: health,
            swing_pct: swing,
            turnout_pct: 61.6,
            vote_share_pct: 48.0,
            zone: zone.to_string(),
            constituency_id: None,
            voter_count: 900,
        }
    }

    #[test]
    fn high_risk_sorted_and_limited() {
        let results = [
            result("7", 48.4, -2.94, "North"),
            result("12", 38.0, -4.2, "North"),
            result("30", 55.0, -1.0, "East"),
            result("18", 42.6, -3.8, "Central"),
        ];
        let rows = map_to_high_risk_booths(&results, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            HighRiskBooth {
                booth: "B-12".to_string(),
                zone: "North".to_string(),
                swing: -4.2,
                turnout: 62,
                health: 38
            }
        );
        assert_eq!(rows[1].booth, "B-18");
        assert_eq!(rows[1].health, 43);

        let all = map_to_high_risk_booths(&results, 10);
        assert_eq!(all.len(), 3, "55 is not below the list threshold");
        assert_eq!(all[2].swing, -2.9);
    }

    #[test]
    fn clusters_need_two_strong_booths_per_zone() {
        let results = [
            result("1", 70.0, 5.0, "North"),
            result("2", 66.0, 3.0, "South"),
            result("3", 80.0, 4.0, "North"),
            result("4", 64.9, 9.0, "South"),
            result("5", 65.0, 2.0, "South"),
            result("6", 90.0, 1.0, "East"),
        ];
        let clusters = map_to_opportunity_clusters(&results);
        assert_eq!(
            clusters,
            vec![
                OpportunityCluster {
                    cluster: "C1 (North, 2 booths)".to_string(),
                    zone: "North".to_string(),
                    booths: 2,
                    avg_swing: 4.5,
                    potential: Potential::High
                },
                OpportunityCluster {
                    cluster: "C2 (South, 2 booths)".to_string(),
                    zone: "South".to_string(),
                    booths: 2,
                    avg_swing: 2.5,
                    potential: Potential::Medium
                },
            ]
        );
    }

    #[test]
    fn clusters_capped_at_five() {
        let results: Vec<_> = (0..7)
            .flat_map(|zone| {
                let name = format!("Z{zone}");
                vec![
                    result("1", 75.0, 1.0, &name),
                    result("2", 75.0, 1.0, &name),
                ]
            })
            .collect();
        let clusters = map_to_opportunity_clusters(&results);
        assert_eq!(clusters.len(), 5);
        assert_eq!(clusters[4].cluster, "C5 (Z4, 2 booths)");
        assert!(clusters.iter().all(|c| c.potential == Potential::Low));
    }

    #[test]
    fn summary_text_mentions_priorities() {
        let context = SummaryContext {
            seat_health: 72.0,
            risk_count: 12,
            opportunity_count: 8,
            avg_swing: 3.2,
            turnout_sensitivity: 0.6,
            high_risk_booths: vec![
                "B-12".to_string(),
                "B-18".to_string(),
                "B-23".to_string(),
                "B-07".to_string(),
            ],
            opportunity_zones: vec!["North".to_string()],
        };
        assert_eq!(
            strategic_summary_text(&context),
            "Seat health at 72%. 12 risk booths and 8 opportunity booths identified. \
             Average swing +3.2%. Turnout sensitivity 0.6; marginal booth focus recommended. \
             Prioritise doorstep engagement in B-12, B-18, B-23. Consolidate gains in North."
        );
    }

    #[test]
    fn summary_text_skips_zero_swing_and_empty_lists() {
        let text = strategic_summary_text(&SummaryContext::default());
        assert_eq!(
            text,
            "Seat health at 0%. 0 risk booths and 0 opportunity booths identified. \
             Turnout sensitivity 0; marginal booth focus recommended."
        );
    }

    #[test]
    fn seat_status_bands() {
        assert_eq!(seat_status(72.0), SeatStatus::GoodShape);
        assert_eq!(seat_status(50.0), SeatStatus::NeedsAttention);
        assert_eq!(seat_status(49.9), SeatStatus::AtRisk);
        let view = leadership_view(&SeatMetrics {
            seat_health_score: 64.0,
            risk_zone_count: 3,
            ..SeatMetrics::default()
        });
        assert_eq!(view.status.label(), "Needs attention");
        assert_eq!(view.risk_booths, 3);
    }
}
