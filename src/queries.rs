//! Read-side joins over the loaded campaign data: booths, their latest
//! election rows and constituency regions.

use crate::health::compute_booth_health_batch;
use crate::models::{
    Booth, BoothElectionRow, BoothHealthResult, CampaignData, Constituency, ElectionData,
    Recommendation, SwingTrendInput, TurnoutInput, VoteShareInput,
};
use crate::scoring::round1;
use std::collections::{BTreeMap, HashMap};

pub fn find_constituency<'a>(data: &'a CampaignData, id: &str) -> Option<&'a Constituency> {
    data.constituencies.iter().find(|c| c.id == id)
}

pub fn constituencies_by_name(data: &CampaignData) -> Vec<Constituency> {
    let mut list = data.constituencies.clone();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list
}

fn booths_in_scope<'a>(
    data: &'a CampaignData,
    constituency_id: Option<&'a str>,
) -> impl Iterator<Item = &'a Booth> + 'a {
    data.booths
        .iter()
        .filter(move |b| constituency_id.is_none_or(|id| b.constituency_id == id))
}

fn latest_by_booth(data: &CampaignData) -> HashMap<&str, &ElectionData> {
    let mut latest: HashMap<&str, &ElectionData> = HashMap::new();
    for row in &data.election_data {
        latest
            .entry(row.booth_id.as_str())
            .and_modify(|current| {
                if row.election_year > current.election_year {
                    *current = row;
                }
            })
            .or_insert(row);
    }
    latest
}

/// One row per booth that has election data, in booth order.
pub fn booth_rows(data: &CampaignData, constituency_id: Option<&str>) -> Vec<BoothElectionRow> {
    let latest = latest_by_booth(data);
    let regions: HashMap<&str, Option<&String>> = data
        .constituencies
        .iter()
        .map(|c| (c.id.as_str(), c.region.as_ref()))
        .collect();

    booths_in_scope(data, constituency_id)
        .filter_map(|booth| {
            let election = latest.get(booth.id.as_str())?;
            let region = regions
                .get(booth.constituency_id.as_str())
                .copied()
                .flatten()
                .cloned();
            Some(BoothElectionRow {
                booth_id: booth.id.clone(),
                booth_number: booth.booth_number.clone(),
                our_votes: election.our_votes,
                opponent_votes: election.opponent_votes,
                total_turnout: election.total_turnout,
                voter_count: booth.voter_count,
                swing_pct: election.swing_pct,
                region,
                constituency_id: Some(booth.constituency_id.clone()),
            })
        })
        .collect()
}

pub fn booths_with_health(
    data: &CampaignData,
    constituency_id: Option<&str>,
) -> Vec<BoothHealthResult> {
    compute_booth_health_batch(&booth_rows(data, constituency_id))
}

pub fn booth_name(booth: &Booth) -> String {
    booth
        .booth_name
        .clone()
        .unwrap_or_else(|| format!("Booth {}", booth.booth_number))
}

/// Election rows of the booths in scope, grouped by year (ascending).
fn rows_by_year<'a>(
    data: &'a CampaignData,
    constituency_id: Option<&'a str>,
) -> BTreeMap<i32, Vec<(&'a Booth, &'a ElectionData)>> {
    let booths: HashMap<&str, &Booth> = booths_in_scope(data, constituency_id)
        .map(|b| (b.id.as_str(), b))
        .collect();
    let mut by_year: BTreeMap<i32, Vec<(&Booth, &ElectionData)>> = BTreeMap::new();
    for row in &data.election_data {
        if let Some(&booth) = booths.get(row.booth_id.as_str()) {
            by_year.entry(row.election_year).or_default().push((booth, row));
        }
    }
    by_year
}

/// Mean recorded swing per election year; years without any swing are skipped.
pub fn swing_trend_inputs(
    data: &CampaignData,
    constituency_id: Option<&str>,
) -> Vec<SwingTrendInput> {
    rows_by_year(data, constituency_id)
        .into_iter()
        .filter_map(|(year, rows)| {
            let swings: Vec<f64> = rows
                .iter()
                .filter_map(|(_, e)| e.swing_pct)
                .filter(|s| s.is_finite())
                .collect();
            if swings.is_empty() {
                return None;
            }
            Some(SwingTrendInput {
                period: year.to_string(),
                swing: round1(swings.iter().sum::<f64>() / swings.len() as f64),
                projection: None,
            })
        })
        .collect()
}

/// Turnout per election year as total turnout over registered voters.
pub fn turnout_inputs(data: &CampaignData, constituency_id: Option<&str>) -> Vec<TurnoutInput> {
    rows_by_year(data, constituency_id)
        .into_iter()
        .map(|(year, rows)| {
            let (turnout, voters) = rows.iter().fold((0u64, 0u64), |(t, v), (booth, e)| {
                (
                    t.saturating_add(e.total_turnout),
                    v.saturating_add(booth.voter_count),
                )
            });
            let pct = if voters > 0 {
                (turnout as f64 / voters as f64 * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            TurnoutInput {
                year: year.to_string(),
                turnout: round1(pct),
            }
        })
        .collect()
}

pub fn vote_share_inputs(data: &CampaignData, constituency_id: Option<&str>) -> Vec<VoteShareInput> {
    let latest = latest_by_booth(data);
    booths_in_scope(data, constituency_id)
        .filter_map(|booth| {
            let election = latest.get(booth.id.as_str())?;
            Some(VoteShareInput {
                booth_name: booth_name(booth),
                our_votes: election.our_votes,
                opponent_votes: election.opponent_votes,
                projected: None,
            })
        })
        .collect()
}

/// Recommendations for a constituency plus the global ones, high priority first.
pub fn recommendations_for(
    data: &CampaignData,
    constituency_id: Option<&str>,
) -> Vec<Recommendation> {
    let mut list: Vec<Recommendation> = data
        .recommendations
        .iter()
        .filter(|r| match (constituency_id, r.constituency_id.as_deref()) {
            (None, _) | (_, None) => true,
            (Some(wanted), Some(actual)) => wanted == actual,
        })
        .cloned()
        .collect();
    list.sort_by_key(|r| r.priority);
    list
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::*;

    pub fn sample_data() -> CampaignData {
        let constituency = |id: &str, name: &str, region: Option<&str>| Constituency {
            id: id.to_string(),
            name: name.to_string(),
            code: None,
            state: None,
            region: region.map(str::to_string),
        };
        let booth = |id: &str, cid: &str, number: &str, voters: u64| Booth {
            id: id.to_string(),
            constituency_id: cid.to_string(),
            booth_number: number.to_string(),
            booth_name: None,
            voter_count: voters,
        };
        let election = |id: &str, booth: &str, year: i32, ours: u64, opp: u64, turnout: u64, swing: Option<f64>| {
            ElectionData {
                id: id.to_string(),
                booth_id: booth.to_string(),
                election_year: year,
                our_votes: ours,
                opponent_votes: opp,
                other_votes: 0,
                total_turnout: turnout,
                swing_pct: swing,
            }
        };
        let recommendation = |id: &str, cid: Option<&str>, priority: Priority| Recommendation {
            id: id.to_string(),
            constituency_id: cid.map(str::to_string),
            recommendation_type: RecommendationType::Campaign,
            priority,
            title: format!("rec {id}"),
            description: None,
        };

        CampaignData {
            constituencies: vec![
                constituency("c2", "Zeta South", None),
                constituency("c1", "Alpha North", Some("North")),
            ],
            booths: vec![
                booth("b1", "c1", "1", 2000),
                booth("b2", "c1", "2", 1000),
                booth("b3", "c2", "3", 500),
                booth("b4", "c1", "4", 800),
            ],
            election_data: vec![
                election("e1", "b1", 2019, 1000, 900, 1500, Some(1.0)),
                election("e2", "b1", 2024, 1200, 800, 1600, Some(5.0)),
                election("e3", "b2", 2024, 300, 500, 600, Some(-4.0)),
                election("e4", "b3", 2024, 200, 200, 400, None),
                election("e5", "ghost", 2024, 10, 10, 20, Some(2.0)),
            ],
            recommendations: vec![
                recommendation("r1", Some("c1"), Priority::Low),
                recommendation("r2", None, Priority::Medium),
                recommendation("r3", Some("c2"), Priority::High),
                recommendation("r4", Some("c1"), Priority::High),
            ],
        }
    }
}
