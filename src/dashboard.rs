use crate::analytics::{
    build_cadre_performance, build_risk_heat_grid, build_sentiment_from_swing, build_swing_trend,
    build_turnout_data, build_vote_share_projection, compute_seat_metrics, zone_health,
};
use crate::insights::{
    SummaryContext, map_to_high_risk_booths, map_to_opportunity_clusters, strategic_summary_text,
};
use crate::models::{CampaignData, DashboardSummary};
use crate::queries::{booths_with_health, swing_trend_inputs, turnout_inputs, vote_share_inputs};
use crate::scoring::{DEFAULT_HEAT_GRID_COLS, DEFAULT_HIGH_RISK_LIMIT};
use chrono::{DateTime, Local, SecondsFormat, TimeZone};

pub fn build_summary(data: &CampaignData, constituency_id: Option<&str>) -> DashboardSummary {
    build_summary_at(Local::now(), data, constituency_id)
}

pub fn build_summary_at<Tz: TimeZone>(
    now: DateTime<Tz>,
    data: &CampaignData,
    constituency_id: Option<&str>,
) -> DashboardSummary
where
    Tz::Offset: std::fmt::Display,
{
    let results = booths_with_health(data, constituency_id);
    let metrics = compute_seat_metrics(&results);

    let swing_trend_data = build_swing_trend(&swing_trend_inputs(data, constituency_id));
    let sentiment_shift_data = build_sentiment_from_swing(&swing_trend_data);
    let high_risk_booths = map_to_high_risk_booths(&results, DEFAULT_HIGH_RISK_LIMIT);
    let opportunity_clusters = map_to_opportunity_clusters(&results);
    let ai_strategic_summary = strategic_summary_text(&SummaryContext::new(
        &metrics,
        &high_risk_booths,
        &opportunity_clusters,
    ));

    DashboardSummary {
        constituency_id: constituency_id.map(str::to_string),
        generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, false),
        strategic_summary: metrics,
        vote_share_projection_data: build_vote_share_projection(&vote_share_inputs(
            data,
            constituency_id,
        )),
        turnout_data: build_turnout_data(&turnout_inputs(data, constituency_id)),
        cadre_performance_data: build_cadre_performance(&zone_health(&results)),
        risk_heat_grid_data: build_risk_heat_grid(&results, DEFAULT_HEAT_GRID_COLS),
        swing_trend_data,
        sentiment_shift_data,
        high_risk_booths,
        opportunity_clusters,
        ai_strategic_summary,
    }
}
