use crate::analytics::{SIMULATOR_DELTA_RANGE, compute_seat_metrics, simulate_turnout};
use crate::dashboard::build_summary;
use crate::errors::AppError;
use crate::health::classify_booth;
use crate::insights::leadership_view;
use crate::models::{
    ApiResponse, BoothWithHealth, CampaignData, Constituency, ConstituencyDetail,
    DashboardSummary, LeadershipView, Recommendation, TurnoutSimulation,
};
use crate::queries::{
    booths_with_health, constituencies_by_name, find_constituency, recommendations_for,
};
use crate::state::AppState;
use crate::ui::{ViewMode, render_consultant, render_leadership};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Html,
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Deserialize, Default)]
pub struct ScopeQuery {
    #[serde(rename = "constituencyId")]
    pub constituency_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    #[serde(rename = "constituencyId")]
    pub constituency_id: Option<String>,
    #[serde(default)]
    pub mode: ViewMode,
}

#[derive(Debug, Deserialize)]
pub struct SimulationQuery {
    #[serde(default)]
    pub delta: i64,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Blank ids count as "no filter"; unknown ids are a 404.
fn resolve_scope<'a>(
    data: &'a CampaignData,
    constituency_id: Option<&'a str>,
) -> Result<Option<&'a Constituency>, AppError> {
    match constituency_id.map(str::trim).filter(|id| !id.is_empty()) {
        None => Ok(None),
        Some(id) => find_constituency(data, id)
            .map(Some)
            .ok_or_else(|| AppError::not_found(format!("constituency '{id}' not found"))),
    }
}

pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let constituency = resolve_scope(&state.data, query.constituency_id.as_deref())?;
    let scope = constituency.map(|c| c.id.as_str());
    let title = constituency.map_or("All constituencies", |c| c.name.as_str());

    let summary = build_summary(&state.data, scope);
    let html = match query.mode {
        ViewMode::Consultant => render_consultant(title, &summary),
        ViewMode::Leadership => {
            render_leadership(title, &leadership_view(&summary.strategic_summary))
        }
    };
    Ok(Html(html))
}

pub async fn get_booths(
    State(state): State<AppState>,
    query: Result<Query<ScopeQuery>, QueryRejection>,
) -> ApiResult<Vec<BoothWithHealth>> {
    let Query(query) = query?;
    let scope = resolve_scope(&state.data, query.constituency_id.as_deref())?.map(|c| c.id.as_str());

    let names: HashMap<&str, Option<&String>> = state
        .data
        .booths
        .iter()
        .map(|b| (b.id.as_str(), b.booth_name.as_ref()))
        .collect();

    let booths: Vec<BoothWithHealth> = booths_with_health(&state.data, scope)
        .into_iter()
        .map(|r| BoothWithHealth {
            booth_name: names.get(r.booth_id.as_str()).copied().flatten().cloned(),
            class: classify_booth(r.health_index),
            id: r.booth_id,
            booth_number: r.booth_number,
            constituency_id: r.constituency_id.unwrap_or_default(),
            voter_count: r.voter_count,
            health_index: r.health_index,
            swing_pct: r.swing_pct,
            turnout_pct: r.turnout_pct,
            vote_share_pct: r.vote_share_pct,
            zone: r.zone,
        })
        .collect();

    debug!(count = booths.len(), "booths with health");
    Ok(Json(ApiResponse::ok(booths)))
}

pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    query: Result<Query<ScopeQuery>, QueryRejection>,
) -> ApiResult<DashboardSummary> {
    let Query(query) = query?;
    let scope = resolve_scope(&state.data, query.constituency_id.as_deref())?.map(|c| c.id.as_str());
    Ok(Json(ApiResponse::ok(build_summary(&state.data, scope))))
}

pub async fn get_leadership(
    State(state): State<AppState>,
    query: Result<Query<ScopeQuery>, QueryRejection>,
) -> ApiResult<LeadershipView> {
    let Query(query) = query?;
    let scope = resolve_scope(&state.data, query.constituency_id.as_deref())?.map(|c| c.id.as_str());
    let metrics = compute_seat_metrics(&booths_with_health(&state.data, scope));
    Ok(Json(ApiResponse::ok(leadership_view(&metrics))))
}

pub async fn get_insights(
    State(state): State<AppState>,
    query: Result<Query<ScopeQuery>, QueryRejection>,
) -> ApiResult<Vec<Recommendation>> {
    let Query(query) = query?;
    let scope = query
        .constituency_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    Ok(Json(ApiResponse::ok(recommendations_for(&state.data, scope))))
}

pub async fn get_constituencies(State(state): State<AppState>) -> ApiResult<Vec<Constituency>> {
    Ok(Json(ApiResponse::ok(constituencies_by_name(&state.data))))
}

pub async fn get_constituency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ConstituencyDetail> {
    let constituency = find_constituency(&state.data, &id)
        .ok_or_else(|| AppError::not_found(format!("constituency '{id}' not found")))?;
    let results = booths_with_health(&state.data, Some(constituency.id.as_str()));

    Ok(Json(ApiResponse::ok(ConstituencyDetail {
        constituency: constituency.clone(),
        booth_count: results.len(),
        metrics: compute_seat_metrics(&results),
    })))
}

pub async fn get_turnout_simulation(
    State(state): State<AppState>,
    query: Result<Query<SimulationQuery>, QueryRejection>,
) -> ApiResult<TurnoutSimulation> {
    let Query(query) = query?;
    if !SIMULATOR_DELTA_RANGE.contains(&query.delta) {
        return Err(AppError::bad_request(format!(
            "delta must be between {} and {}",
            SIMULATOR_DELTA_RANGE.start(),
            SIMULATOR_DELTA_RANGE.end()
        )));
    }
    Ok(Json(ApiResponse::ok(simulate_turnout(
        &state.turnout_baseline,
        query.delta,
    ))))
}
