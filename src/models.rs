use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constituency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booth {
    pub id: String,
    pub constituency_id: String,
    pub booth_number: String,
    #[serde(default)]
    pub booth_name: Option<String>,
    #[serde(default)]
    pub voter_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectionData {
    pub id: String,
    pub booth_id: String,
    pub election_year: i32,
    #[serde(default)]
    pub our_votes: u64,
    #[serde(default)]
    pub opponent_votes: u64,
    #[serde(default)]
    pub other_votes: u64,
    #[serde(default)]
    pub total_turnout: u64,
    #[serde(default)]
    pub swing_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Swing,
    Turnout,
    Risk,
    Opportunity,
    Campaign,
}

/// Declaration order is the display order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(default)]
    pub constituency_id: Option<String>,
    pub recommendation_type: RecommendationType,
    #[serde(default)]
    pub priority: Priority,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Everything the dashboard reads, as stored in the data file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampaignData {
    #[serde(default)]
    pub constituencies: Vec<Constituency>,
    #[serde(default)]
    pub booths: Vec<Booth>,
    #[serde(default)]
    pub election_data: Vec<ElectionData>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// One booth's latest election observation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoothElectionRow {
    pub booth_id: String,
    pub booth_number: String,
    pub our_votes: u64,
    pub opponent_votes: u64,
    pub total_turnout: u64,
    pub voter_count: u64,
    pub swing_pct: Option<f64>,
    pub region: Option<String>,
    pub constituency_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoothHealthResult {
    pub booth_id: String,
    pub booth_number: String,
    pub health_index: f64,
    pub swing_pct: f64,
    pub turnout_pct: f64,
    pub vote_share_pct: f64,
    pub zone: String,
    pub constituency_id: Option<String>,
    pub voter_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothClass {
    Risk,
    Neutral,
    Opportunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeatMetrics {
    pub seat_health_score: f64,
    pub avg_booth_health_index: f64,
    pub risk_zone_count: usize,
    pub opportunity_zone_count: usize,
    pub cadre_performance_index: f64,
    pub turnout_sensitivity_score: f64,
    pub avg_swing: f64,
}

#[derive(Debug, Clone)]
pub struct SwingTrendInput {
    pub period: String,
    pub swing: f64,
    pub projection: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct VoteShareInput {
    pub booth_name: String,
    pub our_votes: u64,
    pub opponent_votes: u64,
    pub projected: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TurnoutInput {
    pub year: String,
    pub turnout: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneHealth {
    pub name: String,
    pub avg_health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingTrendPoint {
    pub name: String,
    pub swing: f64,
    pub projection: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteShareProjectionPoint {
    pub name: String,
    pub our_votes: u64,
    pub opponent_votes: u64,
    pub projected: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoutPoint {
    pub name: String,
    pub turnout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub name: String,
    pub favorable: i64,
    pub neutral: i64,
    pub unfavorable: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadrePerformancePoint {
    pub name: String,
    pub performance: i64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskBooth {
    pub booth: String,
    pub zone: String,
    pub swing: f64,
    pub turnout: i64,
    pub health: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Potential {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCluster {
    pub cluster: String,
    pub zone: String,
    pub booths: usize,
    pub avg_swing: f64,
    pub potential: Potential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub constituency_id: Option<String>,
    pub generated_at: String,
    pub strategic_summary: SeatMetrics,
    pub swing_trend_data: Vec<SwingTrendPoint>,
    pub vote_share_projection_data: Vec<VoteShareProjectionPoint>,
    pub turnout_data: Vec<TurnoutPoint>,
    pub sentiment_shift_data: Vec<SentimentPoint>,
    pub cadre_performance_data: Vec<CadrePerformancePoint>,
    pub risk_heat_grid_data: Vec<Vec<i64>>,
    pub high_risk_booths: Vec<HighRiskBooth>,
    pub opportunity_clusters: Vec<OpportunityCluster>,
    pub ai_strategic_summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    #[serde(rename = "Good shape")]
    GoodShape,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
    #[serde(rename = "At risk")]
    AtRisk,
}

impl SeatStatus {
    pub fn label(self) -> &'static str {
        match self {
            SeatStatus::GoodShape => "Good shape",
            SeatStatus::NeedsAttention => "Needs attention",
            SeatStatus::AtRisk => "At risk",
        }
    }
}

/// Simplified dashboard for the leadership audience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipView {
    pub seat_health: f64,
    pub status: SeatStatus,
    pub risk_booths: usize,
    pub opportunity_booths: usize,
    pub avg_swing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoothWithHealth {
    pub id: String,
    pub booth_number: String,
    pub booth_name: Option<String>,
    pub constituency_id: String,
    pub voter_count: u64,
    pub health_index: f64,
    pub swing_pct: f64,
    pub turnout_pct: f64,
    pub vote_share_pct: f64,
    pub zone: String,
    pub class: BoothClass,
}

#[derive(Debug, Serialize)]
pub struct ConstituencyDetail {
    pub constituency: Constituency,
    pub booth_count: usize,
    pub metrics: SeatMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoutSimulationPoint {
    pub name: String,
    pub turnout: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoutSimulation {
    pub turnout_delta: i64,
    pub projected_margin: f64,
    pub simulated: Vec<TurnoutSimulationPoint>,
    pub history: Vec<TurnoutSimulationPoint>,
}

/// `{success, data}` / `{success, error}` envelope used by every JSON route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
