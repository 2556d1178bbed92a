use crate::analytics::TurnoutBaseline;
use crate::models::CampaignData;
use std::sync::Arc;

/// Shared by every handler. The data is loaded once and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<CampaignData>,
    pub turnout_baseline: Arc<TurnoutBaseline>,
}

impl AppState {
    pub fn new(data: CampaignData) -> Self {
        Self {
            data: Arc::new(data),
            turnout_baseline: Arc::new(TurnoutBaseline::default()),
        }
    }
}
