use crate::models::CampaignData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Loads the campaign data file. A missing or unreadable file yields an
/// empty dataset so the dashboard still serves all-zero metrics.
pub async fn load_data(path: &Path) -> CampaignData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<CampaignData>(&bytes) {
            Ok(data) => {
                info!(
                    constituencies = data.constituencies.len(),
                    booths = data.booths.len(),
                    election_rows = data.election_data.len(),
                    recommendations = data.recommendations.len(),
                    "loaded campaign data from {}",
                    path.display()
                );
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                CampaignData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("data file {} not found, starting empty", path.display());
            CampaignData::default()
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            CampaignData::default()
        }
    }
}
