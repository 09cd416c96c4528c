use tracing::debug;

use crate::{cli::types::CompSeasonId, pulse::http::PulseClient, Result, ResultsError};

/// Resolve "the current season" as the first entry of the season list.
///
/// The API lists seasons newest first; that ordering is trusted as-is.
pub async fn resolve_current_season(client: &PulseClient) -> Result<CompSeasonId> {
    let seasons = client.get_comp_seasons().await?;
    let current = seasons.content.first().ok_or(ResultsError::NoSeasons)?;

    debug!(
        season = %current.season_id(),
        label = current.label.as_deref().unwrap_or(""),
        "resolved current season"
    );
    Ok(current.season_id())
}
