//! HTTP access to the Pulse football API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::CompSeasonId,
    pulse::types::{CompSeasonsEnvelope, FixturesEnvelope},
    Result,
};


/// Base URL of the public Pulse football API.
pub const PULSE_BASE_URL: &str = "https://footballapi.pulselive.com";

/// Premier League competition id.
pub const COMPETITION_ID: u32 = 1;

/// Fixtures requested per call; only the first page is ever read.
pub const PAGE_SIZE: u32 = 40;

/// Status code for completed fixtures.
pub const STATUS_COMPLETED: &str = "C";

/// Parameters for one `/football/fixtures` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixturesQuery {
    /// Restrict to one competition season; `None` for date-scoped queries.
    pub comp_season: Option<CompSeasonId>,
}

impl FixturesQuery {
    pub fn for_season(comp_season: CompSeasonId) -> Self {
        Self {
            comp_season: Some(comp_season),
        }
    }

    /// Query string pairs, in the order the API documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("comps", COMPETITION_ID.to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("sort", "desc".to_string()),
            ("statuses", STATUS_COMPLETED.to_string()),
        ];
        if let Some(season) = self.comp_season {
            params.push(("compSeasons", season.to_string()));
        }
        params
    }
}

/// Thin wrapper over a shared `reqwest::Client` and a base URL.
#[derive(Debug, Clone)]
pub struct PulseClient {
    client: Client,
    base_url: String,
}

impl PulseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the competition's seasons, newest first.
    pub async fn get_comp_seasons(&self) -> Result<CompSeasonsEnvelope> {
        let url = format!(
            "{}/football/competitions/{}/compseasons",
            self.base_url, COMPETITION_ID
        );
        self.get_json(&url, &[]).await
    }

    /// Fetch one page of completed fixtures.
    pub async fn get_fixtures(&self, query: &FixturesQuery) -> Result<FixturesEnvelope> {
        let url = format!("{}/football/fixtures", self.base_url);
        self.get_json(&url, &query.params()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        debug!(url, ?params, "GET");

        // Body is read as text first so transport and decode failures stay
        // distinct error kinds.
        let body = self
            .client
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!(bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}
