//! Results command: resolve season, fetch fixtures, render.

use std::io::{self, Write};

use chrono::Local;
use tracing::debug;

use crate::{
    cli::{
        types::{CompSeasonId, OutputFormat},
        Args,
    },
    fixtures::{resolve_current_season, spawn_fetcher, FixtureFilter, FixtureScope},
    output::presenter_for,
    pulse::http::PulseClient,
    Result,
};

use super::resolve_api_url;

/// Parameters for the results command
#[derive(Debug, Clone)]
pub struct ResultsParams {
    pub api_url: Option<String>,
    /// Explicit season; resolved from the API when `None` and not date-scoped.
    pub season: Option<CompSeasonId>,
    pub filter: FixtureFilter,
    pub format: OutputFormat,
}

impl ResultsParams {
    /// Build parameters from parsed arguments, using today's local date for
    /// default week bounds.
    pub fn from_args(args: &Args) -> Result<Self> {
        let today = Local::now().date_naive();
        Ok(Self {
            api_url: args.api_url.clone(),
            season: args.season,
            filter: args.fixture_filter(today)?,
            format: args.output_format(),
        })
    }

    fn scope(&self) -> Option<FixtureScope> {
        match (self.season, self.filter.dates) {
            (Some(season), _) => Some(FixtureScope::Season(season)),
            (None, Some(_)) => Some(FixtureScope::Unscoped),
            (None, None) => None,
        }
    }
}

/// Handle the results command, writing to stdout.
pub async fn handle_results(params: ResultsParams) -> Result<()> {
    run_results(params, io::stdout()).await?;
    Ok(())
}

/// Run the fetch/render pipeline against `out`, returning the number of rows.
///
/// The season (when needed) is resolved before the fetcher starts. Results are
/// presented as they arrive; the table itself is only drawn once the fetcher
/// has reported success, so a failed fetch renders nothing.
pub async fn run_results<W: Write>(params: ResultsParams, out: W) -> Result<usize> {
    let client = PulseClient::new(resolve_api_url(params.api_url.clone()));

    let scope = match params.scope() {
        Some(scope) => scope,
        None => FixtureScope::Season(resolve_current_season(&client).await?),
    };
    debug!(?scope, filter = ?params.filter, format = %params.format, "fetching results");

    let (mut results, fetcher) = spawn_fetcher(client, scope, params.filter);
    let mut presenter = presenter_for(params.format, out);

    while let Some(result) = results.recv().await {
        presenter.present(&result)?;
    }

    let sent = fetcher.await??;
    presenter.finish()?;
    Ok(sent)
}
