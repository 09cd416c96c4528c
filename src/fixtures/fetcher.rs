use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    cli::types::CompSeasonId,
    fixtures::FixtureFilter,
    pulse::{
        http::{FixturesQuery, PulseClient},
        types::{Fixture, MatchResult},
    },
    Result, ResultsError,
};

/// Channel capacity between fetcher and presenter. Tokio has no zero-capacity
/// channel; one slot keeps the producer at most a single result ahead.
pub const HANDOFF_CAPACITY: usize = 1;

/// Which page of fixtures to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureScope {
    /// Fixtures of one competition season.
    Season(CompSeasonId),
    /// Latest fixtures across seasons; narrowed client-side by date.
    Unscoped,
}

impl FixtureScope {
    pub fn query(&self) -> FixturesQuery {
        match self {
            FixtureScope::Season(id) => FixturesQuery::for_season(*id),
            FixtureScope::Unscoped => FixturesQuery::default(),
        }
    }
}

/// Send every fixture that passes `filter` as a `MatchResult`, in page order.
///
/// Fixtures without exactly two teams are logged and skipped. Returns the
/// number of results sent; stops early if the receiver has gone away.
pub async fn emit_results(
    fixtures: Vec<Fixture>,
    filter: &FixtureFilter,
    results: &mpsc::Sender<MatchResult>,
) -> usize {
    let mut sent = 0;

    for fixture in fixtures.iter().filter(|f| filter.matches(f)) {
        let result = match MatchResult::try_from(fixture) {
            Ok(result) => result,
            Err(e) => {
                warn!("skipping fixture: {e}");
                continue;
            }
        };

        if results.send(result).await.is_err() {
            debug!("result receiver dropped, stopping early");
            break;
        }
        sent += 1;
    }

    sent
}

/// Fetch one page of fixtures on a background task.
///
/// The receiver yields results in page order and closes once the task has
/// finished, whether or not anything was emitted. The join handle carries the
/// fetch outcome and the number of results sent.
pub fn spawn_fetcher(
    client: PulseClient,
    scope: FixtureScope,
    filter: FixtureFilter,
) -> (mpsc::Receiver<MatchResult>, JoinHandle<Result<usize>>) {
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);

    let handle = tokio::spawn(async move {
        let page = client.get_fixtures(&scope.query()).await?;
        let total = page.content.len();

        let sent = emit_results(page.content, &filter, &tx).await;
        debug!(total, sent, "fixtures emitted");

        // tx drops here, closing the channel
        Ok::<_, ResultsError>(sent)
    });

    (rx, handle)
}
