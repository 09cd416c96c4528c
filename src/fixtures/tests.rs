//! Unit tests for season resolution, filtering and the fetcher task

use super::*;
use crate::{
    cli::types::{CompSeasonId, DateRange, Gameweek},
    pulse::{http::PulseClient, types::Fixture},
    ResultsError,
};
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn fixture_json(home: &str, away: &str, gameweek: u32) -> Value {
    json!({
        "gameweek": { "gameweek": gameweek as f64, "compSeason": { "id": 578.0 } },
        "teams": [
            { "team": { "name": home }, "score": 2.0 },
            { "team": { "name": away }, "score": 1.0 }
        ]
    })
}

fn fixture(home: &str, away: &str, gameweek: u32) -> Fixture {
    serde_json::from_value(fixture_json(home, away, gameweek)).unwrap()
}

fn kickoff_fixture(home: &str, away: &str, millis: f64) -> Fixture {
    serde_json::from_value(json!({
        "kickoff": { "millis": millis },
        "teams": [
            { "team": { "name": home }, "score": 0.0 },
            { "team": { "name": away }, "score": 0.0 }
        ]
    }))
    .unwrap()
}

/// Run `emit_results` and drain everything it sent.
async fn emit_and_collect(fixtures: Vec<Fixture>, filter: &FixtureFilter) -> (usize, Vec<String>) {
    let (tx, mut rx) = mpsc::channel(fetcher::HANDOFF_CAPACITY);
    let filter = filter.clone();
    let producer = tokio::spawn(async move { emit_results(fixtures, &filter, &tx).await });

    let mut homes = Vec::new();
    while let Some(result) = rx.recv().await {
        homes.push(result.home);
    }
    (producer.await.unwrap(), homes)
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FixtureFilter::default();
        assert!(filter.matches(&fixture("Arsenal", "Everton", 38)));
    }

    #[test]
    fn test_gameweek_filter() {
        let filter = FixtureFilter {
            gameweek: Some(Gameweek::new(2)),
            ..Default::default()
        };
        assert!(filter.matches(&fixture("Arsenal", "Everton", 2)));
        assert!(!filter.matches(&fixture("Arsenal", "Everton", 3)));
    }

    #[test]
    fn test_gameweek_zero_is_a_real_filter() {
        let filter = FixtureFilter {
            gameweek: Some(Gameweek::new(0)),
            ..Default::default()
        };
        assert!(!filter.matches(&fixture("Arsenal", "Everton", 1)));
    }

    #[test]
    fn test_fixture_without_gameweek_counts_as_gameweek_zero() {
        let no_gameweek = kickoff_fixture("Arsenal", "Everton", 0.0);

        let week_one = FixtureFilter {
            gameweek: Some(Gameweek::new(1)),
            ..Default::default()
        };
        assert!(!week_one.matches(&no_gameweek));

        let week_zero = FixtureFilter {
            gameweek: Some(Gameweek::new(0)),
            ..Default::default()
        };
        assert!(week_zero.matches(&no_gameweek));
    }

    #[test]
    fn test_team_filter_matches_home_or_away() {
        let filter = FixtureFilter {
            team: Some("chelsea".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&fixture("Chelsea", "Bournemouth", 38)));
        assert!(filter.matches(&fixture("Brighton and Hove Albion", "Chelsea", 37)));
        assert!(!filter.matches(&fixture("Arsenal", "Everton", 38)));
    }

    #[test]
    fn test_date_filter() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 19).unwrap(),
        )
        .unwrap();
        let filter = FixtureFilter {
            dates: Some(range),
            ..Default::default()
        };

        // 2024-05-15 12:00 UTC and 2024-05-11 11:30 UTC: same side of the
        // range in every time zone
        assert!(filter.matches(&kickoff_fixture("Arsenal", "Everton", 1715774400000.0)));
        assert!(!filter.matches(&kickoff_fixture("Fulham", "Man City", 1715427000000.0)));
        // No kickoff at all
        assert!(!filter.matches(&fixture("Arsenal", "Everton", 38)));
    }

    #[test]
    fn test_date_filter_reads_kickoff_in_local_time() {
        // 2024-05-20 01:00 UTC; its local date differs from the UTC date
        // anywhere west of Greenwich
        let late = kickoff_fixture("Crystal Palace", "Aston Villa", 1716166800000.0);
        let local_date = late.kickoff_date_in(&Local).unwrap();

        let filter = FixtureFilter {
            dates: Some(DateRange::new(local_date, local_date).unwrap()),
            ..Default::default()
        };
        assert!(filter.matches(&late));

        let filter = FixtureFilter {
            dates: Some(DateRange::resolve(None, None, local_date).unwrap()),
            ..Default::default()
        };
        assert!(filter.matches(&late));
    }

    #[test]
    fn test_criteria_combine() {
        let filter = FixtureFilter {
            gameweek: Some(Gameweek::new(38)),
            team: Some("Arsenal".to_string()),
            dates: None,
        };
        assert!(filter.matches(&fixture("Arsenal", "Everton", 38)));
        assert!(!filter.matches(&fixture("Arsenal", "Everton", 37)));
        assert!(!filter.matches(&fixture("Brentford", "Newcastle United", 38)));
    }
}

#[cfg(test)]
mod emit_tests {
    use super::*;

    #[tokio::test]
    async fn test_gameweek_filter_keeps_order() {
        let fixtures = vec![
            fixture("A", "B", 1),
            fixture("C", "D", 2),
            fixture("E", "F", 2),
            fixture("G", "H", 3),
        ];
        let filter = FixtureFilter {
            gameweek: Some(Gameweek::new(2)),
            ..Default::default()
        };

        let (sent, homes) = emit_and_collect(fixtures, &filter).await;
        assert_eq!(sent, 2);
        assert_eq!(homes, vec!["C", "E"]);
    }

    #[tokio::test]
    async fn test_unfiltered_emits_in_page_order() {
        let fixtures = vec![
            fixture("Z", "Y", 5),
            fixture("A", "B", 4),
            fixture("M", "N", 6),
        ];

        let (sent, homes) = emit_and_collect(fixtures, &FixtureFilter::default()).await;
        assert_eq!(sent, 3);
        assert_eq!(homes, vec!["Z", "A", "M"]);
    }

    #[tokio::test]
    async fn test_empty_page_still_closes_channel() {
        let (sent, homes) = emit_and_collect(Vec::new(), &FixtureFilter::default()).await;
        assert_eq!(sent, 0);
        assert!(homes.is_empty());
    }

    #[tokio::test]
    async fn test_everything_filtered_still_closes_channel() {
        let filter = FixtureFilter {
            gameweek: Some(Gameweek::new(99)),
            ..Default::default()
        };
        let (sent, homes) = emit_and_collect(vec![fixture("A", "B", 1)], &filter).await;
        assert_eq!(sent, 0);
        assert!(homes.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_fixture_is_skipped() {
        let broken: Fixture = serde_json::from_value(json!({
            "teams": [{ "team": { "name": "Lonely" }, "score": 1.0 }]
        }))
        .unwrap();
        let fixtures = vec![fixture("A", "B", 1), broken, fixture("C", "D", 1)];

        let (sent, homes) = emit_and_collect(fixtures, &FixtureFilter::default()).await;
        assert_eq!(sent, 2);
        assert_eq!(homes, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_dropped_receiver_stops_emission() {
        let (tx, rx) = mpsc::channel(fetcher::HANDOFF_CAPACITY);
        drop(rx);

        let sent = emit_results(
            vec![fixture("A", "B", 1), fixture("C", "D", 1)],
            &FixtureFilter::default(),
            &tx,
        )
        .await;
        assert_eq!(sent, 0);
    }
}

#[cfg(test)]
mod fetcher_tests {
    use super::*;

    #[test]
    fn test_scope_query() {
        let season = FixtureScope::Season(CompSeasonId::new(578)).query();
        assert_eq!(season.comp_season, Some(CompSeasonId::new(578)));
        assert_eq!(FixtureScope::Unscoped.query().comp_season, None);
    }

    #[tokio::test]
    async fn test_spawn_fetcher_streams_then_closes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/football/fixtures"))
            .and(query_param("compSeasons", "578"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    fixture_json("Arsenal", "Everton", 38),
                    fixture_json("Brentford", "Newcastle United", 38),
                    fixture_json("Luton Town", "Fulham", 37)
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = PulseClient::new(mock_server.uri());
        let (mut rx, handle) = spawn_fetcher(
            client,
            FixtureScope::Season(CompSeasonId::new(578)),
            FixtureFilter::default(),
        );

        let mut seen = Vec::new();
        while let Some(result) = rx.recv().await {
            seen.push((result.home, result.away, result.score));
        }

        assert_eq!(handle.await.unwrap().unwrap(), 3);
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[1],
            (
                "Brentford".to_string(),
                "Newcastle United".to_string(),
                "2 - 1".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_spawn_fetcher_failure_emits_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/football/fixtures"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = PulseClient::new(mock_server.uri());
        let (mut rx, handle) =
            spawn_fetcher(client, FixtureScope::Unscoped, FixtureFilter::default());

        assert!(rx.recv().await.is_none());
        assert!(matches!(handle.await.unwrap(), Err(ResultsError::Http(_))));
    }
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_current_season_takes_first_entry() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/football/competitions/1/compseasons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    { "label": "2024/25", "id": 719.0 },
                    { "label": "2023/24", "id": 578.0 }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = PulseClient::new(mock_server.uri());
        let season = resolve_current_season(&client).await.unwrap();
        assert_eq!(season, CompSeasonId::new(719));
    }

    #[tokio::test]
    async fn test_resolve_current_season_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/football/competitions/1/compseasons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
            .mount(&mock_server)
            .await;

        let client = PulseClient::new(mock_server.uri());
        assert!(matches!(
            resolve_current_season(&client).await,
            Err(ResultsError::NoSeasons)
        ));
    }

    #[tokio::test]
    async fn test_resolve_current_season_transport_error() {
        let client = PulseClient::new("http://127.0.0.1:9");
        assert!(matches!(
            resolve_current_season(&client).await,
            Err(ResultsError::Http(_))
        ));
    }
}
