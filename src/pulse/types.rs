use crate::{
    cli::types::{CompSeasonId, Gameweek},
    error::ResultsError,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;


/// Envelope for `/competitions/{id}/compseasons`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompSeasonsEnvelope {
    #[serde(default)]
    pub content: Vec<CompSeason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompSeason {
    pub id: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl CompSeason {
    pub fn season_id(&self) -> CompSeasonId {
        CompSeasonId::from(self.id)
    }
}

/// Envelope for `/fixtures`.
#[derive(Debug, Clone, Deserialize)]
pub struct FixturesEnvelope {
    #[serde(default)]
    pub content: Vec<Fixture>,
}

/// One upstream fixture record. `teams` is ordered home then away.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub teams: Vec<FixtureTeam>,
    #[serde(default)]
    pub gameweek: Option<FixtureGameweek>,
    #[serde(default)]
    pub kickoff: Option<Kickoff>,
    #[serde(default)]
    pub ground: Option<Ground>,
}

impl Fixture {
    /// Gameweek number; a missing or null gameweek reads as zero.
    pub fn gameweek(&self) -> Gameweek {
        let raw = self
            .gameweek
            .as_ref()
            .and_then(|gw| gw.gameweek)
            .unwrap_or_default();
        Gameweek::new(raw as u32)
    }

    /// Calendar date of kickoff in `tz`, when the payload carries a timestamp.
    pub fn kickoff_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        let millis = self.kickoff.as_ref()?.millis?;
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
            .map(|dt| dt.with_timezone(tz).date_naive())
    }

    pub fn involves(&self, team: &str) -> bool {
        self.teams
            .iter()
            .any(|t| t.team.name.eq_ignore_ascii_case(team.trim()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureTeam {
    #[serde(default)]
    pub score: Option<f64>,
    pub team: TeamDetail,
}

impl FixtureTeam {
    /// Score as sent; null or missing reads as zero.
    pub fn score(&self) -> f64 {
        self.score.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDetail {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureGameweek {
    #[serde(default)]
    pub gameweek: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Kickoff {
    #[serde(default)]
    pub millis: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ground {
    #[serde(default)]
    pub name: Option<String>,
}

/// A finished match ready for display.
///
/// `date` and `venue` are only filled when the payload supplies them. The
/// presenters render home, away and score; the extra fields ride along for
/// callers of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    /// `"H - A"` with both sides truncated to integers.
    pub score: String,
    /// Kickoff label, e.g. `"Sun 19 May 2024, 16:00 BST"`.
    pub date: Option<String>,
    /// Ground name.
    pub venue: Option<String>,
}

/// Render two raw scores as `"H - A"`, truncating any fraction.
pub fn format_score(home: f64, away: f64) -> String {
    format!("{} - {}", home.trunc() as i64, away.trunc() as i64)
}

impl TryFrom<&Fixture> for MatchResult {
    type Error = ResultsError;

    fn try_from(fixture: &Fixture) -> Result<Self, Self::Error> {
        let [home, away] = fixture.teams.as_slice() else {
            return Err(ResultsError::IncompleteFixture {
                teams: fixture.teams.len(),
            });
        };

        Ok(Self {
            home: home.team.name.clone(),
            away: away.team.name.clone(),
            score: format_score(home.score(), away.score()),
            date: fixture.kickoff.as_ref().and_then(|k| k.label.clone()),
            venue: fixture.ground.as_ref().and_then(|g| g.name.clone()),
        })
    }
}
