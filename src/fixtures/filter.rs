use chrono::Local;

use crate::{
    cli::types::{DateRange, Gameweek},
    pulse::types::Fixture,
};

/// Client-side fixture filter. Every unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureFilter {
    pub gameweek: Option<Gameweek>,
    /// Case-insensitive full team name, matched against home or away.
    pub team: Option<String>,
    pub dates: Option<DateRange>,
}

impl FixtureFilter {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        if let Some(gameweek) = self.gameweek {
            if fixture.gameweek() != gameweek {
                return false;
            }
        }

        if let Some(team) = &self.team {
            if !fixture.involves(team) {
                return false;
            }
        }

        // Range bounds are local calendar dates, so kickoff is read in the
        // local zone too. Fixtures with no kickoff time can't be placed.
        if let Some(range) = &self.dates {
            match fixture.kickoff_date_in(&Local) {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }

        true
    }
}
