//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::Parser;
use types::{time::parse_date, CompSeasonId, DateRange, Gameweek, OutputFormat};

use crate::{fixtures::FixtureFilter, Result};


#[derive(Debug, Parser)]
#[clap(
    name = "pl-results",
    about = "Premier League results from the Pulse football API"
)]
pub struct Args {
    /// Only show fixtures involving this team (case-insensitive full name).
    #[clap(long)]
    pub team: Option<String>,

    /// Only show fixtures from this gameweek.
    #[clap(long, short)]
    pub gameweek: Option<Gameweek>,

    /// Competition season id (resolved from the API when omitted).
    #[clap(long, short)]
    pub season: Option<CompSeasonId>,

    /// Select fixtures by kickoff date instead of by season.
    #[clap(long)]
    pub by_date: bool,

    /// First kickoff date to include, `YYYY-MM-DD` (defaults to this week's Monday).
    #[clap(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Last kickoff date to include, `YYYY-MM-DD` (defaults to this week's Sunday).
    #[clap(long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Output format (defaults to `table`, or `lines` when selecting by date).
    #[clap(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pulse API base URL (or set `PL_RESULTS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Log request details to stderr.
    #[clap(long)]
    pub debug: bool,
}

impl Args {
    /// Date scoping is on when asked for explicitly or when either bound is given.
    pub fn date_scoped(&self) -> bool {
        self.by_date || self.start.is_some() || self.end.is_some()
    }

    /// Resolve the effective date range, if date scoping is on.
    pub fn date_range(&self, today: NaiveDate) -> Result<Option<DateRange>> {
        if !self.date_scoped() {
            return Ok(None);
        }
        DateRange::resolve(self.start, self.end, today).map(Some)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or(if self.date_scoped() {
            OutputFormat::Lines
        } else {
            OutputFormat::Table
        })
    }

    /// Build the client-side fixture filter from the parsed flags.
    pub fn fixture_filter(&self, today: NaiveDate) -> Result<FixtureFilter> {
        Ok(FixtureFilter {
            gameweek: self.gameweek,
            team: self.team.clone(),
            dates: self.date_range(today)?,
        })
    }
}
