//! Error types for the Premier League results CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ResultsError>;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pulse API returned no competition seasons")]
    NoSeasons,

    #[error("Fixture has {teams} team entries, expected 2")]
    IncompleteFixture { teams: usize },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Failed to parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Fixture fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
