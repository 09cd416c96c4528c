//! Premier League Results CLI Library
//!
//! Fetches completed Premier League fixtures from the public Pulse football
//! API and renders them as a bordered table or as plain lines.
//!
//! ## Features
//!
//! - **Season Resolution**: the current competition season is looked up
//!   automatically unless one is given
//! - **Client-side Filtering**: by gameweek, by team, or by kickoff date range
//! - **Streaming Pipeline**: a background task fetches and filters fixtures
//!   while the presenter renders them in arrival order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pl_results::{commands::results::*, fixtures::FixtureFilter, Gameweek, OutputFormat};
//!
//! # async fn example() -> pl_results::Result<()> {
//! let params = ResultsParams {
//!     api_url: None,
//!     season: None,
//!     filter: FixtureFilter {
//!         gameweek: Some(Gameweek::new(38)),
//!         ..Default::default()
//!     },
//!     format: OutputFormat::Table,
//! };
//!
//! handle_results(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the tool at a different API host (e.g. a local mock):
//! ```bash
//! export PL_RESULTS_API_URL=http://localhost:8080
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod output;
pub mod pulse;

// Re-export commonly used types
pub use cli::types::{CompSeasonId, DateRange, Gameweek, OutputFormat};
pub use error::{Result, ResultsError};
pub use pulse::types::MatchResult;

pub const API_URL_ENV_VAR: &str = "PL_RESULTS_API_URL";
