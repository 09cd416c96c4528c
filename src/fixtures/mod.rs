//! Season resolution, fixture filtering and the background fetcher.
//!
//! - `season`: resolve the current competition season
//! - `filter`: client-side gameweek / team / date filtering
//! - `fetcher`: one fixtures request, streamed as `MatchResult`s over a channel

pub mod fetcher;
pub mod filter;
pub mod season;

#[cfg(test)]
mod tests;

pub use fetcher::{emit_results, spawn_fetcher, FixtureScope};
pub use filter::FixtureFilter;
pub use season::resolve_current_season;
