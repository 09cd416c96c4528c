//! Type-safe wrappers and enums for Pulse football data.

pub mod format;
pub mod ids;
pub mod time;


pub use format::OutputFormat;
pub use ids::CompSeasonId;
pub use time::{week_bounds, DateRange, Gameweek};
