//! ID types for the Pulse football API.

use crate::error::{Result, ResultsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for competition-season IDs.
///
/// The Pulse API identifies "one year of competition X" with an opaque number.
/// Wrapping it keeps season ids from being mixed up with gameweeks or
/// competition ids when building fixture queries.
///
/// # Examples
///
/// ```rust
/// use pl_results::CompSeasonId;
///
/// let season = CompSeasonId::new(719);
/// assert_eq!(season.as_u32(), 719);
/// assert_eq!(season.to_string(), "719");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompSeasonId(pub u32);

impl CompSeasonId {
    /// Create a new CompSeasonId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<f64> for CompSeasonId {
    /// The API sends ids as JSON floats; the fraction is always zero.
    fn from(raw: f64) -> Self {
        Self(raw as u32)
    }
}

impl fmt::Display for CompSeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompSeasonId {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
