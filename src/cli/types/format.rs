//! Output format selection.

use std::fmt;

/// How match results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bordered table with HOME / AWAY / SCORE columns
    Table,
    /// One `home vs away: score` line per match
    Lines,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Lines => "lines",
        };
        write!(f, "{}", s)
    }
}
