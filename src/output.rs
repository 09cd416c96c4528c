//! Rendering of match results to a writer.
//!
//! Two presenters share one trait so the command handler can drain the result
//! channel without caring about format:
//! - [`TablePresenter`] buffers rows and draws a bordered table on `finish`
//! - [`LinePresenter`] writes `home vs away: score` lines as results arrive

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::{cli::types::OutputFormat, pulse::types::MatchResult, Result};


pub const TABLE_HEADER: [&str; 3] = ["HOME", "AWAY", "SCORE"];

/// Consumer side of the result stream.
pub trait Presenter {
    /// Accept one result, in arrival order.
    fn present(&mut self, result: &MatchResult) -> Result<()>;

    /// Called once after the last result.
    fn finish(&mut self) -> Result<()>;
}

/// Build the presenter for `format`, writing to `out`.
pub fn presenter_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Presenter + 'a> {
    match format {
        OutputFormat::Table => Box::new(TablePresenter::new(out)),
        OutputFormat::Lines => Box::new(LinePresenter::new(out)),
    }
}

pub struct LinePresenter<W: Write> {
    out: W,
}

impl<W: Write> LinePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for LinePresenter<W> {
    fn present(&mut self, result: &MatchResult) -> Result<()> {
        writeln!(self.out, "{}", format_line(result))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

pub fn format_line(result: &MatchResult) -> String {
    format!("{} vs {}: {}", result.home, result.away, result.score)
}

pub struct TablePresenter<W: Write> {
    out: W,
    rows: Vec<[String; 3]>,
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn present(&mut self, result: &MatchResult) -> Result<()> {
        self.rows.push([
            result.home.clone(),
            result.away.clone(),
            result.score.clone(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let table = render_table(&self.rows);
        self.out.write_all(table.as_bytes())?;
        self.out.flush()?;
        self.rows.clear();
        Ok(())
    }
}

/// Draw a bordered table; the header is always present, even with no rows.
///
/// ```text
/// +---------+---------+-------+
/// | HOME    | AWAY    | SCORE |
/// +---------+---------+-------+
/// | Arsenal | Everton | 2 - 1 |
/// +---------+---------+-------+
/// ```
pub fn render_table(rows: &[[String; 3]]) -> String {
    let mut widths = TABLE_HEADER.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut table = border.clone();
    table.push_str(&render_row(&TABLE_HEADER, &widths));
    table.push_str(&border);
    if !rows.is_empty() {
        for row in rows {
            table.push_str(&render_row(row, &widths));
        }
        table.push_str(&border);
    }
    table
}

fn render_row<S: AsRef<str>>(cells: &[S; 3], widths: &[usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let pad = width - cell.width();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line.push('\n');
    line
}
