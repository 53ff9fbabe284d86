//! Text render hook
//!
//! Draws the walk as a row of cells with the walker marked `R` and the
//! terminals marked `#`, followed by one row per value table.

use std::io::{self, Stdout, Write};

use crate::{
    Result,
    ports::{RenderFrame, RenderHook},
    value_table::ValueTable,
};

pub struct TextRenderer<W: Write> {
    writer: W,
    decimals: usize,
}

impl TextRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            decimals: 3,
        }
    }

    /// Digits after the decimal point in value rows.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn cell_width(&self) -> usize {
        self.decimals + 3
    }
}

impl<W: Write> RenderHook for TextRenderer<W> {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
        let n_states = frame.n_states;
        let width = self.cell_width();
        let decimals = self.decimals;
        let label_width = frame
            .snapshots
            .iter()
            .map(|s| s.label.len())
            .max()
            .unwrap_or(0);
        let is_terminal = |state: usize| state == 0 || state == n_states - 1;

        let walker: Vec<String> = (0..n_states)
            .map(|state| {
                let mark = if state == frame.state {
                    "R"
                } else if is_terminal(state) {
                    "#"
                } else {
                    "."
                };
                format!("{mark:^width$}")
            })
            .collect();
        writeln!(self.writer, "{:label_width$} |{}|", "", walker.join("|"))?;

        for snapshot in frame.snapshots {
            let table = ValueTable::expand(snapshot.values, n_states)?;
            let cells: Vec<String> = table
                .as_slice()
                .iter()
                .enumerate()
                .map(|(state, value)| {
                    if is_terminal(state) {
                        format!("{:^width$}", "#")
                    } else {
                        format!("{value:^width$.decimals$}")
                    }
                })
                .collect();
            writeln!(
                self.writer,
                "{:label_width$} |{}|",
                snapshot.label,
                cells.join("|")
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
