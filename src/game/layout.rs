//! Build a [`Grid`] from a textual, row-by-row layout.
//!
//! Each row is a pipe-delimited line of seven cells between two empty
//! borders, written top row first:
//!
//! ```text
//!    |   |   |   | R | R |   |   |
//!    |   |   | R | Y | R |   |   |
//!    | R | R | Y | R | Y | Y |   |
//! ```
//!
//! Rows are applied bottom-up, so the last line lands on row 0. Disks fall
//! like in a real game: a disk written above an empty cell drops onto the
//! top of its column.

use super::{Color, ColumnIndex, Grid, COLS, ROWS};
use crate::error::LayoutError;

/// Number of `|`-separated tokens in a row: the cells plus two borders.
const TOKENS_PER_ROW: usize = COLS + 2;

type Row = [Option<Color>; COLS];

/// Accumulates rows, top first, and builds the grid in reverse order.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    rows: Vec<Row>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next row down, e.g. `"   | R |   |   |   |   |   | Y |   "`.
    pub fn row(mut self, line: &str) -> Result<Self, LayoutError> {
        self.rows.push(parse_row(line)?);
        Ok(self)
    }

    pub fn build(self) -> Result<Grid, LayoutError> {
        if self.rows.len() > ROWS {
            tracing::warn!(rows = self.rows.len(), "layout has too many rows");
            return Err(LayoutError::TooManyRows {
                rows: self.rows.len(),
            });
        }

        let mut grid = Grid::new();
        for row in self.rows.iter().rev() {
            for (column, cell) in ColumnIndex::all().zip(row) {
                if let Some(color) = cell {
                    grid.insert_disk(column, *color)?;
                }
            }
        }
        Ok(grid)
    }
}

impl Grid {
    /// Build a grid from layout rows, top row first.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter()
            .try_fold(GridBuilder::new(), |builder, line| builder.row(line.as_ref()))?
            .build()
    }
}

fn parse_row(line: &str) -> Result<Row, LayoutError> {
    let tokens: Vec<&str> = line.trim().split('|').collect();
    if tokens.len() != TOKENS_PER_ROW {
        tracing::warn!(line, found = tokens.len(), "malformed layout row");
        return Err(LayoutError::WrongCellCount {
            found: tokens.len(),
        });
    }

    for border in [tokens[0], tokens[TOKENS_PER_ROW - 1]] {
        if !border.trim().is_empty() {
            tracing::warn!(line, border = border.trim(), "layout row has a non-empty border");
            return Err(LayoutError::InvalidCell {
                token: border.trim().to_string(),
            });
        }
    }

    let mut row = [None; COLS];
    for (cell, token) in row.iter_mut().zip(&tokens[1..=COLS]) {
        *cell = parse_cell(token).inspect_err(|_| {
            tracing::warn!(line, token = token.trim(), "layout row has an invalid cell");
        })?;
    }
    Ok(row)
}

fn parse_cell(token: &str) -> Result<Option<Color>, LayoutError> {
    match token.trim() {
        "" => Ok(None),
        "R" => Ok(Some(Color::Red)),
        "Y" => Ok(Some(Color::Yellow)),
        other => Err(LayoutError::InvalidCell {
            token: other.to_string(),
        }),
    }
}
