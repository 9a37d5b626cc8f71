use super::column::Column;
use super::{Color, ColumnIndex, Position, RowIndex, COLS, ROWS};
use crate::error::GameError;

/// The 7x6 playing grid, stored as one [`Column`] per column index.
///
/// Shared references (`&Grid`) are the read-only view handed to players and
/// renderers; only the owner of a `&mut Grid` can drop disks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    columns: [Column; COLS],
}

impl Grid {
    /// Total number of disks a grid can hold.
    pub const CAPACITY: usize = COLS * ROWS;

    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            columns: ColumnIndex::ALL.map(Column::new),
        }
    }

    /// Drop a disk in a column, returns the row where it landed
    pub fn insert_disk(&mut self, column: ColumnIndex, color: Color) -> Result<RowIndex, GameError> {
        self.columns[column.ordinal()].insert(color)
    }

    /// Color of the disk at `(column, row)`, `None` if the cell is empty
    pub fn disk_color_at(&self, column: ColumnIndex, row: RowIndex) -> Option<Color> {
        self.columns[column.ordinal()].disk_at(row)
    }

    pub fn disk_at(&self, position: Position) -> Option<Color> {
        self.disk_color_at(position.column, position.row)
    }

    pub fn column_height(&self, column: ColumnIndex) -> usize {
        self.columns[column.ordinal()].height()
    }

    pub fn is_column_full(&self, column: ColumnIndex) -> bool {
        self.columns[column.ordinal()].is_full()
    }

    /// Columns that can still take a disk, in ascending order.
    /// Empty when the grid is full.
    pub fn free_columns(&self) -> Vec<ColumnIndex> {
        self.columns
            .iter()
            .filter(|column| !column.is_full())
            .map(Column::index)
            .collect()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Column::is_empty)
    }

    /// Number of disks on the grid, i.e. moves played so far
    pub fn size(&self) -> usize {
        self.columns.iter().map(Column::height).sum()
    }

    /// Remove every disk from every column
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(Column::clear);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
