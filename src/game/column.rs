use super::{Color, ColumnIndex, RowIndex, ROWS};
use crate::error::GameError;

/// A single column of the grid: a bounded stack of disks, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    index: ColumnIndex,
    disks: [Option<Color>; ROWS],
    height: usize,
}

impl Column {
    /// Create an empty column
    pub fn new(index: ColumnIndex) -> Self {
        Column {
            index,
            disks: [None; ROWS],
            height: 0,
        }
    }

    pub fn index(&self) -> ColumnIndex {
        self.index
    }

    /// Push a disk on top of the column, returns the row where it landed
    pub fn insert(&mut self, color: Color) -> Result<RowIndex, GameError> {
        let row = RowIndex::new(self.height).ok_or(GameError::ColumnFull { column: self.index })?;
        self.disks[self.height] = Some(color);
        self.height += 1;
        Ok(row)
    }

    /// Color at `row`, or `None` if the column is not that tall yet
    pub fn disk_at(&self, row: RowIndex) -> Option<Color> {
        self.disks[row.ordinal()]
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn is_full(&self) -> bool {
        self.height >= ROWS
    }

    /// Remove every disk
    pub fn clear(&mut self) {
        self.disks = [None; ROWS];
        self.height = 0;
    }
}
