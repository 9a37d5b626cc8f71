use std::fmt;

/// Number of columns in the grid.
pub const COLS: usize = 7;
/// Number of rows in the grid, i.e. the capacity of a column.
pub const ROWS: usize = 6;

/// A column of the grid, `0..COLS`, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnIndex(u8);

/// A row of the grid, `0..ROWS`, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(u8);

impl ColumnIndex {
    /// All columns in ascending order.
    pub const ALL: [ColumnIndex; COLS] = [
        ColumnIndex(0),
        ColumnIndex(1),
        ColumnIndex(2),
        ColumnIndex(3),
        ColumnIndex(4),
        ColumnIndex(5),
        ColumnIndex(6),
    ];

    /// Returns `None` if `ordinal` is not a valid column.
    pub fn new(ordinal: usize) -> Option<Self> {
        (ordinal < COLS).then_some(ColumnIndex(ordinal as u8))
    }

    /// Parse a 1-based column number as typed by a human.
    pub fn from_one_based(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    pub fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// The column to the left, or `None` for the first column.
    pub fn leftward(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::new)
    }

    pub fn all() -> impl DoubleEndedIterator<Item = ColumnIndex> {
        Self::ALL.into_iter()
    }
}

impl RowIndex {
    /// All rows from bottom to top.
    pub const ALL: [RowIndex; ROWS] = [
        RowIndex(0),
        RowIndex(1),
        RowIndex(2),
        RowIndex(3),
        RowIndex(4),
        RowIndex(5),
    ];

    /// Returns `None` if `ordinal` is not a valid row.
    pub fn new(ordinal: usize) -> Option<Self> {
        (ordinal < ROWS).then_some(RowIndex(ordinal as u8))
    }

    pub fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// The row above, or `None` for the top row.
    pub fn upward(self) -> Option<Self> {
        Self::new(self.ordinal() + 1)
    }

    /// The row below, or `None` for the bottom row.
    pub fn downward(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::new)
    }

    pub fn all() -> impl DoubleEndedIterator<Item = RowIndex> {
        Self::ALL.into_iter()
    }
}

/// Columns are shown 1-based, the way players number them.
impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal() + 1)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal() + 1)
    }
}

/// A cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: ColumnIndex,
    pub row: RowIndex,
}

impl Position {
    pub fn new(column: ColumnIndex, row: RowIndex) -> Self {
        Position { column, row }
    }

    /// Build a position from raw ordinals; `None` if either is off-grid.
    pub fn at(column: usize, row: usize) -> Option<Self> {
        Some(Position::new(ColumnIndex::new(column)?, RowIndex::new(row)?))
    }

    /// Dense index into a `COLS * ROWS` table, column-major.
    pub(crate) fn slot(self) -> usize {
        self.column.ordinal() * ROWS + self.row.ordinal()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
