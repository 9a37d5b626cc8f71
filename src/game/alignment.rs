//! Detection of straight same-color runs on a [`Grid`].
//!
//! [`compute_alignments`] walks the grid once, column by column from the
//! left and bottom to top inside each column. For every direction the
//! neighbor that precedes a cell along that direction has already been
//! visited, so a run is either started at the current cell or extended from
//! the run recorded at that neighbor. Runs live in an arena and the per-cell
//! memo stores arena indices.

use std::collections::BTreeSet;

use super::{Color, ColumnIndex, Grid, Position, RowIndex};

/// Length of an alignment that wins the game.
pub const WINNING_SIZE: usize = 4;

/// The four axes a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// The `\` diagonal.
    UpLeftToDownRight,
    /// The `/` diagonal.
    DownLeftToUpRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::UpLeftToDownRight,
        Direction::DownLeftToUpRight,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::UpLeftToDownRight => 2,
            Direction::DownLeftToUpRight => 3,
        }
    }

    /// The neighbor of `position` that comes before it along this direction
    /// in scan order, or `None` at the grid border.
    pub fn backward(self, position: Position) -> Option<Position> {
        let Position { column, row } = position;
        let (column, row) = match self {
            Direction::Horizontal => (column.leftward()?, row),
            Direction::Vertical => (column, row.downward()?),
            Direction::UpLeftToDownRight => (column.leftward()?, row.upward()?),
            Direction::DownLeftToUpRight => (column.leftward()?, row.downward()?),
        };
        Some(Position::new(column, row))
    }
}

/// A maximal run of same-color disks along one direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alignment {
    start: Position,
    direction: Direction,
    positions: BTreeSet<Position>,
}

impl Alignment {
    fn new(start: Position, direction: Direction) -> Self {
        Alignment {
            start,
            direction,
            positions: BTreeSet::from([start]),
        }
    }

    fn extend(&mut self, position: Position) {
        self.positions.insert(position);
    }

    /// First cell of the run in scan order.
    pub fn start(&self) -> Position {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of distinct cells covered.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    pub fn is_winning(&self) -> bool {
        self.size() >= WINNING_SIZE
    }

    /// Color of the run, read from its start cell.
    pub fn color_on(&self, grid: &Grid) -> Option<Color> {
        grid.disk_at(self.start)
    }
}

/// Arena index of the run each direction reaches at a cell.
type Links = [Option<usize>; 4];

/// Compute every alignment of two or more disks on `grid`.
///
/// Alignments come back in the order their first cell is scanned.
pub fn compute_alignments(grid: &Grid) -> Vec<Alignment> {
    let mut arena: Vec<Alignment> = Vec::new();
    let mut memo: [Links; Grid::CAPACITY] = [[None; 4]; Grid::CAPACITY];

    for column in ColumnIndex::all() {
        for row in RowIndex::all() {
            let Some(color) = grid.disk_color_at(column, row) else {
                continue;
            };
            let position = Position::new(column, row);

            for direction in Direction::ALL {
                let predecessor = direction
                    .backward(position)
                    .filter(|&adjacent| grid.disk_at(adjacent) == Some(color))
                    .and_then(|adjacent| memo[adjacent.slot()][direction.index()]);

                let handle = match predecessor {
                    Some(handle) => {
                        arena[handle].extend(position);
                        handle
                    }
                    None => {
                        arena.push(Alignment::new(position, direction));
                        arena.len() - 1
                    }
                };
                memo[position.slot()][direction.index()] = Some(handle);
            }
        }
    }

    arena.into_iter().filter(|a| a.size() > 1).collect()
}

/// The first alignment long enough to win, if any.
pub fn find_winning_alignment(grid: &Grid) -> Option<Alignment> {
    compute_alignments(grid).into_iter().find(Alignment::is_winning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(column: usize, row: usize) -> Position {
        Position::at(column, row).unwrap()
    }

    fn has(alignments: &[Alignment], start: Position, direction: Direction) -> bool {
        alignments
            .iter()
            .any(|a| a.start() == start && a.direction() == direction)
    }

    #[test]
    fn test_empty_grid_has_no_alignments() {
        assert!(compute_alignments(&Grid::new()).is_empty());
    }

    #[test]
    fn test_single_disk_has_no_alignments() {
        let mut grid = Grid::new();
        grid.insert_disk(ColumnIndex::new(3).unwrap(), Color::Red).unwrap();
        assert!(compute_alignments(&grid).is_empty());
    }

    #[test]
    fn test_two_stacked_disks_make_one_vertical_pair() {
        let mut grid = Grid::new();
        let column = ColumnIndex::new(2).unwrap();
        grid.insert_disk(column, Color::Yellow).unwrap();
        grid.insert_disk(column, Color::Yellow).unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 1);
        assert_eq!(alignments[0].direction(), Direction::Vertical);
        assert_eq!(alignments[0].size(), 2);
        assert!(!alignments[0].is_winning());
    }

    #[test]
    fn test_all_aligned_positions_are_contained() {
        let grid = Grid::from_rows([
            "   |   |   |   |   |   |   |   |   ",
            "   |   |   |   |   |   |   |   |   ",
            "   | R |   |   | Y | Y | Y | Y |   ",
        ])
        .unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 1);
        let alignment = &alignments[0];
        assert_eq!(alignment.size(), 4);
        assert_eq!(alignment.start(), pos(3, 0));
        for column in 3..7 {
            assert!(alignment.contains(pos(column, 0)));
        }
        assert!(!alignment.contains(pos(0, 0)));
        assert_eq!(alignment.color_on(&grid), Some(Color::Yellow));
        assert_eq!(find_winning_alignment(&grid).as_ref(), Some(alignment));
    }

    #[test]
    fn test_horizontal_alignments() {
        let grid = Grid::from_rows([
            "   |   |   |   |   |   |   |   |   ",
            "   |   |   |   |   |   |   |   |   ",
            "   | R | R |   | Y | Y | Y | Y |   ",
        ])
        .unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 2);
        assert!(has(&alignments, pos(0, 0), Direction::Horizontal));
        assert!(has(&alignments, pos(3, 0), Direction::Horizontal));
    }

    #[test]
    fn test_vertical_alignments() {
        let grid = Grid::from_rows([
            "   | R |   |   |   |   | Y |   |   ",
            "   | R |   |   | Y |   | Y |   |   ",
            "   | R |   |   | Y |   | Y |   |   ",
        ])
        .unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 3);
        assert!(has(&alignments, pos(0, 0), Direction::Vertical));
        assert!(has(&alignments, pos(3, 0), Direction::Vertical));
        assert!(has(&alignments, pos(5, 0), Direction::Vertical));
        assert!(find_winning_alignment(&grid).is_none());
    }

    #[test]
    fn test_diagonal_alignments() {
        let grid = Grid::from_rows([
            "   |   |   | R |   | R |   |   |   ",
            "   |   |   | Y | R | Y |   |   |   ",
            "   |   |   | R | Y | R |   |   |   ",
        ])
        .unwrap();

        let alignments = compute_alignments(&grid);

        assert!(has(&alignments, pos(2, 0), Direction::DownLeftToUpRight));
        assert!(has(&alignments, pos(2, 2), Direction::UpLeftToDownRight));
        assert!(has(&alignments, pos(2, 1), Direction::UpLeftToDownRight));
        assert!(has(&alignments, pos(3, 0), Direction::DownLeftToUpRight));

        let rising = alignments
            .iter()
            .find(|a| a.start() == pos(2, 0) && a.direction() == Direction::DownLeftToUpRight)
            .unwrap();
        assert_eq!(rising.size(), 3);
        assert!(rising.contains(pos(3, 1)));
        assert!(rising.contains(pos(4, 2)));
    }

    #[test]
    fn test_colors_never_merge() {
        let grid = Grid::from_rows(["   | R | R | Y | Y | R | R |   |   "]).unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 3);
        assert!(alignments.iter().all(|a| a.size() == 2));
    }

    #[test]
    fn test_run_longer_than_four_is_one_alignment() {
        let grid = Grid::from_rows(["   | Y | Y | Y | Y | Y | Y | Y |   "]).unwrap();

        let alignments = compute_alignments(&grid);

        assert_eq!(alignments.len(), 1);
        assert_eq!(alignments[0].size(), 7);
    }

    #[test]
    fn test_backward_neighbor_at_border_is_none() {
        let corner = pos(0, 0);
        for direction in Direction::ALL {
            assert_eq!(direction.backward(corner), None);
        }
        assert_eq!(
            Direction::UpLeftToDownRight.backward(pos(3, 5)),
            None,
            "top row has no upper neighbor"
        );
        assert_eq!(
            Direction::DownLeftToUpRight.backward(pos(3, 2)),
            Some(pos(2, 1))
        );
    }
}
