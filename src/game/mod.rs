//! Core Connect Four engine: grid storage, alignment detection, and the game
//! state machine driving two players.

pub mod alignment;
mod color;
mod column;
mod grid;
mod layout;
mod position;
mod state;

pub use alignment::{compute_alignments, find_winning_alignment, Alignment, Direction, WINNING_SIZE};
pub use color::Color;
pub use column::Column;
pub use grid::Grid;
pub use layout::GridBuilder;
pub use position::{ColumnIndex, Position, RowIndex, COLS, ROWS};
pub use state::{Game, GameStatus, Move, Player, Winner};
