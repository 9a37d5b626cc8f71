//! Automated move selection.

mod random;

pub use random::RandomPlayer;
