use crate::game::{Color, ColumnIndex, Grid, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// A player that drops its disk in a uniformly random free column.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic player for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_column(&mut self, color: Color, grid: &Grid) -> ColumnIndex {
        let free = grid.free_columns();
        assert!(!free.is_empty(), "No free column available");
        let column = free[self.rng.random_range(0..free.len())];
        tracing::debug!(%color, %column, "random player chose a column");
        column
    }

    fn name(&self) -> &str {
        "Random"
    }
}
