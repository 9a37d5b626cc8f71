use super::alignment::{find_winning_alignment, Alignment};
use super::{Color, ColumnIndex, Grid, Position};
use crate::error::GameError;

/// Chooses where to drop the next disk.
///
/// Implementations must return one of `grid.free_columns()`; the game
/// trusts the choice and fails the move if the column is full.
pub trait Player {
    /// Pick a column for `color` on the current grid.
    fn select_column(&mut self, color: Color, grid: &Grid) -> ColumnIndex;

    /// Return the player's display name.
    fn name(&self) -> &str;
}

/// A disk that was dropped, and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub position: Position,
}

/// The color that won and the alignment proving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub color: Color,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// No move played yet.
    Initialized,
    /// Moves are possible.
    Running,
    /// Either someone won, or the grid filled up (`winner` is `None`).
    Terminated { winner: Option<Winner> },
}

impl GameStatus {
    /// Classify a grid right after a move.
    pub fn after_move(grid: &Grid) -> GameStatus {
        let winner = find_winning_alignment(grid).and_then(|alignment| {
            alignment
                .color_on(grid)
                .map(|color| Winner { color, alignment })
        });

        if winner.is_some() || grid.is_full() {
            GameStatus::Terminated { winner }
        } else {
            GameStatus::Running
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, GameStatus::Terminated { .. })
    }

    pub fn winner(&self) -> Option<&Winner> {
        match self {
            GameStatus::Terminated { winner } => winner.as_ref(),
            _ => None,
        }
    }
}

/// A game between two players over one grid.
pub struct Game {
    grid: Grid,
    players: [Box<dyn Player>; 2],
    next_color: Color,
    status: GameStatus,
    last_move: Option<Move>,
    moves: usize,
}

impl Game {
    /// Create a game on an empty grid
    pub fn new(red: Box<dyn Player>, yellow: Box<dyn Player>) -> Self {
        Self::with_grid(red, yellow, Grid::new())
    }

    /// Create a game that continues from an existing grid
    pub fn with_grid(red: Box<dyn Player>, yellow: Box<dyn Player>, grid: Grid) -> Self {
        Game {
            grid,
            players: [red, yellow],
            next_color: Color::Red,
            status: GameStatus::Initialized,
            last_move: None,
            moves: 0,
        }
    }

    /// Read-only view of the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Color asked for the next move
    pub fn next_color(&self) -> Color {
        self.next_color
    }

    pub fn is_terminated(&self) -> bool {
        self.status.is_terminated()
    }

    /// The most recent move played through this game
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Moves played through this game. Disks the grid started with are not
    /// counted.
    pub fn moves_played(&self) -> usize {
        self.moves
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        self.players[color.index()].as_ref()
    }

    /// Start the game: `color` moves first, and its move is played now.
    ///
    /// A grid that is already won or full terminates the game without asking
    /// anyone to move.
    pub fn start_by_playing(&mut self, color: Color) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::Initialized {
            return Err(GameError::AlreadyStarted);
        }
        self.next_color = color;

        let status = GameStatus::after_move(&self.grid);
        if status.is_terminated() {
            tracing::info!(
                winner = ?status.winner().map(|w| w.color),
                disks = self.grid.size(),
                "grid already decided, no move played"
            );
            self.status = status.clone();
            return Ok(status);
        }

        tracing::debug!(%color, "game started");
        self.make_move()
    }

    /// Play the next move and return the resulting status.
    pub fn play(&mut self) -> Result<GameStatus, GameError> {
        match self.status {
            GameStatus::Initialized => Err(GameError::NotStarted),
            GameStatus::Terminated { .. } => Err(GameError::Terminated),
            GameStatus::Running => self.make_move(),
        }
    }

    fn make_move(&mut self) -> Result<GameStatus, GameError> {
        let color = self.next_color;
        let player = &mut self.players[color.index()];
        let column = player.select_column(color, &self.grid);
        let row = self.grid.insert_disk(column, color)?;
        self.moves += 1;
        tracing::debug!(
            %color,
            %column,
            %row,
            player = player.name(),
            moves = self.moves,
            "disk dropped"
        );

        let status = GameStatus::after_move(&self.grid);
        if let GameStatus::Terminated { winner } = &status {
            match winner {
                Some(winner) => tracing::info!(
                    color = %winner.color,
                    size = winner.alignment.size(),
                    moves = self.moves,
                    "game won"
                ),
                None => tracing::info!(moves = self.moves, "game drawn"),
            }
        }

        self.last_move = Some(Move {
            color,
            position: Position::new(column, row),
        });
        self.next_color = color.other();
        self.status = status.clone();
        Ok(status)
    }
}
