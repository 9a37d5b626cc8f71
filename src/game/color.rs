use std::fmt;

use serde::{Deserialize, Serialize};

/// The color of a disk, and of the player dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Both colors, in a fixed order usable as an index.
    pub const ALL: [Color; 2] = [Color::Red, Color::Yellow];

    /// Get the other color
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }

    /// Single-letter token used by the text layout and the console board.
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
