//! Text front end: board rendering and the interactive human player.

mod player;
mod render;

pub use player::{ConsolePlayer, LineSource};
pub use render::render_grid;
