//! # Connect Four
//!
//! A Connect Four engine on a 7x6 grid with pluggable move selection,
//! plus a text front end.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, alignment detection, state machine
//! - [`ai`]: Automated players
//! - [`console`]: Text rendering and the interactive human player
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
