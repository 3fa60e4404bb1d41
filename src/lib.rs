//! Conway's Game of Life engine
//!
//! A fixed-size grid with hard edges, advanced one generation at a time under the
//! B3/S23 rule, plus the editing/running session a driver needs around it.

pub mod config;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{empty_grid, neighbor_count, step, GameOfLifeRules, Grid, GridError};
pub use session::{Phase, Session, SessionError};
