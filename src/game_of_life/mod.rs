//! Game of Life core functionality

pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use engine::{empty_grid, neighbor_count, step};
pub use error::GridError;
pub use grid::Grid;
pub use io::{load_grid_from_file, parse_grid_from_string};
pub use patterns::{find_pattern, Pattern, PATTERNS};
pub use rules::GameOfLifeRules;
