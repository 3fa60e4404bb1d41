//! Entry points consumed by a driver: build an empty grid, count neighbors, advance a generation

use super::{GameOfLifeRules, Grid};

/// A fresh grid of the given dimensions with every cell dead
pub fn empty_grid(width: usize, height: usize) -> Grid {
    Grid::new(width, height)
}

/// Live cells among the in-bounds Moore neighbors of `(x, y)`.
///
/// # Panics
///
/// Panics if `(x, y)` is outside the grid.
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    grid.count_neighbors(x, y)
}

/// Advance one generation. The input grid is left as it was.
pub fn step(grid: &Grid) -> Grid {
    GameOfLifeRules::evolve(grid)
}
