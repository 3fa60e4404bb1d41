//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Conway's B3/S23 rule engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to evolve the grid one generation forward.
    ///
    /// The result is built in fresh storage and every cell reads only `current`,
    /// so the input is never observed half-updated.
    pub fn evolve(current: &Grid) -> Grid {
        let width = current.width();

        let next_cells: Vec<bool> = (0..current.height())
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..width).map(move |x| {
                    Self::should_be_alive(current.get(x, y), current.count_neighbors(x, y))
                })
            })
            .collect();

        let next = Grid::from_raw(width, current.height(), next_cells);
        log::trace!(
            "evolved {}x{} grid: {} -> {} living cells",
            width,
            current.height(),
            current.living_count(),
            next.living_count()
        );
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// A pattern is a still life if one step leaves it unchanged
    pub fn is_still_life(grid: &Grid) -> bool {
        Self::evolve(grid) == *grid
    }

    /// Smallest period `p` in `1..=max_period` such that `p` steps return the grid to itself.
    ///
    /// Still lifes (including the empty grid) have period 1.
    pub fn oscillation_period(grid: &Grid, max_period: usize) -> Option<usize> {
        let mut current = grid.clone();
        for period in 1..=max_period {
            current = Self::evolve(&current);
            if current == *grid {
                return Some(period);
            }
        }
        None
    }
}
