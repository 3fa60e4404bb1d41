//! Simulation session state machine

use super::SessionError;
use crate::game_of_life::{empty_grid, step, Grid, GridError};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The edit buffer accepts toggles; nothing is stepped
    Editing,
    /// A copy of the edit buffer is being advanced one generation per tick
    Running { grid: Grid, generation: u64 },
}

/// Owns the edit buffer and, while running, the current generation.
///
/// Every edit and every tick replaces the held grid with a new value, so a grid
/// handed out by reference is never changed underneath the caller.
#[derive(Debug, Clone)]
pub struct Session {
    width: usize,
    height: usize,
    edit_grid: Grid,
    phase: Phase,
}

impl Session {
    /// Start in `Editing` with an all-dead edit buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            edit_grid: empty_grid(width, height),
            phase: Phase::Editing,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn edit_grid(&self) -> &Grid {
        &self.edit_grid
    }

    /// The running generation, or the edit buffer while editing
    pub fn current_grid(&self) -> &Grid {
        match &self.phase {
            Phase::Running { grid, .. } => grid,
            Phase::Editing => &self.edit_grid,
        }
    }

    /// Generations stepped since the last submit; 0 while editing
    pub fn generation(&self) -> u64 {
        match self.phase {
            Phase::Running { generation, .. } => generation,
            Phase::Editing => 0,
        }
    }

    /// Flip one cell of the edit buffer
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.edit_grid = self.edit_grid.toggled(x, y)?;
        log::debug!("toggled cell ({}, {}) -> {}", x, y, self.edit_grid.get(x, y));
        Ok(())
    }

    /// Replace the edit buffer with a caller-built pattern of the same dimensions
    pub fn load(&mut self, grid: Grid) -> Result<(), SessionError> {
        self.ensure_editing()?;
        if grid.dimensions() != (self.width, self.height) {
            return Err(GridError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: grid.width(),
                height: grid.height(),
            }
            .into());
        }
        log::debug!("loaded pattern with {} living cells", grid.living_count());
        self.edit_grid = grid;
        Ok(())
    }

    /// Start running from a copy of the edit buffer
    pub fn submit(&mut self) -> Result<(), SessionError> {
        if self.is_running() {
            return Err(SessionError::AlreadyRunning);
        }
        log::debug!(
            "session running from pattern with {} living cells",
            self.edit_grid.living_count()
        );
        self.phase = Phase::Running {
            grid: self.edit_grid.clone(),
            generation: 0,
        };
        Ok(())
    }

    /// Advance the running grid by one generation
    pub fn tick(&mut self) -> Result<&Grid, SessionError> {
        match &mut self.phase {
            Phase::Running { grid, generation } => {
                *grid = step(grid);
                *generation += 1;
                log::debug!(
                    "generation {}: {} living cells",
                    generation,
                    grid.living_count()
                );
                Ok(&*grid)
            }
            Phase::Editing => Err(SessionError::NotRunning),
        }
    }

    /// Stop running and go back to editing the same starting pattern
    pub fn reset(&mut self) {
        if let Phase::Running { generation, .. } = self.phase {
            log::debug!("session reset after {} generations", generation);
        }
        self.phase = Phase::Editing;
    }

    /// Stop running and wipe the edit buffer
    pub fn clear(&mut self) {
        self.reset();
        self.edit_grid = empty_grid(self.width, self.height);
        log::debug!("edit buffer cleared");
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        if self.is_running() {
            Err(SessionError::NotEditing)
        } else {
            Ok(())
        }
    }
}
