//! Reading starting patterns for Game of Life grids

use super::{Grid, GridError};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation. Blank lines are ignored.
pub fn parse_grid_from_string(content: &str) -> Result<Grid, GridError> {
    let cells = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    _ => Err(GridError::InvalidCharacter { ch, x, y }),
                })
                .collect::<Result<Vec<bool>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_cells(cells)
}

/// Load a pattern file into a `width`x`height` grid.
///
/// A file of exactly that size is used as-is; a smaller one is centered.
pub fn load_pattern_into<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<Grid> {
    let pattern = load_grid_from_file(&path)?;
    if pattern.dimensions() == (width, height) {
        return Ok(pattern);
    }

    pattern.centered(width, height).with_context(|| {
        format!(
            "Pattern {} does not fit the configured grid",
            path.as_ref().display()
        )
    })
}
