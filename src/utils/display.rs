//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use serde::Serialize;

/// One generation as emitted by the JSON output format
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub living_count: usize,
    pub living_cells: Vec<(usize, usize)>,
}

impl GenerationSnapshot {
    pub fn new(grid: &Grid, generation: u64) -> Self {
        Self {
            generation,
            width: grid.width(),
            height: grid.height(),
            living_count: grid.living_count(),
            living_cells: grid.living_cells(),
        }
    }
}

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Render one generation in the requested output format
    pub fn format_generation(
        grid: &Grid,
        generation: u64,
        format: OutputFormat,
        show_header: bool,
    ) -> Result<String> {
        let mut output = String::new();

        match format {
            OutputFormat::Text => {
                if show_header {
                    output.push_str(&format!(
                        "Generation {} (Living: {}):\n",
                        generation,
                        grid.living_count()
                    ));
                }
                output.push_str(&Self::format_grid_compact(grid));
            }
            OutputFormat::Coordinates => {
                if show_header {
                    output.push_str(&format!("Generation {}: ", generation));
                }
                let cells: Vec<String> = grid
                    .living_cells()
                    .iter()
                    .map(|(x, y)| format!("({},{})", x, y))
                    .collect();
                output.push_str(&cells.join(" "));
                output.push('\n');
            }
            OutputFormat::Json => {
                let snapshot = GenerationSnapshot::new(grid, generation);
                output.push_str(
                    &serde_json::to_string(&snapshot).context("Failed to serialize generation")?,
                );
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.get(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Live neighbor count of every cell, one digit per cell
    pub fn format_neighbor_counts(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let n = grid.count_neighbors(x, y);
                output.push(char::from(b'0' + n));
            }
            output.push('\n');
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
