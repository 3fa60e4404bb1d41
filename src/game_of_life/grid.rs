//! Grid representation and utilities for Game of Life

use super::GridError;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moore neighborhood offsets as `(dx, dy)`, the center excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A fixed-size Game of Life grid, stored row-major.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Edges are hard:
/// there is no wrap-around, so border cells simply have fewer neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridShape")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Unchecked serialized form, validated before it becomes a `Grid`
#[derive(Deserialize)]
struct GridShape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<GridShape> for Grid {
    type Error = GridError;

    fn try_from(shape: GridShape) -> Result<Self, Self::Error> {
        let GridShape {
            width,
            height,
            cells,
        } = shape;

        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Grid {
    /// Create a new grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from a 2D boolean array indexed `[y][x]`
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map(Vec::len).ok_or(GridError::EmptyGrid)?;

        if width == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }

        if let Some((row, actual)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRow {
                row,
                actual,
                expected: width,
            });
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to a 1D index
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get cell value at coordinates. Out of bounds cells read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if self.contains(x, y) {
            self.cells[self.index(x, y)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Return a copy of this grid with the cell at `(x, y)` flipped.
    ///
    /// `self` is left untouched; the returned grid owns fresh storage.
    pub fn toggled(&self, x: usize, y: usize) -> Result<Self, GridError> {
        self.check_bounds(x, y)?;
        let mut next = self.clone();
        let idx = next.index(x, y);
        next.cells[idx] = !next.cells[idx];
        Ok(next)
    }

    /// Count living cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Neighbors that fall outside the grid are skipped, never wrapped.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` itself lies outside the grid.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        assert!(
            self.contains(x, y),
            "neighbor count requested for ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.contains(nx, ny).then(|| self.cells[self.index(nx, ny)])
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Get all living cell coordinates as `(x, y)`, in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.get(x, y))
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Copy the live cells into a new `width`x`height` grid with the top-left corner at `(x, y)`
    pub fn placed(&self, width: usize, height: usize, x: usize, y: usize) -> Result<Self, GridError> {
        let fits = |offset: usize, size: usize, limit: usize| {
            offset.checked_add(size).is_some_and(|end| end <= limit)
        };
        if !fits(x, self.width, width) || !fits(y, self.height, height) {
            return Err(GridError::PatternTooLarge {
                pattern_width: self.width,
                pattern_height: self.height,
                x,
                y,
                width,
                height,
            });
        }

        let mut grid = Grid::new(width, height);
        for (px, py) in self.living_cells() {
            grid.set(x + px, y + py, true)?;
        }
        Ok(grid)
    }

    /// Copy the live cells into the middle of a new `width`x`height` grid
    pub fn centered(&self, width: usize, height: usize) -> Result<Self, GridError> {
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.placed(width, height, x, y)
    }

    /// Build a grid directly from row-major cells of the right length
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.get(x, y) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 4);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_bad_shapes() {
        assert_eq!(Grid::from_cells(vec![]), Err(GridError::EmptyGrid));
        assert!(matches!(
            Grid::from_cells(vec![vec![], vec![]]),
            Err(GridError::ZeroDimension { .. })
        ));
        assert_eq!(
            Grid::from_cells(vec![vec![true, false], vec![true]]),
            Err(GridError::RaggedRow {
                row: 1,
                actual: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_coordinates_are_x_then_y() {
        let mut grid = Grid::new(4, 2);
        grid.set(3, 1, true).unwrap();
        assert!(grid.get(3, 1));
        assert!(!grid.get(1, 3));
        assert_eq!(grid.living_cells(), vec![(3, 1)]);
        assert!(grid.set(1, 3, true).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // Corner sees only the two edge cells, the center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(1, 0), 4);
    }

    #[test]
    fn test_no_wrap_around() {
        // Live cells on the far edges would be neighbors of (0, 0) on a torus
        let cells = vec![
            vec![false, false, true],
            vec![false, false, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_bounded() {
        let full = Grid::from_cells(vec![vec![true; 5]; 4]).unwrap();
        for (x, y) in full.living_cells() {
            let n = full.count_neighbors(x, y);
            assert!(n <= 8);
            let in_bounds = NEIGHBOR_OFFSETS
                .iter()
                .filter(|&&(dx, dy)| {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    nx >= 0 && ny >= 0 && (nx as usize) < full.width && (ny as usize) < full.height
                })
                .count();
            assert_eq!(n as usize, in_bounds);
        }
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn test_neighbor_count_center_out_of_bounds_panics() {
        Grid::new(3, 3).count_neighbors(3, 0);
    }

    #[test]
    fn test_toggled_copies() {
        let original = Grid::new(3, 3);
        let toggled = original.toggled(1, 2).unwrap();

        assert!(original.is_empty());
        assert!(toggled.get(1, 2));
        assert_eq!(toggled.living_count(), 1);

        let back = toggled.toggled(1, 2).unwrap();
        assert_eq!(back, original);

        assert_eq!(
            original.toggled(5, 0),
            Err(GridError::OutOfBounds {
                x: 5,
                y: 0,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_new_rejects_zero_dimensions() {
        Grid::new(0, 3);
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let grid: Grid =
            serde_json::from_str(r#"{"width":2,"height":1,"cells":[false,true]}"#).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 0)]);

        let short = serde_json::from_str::<Grid>(r#"{"width":3,"height":3,"cells":[true]}"#);
        assert!(short.unwrap_err().to_string().contains("3x3 grid needs 9 cells"));

        let zero = serde_json::from_str::<Grid>(r#"{"width":0,"height":3,"cells":[]}"#);
        assert!(zero.is_err());
    }

    #[test]
    fn test_serialize_round_trip_keeps_dimensions() {
        let grid = Grid::new(4, 2).toggled(3, 1).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert_eq!(back.dimensions(), (4, 2));
    }

    #[test]
    fn test_placed_and_centered() {
        let shape = Grid::from_cells(vec![vec![true, true, true]]).unwrap();

        let placed = shape.placed(5, 4, 2, 3).unwrap();
        assert_eq!(placed.living_cells(), vec![(2, 3), (3, 3), (4, 3)]);

        let centered = shape.centered(5, 5).unwrap();
        assert_eq!(centered.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        assert!(matches!(
            shape.placed(5, 5, 3, 0),
            Err(GridError::PatternTooLarge { .. })
        ));
        assert!(shape.placed(5, 5, usize::MAX, 0).is_err());
        assert!(shape.placed(5, 5, 0, usize::MAX).is_err());
        assert!(shape.centered(2, 2).is_err());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_cells(vec![vec![true, false]]).unwrap();
        assert_eq!(grid.to_string(), "⬛⬜\n");
    }
}
