//! Built-in starting patterns

use super::{io::parse_grid_from_string, Grid, GridError};

/// A named pattern stored in the same `0`/`1` text form accepted by pattern files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub template: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        template: "111\n",
    },
    Pattern {
        name: "block",
        template: "11\n11\n",
    },
    Pattern {
        name: "beacon",
        template: "1100\n1100\n0011\n0011\n",
    },
    Pattern {
        name: "toad",
        template: "0111\n1110\n",
    },
    Pattern {
        name: "glider",
        template: "010\n001\n111\n",
    },
];

/// Look up a built-in pattern by name (case-insensitive)
pub fn find_pattern(name: &str) -> Result<&'static Pattern, GridError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
}

impl Pattern {
    /// The pattern on its own, cropped to its bounding box
    pub fn grid(&self) -> Result<Grid, GridError> {
        parse_grid_from_string(self.template)
    }

    /// Copy `self` into a new `width`x`height` grid with its top-left corner at `(x, y)`
    pub fn place(&self, width: usize, height: usize, x: usize, y: usize) -> Result<Grid, GridError> {
        self.grid()?.placed(width, height, x, y)
    }

    /// Place the pattern in the middle of a new `width`x`height` grid
    pub fn centered(&self, width: usize, height: usize) -> Result<Grid, GridError> {
        self.grid()?.centered(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::GameOfLifeRules;

    #[test]
    fn test_all_patterns_parse() {
        for pattern in PATTERNS {
            assert!(!pattern.grid().unwrap().is_empty(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_find_pattern() {
        assert_eq!(find_pattern("Glider").unwrap().name, "glider");
        assert_eq!(
            find_pattern("spaceship"),
            Err(GridError::UnknownPattern("spaceship".to_string()))
        );
    }

    #[test]
    fn test_centered_blinker() {
        let grid = find_pattern("blinker").unwrap().centered(5, 5).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_place_rejects_overflow() {
        let beacon = find_pattern("beacon").unwrap();
        assert!(beacon.place(6, 6, 2, 2).is_ok());
        assert!(matches!(
            beacon.place(6, 6, 3, 0),
            Err(GridError::PatternTooLarge { .. })
        ));
        assert!(beacon.centered(3, 3).is_err());
        assert!(beacon.place(6, 6, usize::MAX, 0).is_err());
    }

    #[test]
    fn test_known_periods() {
        let period = |name: &str| {
            let grid = find_pattern(name).unwrap().centered(10, 10).unwrap();
            GameOfLifeRules::oscillation_period(&grid, 8)
        };
        assert_eq!(period("block"), Some(1));
        assert_eq!(period("blinker"), Some(2));
        assert_eq!(period("beacon"), Some(2));
        assert_eq!(period("toad"), Some(2));
        assert_eq!(period("glider"), None);
    }
}
