// patterns.rs - Well-known seeds, as offsets from their top-left corner

use crate::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Plus",
        cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Looks a pattern up by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Height and width of the pattern's bounding box.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| (h.max(row + 1), w.max(col + 1)))
    }

    /// Top-left corner that centres the pattern in a `rows` x `cols` grid.
    pub fn centered_origin(&self, rows: usize, cols: usize) -> (usize, usize) {
        let (h, w) = self.bounds();
        (rows.saturating_sub(h) / 2, cols.saturating_sub(w) / 2)
    }

    /// Brings the pattern's cells to life with its top-left corner at
    /// `origin`. Cells that land outside the grid are skipped.
    ///
    /// Returns how many cells were placed.
    pub fn stamp(&self, grid: &mut Grid, origin: (usize, usize)) -> usize {
        let (top, left) = origin;
        let mut placed = 0;
        for &(row, col) in self.cells {
            let (Some(row), Some(col)) = (top.checked_add(row), left.checked_add(col)) else {
                continue;
            };
            if grid.set(row, col, true).is_ok() {
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_findable() {
        let names: HashSet<_> = PATTERNS.iter().map(|p| p.name.to_lowercase()).collect();
        assert_eq!(names.len(), PATTERNS.len());
        for pattern in PATTERNS {
            let found = Pattern::find(&pattern.name.to_uppercase()).unwrap();
            assert_eq!(found.name, pattern.name);
        }
        assert!(Pattern::find("no such thing").is_none());
    }

    #[test]
    fn cells_are_distinct() {
        for pattern in PATTERNS {
            let unique: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn bounds_match_known_sizes() {
        assert_eq!(Pattern::find("glider").unwrap().bounds(), (3, 3));
        assert_eq!(Pattern::find("pulsar").unwrap().bounds(), (13, 13));
        assert_eq!(Pattern::find("gosper glider gun").unwrap().bounds(), (9, 36));
    }

    #[test]
    fn stamp_clips_at_the_edges() {
        let blinker = Pattern::find("blinker").unwrap();
        let mut grid = Grid::new(4, 4);
        assert_eq!(blinker.stamp(&mut grid, (3, 2)), 2);
        assert_eq!(grid.render(), "0 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 1 1");
    }

    #[test]
    fn stamp_far_past_the_edge_places_nothing() {
        let glider = Pattern::find("glider").unwrap();
        let mut grid = Grid::new(4, 4);
        assert_eq!(glider.stamp(&mut grid, (usize::MAX, usize::MAX)), 0);
        assert_eq!(glider.stamp(&mut grid, (0, usize::MAX - 1)), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn plus_reproduces_the_classic_seed() {
        let mut grid = Grid::new(4, 4);
        let plus = Pattern::find("plus").unwrap();
        assert_eq!(plus.stamp(&mut grid, (0, 0)), 5);
        assert_eq!(
            grid,
            Grid::from_rows([[0, 1, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]).unwrap()
        );
    }

    #[test]
    fn centered_origin_fits_or_pins_to_corner() {
        let glider = Pattern::find("glider").unwrap();
        assert_eq!(glider.centered_origin(9, 11), (3, 4));
        assert_eq!(glider.centered_origin(2, 2), (0, 0));
    }
}
