//! Grid representation for Game of Life boards
//!
//! A grid has `width` rows of `height` cells each, matching the input file
//! layout (`width` lines with `height` tokens). Cells are addressed as
//! `(x, y)` where `x` indexes the row and `y` the column, the same scheme
//! the SAT variable arena uses. Edges are hard boundaries: there is no
//! wraparound, out-of-range neighbors simply do not exist.

use crate::error::SolverError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from row-major nested booleans
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, SolverError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(SolverError::malformed("grid cannot be empty"));
        }

        let width = rows.len();
        let height = rows[0].len();

        for (x, row) in rows.iter().enumerate() {
            if row.len() != height {
                return Err(SolverError::malformed(format!(
                    "row {} has {} cells, expected {}",
                    x,
                    row.len(),
                    height
                )));
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    /// Get cell value; coordinates outside the grid read as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[self.index(x, y)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), SolverError> {
        if x >= self.width || y >= self.height {
            return Err(SolverError::malformed(format!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors of a cell, clipping at grid edges
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dx in [-1isize, 0, 1] {
            for dy in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = x as isize + dx;
                let ny = y as isize + dy;

                if nx >= 0
                    && nx < self.width as isize
                    && ny >= 0
                    && ny < self.height as isize
                    && self.cells[self.index(nx as usize, ny as usize)]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total living cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Row-major cell values, one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.height)
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.width * self.height);
        self.cells = cells;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&cell| if cell { "*" } else { "." })
                .join(" ");
            writeln!(f, "{}", line)?;
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
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_grid_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.width, 2);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.live_count(), 3);
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(grid.get(1, 1));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(Grid::from_rows(rows).is_err());
    }

    #[test]
    fn test_out_of_bounds_reads_dead() {
        let grid = Grid::new(2, 2);
        assert!(!grid.get(5, 5));
    }

    #[test]
    fn test_neighbor_counting_clips_at_edges() {
        let rows = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // Corner sees only (0,1), (1,0), (1,1); center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
    }

    #[test]
    fn test_display_uses_star_dot_tokens() {
        let grid = Grid::from_rows(vec![vec![true, false]]).unwrap();
        assert_eq!(grid.to_string(), "* .\n");
    }
}
