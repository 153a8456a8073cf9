//! Forward Game of Life rules
//!
//! Used by the validator and the `simulate` command to check discovered
//! initial boards by direct simulation. The SAT encoder never calls this;
//! it encodes the transition relation symbolically.

use super::Grid;
use rayon::prelude::*;

pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Evolve the grid one generation forward
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::new(current.width, current.height);

        let next_cells: Vec<bool> = (0..current.width)
            .into_par_iter()
            .flat_map_iter(|x| {
                (0..current.height).map(move |y| {
                    let neighbors = current.count_neighbors(x, y);
                    Self::should_be_alive(current.get(x, y), neighbors)
                })
            })
            .collect();

        next.set_cells(next_cells);
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// The update rule: survive on 2 or 3 live neighbors, birth on exactly 3
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!(
            (current_state, neighbor_count),
            (true, 2) | (true, 3) | (false, 3)
        )
    }

    /// Check that a predecessor evolves to the target in the given number
    /// of transitions
    pub fn validate_evolution(predecessor: &Grid, target: &Grid, generations: usize) -> bool {
        if predecessor.width != target.width || predecessor.height != target.height {
            return false;
        }

        Self::evolve_generations(predecessor.clone(), generations) == *target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_life_block() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_rows(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let vertical = Grid::from_rows(vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();

        let horizontal = Grid::from_rows(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();

        assert_eq!(GameOfLifeRules::evolve(&vertical), horizontal);
        assert_eq!(GameOfLifeRules::evolve(&horizontal), vertical);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let grid = Grid::new(3, 3);
        assert!(GameOfLifeRules::evolve(&grid).is_empty());
    }

    #[test]
    fn test_rule_table() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 0));
    }

    #[test]
    fn test_validate_evolution() {
        let vertical = Grid::from_rows(vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        let horizontal = Grid::from_rows(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();

        assert!(GameOfLifeRules::validate_evolution(&vertical, &horizontal, 1));
        assert!(GameOfLifeRules::validate_evolution(&vertical, &vertical, 2));
        assert!(!GameOfLifeRules::validate_evolution(&vertical, &horizontal, 2));
    }
}
