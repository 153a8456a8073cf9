//! Reverse Game of Life solver
//!
//! Finds an initial board that evolves into a given target board after a
//! fixed number of steps, by encoding the Game of Life transition rule and
//! an optional live-cell bound as a boolean satisfiability query.

pub mod config;
pub mod error;
pub mod life;
pub mod reverse;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use error::SolverError;
pub use reverse::{Outcome, ReverseProblem, Solution};

use anyhow::Result;

/// Solve the reverse problem described by the settings
pub fn solve_reverse(settings: Settings) -> Result<Outcome> {
    let mut problem = ReverseProblem::new(settings)?;
    problem.solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::GameOfLifeRules;

    #[test]
    fn test_solve_reverse_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let target_path = dir.path().join("blinker.txt");
        std::fs::write(&target_path, "3 3 2\n. . .\n* * *\n. . .\n").unwrap();

        let mut settings = Settings::default();
        settings.input.target_state_file = target_path;
        settings.bounds.max_alive_initial = Some(3);

        match solve_reverse(settings).unwrap() {
            Outcome::Satisfiable(solution) => {
                assert_eq!(solution.steps, 2);
                assert_eq!(
                    GameOfLifeRules::evolve(solution.initial_state()),
                    *solution.final_state()
                );
            }
            Outcome::Unsatisfiable => panic!("blinker target must have a predecessor"),
        }
    }
}
