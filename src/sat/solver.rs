//! CaDiCaL solver wrapper
//!
//! One query per solver instance: add the full clause set, call `solve`
//! once, branch on the verdict. No incremental solving, no enumeration.

use super::constraints::Clause;
use crate::error::SolverError;
use cadical::Solver;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct SatSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
}

/// Verdict of a single decision call
#[derive(Debug, Clone)]
pub enum SolverVerdict {
    Satisfiable(SolverSolution),
    Unsatisfiable,
}

/// A satisfying assignment
#[derive(Debug, Clone)]
pub struct SolverSolution {
    pub assignment: HashMap<i32, bool>,
    pub solve_time: Duration,
}

impl SolverSolution {
    /// Value of a variable in the model; variables the solver left
    /// unassigned read as false
    pub fn value(&self, var: i32) -> bool {
        self.assignment.get(&var).copied().unwrap_or(false)
    }
}

impl SatSolver {
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
        }
    }

    /// Add clauses to the solver
    pub fn add_clauses(&mut self, clauses: &[Clause]) -> Result<(), SolverError> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Add a single clause to the solver
    pub fn add_clause(&mut self, clause: &Clause) -> Result<(), SolverError> {
        if clause.is_empty() {
            return Err(SolverError::malformed(
                "empty clause (trivially unsatisfiable)",
            ));
        }

        for &literal in &clause.literals {
            let var = literal.unsigned_abs() as usize;
            if var > self.variable_count {
                self.variable_count = var;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
        Ok(())
    }

    /// Run the decision procedure once. A missing verdict (CaDiCaL's
    /// "unknown") is an engine failure, fatal for the run.
    pub fn solve(&mut self) -> Result<SolverVerdict, SolverError> {
        let start_time = Instant::now();
        let result = self.solver.solve();
        let solve_time = start_time.elapsed();

        match result {
            Some(true) => {
                let assignment = self.extract_assignment();
                Ok(SolverVerdict::Satisfiable(SolverSolution {
                    assignment,
                    solve_time,
                }))
            }
            Some(false) => Ok(SolverVerdict::Unsatisfiable),
            None => Err(SolverError::EngineFailure(
                "decision procedure returned no verdict".to_string(),
            )),
        }
    }

    fn extract_assignment(&self) -> HashMap<i32, bool> {
        let mut assignment = HashMap::with_capacity(self.variable_count);
        for var in 1..=self.variable_count as i32 {
            if let Some(value) = self.solver.value(var) {
                assignment.insert(var, value);
            }
        }
        assignment
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl Default for SatSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::new(vec![1, 2])).unwrap();
        solver.add_clause(&Clause::new(vec![-1, 2])).unwrap();

        match solver.solve().unwrap() {
            SolverVerdict::Satisfiable(solution) => {
                assert!(solution.value(2));
            }
            SolverVerdict::Unsatisfiable => panic!("expected a model"),
        }
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::unit(1)).unwrap();
        solver.add_clause(&Clause::unit(-1)).unwrap();

        assert!(matches!(
            solver.solve().unwrap(),
            SolverVerdict::Unsatisfiable
        ));
    }

    #[test]
    fn test_empty_clause_rejected() {
        let mut solver = SatSolver::new();
        assert!(solver.add_clause(&Clause::new(vec![])).is_err());
    }

    #[test]
    fn test_counts_track_highest_variable() {
        let mut solver = SatSolver::new();
        solver.add_clause(&Clause::new(vec![1, -5, 3])).unwrap();
        assert_eq!(solver.variable_count(), 5);
        assert_eq!(solver.clause_count(), 1);

        solver.add_clause(&Clause::new(vec![2, -7])).unwrap();
        assert_eq!(solver.variable_count(), 7);
        assert_eq!(solver.clause_count(), 2);
    }

    #[test]
    fn test_unassigned_variable_reads_false() {
        let solution = SolverSolution {
            assignment: HashMap::new(),
            solve_time: Duration::from_millis(1),
        };
        assert!(!solution.value(42));
    }
}
