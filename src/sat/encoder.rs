//! End-to-end encoder: assemble the query, solve, extract the frames
//!
//! `solve_forward` is the single entry point of the reverse core: it hands
//! the complete constraint set to the decision procedure in one call and
//! maps the verdict to a first-class outcome. Unsatisfiable is a valid
//! answer, not an error.

use super::constraints::ConstraintGenerator;
use super::solver::{SatSolver, SolverSolution, SolverVerdict};
use super::Field;
use crate::error::SolverError;
use crate::life::Grid;
use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

/// Outcome of one reverse query
#[derive(Debug, Clone)]
pub enum SatOutcome {
    /// One grid per frame, frame 0 (the discovered initial state) first
    Satisfiable { frames: Vec<Grid>, solve_time: Duration },
    Unsatisfiable,
}

pub struct SatEncoder {
    field: Field,
    generator: ConstraintGenerator,
    solver: SatSolver,
}

impl SatEncoder {
    /// Create an encoder for a `width x height` board solved over `steps`
    /// frames, optionally bounding live cells in frame 0
    pub fn new(
        width: usize,
        height: usize,
        steps: usize,
        max_alive_initial: Option<usize>,
    ) -> Result<Self, SolverError> {
        let field = Field::new(width, height, steps)?;
        let generator = ConstraintGenerator::new(field, max_alive_initial);

        Ok(Self {
            field,
            generator,
            solver: SatSolver::new(),
        })
    }

    /// Build the conjunction of initial bound, target equality, and all
    /// transition constraints; solve it once; extract the model if any
    pub fn solve_forward(&mut self, target: &Grid) -> Result<SatOutcome> {
        let clauses = self
            .generator
            .generate_all_constraints(target)
            .context("Failed to generate constraints")?;

        self.solver
            .add_clauses(&clauses)
            .context("Failed to add clauses to the solver")?;

        match self.solver.solve()? {
            SolverVerdict::Satisfiable(solution) => {
                let frames = self.extract_frames(&solution)?;
                Ok(SatOutcome::Satisfiable {
                    frames,
                    solve_time: solution.solve_time,
                })
            }
            SolverVerdict::Unsatisfiable => Ok(SatOutcome::Unsatisfiable),
        }
    }

    /// Materialize every frame of the model as a grid
    fn extract_frames(&self, solution: &SolverSolution) -> Result<Vec<Grid>, SolverError> {
        let mut frames = Vec::with_capacity(self.field.steps());

        for t in 0..self.field.steps() {
            let mut grid = Grid::new(self.field.width(), self.field.height());
            for x in 0..self.field.width() {
                for y in 0..self.field.height() {
                    let var = self.field.cell(x, y, t)?;
                    grid.set(x, y, solution.value(var))?;
                }
            }
            frames.push(grid);
        }

        Ok(frames)
    }

    /// Encoding statistics, filled in after `solve_forward`
    pub fn statistics(&self) -> EncodingStatistics {
        EncodingStatistics {
            width: self.field.width(),
            height: self.field.height(),
            steps: self.field.steps(),
            cell_variables: self.field.variable_count(),
            total_variables: self.solver.variable_count(),
            total_clauses: self.solver.clause_count(),
        }
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub width: usize,
    pub height: usize,
    pub steps: usize,
    pub cell_variables: usize,
    pub total_variables: usize,
    pub total_clauses: usize,
}

impl fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Grid: {}x{}", self.width, self.height)?;
        writeln!(f, "  Steps: {}", self.steps)?;
        writeln!(f, "  Cell variables: {}", self.cell_variables)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses)?;
        Ok(())
    }
}
