//! Constraint generation for the reverse Game of Life query
//!
//! The constraint set is exactly three groups, built once and never
//! retracted:
//! 1. an optional live-cell bound on frame 0,
//! 2. unit clauses pinning frame `steps - 1` to the target board,
//! 3. the transition formula for every cell at every `t >= 1`.

use super::cardinality::{self, AuxAllocator};
use super::Field;
use crate::error::SolverError;
use crate::life::Grid;
use itertools::iproduct;

/// A SAT clause: positive literal for a variable, negative for its negation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>,
}

impl Clause {
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// Generates the full constraint set for one reverse query
pub struct ConstraintGenerator {
    field: Field,
    aux: AuxAllocator,
    max_alive_initial: Option<usize>,
}

impl ConstraintGenerator {
    pub fn new(field: Field, max_alive_initial: Option<usize>) -> Self {
        let aux = AuxAllocator::new(field.variable_count() as i32 + 1);
        Self {
            field,
            aux,
            max_alive_initial,
        }
    }

    /// Build all constraints for the given target board
    pub fn generate_all_constraints(&mut self, target: &Grid) -> Result<Vec<Clause>, SolverError> {
        let mut clauses = Vec::new();

        self.initial_bound_constraints(&mut clauses)?;
        self.target_constraints(target, &mut clauses)?;

        // With steps == 1 the loop is empty: frame 0 is the target frame
        // and only the bound plus the equality constraints apply.
        for t in 1..self.field.steps() {
            self.transition_constraints(t, &mut clauses)?;
        }

        Ok(clauses)
    }

    /// At most `max_alive_initial` live cells in frame 0; absent bound
    /// emits nothing
    fn initial_bound_constraints(&mut self, clauses: &mut Vec<Clause>) -> Result<(), SolverError> {
        if let Some(max_alive) = self.max_alive_initial {
            let frame = self.field.frame_variables(0)?;
            cardinality::at_most(&frame, max_alive, &mut self.aux, clauses);
        }
        Ok(())
    }

    /// Pin the final frame to the target board, cell by cell
    fn target_constraints(
        &mut self,
        target: &Grid,
        clauses: &mut Vec<Clause>,
    ) -> Result<(), SolverError> {
        if target.width != self.field.width() || target.height != self.field.height() {
            return Err(SolverError::malformed(format!(
                "target board is {}x{}, field is {}x{}",
                target.width,
                target.height,
                self.field.width(),
                self.field.height()
            )));
        }

        let final_time = self.field.steps() - 1;
        for x in 0..self.field.width() {
            for y in 0..self.field.height() {
                let cell = self.field.cell(x, y, final_time)?;
                clauses.push(Clause::unit(if target.get(x, y) { cell } else { -cell }));
            }
        }

        Ok(())
    }

    /// Transition constraints relating frame `t - 1` to frame `t`
    fn transition_constraints(
        &mut self,
        t: usize,
        clauses: &mut Vec<Clause>,
    ) -> Result<(), SolverError> {
        for x in 0..self.field.width() {
            for y in 0..self.field.height() {
                self.cell_transition(x, y, t, clauses)?;
            }
        }
        Ok(())
    }

    /// Encode, for one cell at time `t`:
    ///
    /// ```text
    /// cell(t) == ( AtLeast(prev, neighbors..., 3) AND AtMost(neighbors..., 3) )
    /// ```
    ///
    /// `prev` counts toward the at-least threshold but not the at-most one:
    /// a live `prev` needs 2 or 3 live neighbors (survival), a dead `prev`
    /// needs exactly 3 (birth). A counter over the neighbors yields output
    /// literals for the thresholds 2, 3, and 4, and the equivalence becomes
    /// five clauses over `cell`, `prev`, and those outputs.
    fn cell_transition(
        &mut self,
        x: usize,
        y: usize,
        t: usize,
        clauses: &mut Vec<Clause>,
    ) -> Result<(), SolverError> {
        let cell = self.field.cell(x, y, t)?;
        let prev = self.field.cell(x, y, t - 1)?;
        let neighbors = self.neighbor_variables(x, y, t - 1)?;

        let outputs = cardinality::at_least_thresholds(&neighbors, 4, &mut self.aux, clauses);
        let at_least_two = outputs[1];
        let at_least_three = outputs[2];
        let at_least_four = outputs[3];

        // cell -> at most three live neighbors
        if let Some(c4) = at_least_four {
            clauses.push(Clause::binary(-cell, -c4));
        }

        let c2 = match at_least_two {
            // Fewer than two neighbors exist: the at-least threshold can
            // never be met, the cell is dead at t no matter what.
            None => {
                clauses.push(Clause::unit(-cell));
                return Ok(());
            }
            Some(c2) => c2,
        };

        // cell -> two live neighbors at minimum (prev covers the third)
        clauses.push(Clause::binary(-cell, c2));

        // cell and dead prev -> three live neighbors
        let mut lits = vec![-cell, prev];
        if let Some(c3) = at_least_three {
            lits.push(c3);
        }
        clauses.push(Clause::new(lits));

        // live prev with two live neighbors and no fourth -> cell
        let mut lits = vec![cell, -prev, -c2];
        if let Some(c4) = at_least_four {
            lits.push(c4);
        }
        clauses.push(Clause::new(lits));

        // three live neighbors and no fourth -> cell
        if let Some(c3) = at_least_three {
            let mut lits = vec![cell, -c3];
            if let Some(c4) = at_least_four {
                lits.push(c4);
            }
            clauses.push(Clause::new(lits));
        }

        Ok(())
    }

    /// The up-to-8 neighbor variables of `(x, y)` at time `t`, clipped at
    /// the grid edges
    fn neighbor_variables(&self, x: usize, y: usize, t: usize) -> Result<Vec<i32>, SolverError> {
        let mut neighbors = Vec::with_capacity(8);

        for (dx, dy) in iproduct!(-1isize..=1, -1isize..=1) {
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if nx >= 0
                && nx < self.field.width() as isize
                && ny >= 0
                && ny < self.field.height() as isize
            {
                neighbors.push(self.field.cell(nx as usize, ny as usize, t)?);
            }
        }

        Ok(neighbors)
    }

    /// Total variable count including counter auxiliaries
    pub fn variable_count(&self) -> usize {
        self.aux.high_water() as usize
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}
