//! Cell variable arena for the SAT encoding
//!
//! Every cell variable is identified by `(x, y, t)` and its solver id is
//! computed arithmetically from those coordinates, so identity can be
//! re-derived anywhere without a lookup table and without mutation. Ids
//! start at 1 (SAT convention); auxiliary variables introduced by the
//! cardinality encoding are allocated past `variable_count()`.

use crate::error::SolverError;

/// The full field of cell variables: `steps` frames of `width x height`
/// unknowns. Frame 0 is the initial state to discover; frame `steps - 1`
/// is pinned to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    steps: usize,
}

impl Field {
    /// Create a field; fails fast on non-positive dimensions
    pub fn new(width: usize, height: usize, steps: usize) -> Result<Self, SolverError> {
        if width == 0 || height == 0 || steps == 0 {
            return Err(SolverError::InvalidDimensions {
                width,
                height,
                steps,
            });
        }

        Ok(Self {
            width,
            height,
            steps,
        })
    }

    /// Variable id for the cell at `(x, y)` in frame `t`
    pub fn cell(&self, x: usize, y: usize, t: usize) -> Result<i32, SolverError> {
        if x >= self.width || y >= self.height || t >= self.steps {
            return Err(SolverError::malformed(format!(
                "cell ({}, {}, t={}) out of bounds for {}x{} field with {} step(s)",
                x, y, t, self.width, self.height, self.steps
            )));
        }

        let offset = t * self.width * self.height + x * self.height + y;
        Ok(1 + offset as i32)
    }

    /// All cell variables of one frame, row-major
    pub fn frame_variables(&self, t: usize) -> Result<Vec<i32>, SolverError> {
        let mut variables = Vec::with_capacity(self.width * self.height);
        for x in 0..self.width {
            for y in 0..self.height {
                variables.push(self.cell(x, y, t)?);
            }
        }
        Ok(variables)
    }

    /// Total number of cell variables across all frames
    pub fn variable_count(&self) -> usize {
        self.width * self.height * self.steps
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
