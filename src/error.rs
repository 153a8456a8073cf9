//! Error taxonomy for the reverse solver
//!
//! An unsatisfiable query is not an error; it is reported through the
//! outcome enums in `sat::encoder` and `reverse`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    /// Width, height, or step count was non-positive. Raised before any
    /// variable allocation happens.
    #[error("invalid dimensions: {width}x{height} over {steps} step(s), all must be positive")]
    InvalidDimensions {
        width: usize,
        height: usize,
        steps: usize,
    },

    /// The input file disagrees with its declared header dimensions, or
    /// contains tokens outside the `*`/`.` alphabet.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The decision procedure returned without a SAT/UNSAT verdict.
    /// Fatal for the run; no retry policy.
    #[error("SAT engine failure: {0}")]
    EngineFailure(String),
}

impl SolverError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SolverError::InvalidDimensions {
            width: 0,
            height: 3,
            steps: 2,
        };
        assert!(err.to_string().contains("0x3"));

        let err = SolverError::malformed("incorrect field size (rows = 2, expected = 3)");
        assert!(err.to_string().contains("expected = 3"));
    }
}
