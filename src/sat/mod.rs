//! SAT encoding and solving for the reverse Game of Life query

pub mod cardinality;
pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod variables;

pub use constraints::{Clause, ConstraintGenerator};
pub use encoder::{EncodingStatistics, SatEncoder, SatOutcome};
pub use solver::{SatSolver, SolverSolution, SolverVerdict};
pub use variables::Field;
