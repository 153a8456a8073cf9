//! Reverse problem definition, solutions, and validation

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::ReverseProblem;
pub use solution::{Outcome, Solution};
pub use validator::{SolutionValidator, ValidationResult};
