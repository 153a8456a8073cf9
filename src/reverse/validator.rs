//! Independent validation of solver models
//!
//! The validator never trusts the SAT model: it re-simulates the
//! discovered initial state with the textbook forward rules and checks
//! every intermediate frame plus the final match against the target.

use crate::life::{GameOfLifeRules, Grid};

pub struct SolutionValidator;

/// Result of validating one model
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    /// The forward simulation from frame 0, one grid per frame
    pub evolution_path: Vec<Grid>,
}

impl SolutionValidator {
    /// Check that `frames` is a legal evolution ending in `target`
    pub fn validate(frames: &[Grid], target: &Grid) -> ValidationResult {
        if frames.is_empty() {
            return ValidationResult {
                is_valid: false,
                error_message: Some("model contains no frames".to_string()),
                evolution_path: Vec::new(),
            };
        }

        let mut evolution_path = vec![frames[0].clone()];
        let mut current = frames[0].clone();

        for (t, frame) in frames.iter().enumerate().skip(1) {
            current = GameOfLifeRules::evolve(&current);
            evolution_path.push(current.clone());

            if current != *frame {
                return ValidationResult {
                    is_valid: false,
                    error_message: Some(format!(
                        "frame {} does not follow from frame {} under the update rule",
                        t,
                        t - 1
                    )),
                    evolution_path,
                };
            }
        }

        if current != *target {
            return ValidationResult {
                is_valid: false,
                error_message: Some("final frame does not match the target board".to_string()),
                evolution_path,
            };
        }

        ValidationResult {
            is_valid: true,
            error_message: None,
            evolution_path,
        }
    }
}
