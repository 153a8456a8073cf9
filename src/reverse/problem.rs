//! Reverse problem wiring: target file -> encoder -> outcome

use super::{Outcome, Solution, SolutionValidator};
use crate::config::Settings;
use crate::life::{load_target_from_file, Grid, TargetSpec};
use crate::sat::{SatEncoder, SatOutcome};
use anyhow::{Context, Result};

pub struct ReverseProblem {
    target: Grid,
    steps: usize,
    max_alive_initial: Option<usize>,
    encoder: SatEncoder,
}

impl ReverseProblem {
    /// Create a problem from settings; the target board and step count
    /// come from the input file header
    pub fn new(settings: Settings) -> Result<Self> {
        let TargetSpec { steps, target } =
            load_target_from_file(&settings.input.target_state_file)
                .context("Failed to load target state file")?;

        Self::with_target(target, steps, settings.bounds.max_alive_initial)
    }

    /// Create a problem with an explicit target board (useful for testing)
    pub fn with_target(
        target: Grid,
        steps: usize,
        max_alive_initial: Option<usize>,
    ) -> Result<Self> {
        let encoder = SatEncoder::new(target.width, target.height, steps, max_alive_initial)?;

        Ok(Self {
            target,
            steps,
            max_alive_initial,
            encoder,
        })
    }

    /// Solve the reverse problem: one decision call, one definitive outcome
    pub fn solve(&mut self) -> Result<Outcome> {
        let outcome = self
            .encoder
            .solve_forward(&self.target)
            .context("SAT solving failed")?;

        match outcome {
            SatOutcome::Satisfiable { frames, solve_time } => {
                let validation = SolutionValidator::validate(&frames, &self.target);
                if !validation.is_valid {
                    anyhow::bail!(
                        "solver returned an invalid model: {}",
                        validation
                            .error_message
                            .unwrap_or_else(|| "unknown cause".to_string())
                    );
                }

                Ok(Outcome::Satisfiable(Solution::new(
                    frames,
                    self.max_alive_initial,
                    solve_time,
                )))
            }
            SatOutcome::Unsatisfiable => Ok(Outcome::Unsatisfiable),
        }
    }

    pub fn target(&self) -> &Grid {
        &self.target
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn encoding_statistics(&self) -> crate::sat::EncodingStatistics {
        self.encoder.statistics()
    }
}
