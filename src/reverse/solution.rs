//! Solution representation for reverse queries

use crate::life::Grid;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a reverse problem. Unsatisfiable is a definitive answer:
/// no initial configuration exists under the given target, step count,
/// and live-cell bound.
#[derive(Debug, Clone)]
pub enum Outcome {
    Satisfiable(Solution),
    Unsatisfiable,
}

/// A discovered evolution: every frame from the initial state (frame 0)
/// to the target (last frame)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub frames: Vec<Grid>,
    /// Number of frames, equal to the declared step count
    pub steps: usize,
    /// The bound that was applied to frame 0, if any
    pub max_alive_initial: Option<usize>,
    #[serde(skip)]
    pub solve_time: Duration,
}

impl Solution {
    pub fn new(frames: Vec<Grid>, max_alive_initial: Option<usize>, solve_time: Duration) -> Self {
        let steps = frames.len();
        Self {
            frames,
            steps,
            max_alive_initial,
            solve_time,
        }
    }

    /// The discovered initial state
    pub fn initial_state(&self) -> &Grid {
        &self.frames[0]
    }

    /// The target state the run was asked to reach
    pub fn final_state(&self) -> &Grid {
        &self.frames[self.steps - 1]
    }

    pub fn initial_live_count(&self) -> usize {
        self.initial_state().live_count()
    }

    pub fn final_live_count(&self) -> usize {
        self.final_state().live_count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
