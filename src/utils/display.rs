//! Output formatting for solved (and unsolved) runs

use crate::config::OutputFormat;
use crate::life::Grid;
use crate::reverse::Solution;
use anyhow::{Context, Result};
use std::path::Path;

pub struct StateFormatter;

impl StateFormatter {
    /// Render every frame, earliest first:
    ///
    /// ```text
    /// State 0:
    /// . * .
    /// ...
    ///
    /// State 1:
    /// ...
    /// ```
    pub fn format_frames(frames: &[Grid]) -> String {
        let mut output = String::new();

        for (t, frame) in frames.iter().enumerate() {
            if t > 0 {
                output.push('\n');
            }
            output.push_str(&format!("State {}:\n", t));
            output.push_str(&frame.to_string());
        }

        output
    }

    /// Human-readable notice for a definitive "no" verdict
    pub fn format_unsatisfiable() -> String {
        "No initial configuration exists under these constraints.\n\
         Perhaps try a different step count or a looser alive-cell bound."
            .to_string()
    }

    /// One-line summary of a solution
    pub fn format_summary(solution: &Solution) -> String {
        format!(
            "{} frame(s), {} -> {} live cells, solved in {:.3}s",
            solution.steps,
            solution.initial_live_count(),
            solution.final_live_count(),
            solution.solve_time.as_secs_f64()
        )
    }

    /// Persist a solution in the configured format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                let path = output_dir.join("solution.txt");
                std::fs::write(&path, Self::format_frames(&solution.frames))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            OutputFormat::Json => {
                let path = output_dir.join("solution.json");
                solution
                    .save_to_file(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }

        Ok(())
    }
}

/// ANSI color helpers for terminal output
pub struct ColorOutput;

impl ColorOutput {
    fn paint(text: &str, code: u8) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, 32)
    }

    pub fn error(text: &str) -> String {
        Self::paint(text, 31)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, 33)
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, 34)
    }
}
