//! Target file parsing
//!
//! Format, fixed by the solver's input contract:
//! - line 1: `width height steps` (whitespace-separated positive integers)
//! - next `width` lines: `height` whitespace-separated `*`/`.` tokens,
//!   the target (final) board row by row.

use super::Grid;
use crate::error::SolverError;
use anyhow::{Context, Result};
use std::path::Path;

/// A parsed target file: the final board plus the declared step count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub steps: usize,
    pub target: Grid,
}

/// Load a target specification from a text file
pub fn load_target_from_file<P: AsRef<Path>>(path: P) -> Result<TargetSpec> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read target file: {}", path.as_ref().display()))?;

    let spec = parse_target(&content)
        .with_context(|| format!("Failed to parse target file: {}", path.as_ref().display()))?;

    Ok(spec)
}

/// Parse a target specification from its string representation
pub fn parse_target(content: &str) -> Result<TargetSpec, SolverError> {
    let mut lines = content.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| SolverError::malformed("empty input, expected a header line"))?;

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(SolverError::malformed(format!(
            "header has {} field(s), expected 3 (width height steps)",
            fields.len()
        )));
    }

    let parse_field = |name: &str, token: &str| -> Result<usize, SolverError> {
        token.parse::<usize>().map_err(|_| {
            SolverError::malformed(format!("header field {} is not an integer: {:?}", name, token))
        })
    };
    let width = parse_field("width", fields[0])?;
    let height = parse_field("height", fields[1])?;
    let steps = parse_field("steps", fields[2])?;

    if width == 0 || height == 0 || steps == 0 {
        return Err(SolverError::InvalidDimensions {
            width,
            height,
            steps,
        });
    }

    let mut rows = Vec::with_capacity(width);
    for line in lines {
        let mut row = Vec::with_capacity(height);
        for token in line.split_whitespace() {
            match token {
                "*" => row.push(true),
                "." => row.push(false),
                other => {
                    return Err(SolverError::malformed(format!(
                        "invalid cell token {:?} in row {}, expected '*' or '.'",
                        other,
                        rows.len()
                    )))
                }
            }
        }
        if row.len() != height {
            return Err(SolverError::malformed(format!(
                "incorrect field size (y = {}, expected = {})",
                row.len(),
                height
            )));
        }
        rows.push(row);
    }

    if rows.len() != width {
        return Err(SolverError::malformed(format!(
            "incorrect field size (x = {}, expected = {})",
            rows.len(),
            width
        )));
    }

    let target = Grid::from_rows(rows)?;
    Ok(TargetSpec { steps, target })
}

/// Render a board in the target file format, including the header line
pub fn target_to_string(spec: &TargetSpec) -> String {
    let mut out = format!(
        "{} {} {}\n",
        spec.target.width, spec.target.height, spec.steps
    );
    out.push_str(&spec.target.to_string());
    out
}

/// Write example target files used by the `setup` command
pub fn create_example_targets<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Horizontal blinker, two transitions back
    let blinker = "3 3 2\n. . .\n* * *\n. . .\n";
    std::fs::write(dir.join("blinker.txt"), blinker).context("Failed to write blinker.txt")?;

    // Block still life, three transitions back
    let block = "4 4 3\n. . . .\n. * * .\n. * * .\n. . . .\n";
    std::fs::write(dir.join("block.txt"), block).context("Failed to write block.txt")?;

    // Glider, two transitions back
    let glider = "5 5 2\n. . * . .\n* . * . .\n. * * . .\n. . . . .\n. . . . .\n";
    std::fs::write(dir.join("glider.txt"), glider).context("Failed to write glider.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_target() {
        let content = "3 3 2\n. * .\n. * .\n. * .\n";
        let spec = parse_target(content).unwrap();

        assert_eq!(spec.steps, 2);
        assert_eq!(spec.target.width, 3);
        assert_eq!(spec.target.height, 3);
        assert_eq!(spec.target.live_count(), 3);
        assert!(spec.target.get(0, 1));
        assert!(spec.target.get(1, 1));
        assert!(spec.target.get(2, 1));
    }

    #[test]
    fn test_rectangular_target() {
        let content = "2 4 1\n* . . *\n. * * .\n";
        let spec = parse_target(content).unwrap();
        assert_eq!(spec.target.width, 2);
        assert_eq!(spec.target.height, 4);
        assert_eq!(spec.target.live_count(), 4);
    }

    #[test]
    fn test_row_length_mismatch() {
        let content = "2 3 1\n* . .\n* .\n";
        let err = parse_target(content).unwrap_err();
        assert!(err.to_string().contains("y = 2, expected = 3"));
    }

    #[test]
    fn test_row_count_mismatch() {
        let content = "3 2 1\n* .\n. *\n";
        let err = parse_target(content).unwrap_err();
        assert!(err.to_string().contains("x = 2, expected = 3"));
    }

    #[test]
    fn test_bad_token() {
        let content = "1 2 1\n* x\n";
        assert!(matches!(
            parse_target(content),
            Err(SolverError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let content = "0 3 1\n";
        assert!(matches!(
            parse_target(content),
            Err(SolverError::InvalidDimensions { .. })
        ));

        let content = "3 3 0\n. . .\n. . .\n. . .\n";
        assert!(matches!(
            parse_target(content),
            Err(SolverError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_bad_header() {
        assert!(parse_target("").is_err());
        assert!(parse_target("3 3\n").is_err());
        assert!(parse_target("a b c\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let content = "2 2 3\n* .\n. *\n";
        let spec = parse_target(content).unwrap();
        assert_eq!(target_to_string(&spec), content);
    }

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("target.txt");
        std::fs::write(&path, "1 1 1\n*\n").unwrap();

        let spec = load_target_from_file(&path).unwrap();
        assert_eq!(spec.steps, 1);
        assert!(spec.target.get(0, 0));
    }

    #[test]
    fn test_create_example_targets() {
        let dir = tempdir().unwrap();
        create_example_targets(dir.path()).unwrap();

        let blinker = load_target_from_file(dir.path().join("blinker.txt")).unwrap();
        assert_eq!(blinker.steps, 2);
        assert_eq!(blinker.target.live_count(), 3);

        let glider = load_target_from_file(dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.target.live_count(), 5);
    }
}
