//! Game of Life board model and forward rules

pub mod grid;
pub mod io;
pub mod rules;

pub use grid::Grid;
pub use io::{create_example_targets, load_target_from_file, parse_target, TargetSpec};
pub use rules::GameOfLifeRules;
