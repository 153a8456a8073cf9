//! Configuration management for the reverse solver

pub mod settings;

pub use settings::{BoundsConfig, CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings};
