//! Main CLI application for the reverse Game of Life solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_rewind::{
    config::{CliOverrides, Settings},
    life::{create_example_targets, load_target_from_file, GameOfLifeRules, TargetSpec},
    reverse::{Outcome, ReverseProblem},
    utils::{ColorOutput, StateFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_rewind")]
#[command(about = "Reverse Game of Life SAT solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find an initial board that evolves into the target
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Target state file (overrides config)
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Upper bound on live cells in the initial board (overrides config)
        #[arg(short, long)]
        max_alive: Option<usize>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evolve a board forward and print every state
    Simulate {
        /// Board file in the target format; the header's step count sets
        /// how many states to print
        #[arg(short, long)]
        board: PathBuf,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            target,
            max_alive,
            output,
            verbose,
        } => solve_command(config, target, max_alive, output, verbose),
        Commands::Simulate { board } => simulate_command(board),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn solve_command(
    config_path: PathBuf,
    target_file: Option<PathBuf>,
    max_alive: Option<usize>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    let cli_overrides = CliOverrides {
        target_file,
        max_alive,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!(
            "  Target file: {}",
            settings.input.target_state_file.display()
        );
        match settings.bounds.max_alive_initial {
            Some(bound) => println!("  Max alive (initial): {}", bound),
            None => println!("  Max alive (initial): unbounded"),
        }
        println!(
            "  Output dir: {}",
            settings.output.output_directory.display()
        );
        println!();
    }

    let start_time = Instant::now();
    let mut problem =
        ReverseProblem::new(settings.clone()).context("Failed to create reverse problem")?;

    if verbose {
        println!("{}", problem.encoding_statistics());
        println!();
    }

    println!(
        "{}",
        ColorOutput::info("Generating SAT constraints and solving...")
    );
    let outcome = problem.solve().context("Failed to solve reverse problem")?;
    let total_time = start_time.elapsed();

    match outcome {
        Outcome::Satisfiable(solution) => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Found an initial board in {:.3}s",
                    total_time.as_secs_f64()
                ))
            );
            println!();
            println!("{}", StateFormatter::format_frames(&solution.frames));

            if verbose {
                println!("{}", StateFormatter::format_summary(&solution));
            }

            if settings.output.save_states {
                StateFormatter::save_solution(
                    &solution,
                    &settings.output.output_directory,
                    &settings.output.format,
                )
                .context("Failed to save solution")?;
                println!(
                    "{}",
                    ColorOutput::success(&format!(
                        "Solution saved to {}",
                        settings.output.output_directory.display()
                    ))
                );
            }
        }
        Outcome::Unsatisfiable => {
            println!(
                "{}",
                ColorOutput::warning(&StateFormatter::format_unsatisfiable())
            );
        }
    }

    Ok(())
}

fn simulate_command(board_path: PathBuf) -> Result<()> {
    let TargetSpec { steps, target } = load_target_from_file(&board_path)
        .with_context(|| format!("Failed to load board from {}", board_path.display()))?;

    let mut frames = Vec::with_capacity(steps);
    frames.push(target);
    for _ in 1..steps {
        let next = GameOfLifeRules::evolve(frames.last().unwrap());
        frames.push(next);
    }

    println!("{}", StateFormatter::format_frames(&frames));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/target_states");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_targets(&input_dir).context("Failed to create example targets")?;
    println!("Created example target states in: {}", input_dir.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your target states to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}
