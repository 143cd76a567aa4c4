//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, DisplayStyle, OutputConfig, Settings},
    game_of_life::{find_pattern, PATTERNS},
    simulation::Simulation,
    utils::{ColorOutput, GridFormatter, CLEAR_SCREEN},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation, printing every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Initial alive probability for a random grid (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Start from a built-in pattern instead of a random grid
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed for the random starting grid
        #[arg(short, long)]
        seed: Option<u64>,

        /// Frame style (overrides config)
        #[arg(long, value_enum)]
        style: Option<DisplayStyle>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in patterns
    Patterns,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            rows,
            cols,
            density,
            generations,
            interval_ms,
            pattern,
            seed,
            style,
            no_clear,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                density,
                tick_interval_ms: interval_ms,
                max_generations: generations,
                style,
                no_clear,
            };
            run_command(&config, &overrides, pattern.as_deref(), seed)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Patterns => {
            patterns_command();
            Ok(())
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn build_simulation(settings: &Settings, pattern: Option<&str>, seed: Option<u64>) -> Result<Simulation> {
    let (rows, cols) = (settings.grid.rows, settings.grid.cols);

    let simulation = match pattern {
        Some(name) => {
            let pattern = find_pattern(name)
                .with_context(|| format!("Unknown pattern '{}', see the `patterns` command", name))?;
            let grid = pattern
                .place_centered(rows, cols)
                .with_context(|| format!("Failed to place pattern '{}'", pattern.name))?;
            Simulation::with_grid(grid, settings.simulation.clone())
        }
        None => {
            let mut simulation = Simulation::from_settings(settings);
            match seed {
                Some(seed) => simulation.randomize_with(&mut StdRng::seed_from_u64(seed)),
                None => simulation.randomize(),
            }
            simulation
        }
    };

    Ok(simulation)
}

fn run_command(
    config_path: &Path,
    overrides: &CliOverrides,
    pattern: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let mut simulation = build_simulation(&settings, pattern, seed)?;

    let start_time = Instant::now();
    let computed = write_frames(&mut simulation, &settings.output, std::io::stdout().lock())?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Computed {} generation(s) in {:.3}s, final population {}",
            computed,
            start_time.elapsed().as_secs_f64(),
            simulation.grid().living_count()
        ))
    );

    Ok(())
}

/// Run the simulation, writing one frame per generation to `out`.
///
/// A write failure (e.g. a closed pipe) stops the run and is returned.
fn write_frames<W: Write>(
    simulation: &mut Simulation,
    output: &OutputConfig,
    mut out: W,
) -> Result<u64> {
    let clear = if output.clear_screen && output.style != DisplayStyle::Quiet {
        CLEAR_SCREEN
    } else {
        ""
    };
    let handle = simulation.run_handle();
    let mut write_error = None;

    simulation.start();
    let computed = simulation.run(|grid, stats| {
        let frame = GridFormatter::format_frame(grid, stats, output.style);
        if let Err(e) = write!(out, "{}{}", clear, frame).and_then(|_| out.flush()) {
            write_error = Some(e);
            handle.stop();
        }
    });

    match write_error {
        Some(e) => Err(e).context("Failed to write frame"),
        None => Ok(computed),
    }
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config").join("default.yaml");

    if config_path.exists() && !force {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
        return Ok(());
    }

    Settings::default()
        .to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));

    Ok(())
}

fn patterns_command() {
    println!("{}", ColorOutput::info("Built-in patterns:"));
    for pattern in PATTERNS {
        println!(
            "  {:<12} {}x{:<3} {}",
            pattern.name,
            pattern.height(),
            pattern.width(),
            pattern.description
        );
    }
}
