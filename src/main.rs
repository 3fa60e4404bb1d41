//! Command line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{find_pattern, io::load_pattern_into, load_grid_from_file, Grid, PATTERNS},
    utils::{ColorOutput, GridFormatter},
    GameOfLifeRules, Session,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "life_engine")]
#[command(about = "Conway's Game of Life")]
#[command(version = "0.1.0")]
struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation, printing every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Starting pattern file, centered if smaller than the grid
        #[arg(short, long, conflicts_with = "preset")]
        pattern: Option<PathBuf>,

        /// Built-in starting pattern, centered in the grid
        #[arg(long)]
        preset: Option<String>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Maximum generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Advance a pattern file and print the result
    Step {
        /// Pattern file
        pattern: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,
    },

    /// Show neighbor counts and classify a pattern
    Inspect {
        /// Pattern file
        pattern: PathBuf,
    },

    /// Create a default configuration and the built-in pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Coordinates,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Coordinates => OutputFormat::Coordinates,
        }
    }
}

/// Longest oscillator period `inspect` looks for
const MAX_INSPECT_PERIOD: usize = 8;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            preset,
            width,
            height,
            generations,
            interval,
            format,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                tick_interval_ms: interval,
                format: format.map(OutputFormat::from),
            };
            run_command(&config, pattern.as_deref(), preset.as_deref(), &overrides)
        }
        Commands::Step {
            pattern,
            generations,
        } => step_command(&pattern, generations),
        Commands::Inspect { pattern } => inspect_command(&pattern),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

/// Build the starting pattern for a run from a file, a preset, or nothing
fn initial_grid(settings: &Settings, pattern: Option<&Path>, preset: Option<&str>) -> Result<Grid> {
    let (width, height) = (settings.grid.width, settings.grid.height);

    match (pattern, preset) {
        (Some(path), _) => load_pattern_into(path, width, height),
        (None, Some(name)) => {
            let grid = find_pattern(name)?
                .centered(width, height)
                .with_context(|| format!("Failed to place preset '{}'", name))?;
            Ok(grid)
        }
        (None, None) => Ok(Grid::new(width, height)),
    }
}

fn run_command(
    config_path: &Path,
    pattern: Option<&Path>,
    preset: Option<&str>,
    overrides: &CliOverrides,
) -> Result<()> {
    let mut settings = Settings::from_file_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    let mut session = Session::new(settings.grid.width, settings.grid.height);
    session
        .load(initial_grid(&settings, pattern, preset)?)
        .context("Failed to load starting pattern")?;
    session.submit()?;

    log::info!(
        "Running {}x{} grid for up to {} generations",
        settings.grid.width,
        settings.grid.height,
        settings.simulation.max_generations
    );

    let format = settings.output.format;
    let show_header = settings.output.show_generation_header;
    let interval = Duration::from_millis(settings.simulation.tick_interval_ms);

    print!(
        "{}",
        GridFormatter::format_generation(session.current_grid(), 0, format, show_header)?
    );

    while session.generation() < settings.simulation.max_generations as u64 {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }

        let previous = session.current_grid().clone();
        session.tick()?;
        print!(
            "{}",
            GridFormatter::format_generation(
                session.current_grid(),
                session.generation(),
                format,
                show_header
            )?
        );

        if session.current_grid().is_empty() {
            println!("{}", ColorOutput::warning("All cells are dead"));
            break;
        }
        if settings.simulation.stop_when_stable && *session.current_grid() == previous {
            println!("{}", ColorOutput::info("Reached a still life"));
            break;
        }
    }

    log::info!("Stopped after {} generations", session.generation());
    session.reset();
    Ok(())
}

fn step_command(pattern_path: &Path, generations: usize) -> Result<()> {
    let grid = load_grid_from_file(pattern_path)?;
    let result = GameOfLifeRules::evolve_generations(grid, generations);

    println!(
        "{}",
        ColorOutput::info(&format!(
            "After {} generation(s) (Living: {}):",
            generations,
            result.living_count()
        ))
    );
    print!("{}", GridFormatter::format_grid_compact(&result));
    Ok(())
}

fn inspect_command(pattern_path: &Path) -> Result<()> {
    let grid = load_grid_from_file(pattern_path)?;

    println!("Grid ({}x{}):", grid.width(), grid.height());
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    println!("Neighbor counts:");
    println!("{}", GridFormatter::format_neighbor_counts(&grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!(
        "  Density: {:.1}%",
        (grid.living_count() as f64 / (grid.width() * grid.height()) as f64) * 100.0
    );

    let kind = match GameOfLifeRules::oscillation_period(&grid, MAX_INSPECT_PERIOD) {
        Some(_) if grid.is_empty() => "Empty".to_string(),
        Some(1) => "Still Life".to_string(),
        Some(period) => format!("Oscillator (period {})", period),
        None => "Other".to_string(),
    };
    println!("  Type: {}", kind);

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
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

    for pattern in PATTERNS {
        let path = pattern_dir.join(format!("{}.txt", pattern.name));
        std::fs::write(&path, pattern.template)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    println!("Created built-in patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern {}", pattern_dir.join("glider.txt").display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_engine",
            "run",
            "--preset",
            "blinker",
            "--generations",
            "5",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let conflicting = Cli::try_parse_from([
            "life_engine",
            "run",
            "--pattern",
            "a.txt",
            "--preset",
            "blinker",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        let glider = load_grid_from_file(temp_dir.path().join("patterns/glider.txt")).unwrap();
        assert_eq!(glider.living_count(), 5);
    }

    #[test]
    fn test_initial_grid_from_preset() {
        let mut settings = Settings::default();
        settings.grid.width = 5;
        settings.grid.height = 5;

        let grid = initial_grid(&settings, None, Some("blinker")).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        assert!(initial_grid(&settings, None, Some("nope")).is_err());
        assert!(initial_grid(&settings, None, None).unwrap().is_empty());
    }

    #[test]
    fn test_run_setup_pattern_file() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        let config = temp_dir.path().join("config/default.yaml");
        let glider = temp_dir.path().join("patterns/glider.txt");
        let overrides = CliOverrides {
            generations: Some(2),
            tick_interval_ms: Some(0),
            ..Default::default()
        };
        run_command(&config, Some(glider.as_path()), None, &overrides).unwrap();

        let settings = Settings::from_file(&config).unwrap();
        let grid = initial_grid(&settings, Some(glider.as_path()), None).unwrap();
        assert_eq!(grid.dimensions(), (40, 25));
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_run_rejects_oversized_pattern() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("wide.txt");
        std::fs::write(&pattern, "1".repeat(10)).unwrap();

        let overrides = CliOverrides {
            width: Some(5),
            height: Some(5),
            tick_interval_ms: Some(0),
            ..Default::default()
        };
        let err = run_command(
            &temp_dir.path().join("missing.yaml"),
            Some(pattern.as_path()),
            None,
            &overrides,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("does not fit"));
    }

    #[test]
    fn test_run_command_without_delay() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            width: Some(6),
            height: Some(6),
            generations: Some(3),
            tick_interval_ms: Some(0),
            format: Some(OutputFormat::Coordinates),
        };
        run_command(
            &temp_dir.path().join("missing.yaml"),
            None,
            Some("beacon"),
            &overrides,
        )
        .unwrap();
    }
}
