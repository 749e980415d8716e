//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "01-bootstrap"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Command line entry point for synthetic telemetry generation."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
//! Exit codes: 0 success, 2 usage, 3 directory creation, 4 serialization,
//! 5 write. See [`vtel_simgen::DriverError`].
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use vtel_common::{init_tracing, AppConfig, LogFormat};
use vtel_logging::vtel_error;
use vtel_sim::{GeneratorProfile, ProfileKind, RecordGenerator};
use vtel_simgen::{run_batch, run_single, BatchPlan, DriverError};

const SERVICE_NAME: &str = "vtel-simgen";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Regional box (lat 33..43, lon 124..132)
    Geofence,
    /// Whole globe (lat -90..90, lon -180..180)
    Global,
}

impl From<ProfileArg> for ProfileKind {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Geofence => ProfileKind::Geofence,
            ProfileArg::Global => ProfileKind::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    StructuredJson,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::StructuredJson => LogFormat::StructuredJson,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate synthetic vehicle telemetry records",
    long_about = None
)]
struct Cli {
    /// TOML configuration file (defaults to $VTEL_CONFIG when set)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log output format written to stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write records for many vehicles into per-vehicle directories
    Batch(BatchArgs),
    /// Print one record with a random vehicle identity to stdout
    Single(SingleArgs),
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Number of vehicles to generate
    #[arg(long = "n_cars", default_value_t = 1, allow_negative_numbers = true)]
    n_cars: i64,

    /// Number of JSON files per vehicle
    #[arg(long = "n_files", default_value_t = 1, allow_negative_numbers = true)]
    n_files: i64,

    /// Rate of change of vehicle data (reserved, no effect) [default: 0.2]
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Threshold for change of vehicle data (reserved, no effect) [default: 0.2]
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Root directory receiving the Car<N> directories [default: .]
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Remove existing Car<N> directories for the requested vehicles first
    #[arg(long)]
    clean: bool,

    /// Value range profile [default: geofence]
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Args)]
struct SingleArgs {
    /// Value range profile [default: global]
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            vtel_error!("{} error (exit {}): {err}", err.kind(), err.exit_code());
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), DriverError> {
    let loaded = AppConfig::load_with_source(cli.config.as_deref())
        .map_err(|err| DriverError::Usage(format!("{err:#}")))?;

    let mut logging = loaded.config.logging.clone();
    if let Some(format) = cli.log_format {
        logging.format = format.into();
    }
    init_tracing(SERVICE_NAME, &logging).map_err(|err| DriverError::Usage(format!("{err:#}")))?;
    if let Some(source) = &loaded.source {
        info!(config = %source.display(), "configuration loaded");
    }

    match cli.command {
        Commands::Batch(args) => {
            let profile = resolve_profile(&loaded.config, ProfileKind::Geofence, args.profile)?;
            let mut generator = build_generator(profile, args.seed)?;
            let plan = batch_plan(&args, &loaded.config);
            let report = run_batch(&plan, &mut generator)?;
            eprintln!(
                "generated {} files for {} vehicles -> {}",
                report.files,
                report.vehicles,
                report.output_root.display()
            );
        }
        Commands::Single(args) => {
            let profile = resolve_profile(&loaded.config, ProfileKind::Global, args.profile)?;
            let mut generator = build_generator(profile, args.seed)?;
            let mut stdout = io::stdout().lock();
            run_single(&mut generator, &mut stdout)?;
        }
    }
    Ok(())
}

fn resolve_profile(
    config: &AppConfig,
    fallback: ProfileKind,
    requested: Option<ProfileArg>,
) -> Result<GeneratorProfile, DriverError> {
    config
        .generator
        .resolve(fallback, requested.map(ProfileKind::from))
        .map_err(|err| DriverError::Usage(format!("{err:#}")))
}

fn build_generator(
    profile: GeneratorProfile,
    seed: Option<u64>,
) -> Result<RecordGenerator, DriverError> {
    let generator = match seed {
        Some(seed) => RecordGenerator::seeded(profile, seed),
        None => RecordGenerator::from_entropy(profile),
    };
    generator.map_err(|err| DriverError::Usage(err.to_string()))
}

fn batch_plan(args: &BatchArgs, config: &AppConfig) -> BatchPlan {
    BatchPlan {
        n_cars: args.n_cars,
        n_files: args.n_files,
        output: args
            .output
            .clone()
            .unwrap_or_else(|| config.batch.output.clone()),
        clean: args.clean,
        rate: args.rate.unwrap_or(config.batch.rate),
        threshold: args.threshold.unwrap_or(config.batch.threshold),
    }
}
