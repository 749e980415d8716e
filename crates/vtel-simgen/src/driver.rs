//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Output driver for console and per-vehicle file sinks."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use vtel_logging::{log_system_event, vtel_debug, vtel_info, LogContext, SystemEventOutcome};
use vtel_sim::{serialize, vehicle_id, IdContext, RecordGenerator, TelemetryRecord};

use crate::error::DriverError;

const BATCH_MODE: &str = "batch";
const SINGLE_MODE: &str = "single";

/// Directory holding every record of vehicle `index`.
pub fn vehicle_dir(root: &Path, index: u64) -> PathBuf {
    root.join(format!("Car{index}"))
}

/// File name of record `file` for vehicle `vehicle`.
pub fn record_file_name(vehicle: u64, file: u64) -> String {
    format!("{vehicle}-{file}.json")
}

/// Parameters of a multi-vehicle run.
///
/// Counts are signed so that non-positive values coming from the command
/// line surface as usage errors rather than parse failures.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub n_cars: i64,
    pub n_files: i64,
    pub output: PathBuf,
    /// Remove existing `Car<i>` directories for the requested vehicles first.
    pub clean: bool,
    /// Reserved for time-series drift; accepted and logged only.
    pub rate: f64,
    /// Reserved for time-series drift; accepted and logged only.
    pub threshold: f64,
}

impl BatchPlan {
    pub fn new(n_cars: i64, n_files: i64, output: impl Into<PathBuf>) -> Self {
        Self {
            n_cars,
            n_files,
            output: output.into(),
            clean: false,
            rate: 0.2,
            threshold: 0.2,
        }
    }

    fn counts(&self) -> Result<(u64, u64), DriverError> {
        match (u64::try_from(self.n_cars), u64::try_from(self.n_files)) {
            (Ok(cars), Ok(files)) if cars > 0 && files > 0 => Ok((cars, files)),
            _ => Err(DriverError::Usage(format!(
                "n_cars and n_files must both be positive integers (got n_cars={}, n_files={})",
                self.n_cars, self.n_files
            ))),
        }
    }
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub vehicles: u64,
    pub files: u64,
    pub output_root: PathBuf,
}

/// Generate `n_files` records for each of `n_cars` vehicles.
///
/// The first failure aborts the run; files already written stay on disk.
pub fn run_batch<R: Rng>(
    plan: &BatchPlan,
    generator: &mut RecordGenerator<R>,
) -> Result<BatchReport, DriverError> {
    let (cars, files) = plan.counts()?;
    let ctx = LogContext::new().with_mode(BATCH_MODE);
    log_system_event(
        Some(&ctx),
        "batch.start",
        &format!(
            "n_cars={cars} n_files={files} output={} clean={} rate={} threshold={} \
             (rate and threshold are reserved)",
            plan.output.display(),
            plan.clean,
            plan.rate,
            plan.threshold
        ),
        SystemEventOutcome::Success,
    );

    match write_batch(plan, cars, files, generator) {
        Ok(report) => {
            log_system_event(
                Some(&ctx),
                "batch.complete",
                &format!(
                    "generated {} files for {} vehicles under {}",
                    report.files,
                    report.vehicles,
                    report.output_root.display()
                ),
                SystemEventOutcome::Success,
            );
            Ok(report)
        }
        Err(err) => {
            log_system_event(
                Some(&ctx),
                "batch.abort",
                &format!("{} error: {err}", err.kind()),
                SystemEventOutcome::Fault,
            );
            Err(err)
        }
    }
}

fn write_batch<R: Rng>(
    plan: &BatchPlan,
    cars: u64,
    files: u64,
    generator: &mut RecordGenerator<R>,
) -> Result<BatchReport, DriverError> {
    if plan.clean {
        clean_vehicle_dirs(&plan.output, cars)?;
    }

    let mut written = 0u64;
    for vehicle in 1..=cars {
        let dir = vehicle_dir(&plan.output, vehicle);
        fs::create_dir_all(&dir).map_err(|source| DriverError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;

        for file in 1..=files {
            let record = generator.generate(IdContext::Sequential(vehicle));
            let path = dir.join(record_file_name(vehicle, file));
            write_record(&record, &path)?;
            written += 1;
            let ctx = LogContext::new()
                .with_mode(BATCH_MODE)
                .with_vehicle(record.vehicle_id())
                .with_file(file);
            vtel_debug!(context = ctx, "wrote {}", path.display());
        }

        let id = vehicle_id(vehicle);
        let ctx = LogContext::new()
            .with_mode(BATCH_MODE)
            .with_vehicle(&id);
        vtel_info!(
            context = ctx,
            "vehicle complete ({}/{} vehicles, {}/{} files)",
            vehicle,
            cars,
            written,
            total_files(cars, files)
        );
    }

    Ok(BatchReport {
        vehicles: cars,
        files: written,
        output_root: plan.output.clone(),
    })
}

fn total_files(cars: u64, files: u64) -> u64 {
    cars.saturating_mul(files)
}

fn clean_vehicle_dirs(root: &Path, cars: u64) -> Result<(), DriverError> {
    for vehicle in 1..=cars {
        let dir = vehicle_dir(root, vehicle);
        match fs::remove_dir_all(&dir) {
            Ok(()) => vtel_debug!("removed existing {}", dir.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(DriverError::DirectoryCreation { path: dir, source });
            }
        }
    }
    Ok(())
}

fn write_record(record: &TelemetryRecord, path: &Path) -> Result<(), DriverError> {
    let bytes = serialize(record).map_err(|source| DriverError::Serialization {
        target: path.display().to_string(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| DriverError::Write {
        target: path.display().to_string(),
        source,
    })
}

fn emit_line<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Generate one record with a random vehicle identity and print it to `out`.
pub fn run_single<R: Rng, W: Write>(
    generator: &mut RecordGenerator<R>,
    out: &mut W,
) -> Result<TelemetryRecord, DriverError> {
    let record = generator.generate(IdContext::Random);
    let bytes = serialize(&record).map_err(|source| DriverError::Serialization {
        target: "<stdout>".to_owned(),
        source,
    })?;
    emit_line(out, &bytes).map_err(|source| DriverError::Write {
        target: "<stdout>".to_owned(),
        source,
    })?;

    let ctx = LogContext::new()
        .with_mode(SINGLE_MODE)
        .with_vehicle(record.vehicle_id());
    log_system_event(
        Some(&ctx),
        "single.emit",
        "record written to console",
        SystemEventOutcome::Success,
    );
    Ok(record)
}
