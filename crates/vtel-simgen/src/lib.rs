//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "01-bootstrap"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Output driver for console and per-vehicle file sinks."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
//! Output driver behind the `vtel-simgen` binary.

pub mod driver;
pub mod error;

pub use driver::{record_file_name, run_batch, run_single, vehicle_dir, BatchPlan, BatchReport};
pub use error::DriverError;
