//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "01-bootstrap"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Telemetry generator module exports and shared types."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
//! Synthetic vehicle telemetry for the VTel workspace.
//!
//! A [`RecordGenerator`] draws [`TelemetryRecord`]s from a
//! [`GeneratorProfile`] using an injected random source, and the [`codec`]
//! module turns records into the fixed JSON layout consumed downstream.

pub mod codec;
pub mod errors;
pub mod generator;
pub mod profile;
pub mod record;

pub use codec::{parse, serialize};
pub use errors::{ProfileError, SerializationError};
pub use generator::{IdContext, RecordGenerator};
pub use profile::{Bounds, GeneratorProfile, IdMode, ProfileKind};
pub use record::{vehicle_id, Location, TelemetryRecord, VEHICLE_ID_PREFIX};
