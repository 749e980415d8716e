//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Driver error taxonomy and process exit codes."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vtel_sim::SerializationError;

/// Terminal failures of a generator invocation.
///
/// | exit code | variant |
/// |---|---|
/// | 2 | [`DriverError::Usage`] |
/// | 3 | [`DriverError::DirectoryCreation`] |
/// | 4 | [`DriverError::Serialization`] |
/// | 5 | [`DriverError::Write`] |
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("unable to prepare directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to encode record for {target}: {source}")]
    Serialization {
        target: String,
        #[source]
        source: SerializationError,
    },
    #[error("unable to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl DriverError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) => 2,
            DriverError::DirectoryCreation { .. } => 3,
            DriverError::Serialization { .. } => 4,
            DriverError::Write { .. } => 5,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DriverError::Usage(_) => "usage",
            DriverError::DirectoryCreation { .. } => "directory-creation",
            DriverError::Serialization { .. } => "serialization",
            DriverError::Write { .. } => "write",
        }
    }
}
