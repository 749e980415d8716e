//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Error types for profile validation and record encoding."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{field} bounds are invalid: min {min} must not exceed max {max} and both must be finite")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} range is empty: upper bound must be greater than zero")]
    EmptyRange { field: &'static str },
    #[error("unknown generator profile '{0}' (expected 'geofence' or 'global')")]
    UnknownProfile(String),
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("field {field} holds a non-finite value and cannot be encoded")]
    NonFinite { field: &'static str },
    #[error("json encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("json decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("field {field} carries unit '{found}', expected '{expected}'")]
    UnexpectedUnit {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
