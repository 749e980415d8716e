//! ---
//! vtel_section: "01-core-functionality"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Shared primitives and utilities for the generator tooling."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
//! Core shared primitives for the VTel workspace.
//! This crate exposes configuration loading and tracing setup consumed by
//! the generator binaries.

pub mod config;
pub mod logging;

pub use config::{AppConfig, BatchConfig, GeneratorConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat};
