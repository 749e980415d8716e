//! ---
//! vtel_section: "03-logging"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Structured logging adapters and sinks."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
#![warn(missing_docs)]
//! Logging context and convenience macros shared by VTel binaries.

pub mod macros;

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Vehicle identifier associated with the log event.
    pub vehicle: Option<&'a str>,
    /// File index within the vehicle's output directory.
    pub file: Option<u64>,
    /// Generation mode (batch, single).
    pub mode: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a vehicle identifier.
    pub fn with_vehicle(mut self, vehicle: &'a str) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Attach a file index.
    pub fn with_file(mut self, file: u64) -> Self {
        self.file = Some(file);
        self
    }

    /// Attach a generation mode descriptor.
    pub fn with_mode(mut self, mode: &'a str) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized lifecycle event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let default = LogContext::default();
    let ctx = context.unwrap_or(&default);
    match outcome {
        SystemEventOutcome::Success => tracing::info!(
            event,
            outcome = outcome.as_str(),
            vehicle = ctx.vehicle.unwrap_or(""),
            file = ctx.file.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::error!(
            event,
            outcome = outcome.as_str(),
            vehicle = ctx.vehicle.unwrap_or(""),
            file = ctx.file.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %message
        ),
    }
}
