//! ---
//! vtel_section: "03-logging"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Structured logging adapters and sinks."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
/// Emit a log event at the given level enriched with a [`crate::LogContext`].
#[doc(hidden)]
#[macro_export]
macro_rules! __vtel_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            $level,
            vehicle = ctx.vehicle.unwrap_or(""),
            file = ctx.file.unwrap_or_default(),
            mode = ctx.mode.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with vehicle context.
#[macro_export]
macro_rules! vtel_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with vehicle context.
#[macro_export]
macro_rules! vtel_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with vehicle context.
#[macro_export]
macro_rules! vtel_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__vtel_event!(tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
