#![deny(missing_docs)]
//! Shared logging utilities for the jobby workspace.
//!
//! This crate provides the `jobby_*` logging macros used across the codebase,
//! a helper for keeping bearer tokens out of log lines, and a minimal test
//! initializer for the global logger.

#[doc(hidden)]
pub use log as __log;

/// Number of leading characters of a secret kept by [`redact`].
const REDACT_KEEP: usize = 4;

/// Returns a log-safe rendering of a secret such as a bearer token.
///
/// Only the first few characters survive, followed by the total length,
/// so two tokens can be told apart in a log without leaking either.
pub fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= REDACT_KEEP {
        return format!("***({count})");
    }
    let head: String = secret.chars().take(REDACT_KEEP).collect();
    format!("{head}***({count})")
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
