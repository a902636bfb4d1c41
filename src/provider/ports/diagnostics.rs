//! Diagnostics sink port for registration and request-time reporting.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// Unrecoverable or contained failures.
    Error,
    /// Dropped specs and skipped endpoints.
    Warn,
    /// Registration progress notes.
    Info,
    /// Structured dumps and adoption notes.
    Debug,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(label)
    }
}

/// Output contract for registration-time and request-time diagnostics.
///
/// The sink is supplied by the host through its environment; registration
/// never writes anywhere else. Tolerant failures (dropped specs, skipped
/// endpoints) are only observable through this port.
pub trait DiagnosticsSink: Send + Sync {
    /// Emits one diagnostic message at the given severity.
    fn log(&self, level: DiagnosticLevel, message: &str);
}
