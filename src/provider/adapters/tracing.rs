//! `tracing`-backed diagnostics sink.

use crate::provider::ports::diagnostics::{DiagnosticLevel, DiagnosticsSink};

/// Diagnostics sink forwarding messages to the `tracing` ecosystem.
///
/// Severity maps one-to-one onto tracing levels, so hosts already running a
/// subscriber get registration diagnostics alongside their own spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Error => tracing::error!(target: "switchboard", "{message}"),
            DiagnosticLevel::Warn => tracing::warn!(target: "switchboard", "{message}"),
            DiagnosticLevel::Info => tracing::info!(target: "switchboard", "{message}"),
            DiagnosticLevel::Debug => tracing::debug!(target: "switchboard", "{message}"),
        }
    }
}
