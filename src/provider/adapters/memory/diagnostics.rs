//! In-memory diagnostics sinks: a silent default and a capturing sink for
//! tests.

use std::sync::{Arc, RwLock};

use crate::provider::ports::diagnostics::{DiagnosticLevel, DiagnosticsSink};

/// Diagnostics sink that discards every message.
///
/// The default for hosts that opt out of registration diagnostics; there is
/// no process-wide toggle, only the sink the environment carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticsSink for NoopDiagnostics {
    fn log(&self, _level: DiagnosticLevel, _message: &str) {}
}

/// One message captured by [`CapturingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedDiagnostic {
    /// Severity the message was emitted at.
    pub level: DiagnosticLevel,
    /// The message text.
    pub message: String,
}

/// Diagnostics sink retaining every message for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CapturingDiagnostics {
    messages: Arc<RwLock<Vec<CapturedDiagnostic>>>,
}

impl CapturingDiagnostics {
    /// Creates an empty capturing sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the captured messages in emission order.
    #[must_use]
    pub fn captured(&self) -> Vec<CapturedDiagnostic> {
        let messages = match self.messages.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.clone()
    }

    /// Returns the captured messages at the given severity.
    #[must_use]
    pub fn at_level(&self, level: DiagnosticLevel) -> Vec<String> {
        self.captured()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }
}

impl DiagnosticsSink for CapturingDiagnostics {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        let mut messages = match self.messages.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(CapturedDiagnostic {
            level,
            message: message.to_owned(),
        });
    }
}
