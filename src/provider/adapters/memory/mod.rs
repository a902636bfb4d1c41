//! In-memory adapters: static provider tables, a recording router, and
//! diagnostics sinks for hosts and tests.

mod diagnostics;
mod loader;
mod router;

pub use diagnostics::{CapturedDiagnostic, CapturingDiagnostics, NoopDiagnostics};
pub use loader::StaticProviderTable;
pub use router::{InMemoryRouter, RecordedRoute};
