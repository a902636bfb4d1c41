//! Effective registration-name resolution.

use crate::provider::domain::ProviderName;
use crate::provider::ports::diagnostics::{DiagnosticLevel, DiagnosticsSink};
use crate::provider::services::normalize::NormalizedSpec;

/// Resolves and validates the effective registration name for a normalized
/// spec.
///
/// The descriptor override wins over the module's self-declared name. The
/// effective name is the one validated; a spec with no derivable name or an
/// invalid one is dropped with a diagnostic.
pub(crate) fn resolve_name(
    diagnostics: &dyn DiagnosticsSink,
    normalized: &NormalizedSpec,
) -> Option<ProviderName> {
    let declared = normalized.instance.declared_name();

    let effective = match (normalized.override_name.as_deref(), declared) {
        (Some(override_name), _) => override_name,
        (None, Some(declared_name)) => {
            diagnostics.log(
                DiagnosticLevel::Debug,
                &format!("adopting module-declared provider name '{declared_name}' (no override present)"),
            );
            declared_name
        }
        (None, None) => {
            diagnostics.log(
                DiagnosticLevel::Warn,
                "dropping provider spec: no registration name derivable (no override, module declares none)",
            );
            return None;
        }
    };

    match ProviderName::new(effective) {
        Ok(name) => Some(name),
        Err(err) => {
            diagnostics.log(
                DiagnosticLevel::Warn,
                &format!("dropping provider '{effective}': {err}"),
            );
            None
        }
    }
}
