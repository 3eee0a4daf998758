//! Pattern validation over the ontology model.
//!
//! ## Key Types
//!
//! - [`ModelIndex`] - four lookup indices borrowed from the model
//! - [`PatternCheck`] - one ontology design pattern
//! - [`Finding`] - an OK / ALERTA / INFO record
//!
//! ```text
//! OntologyModel (possibly import-merged)
//!     │
//!     ▼
//! ModelIndex                ← name, stereotype, genset-general, relation indices
//!     │
//!     ▼
//! Subkind, Role, Phase, Relator, Mode, RoleMixin
//!     │
//!     ▼
//! Vec<Finding>              ← in check order, then declaration order
//! ```
//!
//! The checks are independent: none reads another's result.

mod diagnostics;
mod index;
mod patterns;
mod references;

pub use diagnostics::{Finding, FindingCollector, Pattern, Severity, Verdict};
pub use index::{ModelIndex, RelationRef};
pub use patterns::{
    CHECKS, ModeCheck, PatternCheck, PhaseCheck, RelatorCheck, RoleCheck, RoleMixinCheck,
    SubkindCheck,
};
pub use references::check_references;

use crate::model::OntologyModel;

/// Run the six pattern checks, in order: Subkind, Role, Phase, Relator,
/// Mode, RoleMixin.
pub fn validate(model: &OntologyModel) -> Vec<Finding> {
    let index = ModelIndex::new(model);
    let mut findings = FindingCollector::new();
    for check in CHECKS {
        check.run(&index, &mut findings);
    }
    tracing::debug!(
        findings = findings.findings().len(),
        alerts = findings.alert_count(),
        "validated model"
    );
    findings.take()
}
