//! The six ontology design pattern checks.
//!
//! Each check names the stereotype it applies to and judges one class at a
//! time. The driver emits a single INFO record when no class carries the
//! stereotype, otherwise one record per class in declaration order.

mod mode;
mod phase;
mod relator;
mod role;
mod role_mixin;
mod subkind;

use super::diagnostics::{Finding, FindingCollector, Pattern, Verdict};
use super::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype};

pub use mode::ModeCheck;
pub use phase::PhaseCheck;
pub use relator::RelatorCheck;
pub use role::RoleCheck;
pub use role_mixin::RoleMixinCheck;
pub use subkind::SubkindCheck;

/// One pattern check.
pub trait PatternCheck {
    fn pattern(&self) -> Pattern;

    /// Classes with this stereotype are checked
    fn subject(&self) -> ClassStereotype;

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict;

    /// Emit this check's records into `out`
    fn run(&self, index: &ModelIndex<'_>, out: &mut FindingCollector) {
        let classes = index.classes_with(self.subject());
        if classes.is_empty() {
            out.add(Finding::absent(self.pattern(), self.subject()));
            return;
        }
        for class in classes {
            let verdict = self.check(index, class);
            out.add(Finding::from_verdict(self.pattern(), class, verdict));
        }
    }
}

/// All checks, in report order.
pub const CHECKS: &[&dyn PatternCheck] = &[
    &SubkindCheck,
    &RoleCheck,
    &PhaseCheck,
    &RelatorCheck,
    &ModeCheck,
    &RoleMixinCheck,
];

/// Describe how `parent` fails to be a class of `expected` stereotype, if it
/// does.
pub(crate) fn parent_problem(
    index: &ModelIndex<'_>,
    class: &ClassDecl,
    expected: &[ClassStereotype],
) -> Option<String> {
    let wanted = expected
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" or ");
    let Some(parent) = class.specializes.as_deref() else {
        return Some(format!("does not specialize a {wanted}"));
    };
    match index.stereotype_of(parent) {
        None => Some(format!("parent '{parent}' is not declared")),
        Some(stereotype) if expected.contains(&stereotype) => None,
        Some(stereotype) => Some(format!(
            "parent '{parent}' is a {stereotype}, not a {wanted}"
        )),
    }
}
