use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype};

use super::PatternCheck;

/// A roleMixin is specialized by at least two roles and is the general of a
/// genset.
pub struct RoleMixinCheck;

impl PatternCheck for RoleMixinCheck {
    fn pattern(&self) -> Pattern {
        Pattern::RoleMixin
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::RoleMixin
    }

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let roles: Vec<&str> = index
            .classes_with(ClassStereotype::Role)
            .iter()
            .filter(|role| role.specializes.as_deref() == Some(class.name.as_str()))
            .map(|role| role.name.as_str())
            .collect();

        let mut problems = Vec::new();
        if roles.len() < 2 {
            problems.push(format!(
                "specialized by {} role(s), at least 2 are needed",
                roles.len()
            ));
        }
        if index.gensets_over(&class.name).is_empty() {
            problems.push("is not the general of any genset".to_string());
        }

        Verdict::from_problems(problems, || {
            format!(
                "{} is specialized by roles {} within a genset",
                class.name,
                roles.join(", ")
            )
        })
    }
}
