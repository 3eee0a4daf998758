use std::collections::BTreeSet;

use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype};

use super::{PatternCheck, parent_problem};

/// Phases are judged as a group: all phases specializing the same parent.
/// The parent is a kind, the group has at least two members, and a disjoint
/// genset over the parent has exactly the group as its specifics.
pub struct PhaseCheck;

impl PatternCheck for PhaseCheck {
    fn pattern(&self) -> Pattern {
        Pattern::Phase
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::Phase
    }

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let Some(parent) = class.specializes.as_deref() else {
            return Verdict::Alert(vec!["does not specialize a kind".to_string()]);
        };

        let group: BTreeSet<&str> = index
            .classes_with(ClassStereotype::Phase)
            .iter()
            .filter(|phase| phase.specializes.as_deref() == Some(parent))
            .map(|phase| phase.name.as_str())
            .collect();

        let mut problems = Vec::new();
        if let Some(problem) = parent_problem(index, class, &[ClassStereotype::Kind]) {
            problems.push(problem);
        }
        if group.len() < 2 {
            problems.push(format!(
                "only {} phase of '{parent}', at least 2 are needed",
                group.len()
            ));
        }
        let partitioned = index.gensets_over(parent).iter().any(|genset| {
            genset.disjoint
                && genset
                    .specifics
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<BTreeSet<_>>()
                    == group
        });
        if !partitioned {
            problems.push(format!(
                "no disjoint genset over '{parent}' with exactly its phases as specifics"
            ));
        }

        Verdict::from_problems(problems, || {
            let members: Vec<&str> = group.iter().copied().collect();
            format!(
                "{} is one of the disjoint phases of kind '{parent}' ({})",
                class.name,
                members.join(", ")
            )
        })
    }
}
