use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype};

use super::{PatternCheck, parent_problem};

/// A subkind specializes a kind and is a specific of a disjoint genset over
/// that kind.
pub struct SubkindCheck;

impl PatternCheck for SubkindCheck {
    fn pattern(&self) -> Pattern {
        Pattern::Subkind
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::Subkind
    }

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let mut problems = Vec::new();
        if let Some(problem) = parent_problem(index, class, &[ClassStereotype::Kind]) {
            problems.push(problem);
        }

        let parent = class.specializes.as_deref().unwrap_or_default();
        let in_disjoint_genset = index
            .gensets_over(parent)
            .iter()
            .any(|genset| genset.disjoint && genset.has_specific(&class.name));
        if !in_disjoint_genset {
            problems.push(match class.specializes {
                Some(_) => format!("not a specific of any disjoint genset over '{parent}'"),
                None => "not a specific of any disjoint genset".to_string(),
            });
        }

        Verdict::from_problems(problems, || {
            format!(
                "{} specializes kind '{parent}' within a disjoint genset",
                class.name
            )
        })
    }
}
