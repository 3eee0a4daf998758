use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype, RelationStereotype};

use super::PatternCheck;

/// A mode characterizes its bearer and depends externally on something else.
pub struct ModeCheck;

impl PatternCheck for ModeCheck {
    fn pattern(&self) -> Pattern {
        Pattern::Mode
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::Mode
    }

    fn check(&self, _index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let problems: Vec<String> = [
            RelationStereotype::Characterization,
            RelationStereotype::ExternalDependence,
        ]
        .into_iter()
        .filter(|&stereotype| class.relations_with(stereotype).next().is_none())
        .map(|stereotype| format!("missing {stereotype} relation"))
        .collect();

        Verdict::from_problems(problems, || {
            format!(
                "{} has characterization and externalDependence relations",
                class.name
            )
        })
    }
}
