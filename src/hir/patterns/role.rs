use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::{ModelIndex, RelationRef};
use crate::model::{ClassDecl, ClassStereotype, RelationStereotype};

use super::{PatternCheck, parent_problem};

/// A role specializes a kind or roleMixin and takes part in a relational
/// context.
pub struct RoleCheck;

/// How a role takes part in a relation, if it does.
fn participation(class: &ClassDecl, relation: &RelationRef<'_>) -> Option<&'static str> {
    match *relation {
        RelationRef::External(external) => match external.stereotype {
            Some(RelationStereotype::Material) => Some("material relation"),
            Some(RelationStereotype::Mediation) => Some("mediation relation"),
            _ => None,
        },
        RelationRef::Internal { owner, relation } => {
            let mediated = relation.stereotype == Some(RelationStereotype::Mediation)
                && owner.stereotype == ClassStereotype::Relator
                && relation.target == class.name;
            mediated.then_some("mediation from a relator")
        }
    }
}

impl PatternCheck for RoleCheck {
    fn pattern(&self) -> Pattern {
        Pattern::Role
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::Role
    }

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let mut problems = Vec::new();
        if let Some(problem) = parent_problem(
            index,
            class,
            &[ClassStereotype::Kind, ClassStereotype::RoleMixin],
        ) {
            problems.push(problem);
        }

        let context = index
            .relations_of(&class.name)
            .iter()
            .find_map(|relation| participation(class, relation));
        if context.is_none() {
            problems.push(
                "takes part in no material relation, mediation relation, or relator mediation"
                    .to_string(),
            );
        }

        Verdict::from_problems(problems, || {
            format!(
                "{} specializes '{}' and takes part in a {}",
                class.name,
                class.specializes.as_deref().unwrap_or_default(),
                context.unwrap_or_default()
            )
        })
    }
}
