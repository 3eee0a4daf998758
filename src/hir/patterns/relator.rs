use crate::hir::diagnostics::{Pattern, Verdict};
use crate::hir::index::ModelIndex;
use crate::model::{ClassDecl, ClassStereotype, RelationStereotype};

use super::PatternCheck;

/// A relator mediates at least two roles through internal mediations.
pub struct RelatorCheck;

impl PatternCheck for RelatorCheck {
    fn pattern(&self) -> Pattern {
        Pattern::Relator
    }

    fn subject(&self) -> ClassStereotype {
        ClassStereotype::Relator
    }

    fn check(&self, index: &ModelIndex<'_>, class: &ClassDecl) -> Verdict {
        let mut valid = Vec::new();
        let mut problems = Vec::new();

        for mediation in class.relations_with(RelationStereotype::Mediation) {
            let target = &mediation.target;
            match index.stereotype_of(target) {
                Some(ClassStereotype::Role) => valid.push(target.as_str()),
                Some(other) => {
                    problems.push(format!("mediation target '{target}' is {other}, not role"))
                }
                None => problems.push(format!("mediation target '{target}' not found")),
            }
        }

        match valid.len() {
            0 if problems.is_empty() => Verdict::Alert(vec!["no mediations".to_string()]),
            0 => Verdict::Alert(problems),
            1 => {
                let mut all = vec![format!("only one valid mediation (to '{}')", valid[0])];
                all.extend(problems);
                Verdict::Alert(all)
            }
            _ => Verdict::Ok(format!(
                "{} mediates roles {}",
                class.name,
                valid.join(", ")
            )),
        }
    }
}
