//! Unresolved class references.
//!
//! Separate from the pattern checks: reports each genset general/specific,
//! class parent, internal-relation target and external-relation end that
//! does not name a declared class.

use super::diagnostics::{Finding, FindingCollector, Pattern};
use super::index::ModelIndex;
use crate::model::OntologyModel;

pub fn check_references(model: &OntologyModel) -> Vec<Finding> {
    let index = ModelIndex::new(model);
    let mut out = FindingCollector::new();
    let mut unresolved = |subject: &str, role: &str, target: &str, line: u32| {
        if !index.contains_class(target) {
            out.add(Finding::alert(
                Pattern::References,
                subject,
                &[format!("{role} '{target}' is not a declared class (line {line})")],
            ));
        }
    };

    for class in &model.classes {
        if let Some(parent) = &class.specializes {
            unresolved(class.name.as_str(), "parent", parent.as_str(), class.line);
        }
        for relation in &class.internal_relations {
            unresolved(
                class.name.as_str(),
                "relation target",
                relation.target.as_str(),
                relation.line,
            );
        }
    }

    for relation in &model.relations {
        let subject = relation
            .name
            .clone()
            .unwrap_or_else(|| format!("{} -- {}", relation.domain, relation.range).into());
        unresolved(subject.as_str(), "domain", relation.domain.as_str(), relation.line);
        unresolved(subject.as_str(), "range", relation.range.as_str(), relation.line);
    }

    for genset in &model.gensets {
        let subject = genset.display_name();
        unresolved(subject.as_str(), "general", genset.general.as_str(), genset.line);
        for specific in &genset.specifics {
            unresolved(subject.as_str(), "specific", specific.as_str(), genset.line);
        }
    }

    out.take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDecl, ClassStereotype, GeneralizationSet};

    #[test]
    fn test_reports_each_unresolved_name() {
        let mut student = ClassDecl::new("Student", ClassStereotype::Role, 2);
        student.specializes = Some("Person".into());
        let model = OntologyModel {
            classes: vec![student],
            gensets: vec![GeneralizationSet {
                name: Some("Learners".into()),
                disjoint: false,
                complete: false,
                general: "Person".into(),
                specifics: vec!["Student".into(), "Teacher".into()],
                line: 3,
            }],
            ..Default::default()
        };

        let findings = check_references(&model);
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(findings.len(), 3);
        assert!(messages[0].starts_with("Student: parent 'Person'"));
        assert!(messages[1].starts_with("Learners: general 'Person'"));
        assert!(messages[2].starts_with("Learners: specific 'Teacher'"));
        assert!(findings.iter().all(|f| f.pattern == Pattern::References));
    }

    #[test]
    fn test_resolved_model_has_no_findings() {
        let model = OntologyModel {
            classes: vec![ClassDecl::new("Person", ClassStereotype::Kind, 1)],
            ..Default::default()
        };
        assert!(check_references(&model).is_empty());
    }
}
