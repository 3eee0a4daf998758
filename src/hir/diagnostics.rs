//! Findings: pattern validation results.
//!
//! A finding is a reporting outcome, never an error: every check always
//! produces findings, and an ALERTA does not stop the others.

use std::fmt;

use smol_str::SmolStr;

use crate::model::{ClassDecl, ClassStereotype};

// ============================================================================
// FINDING TYPES
// ============================================================================

/// Outcome of one check for one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Every condition of the pattern holds
    Ok,
    /// At least one condition failed
    Alert,
    /// Nothing to check
    Info,
}

impl Severity {
    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Alert => "ALERTA",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ontology design patterns, in report order, plus the reference check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    Subkind,
    Role,
    Phase,
    Relator,
    Mode,
    RoleMixin,
    References,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Subkind => "Subkind",
            Pattern::Role => "Role",
            Pattern::Phase => "Phase",
            Pattern::Relator => "Relator",
            Pattern::Mode => "Mode",
            Pattern::RoleMixin => "RoleMixin",
            Pattern::References => "References",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single validation record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub pattern: Pattern,
    pub message: String,
    /// Class the finding is about; absent for INFO records
    pub subject: Option<SmolStr>,
}

impl Finding {
    /// The INFO record emitted when no class carries `stereotype`.
    pub fn absent(pattern: Pattern, stereotype: ClassStereotype) -> Self {
        Self {
            severity: Severity::Info,
            pattern,
            message: format!("no {stereotype} classes, pattern absent"),
            subject: None,
        }
    }

    pub fn ok(pattern: Pattern, class: &ClassDecl, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            pattern,
            message: message.into(),
            subject: Some(class.name.clone()),
        }
    }

    /// ALERTA naming every failed condition.
    pub fn alert(pattern: Pattern, subject: impl Into<SmolStr>, problems: &[String]) -> Self {
        let subject = subject.into();
        Self {
            severity: Severity::Alert,
            pattern,
            message: format!("{subject}: {}", problems.join("; ")),
            subject: Some(subject),
        }
    }

    pub fn from_verdict(pattern: Pattern, class: &ClassDecl, verdict: Verdict) -> Self {
        match verdict {
            Verdict::Ok(message) => Self::ok(pattern, class, message),
            Verdict::Alert(problems) => Self::alert(pattern, class.name.clone(), &problems),
        }
    }

    pub fn is_alert(&self) -> bool {
        self.severity == Severity::Alert
    }
}

/// Result of checking one class against one pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Ok(String),
    /// Every failed condition, in check order
    Alert(Vec<String>),
}

impl Verdict {
    /// OK with `ok_message` when `problems` is empty, ALERTA otherwise.
    pub fn from_problems(problems: Vec<String>, ok_message: impl FnOnce() -> String) -> Self {
        if problems.is_empty() {
            Verdict::Ok(ok_message())
        } else {
            Verdict::Alert(problems)
        }
    }
}

// ============================================================================
// FINDING COLLECTOR
// ============================================================================

/// Accumulates findings in emission order.
#[derive(Clone, Debug, Default)]
pub struct FindingCollector {
    findings: Vec<Finding>,
}

impl FindingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        tracing::trace!(
            pattern = %finding.pattern,
            severity = %finding.severity,
            subject = ?finding.subject,
            "finding"
        );
        self.findings.push(finding);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn alert_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_alert()).count()
    }

    pub fn take(&mut self) -> Vec<Finding> {
        std::mem::take(&mut self.findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Alert.to_string(), "ALERTA");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn test_alert_names_every_problem() {
        let finding = Finding::alert(
            Pattern::Mode,
            "Skill",
            &["missing characterization".into(), "missing externalDependence".into()],
        );
        assert_eq!(
            finding.message,
            "Skill: missing characterization; missing externalDependence"
        );
        assert_eq!(finding.subject.as_deref(), Some("Skill"));
    }

    #[test]
    fn test_absent_has_no_subject() {
        let finding = Finding::absent(Pattern::Mode, ClassStereotype::Mode);
        assert_eq!(finding.severity, Severity::Info);
        assert!(finding.subject.is_none());
        assert!(finding.message.contains("mode"));
    }

    #[test]
    fn test_collector_counts_alerts() {
        let class = ClassDecl::new("Person", ClassStereotype::Kind, 1);
        let mut collector = FindingCollector::new();
        collector.add(Finding::ok(Pattern::Role, &class, "fine"));
        collector.add(Finding::alert(Pattern::Role, "Person", &["bad".into()]));
        assert_eq!(collector.alert_count(), 1);
        assert_eq!(collector.take().len(), 2);
        assert!(collector.findings().is_empty());
    }
}
