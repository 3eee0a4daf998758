//! Plain-text rendering of tokens, syntax errors, model summaries and
//! validation findings.
//!
//! Each view is a borrowed wrapper implementing `Display`, so the caller
//! decides where the text goes (`print!`, `to_string`, a writer).

use std::fmt;
use std::path::Path;

use crate::hir::{Finding, Pattern, Severity};
use crate::model::OntologyModel;
use crate::parser::{SyntaxError, TokenValue, Tokenized};

/// One row per token (`line  kind  value`), then the per-kind counts in
/// first-seen order.
pub struct TokenTable<'a, 'src>(pub &'a Tokenized<'src>);

impl fmt::Display for TokenTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:<20}  value", "line", "kind")?;
        for token in &self.0.tokens {
            write!(f, "{:>5}  {:<20}  ", token.line, token.kind.describe())?;
            match token.value {
                TokenValue::Text(text) => writeln!(f, "{text}")?,
                TokenValue::Integer(n) => writeln!(f, "{n}")?,
                TokenValue::Boolean(b) => writeln!(f, "{b}")?,
            }
        }

        writeln!(f, "\ncounts:")?;
        for (kind, count) in &self.0.counts {
            writeln!(f, "  {:<20}  {count}", format!("{kind:?}"))?;
        }
        Ok(())
    }
}

/// Syntax errors of one file, headed by its path when given.
pub struct ErrorList<'a> {
    pub path: Option<&'a Path>,
    pub errors: &'a [SyntaxError],
}

impl<'a> ErrorList<'a> {
    pub fn new(path: Option<&'a Path>, errors: &'a [SyntaxError]) -> Self {
        Self { path, errors }
    }
}

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = self.path {
            writeln!(f, "{}:", path.display())?;
        }
        if self.errors.is_empty() {
            return writeln!(f, "no syntax errors");
        }
        for error in self.errors {
            writeln!(f, "{}", error.format())?;
        }
        Ok(())
    }
}

/// Declaration counts of a model.
pub struct Summary<'a>(pub &'a OntologyModel);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;
        writeln!(
            f,
            "package: {}",
            model.package.as_deref().unwrap_or("<none>")
        )?;
        let rows = [
            ("imports", model.imports.len()),
            ("classes", model.classes.len()),
            ("relations", model.relations.len()),
            ("gensets", model.gensets.len()),
            ("datatypes", model.datatypes.len()),
            ("enums", model.enums.len()),
        ];
        for (label, count) in rows {
            writeln!(f, "  {label:<10} {count}")?;
        }
        Ok(())
    }
}

/// Findings grouped under a heading per pattern, in the order given.
pub struct FindingList<'a>(pub &'a [Finding]);

impl fmt::Display for FindingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: Option<Pattern> = None;
        for finding in self.0 {
            if current != Some(finding.pattern) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "== {} ==", finding.pattern)?;
                current = Some(finding.pattern);
            }
            writeln!(f, "[{}] {}", finding.severity, finding.message)?;
        }
        Ok(())
    }
}

/// One line tally: `3 OK, 1 ALERTA, 2 INFO`.
pub struct Tally<'a>(pub &'a [Finding]);

impl fmt::Display for Tally<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |severity: Severity| self.0.iter().filter(|x| x.severity == severity).count();
        write!(
            f,
            "{} {}, {} {}, {} {}",
            count(Severity::Ok),
            Severity::Ok,
            count(Severity::Alert),
            Severity::Alert,
            count(Severity::Info),
            Severity::Info
        )
    }
}
