//! Parse context tracking for context-aware error messages
//!
//! Each grammar rule that can fail runs under a context. The context names
//! the location in error messages and decides where recovery stops skipping.

use crate::parser::SyntaxKind;

/// Tokens that open a top-level declaration.
const TOP_LEVEL_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::CLASS_STEREOTYPE,
    SyntaxKind::RELATION_STEREOTYPE,
    SyntaxKind::AT,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::DATATYPE_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::GENSET_KW,
    SyntaxKind::DISJOINT_KW,
    SyntaxKind::COMPLETE_KW,
    SyntaxKind::RELATION_KW,
];

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// Between declarations
    #[default]
    TopLevel,
    /// Parsing an `import` statement
    Import,
    /// Parsing the `package` statement
    Package,
    /// Parsing a class header (stereotype, name, specializes)
    ClassDeclaration,
    /// Inside `{ ... }` of a class
    ClassBody,
    /// Inside `{ ... }` of a datatype
    DatatypeBody,
    /// Inside `{ ... }` of an enum
    EnumBody,
    /// Parsing a genset header or inline form
    GensetDeclaration,
    /// Inside `{ ... }` of a genset
    GensetBody,
    /// Parsing a top-level relation
    RelationDeclaration,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::Import => "in import statement",
            Self::Package => "in package declaration",
            Self::ClassDeclaration => "in class declaration",
            Self::ClassBody => "in class body",
            Self::DatatypeBody => "in datatype body",
            Self::EnumBody => "in enum body",
            Self::GensetDeclaration => "in genset declaration",
            Self::GensetBody => "in genset body",
            Self::RelationDeclaration => "in relation declaration",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a class, datatype, enum, genset or relation declaration",
            Self::Import | Self::Package => "a name",
            Self::ClassDeclaration => "a class name, 'specializes' or a body",
            Self::ClassBody => "an attribute, an internal relation or '}'",
            Self::DatatypeBody => "an attribute or '}'",
            Self::EnumBody => "an instance name, ',' or '}'",
            Self::GensetDeclaration => "'genset', a name, '{' or 'where'",
            Self::GensetBody => "'general', 'specifics' or '}'",
            Self::RelationDeclaration => "a class, a cardinality or a relation symbol",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::ClassBody => &[
                SyntaxKind::R_BRACE,
                SyntaxKind::L_BRACKET,
                SyntaxKind::RELATION_NAME,
                SyntaxKind::INSTANCE_NAME,
                SyntaxKind::CLASS_STEREOTYPE,
                SyntaxKind::RELATION_STEREOTYPE,
                SyntaxKind::AT,
                SyntaxKind::IMPORT_KW,
                SyntaxKind::PACKAGE_KW,
                SyntaxKind::DATATYPE_KW,
                SyntaxKind::ENUM_KW,
                SyntaxKind::GENSET_KW,
                SyntaxKind::DISJOINT_KW,
                SyntaxKind::COMPLETE_KW,
                SyntaxKind::RELATION_KW,
            ],
            Self::DatatypeBody => &[
                SyntaxKind::R_BRACE,
                SyntaxKind::RELATION_NAME,
                SyntaxKind::INSTANCE_NAME,
                SyntaxKind::CLASS_STEREOTYPE,
                SyntaxKind::RELATION_STEREOTYPE,
                SyntaxKind::AT,
                SyntaxKind::IMPORT_KW,
                SyntaxKind::PACKAGE_KW,
                SyntaxKind::DATATYPE_KW,
                SyntaxKind::ENUM_KW,
                SyntaxKind::GENSET_KW,
                SyntaxKind::DISJOINT_KW,
                SyntaxKind::COMPLETE_KW,
                SyntaxKind::RELATION_KW,
            ],
            Self::EnumBody => &[
                SyntaxKind::R_BRACE,
                SyntaxKind::COMMA,
                SyntaxKind::CLASS_STEREOTYPE,
                SyntaxKind::RELATION_STEREOTYPE,
                SyntaxKind::AT,
                SyntaxKind::IMPORT_KW,
                SyntaxKind::PACKAGE_KW,
                SyntaxKind::DATATYPE_KW,
                SyntaxKind::ENUM_KW,
                SyntaxKind::GENSET_KW,
                SyntaxKind::DISJOINT_KW,
                SyntaxKind::COMPLETE_KW,
                SyntaxKind::RELATION_KW,
            ],
            Self::GensetBody => &[
                SyntaxKind::R_BRACE,
                SyntaxKind::GENERAL_KW,
                SyntaxKind::SPECIFICS_KW,
                SyntaxKind::CLASS_STEREOTYPE,
                SyntaxKind::RELATION_STEREOTYPE,
                SyntaxKind::AT,
                SyntaxKind::IMPORT_KW,
                SyntaxKind::PACKAGE_KW,
                SyntaxKind::DATATYPE_KW,
                SyntaxKind::ENUM_KW,
                SyntaxKind::GENSET_KW,
                SyntaxKind::DISJOINT_KW,
                SyntaxKind::COMPLETE_KW,
                SyntaxKind::RELATION_KW,
            ],
            _ => TOP_LEVEL_RECOVERY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_description() {
        assert_eq!(ParseContext::TopLevel.description(), "at top level");
        assert_eq!(ParseContext::ClassBody.description(), "in class body");
        assert_eq!(ParseContext::GensetBody.description(), "in genset body");
    }

    #[test]
    fn test_body_contexts_stop_at_closing_brace() {
        for context in [
            ParseContext::ClassBody,
            ParseContext::DatatypeBody,
            ParseContext::EnumBody,
            ParseContext::GensetBody,
        ] {
            assert!(context.recovery_tokens().contains(&SyntaxKind::R_BRACE));
        }
    }

    #[test]
    fn test_every_context_stops_at_declaration_starts() {
        for context in [
            ParseContext::TopLevel,
            ParseContext::ClassDeclaration,
            ParseContext::ClassBody,
            ParseContext::GensetBody,
            ParseContext::RelationDeclaration,
        ] {
            let tokens = context.recovery_tokens();
            assert!(tokens.contains(&SyntaxKind::CLASS_STEREOTYPE));
            assert!(tokens.contains(&SyntaxKind::GENSET_KW));
        }
    }

    #[test]
    fn test_top_level_does_not_stop_at_names() {
        assert!(!ParseContext::TopLevel
            .recovery_tokens()
            .contains(&SyntaxKind::CLASS_NAME));
    }

    #[test]
    fn test_default_context() {
        assert_eq!(ParseContext::default(), ParseContext::TopLevel);
    }
}
