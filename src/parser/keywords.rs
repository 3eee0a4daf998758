//! Keyword table and contextual identifier classification.
//!
//! TONTO has no reserved-word lexer rule per keyword. Every identifier-shaped
//! lexeme goes through [`classify_word`], which applies an ordered list of
//! heuristics.

use super::syntax_kind::SyntaxKind;
use crate::model::{ClassStereotype, RelationStereotype};

/// Structural keywords, matched case-insensitively.
pub const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("ontology", SyntaxKind::ONTOLOGY_KW),
    ("class", SyntaxKind::CLASS_KW),
    ("subclassof", SyntaxKind::SUBCLASSOF_KW),
    ("individual", SyntaxKind::INDIVIDUAL_KW),
    ("property", SyntaxKind::PROPERTY_KW),
    ("domain", SyntaxKind::DOMAIN_KW),
    ("range", SyntaxKind::RANGE_KW),
    ("datatype", SyntaxKind::DATATYPE_KW),
    ("annotation", SyntaxKind::ANNOTATION_KW),
    ("equivalentto", SyntaxKind::EQUIVALENTTO_KW),
    ("disjointwith", SyntaxKind::DISJOINTWITH_KW),
    ("sameas", SyntaxKind::SAMEAS_KW),
    ("differentfrom", SyntaxKind::DIFFERENTFROM_KW),
    ("import", SyntaxKind::IMPORT_KW),
    ("package", SyntaxKind::PACKAGE_KW),
    ("genset", SyntaxKind::GENSET_KW),
    ("disjoint", SyntaxKind::DISJOINT_KW),
    ("complete", SyntaxKind::COMPLETE_KW),
    ("general", SyntaxKind::GENERAL_KW),
    ("specifics", SyntaxKind::SPECIFICS_KW),
    ("where", SyntaxKind::WHERE_KW),
    ("enum", SyntaxKind::ENUM_KW),
    ("relation", SyntaxKind::RELATION_KW),
    ("specializes", SyntaxKind::SPECIALIZES_KW),
    ("number", SyntaxKind::NUMBER_KW),
    ("string", SyntaxKind::STRING_KW),
    ("boolean", SyntaxKind::BOOLEAN_KW),
    ("date", SyntaxKind::DATE_KW),
    ("time", SyntaxKind::TIME_KW),
    ("datetime", SyntaxKind::DATETIME_KW),
    ("const", SyntaxKind::CONST_KW),
    ("ordered", SyntaxKind::ORDERED_KW),
    ("derived", SyntaxKind::DERIVED_KW),
    ("subsets", SyntaxKind::SUBSETS_KW),
    ("redefines", SyntaxKind::REDEFINES_KW),
];

/// Look up a structural keyword, ignoring ASCII case.
pub fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
        .map(|(_, kind)| *kind)
}

/// Classify an identifier-shaped lexeme (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// Precedence:
/// 1. structural keyword (case-insensitive)
/// 2. class stereotype (case-sensitive)
/// 3. relation stereotype (case-sensitive)
/// 4. `true` / `false`
/// 5. `[A-Za-z]+DataType`
/// 6. leading uppercase
/// 7. leading lowercase ending in a digit run
/// 8. leading lowercase
/// 9. anything else
pub fn classify_word(word: &str) -> SyntaxKind {
    if let Some(kind) = keyword_kind(word) {
        return kind;
    }
    if ClassStereotype::from_keyword(word).is_some() {
        return SyntaxKind::CLASS_STEREOTYPE;
    }
    if RelationStereotype::from_keyword(word).is_some() {
        return SyntaxKind::RELATION_STEREOTYPE;
    }
    if word == "true" || word == "false" {
        return SyntaxKind::BOOLEAN;
    }
    if is_datatype_name(word) {
        return SyntaxKind::DATATYPE_NAME;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => SyntaxKind::CLASS_NAME,
        Some(first) if first.is_ascii_lowercase() => {
            if word.ends_with(|c: char| c.is_ascii_digit()) {
                SyntaxKind::INSTANCE_NAME
            } else {
                SyntaxKind::RELATION_NAME
            }
        }
        _ => SyntaxKind::IDENT,
    }
}

fn is_datatype_name(word: &str) -> bool {
    word.strip_suffix("DataType")
        .is_some_and(|stem| !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(classify_word("package"), SyntaxKind::PACKAGE_KW);
        assert_eq!(classify_word("PACKAGE"), SyntaxKind::PACKAGE_KW);
        assert_eq!(classify_word("Genset"), SyntaxKind::GENSET_KW);
        assert_eq!(classify_word("subClassOf"), SyntaxKind::SUBCLASSOF_KW);
    }

    #[test]
    fn test_keyword_beats_class_name_shape() {
        // `String` is PascalCase but matches the native type keyword first
        assert_eq!(classify_word("String"), SyntaxKind::STRING_KW);
    }

    #[test]
    fn test_stereotypes_are_case_sensitive() {
        assert_eq!(classify_word("kind"), SyntaxKind::CLASS_STEREOTYPE);
        assert_eq!(classify_word("Kind"), SyntaxKind::CLASS_NAME);
        assert_eq!(classify_word("mediation"), SyntaxKind::RELATION_STEREOTYPE);
        assert_eq!(classify_word("Mediation"), SyntaxKind::CLASS_NAME);
    }

    #[test]
    fn test_datatype_stem_must_be_alphabetic() {
        assert_eq!(classify_word("ColorDataType"), SyntaxKind::DATATYPE_NAME);
        assert_eq!(classify_word("Color2DataType"), SyntaxKind::CLASS_NAME);
        assert_eq!(classify_word("DataType"), SyntaxKind::CLASS_NAME);
    }

    #[test]
    fn test_lowercase_split_on_trailing_digits() {
        assert_eq!(classify_word("person1"), SyntaxKind::INSTANCE_NAME);
        assert_eq!(classify_word("has2Names"), SyntaxKind::RELATION_NAME);
        assert_eq!(classify_word("hasName"), SyntaxKind::RELATION_NAME);
    }

    #[test]
    fn test_fallback_ident() {
        assert_eq!(classify_word("_hidden"), SyntaxKind::IDENT);
    }
}
