//! Class and datatype bodies: attributes, metadata and internal relations

use crate::model::{
    Attribute, AttributeType, ClassDecl, Datatype, InternalRelation, MetadataFlags, NativeType,
};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::relations;

/// Record an unclosed body without consuming anything.
pub(super) fn unclosed(p: &mut Parser<'_>, what: &str, name: &str, open_line: u32) {
    let error = SyntaxError::builder(ErrorCode::E0202)
        .message(format!("unclosed body of {what} '{name}', expected '}}'"))
        .line(p.current_line())
        .suggestion(Some("add '}' to close the body"))
        .related(format!("{what} body opened here"), open_line)
        .build();
    p.push_error(error);
}

/// True at `name :`, the start of an attribute.
///
/// Keywords and stereotype words are accepted as attribute names
/// (`date: date`, `value: number`). The colon tells them apart from a
/// declaration start.
fn at_attribute(p: &Parser<'_>) -> bool {
    let kind = p.current_kind();
    let nameable = kind.is_name()
        || kind.is_keyword()
        || matches!(
            kind,
            SyntaxKind::CLASS_STEREOTYPE | SyntaxKind::RELATION_STEREOTYPE
        );
    nameable && p.nth(1) == SyntaxKind::COLON
}

/// True at the start of an internal relation: `[`, or a stereotype marker
/// followed by `[`.
fn at_internal_relation(p: &Parser<'_>) -> bool {
    match p.current_kind() {
        SyntaxKind::L_BRACKET => true,
        SyntaxKind::RELATION_STEREOTYPE => p.nth(1) == SyntaxKind::L_BRACKET,
        SyntaxKind::AT => {
            p.nth(1) == SyntaxKind::RELATION_STEREOTYPE && p.nth(2) == SyntaxKind::L_BRACKET
        }
        _ => false,
    }
}

/// '{' (attribute | internalRelation)* '}'
///
/// A declaration start before the closing brace ends the body with one
/// "unclosed body" error; the class keeps what was parsed so far.
pub(super) fn class_body(p: &mut Parser<'_>, class: &mut ClassDecl) {
    p.node(SyntaxKind::CLASS_BODY, |p| {
        let open_line = p.current_line();
        p.bump();

        loop {
            if at_attribute(p) {
                if let Some(attribute) = attribute(p, ParseContext::ClassBody) {
                    class.attributes.push(attribute);
                }
                continue;
            }
            if at_internal_relation(p) {
                if let Some(relation) = internal_relation(p) {
                    class.internal_relations.push(relation);
                }
                continue;
            }
            match p.current_kind() {
                SyntaxKind::R_BRACE => {
                    p.bump();
                    break;
                }
                kind if kind == SyntaxKind::EOF || kind.is_declaration_start() => {
                    unclosed(p, "class", &class.name, open_line);
                    break;
                }
                _ => {
                    p.unexpected(ParseContext::ClassBody, ErrorCode::E0304);
                    p.recover(ParseContext::ClassBody);
                }
            }
        }
    });
}

/// '{' attribute* '}'
pub(super) fn datatype_body(p: &mut Parser<'_>, datatype: &mut Datatype) {
    p.node(SyntaxKind::CLASS_BODY, |p| {
        let open_line = p.current_line();
        p.bump();

        loop {
            if at_attribute(p) {
                if let Some(attribute) = attribute(p, ParseContext::DatatypeBody) {
                    datatype.attributes.push(attribute);
                }
                continue;
            }
            match p.current_kind() {
                SyntaxKind::R_BRACE => {
                    p.bump();
                    break;
                }
                kind if kind == SyntaxKind::EOF || kind.is_declaration_start() => {
                    unclosed(p, "datatype", &datatype.name, open_line);
                    break;
                }
                _ => {
                    p.unexpected(ParseContext::DatatypeBody, ErrorCode::E0304);
                    p.recover(ParseContext::DatatypeBody);
                }
            }
        }
    });
}

/// attribute := Name ':' Type cardinality? metadata?
fn attribute(p: &mut Parser<'_>, context: ParseContext) -> Option<Attribute> {
    p.node(SyntaxKind::ATTRIBUTE_DEF, |p| {
        let name = p.bump()?;
        p.bump();

        let ty = attribute_type(p.current_kind(), p.current_text());
        let Some(ty) = ty else {
            let found = p.current_text().to_string();
            p.error(
                ErrorCode::E0305,
                format!(
                    "expected a type for attribute '{}' {}, found '{}'",
                    name.text,
                    context.description(),
                    found
                ),
            );
            p.synchronize(context);
            return None;
        };
        p.bump();

        let cardinality = if p.at(SyntaxKind::L_BRACKET) {
            Some(relations::cardinality(p, context)?)
        } else {
            None
        };

        let metadata = if p.at(SyntaxKind::L_BRACE) {
            metadata(p)
        } else {
            MetadataFlags::default()
        };

        Some(Attribute {
            name: name.text.into(),
            ty,
            cardinality,
            metadata,
            line: name.line,
        })
    })
}

fn attribute_type(kind: SyntaxKind, text: &str) -> Option<AttributeType> {
    let native = match kind {
        SyntaxKind::NUMBER_KW => NativeType::Number,
        SyntaxKind::STRING_KW => NativeType::String,
        SyntaxKind::BOOLEAN_KW => NativeType::Boolean,
        SyntaxKind::DATE_KW => NativeType::Date,
        SyntaxKind::TIME_KW => NativeType::Time,
        SyntaxKind::DATETIME_KW => NativeType::DateTime,
        SyntaxKind::DATATYPE_NAME => return Some(AttributeType::Datatype(text.into())),
        SyntaxKind::CLASS_NAME => return Some(AttributeType::Class(text.into())),
        _ => return None,
    };
    Some(AttributeType::Native(native))
}

/// metadata := '{' (flag ','?)* '}'
/// flag := 'const' | 'ordered' | 'derived' | 'subsets' Name? | 'redefines' Name?
///
/// Unknown tokens are reported and skipped one at a time so a stray word
/// does not swallow the enclosing body.
fn metadata(p: &mut Parser<'_>) -> MetadataFlags {
    p.node(SyntaxKind::METADATA_LIST, |p| {
        let open_line = p.current_line();
        p.bump();
        let mut flags = MetadataFlags::default();

        loop {
            match p.current_kind() {
                SyntaxKind::R_BRACE => {
                    p.bump();
                    break;
                }
                SyntaxKind::COMMA => {
                    p.bump();
                }
                SyntaxKind::CONST_KW => {
                    p.bump();
                    flags.is_const = true;
                }
                SyntaxKind::ORDERED_KW => {
                    p.bump();
                    flags.ordered = true;
                }
                SyntaxKind::DERIVED_KW => {
                    p.bump();
                    flags.derived = true;
                }
                SyntaxKind::SUBSETS_KW | SyntaxKind::REDEFINES_KW => {
                    if p.current_kind() == SyntaxKind::SUBSETS_KW {
                        flags.subsets = true;
                    } else {
                        flags.redefines = true;
                    }
                    p.bump();
                    if p.current_kind().is_name() {
                        p.bump();
                    }
                }
                kind if kind == SyntaxKind::EOF || kind.is_declaration_start() => {
                    let error = SyntaxError::builder(ErrorCode::E0202)
                        .message("unclosed attribute metadata, expected '}'")
                        .line(p.current_line())
                        .related("metadata opened here", open_line)
                        .build();
                    p.push_error(error);
                    break;
                }
                _ => {
                    let found = p.current_text().to_string();
                    p.error(
                        ErrorCode::E0304,
                        format!("unknown attribute metadata '{found}'"),
                    );
                    p.node(SyntaxKind::ERROR, |p| p.bump());
                }
            }
        }

        flags
    })
}

/// internalRelation := ('@'? RelationStereotype)? cardinality symbol (Name symbol)? cardinality ClassName
///
/// The owning class is the domain.
fn internal_relation(p: &mut Parser<'_>) -> Option<InternalRelation> {
    p.node(SyntaxKind::INTERNAL_RELATION, |p| {
        let line = p.current_line();
        let context = ParseContext::ClassBody;
        let stereotype = relations::stereotype_marker(p, context)?;
        let domain_cardinality = relations::cardinality(p, context)?;
        let (symbol, name) = relations::symbol_and_name(p, context)?;
        let range_cardinality = relations::cardinality(p, context)?;
        let target = p.expect(
            SyntaxKind::CLASS_NAME,
            "a target class name",
            context,
            ErrorCode::E0602,
        )?;

        Some(InternalRelation {
            stereotype,
            domain_cardinality,
            symbol,
            name,
            range_cardinality,
            target: target.text.into(),
            line,
        })
    })
}
