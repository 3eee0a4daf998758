//! External relations, cardinalities and relation symbols

use smol_str::SmolStr;

use crate::model::{Bound, Cardinality, ExternalRelation, RelationStereotype, RelationSymbol};
use crate::parser::errors::{ErrorCode, ParseContext, Severity, SyntaxError};
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// relationDecl := ('@'? RelationStereotype)? 'relation'? ClassName cardinality
///                 symbol (Name symbol)? cardinality ClassName
///
/// Only called at a stereotype, `@` or `relation`, so one of them always
/// opens the declaration.
pub(super) fn external_relation(p: &mut Parser<'_>) {
    p.node(SyntaxKind::RELATION_DEF, |p| {
        let line = p.current_line();
        let context = ParseContext::RelationDeclaration;
        let stereotype = stereotype_marker(p, context)?;
        p.eat(SyntaxKind::RELATION_KW);

        let domain = p.expect(
            SyntaxKind::CLASS_NAME,
            "a domain class name",
            context,
            ErrorCode::E0602,
        )?;
        let domain_cardinality = cardinality(p, context)?;
        let (symbol, name) = symbol_and_name(p, context)?;
        let range_cardinality = cardinality(p, context)?;
        let range = p.expect(
            SyntaxKind::CLASS_NAME,
            "a range class name",
            context,
            ErrorCode::E0602,
        )?;

        p.ctx.add_relation(ExternalRelation {
            stereotype,
            domain: domain.text.into(),
            domain_cardinality,
            symbol,
            name,
            range_cardinality,
            range: range.text.into(),
            line,
        });
        Some(())
    });
}

/// ('@'? RelationStereotype)?
///
/// Returns `Some(None)` when there is no marker, `None` on a dangling `@`.
pub(super) fn stereotype_marker(
    p: &mut Parser<'_>,
    context: ParseContext,
) -> Option<Option<RelationStereotype>> {
    if p.eat(SyntaxKind::AT) {
        let marker = p.expect(
            SyntaxKind::RELATION_STEREOTYPE,
            "a relation stereotype after '@'",
            context,
            ErrorCode::E0601,
        )?;
        return Some(RelationStereotype::from_keyword(marker.text));
    }
    if p.at(SyntaxKind::RELATION_STEREOTYPE) {
        let marker = p.bump()?;
        return Some(RelationStereotype::from_keyword(marker.text));
    }
    Some(None)
}

/// cardinality := '[' (Integer ('..' bound)? | '*') ']'
/// bound := Integer | '*'
pub(super) fn cardinality(p: &mut Parser<'_>, context: ParseContext) -> Option<Cardinality> {
    p.node(SyntaxKind::CARDINALITY, |p| {
        let line = p.current_line();
        p.expect(
            SyntaxKind::L_BRACKET,
            "a cardinality",
            context,
            ErrorCode::E0204,
        )?;
        let lower = bound(p, context)?;
        let upper = if p.at(SyntaxKind::DOT_DOT) {
            if lower.is_unbounded() {
                p.error(
                    ErrorCode::E0204,
                    "'*' can only be an upper bound, write '[*]' or '[0..*]'",
                );
                p.synchronize(context);
                return None;
            }
            p.bump();
            bound(p, context)?
        } else {
            lower
        };
        p.expect(
            SyntaxKind::R_BRACKET,
            "']' to close the cardinality",
            context,
            ErrorCode::E0204,
        )?;

        let cardinality = Cardinality { lower, upper };
        if !cardinality.is_well_ordered() {
            p.push_error(
                SyntaxError::new(
                    format!("cardinality {cardinality} has its lower bound above its upper bound"),
                    line,
                    ErrorCode::E0206,
                )
                .with_severity(Severity::Warning),
            );
        }
        Some(cardinality)
    })
}

fn bound(p: &mut Parser<'_>, context: ParseContext) -> Option<Bound> {
    match p.current_kind() {
        SyntaxKind::STAR => {
            p.bump();
            Some(Bound::Unbounded)
        }
        SyntaxKind::INTEGER => {
            let token = p.bump()?;
            token.value.as_integer().map(Bound::Finite)
        }
        _ => {
            p.expected("a number or '*' in the cardinality", context, ErrorCode::E0204);
            None
        }
    }
}

/// symbol (Name symbol)?
///
/// For the named form the recorded symbol is the first non-plain one.
pub(super) fn symbol_and_name(
    p: &mut Parser<'_>,
    context: ParseContext,
) -> Option<(RelationSymbol, Option<SmolStr>)> {
    let first = p.expect_where(
        SyntaxKind::is_relation_symbol,
        "a relation symbol ('--', '<>--' or '--<>')",
        context,
        ErrorCode::E0601,
    )?;
    let first = relation_symbol(first.kind);

    if p.current_kind().is_name() && p.nth(1).is_relation_symbol() {
        let name = p.bump()?;
        let second = relation_symbol(p.bump()?.kind);
        let symbol = if first == RelationSymbol::Plain {
            second
        } else {
            first
        };
        return Some((symbol, Some(name.text.into())));
    }

    Some((first, None))
}

fn relation_symbol(kind: SyntaxKind) -> RelationSymbol {
    match kind {
        SyntaxKind::CONTAINS => RelationSymbol::Contains,
        SyntaxKind::CONTAINED_BY => RelationSymbol::ContainedBy,
        _ => RelationSymbol::Plain,
    }
}
