//! Generalization sets
//!
//! Two surface forms normalize to the same [`GeneralizationSet`]:
//!
//! ```text
//! disjoint complete genset Name { general G specifics S1, S2 }
//! disjoint complete genset Name where S1, S2 specializes G
//! ```

use smol_str::SmolStr;

use crate::model::GeneralizationSet;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::lexer::Token;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

use super::body::unclosed;

/// gensetDecl := ('disjoint' | 'complete')* 'genset' Name? (block | inline)
pub(super) fn genset(p: &mut Parser<'_>) {
    p.node(SyntaxKind::GENSET_DEF, |p| {
        let line = p.current_line();
        let mut disjoint = false;
        let mut complete = false;
        loop {
            match p.current_kind() {
                SyntaxKind::DISJOINT_KW => disjoint = true,
                SyntaxKind::COMPLETE_KW => complete = true,
                _ => break,
            }
            p.bump();
        }

        p.expect(
            SyntaxKind::GENSET_KW,
            "'genset'",
            ParseContext::GensetDeclaration,
            ErrorCode::E0604,
        )?;
        let name: Option<SmolStr> = if p.current_kind().is_name() {
            p.bump().map(|token| token.text.into())
        } else {
            None
        };
        let label = name.as_deref().unwrap_or("<anonymous>").to_string();

        let (general, specifics) = match p.current_kind() {
            SyntaxKind::L_BRACE => block(p, &label)?,
            SyntaxKind::WHERE_KW => inline(p)?,
            _ => {
                p.expected(
                    "'{' or 'where'",
                    ParseContext::GensetDeclaration,
                    ErrorCode::E0604,
                );
                return None;
            }
        };

        let Some(general) = general else {
            p.push_error(SyntaxError::new(
                format!("genset '{label}' has no general class"),
                line,
                ErrorCode::E0604,
            ));
            return None;
        };

        let specifics = dedupe_specifics(p, &label, specifics);
        if specifics.is_empty() {
            p.push_error(SyntaxError::new(
                format!("genset '{label}' has no specifics"),
                line,
                ErrorCode::E0604,
            ));
            return None;
        }

        p.ctx.add_genset(GeneralizationSet {
            name,
            disjoint,
            complete,
            general,
            specifics,
            line,
        });
        Some(())
    });
}

/// '{' ('general' ClassName | 'specifics' nameList)* '}'
///
/// A repeated `general` is reported and the first one is kept.
fn block<'a>(p: &mut Parser<'a>, label: &str) -> Option<(Option<SmolStr>, Vec<Token<'a>>)> {
    let open_line = p.current_line();
    p.bump();
    let mut general: Option<SmolStr> = None;
    let mut specifics = Vec::new();

    loop {
        match p.current_kind() {
            SyntaxKind::GENERAL_KW => {
                p.bump();
                if let Some(token) = p.expect(
                    SyntaxKind::CLASS_NAME,
                    "a general class name",
                    ParseContext::GensetBody,
                    ErrorCode::E0604,
                ) {
                    match &general {
                        Some(first) => p.push_error(SyntaxError::new(
                            format!(
                                "genset '{label}' has more than one general, keeping '{first}'"
                            ),
                            token.line,
                            ErrorCode::E0604,
                        )),
                        None => general = Some(token.text.into()),
                    }
                }
            }
            SyntaxKind::SPECIFICS_KW => {
                p.bump();
                specifics.extend(name_list(p, ParseContext::GensetBody));
            }
            SyntaxKind::R_BRACE => {
                p.bump();
                break;
            }
            kind if kind == SyntaxKind::EOF || kind.is_declaration_start() => {
                unclosed(p, "genset", label, open_line);
                break;
            }
            _ => {
                p.unexpected(ParseContext::GensetBody, ErrorCode::E0304);
                p.recover(ParseContext::GensetBody);
            }
        }
    }

    Some((general, specifics))
}

/// 'where' nameList 'specializes' ClassName
fn inline<'a>(p: &mut Parser<'a>) -> Option<(Option<SmolStr>, Vec<Token<'a>>)> {
    p.bump();
    let specifics = name_list(p, ParseContext::GensetDeclaration);
    p.expect(
        SyntaxKind::SPECIALIZES_KW,
        "'specializes'",
        ParseContext::GensetDeclaration,
        ErrorCode::E0604,
    )?;
    let general = p.expect(
        SyntaxKind::CLASS_NAME,
        "a general class name",
        ParseContext::GensetDeclaration,
        ErrorCode::E0604,
    )?;
    Some((Some(general.text.into()), specifics))
}

/// ClassName (',' ClassName)*
fn name_list<'a>(p: &mut Parser<'a>, context: ParseContext) -> Vec<Token<'a>> {
    p.node(SyntaxKind::NAME_LIST, |p| {
        let mut names = Vec::new();
        loop {
            match p.expect(
                SyntaxKind::CLASS_NAME,
                "a specific class name",
                context,
                ErrorCode::E0604,
            ) {
                Some(token) => names.push(token),
                None => break,
            }
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        names
    })
}

/// Keep the first occurrence of each specific, reporting the repeats.
fn dedupe_specifics(p: &mut Parser<'_>, label: &str, tokens: Vec<Token<'_>>) -> Vec<SmolStr> {
    let mut specifics: Vec<SmolStr> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if specifics.iter().any(|seen| seen == token.text) {
            p.push_error(SyntaxError::new(
                format!("'{}' is listed more than once in genset '{label}'", token.text),
                token.line,
                ErrorCode::E0603,
            ));
        } else {
            specifics.push(token.text.into());
        }
    }
    specifics
}
