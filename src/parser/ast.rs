//! Typed AST wrappers over the untyped rowan tree.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The ontology model is built during parsing; these wrappers are for tools
//! that want to walk the tree itself (e.g. to locate declarations).

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use crate::model::{Bound, Cardinality, ClassStereotype, RelationStereotype};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Direct child tokens of `node`
fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
}

fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|token| token.kind() == kind)
}

fn text_of(token: SyntaxToken) -> SmolStr {
    SmolStr::new(token.text())
}

fn relation_stereotype(node: &SyntaxNode) -> Option<RelationStereotype> {
    first_token(node, SyntaxKind::RELATION_STEREOTYPE)
        .and_then(|token| RelationStereotype::from_keyword(token.text()))
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn package(&self) -> Option<PackageDef> {
        self.0.children().find_map(PackageDef::cast)
    }

    pub fn imports(&self) -> impl Iterator<Item = ImportDef> + '_ {
        self.0.children().filter_map(ImportDef::cast)
    }

    pub fn declarations(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.children().filter_map(Declaration::cast)
    }

    /// Number of `ERROR` nodes anywhere in the tree
    pub fn error_node_count(&self) -> usize {
        self.0
            .descendants()
            .filter(|node| node.kind() == SyntaxKind::ERROR)
            .count()
    }
}

/// Any top-level declaration after the package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Class(ClassDef),
    Datatype(DatatypeDef),
    Enum(EnumDef),
    Genset(GensetDef),
    Relation(RelationDef),
}

impl AstNode for Declaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::CLASS_DEF
                | SyntaxKind::DATATYPE_DEF
                | SyntaxKind::ENUM_DEF
                | SyntaxKind::GENSET_DEF
                | SyntaxKind::RELATION_DEF
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CLASS_DEF => Some(Self::Class(ClassDef(node))),
            SyntaxKind::DATATYPE_DEF => Some(Self::Datatype(DatatypeDef(node))),
            SyntaxKind::ENUM_DEF => Some(Self::Enum(EnumDef(node))),
            SyntaxKind::GENSET_DEF => Some(Self::Genset(GensetDef(node))),
            SyntaxKind::RELATION_DEF => Some(Self::Relation(RelationDef(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Class(n) => n.syntax(),
            Self::Datatype(n) => n.syntax(),
            Self::Enum(n) => n.syntax(),
            Self::Genset(n) => n.syntax(),
            Self::Relation(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Package / Import
// ============================================================================

ast_node!(PackageDef, PACKAGE);

impl PackageDef {
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0).find(|t| t.kind().is_name()).map(text_of)
    }
}

ast_node!(ImportDef, IMPORT);

impl ImportDef {
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0).find(|t| t.kind().is_name()).map(text_of)
    }
}

// ============================================================================
// Classes
// ============================================================================

ast_node!(ClassDef, CLASS_DEF);

impl ClassDef {
    pub fn stereotype(&self) -> Option<ClassStereotype> {
        first_token(&self.0, SyntaxKind::CLASS_STEREOTYPE)
            .and_then(|token| ClassStereotype::from_keyword(token.text()))
    }

    pub fn name(&self) -> Option<SmolStr> {
        first_token(&self.0, SyntaxKind::CLASS_NAME).map(text_of)
    }

    pub fn specializes(&self) -> Option<SmolStr> {
        let specialization = self
            .0
            .children()
            .find(|n| n.kind() == SyntaxKind::SPECIALIZATION)?;
        first_token(&specialization, SyntaxKind::CLASS_NAME).map(text_of)
    }

    fn body(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() == SyntaxKind::CLASS_BODY)
    }

    pub fn attributes(&self) -> Vec<AttributeDef> {
        self.body()
            .map(|body| body.children().filter_map(AttributeDef::cast).collect())
            .unwrap_or_default()
    }

    pub fn internal_relations(&self) -> Vec<InternalRelationDef> {
        self.body()
            .map(|body| {
                body.children()
                    .filter_map(InternalRelationDef::cast)
                    .collect()
            })
            .unwrap_or_default()
    }
}

ast_node!(AttributeDef, ATTRIBUTE_DEF);

impl AttributeDef {
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0).next().map(text_of)
    }

    /// Type as written, the token after the colon
    pub fn type_name(&self) -> Option<SmolStr> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::COLON)
            .nth(1)
            .map(text_of)
    }

    pub fn cardinality(&self) -> Option<CardinalityNode> {
        self.0.children().find_map(CardinalityNode::cast)
    }
}

ast_node!(InternalRelationDef, INTERNAL_RELATION);

impl InternalRelationDef {
    pub fn stereotype(&self) -> Option<RelationStereotype> {
        relation_stereotype(&self.0)
    }

    pub fn cardinalities(&self) -> Vec<CardinalityNode> {
        self.0.children().filter_map(CardinalityNode::cast).collect()
    }

    pub fn target(&self) -> Option<SmolStr> {
        first_token(&self.0, SyntaxKind::CLASS_NAME).map(text_of)
    }
}

// ============================================================================
// Datatypes / Enums
// ============================================================================

ast_node!(DatatypeDef, DATATYPE_DEF);

impl DatatypeDef {
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::DATATYPE_NAME | SyntaxKind::CLASS_NAME))
            .map(text_of)
    }

    pub fn attributes(&self) -> Vec<AttributeDef> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::CLASS_BODY)
            .map(|body| body.children().filter_map(AttributeDef::cast).collect())
            .unwrap_or_default()
    }
}

ast_node!(EnumDef, ENUM_DEF);

impl EnumDef {
    pub fn name(&self) -> Option<SmolStr> {
        first_token(&self.0, SyntaxKind::CLASS_NAME).map(text_of)
    }

    pub fn instances(&self) -> Vec<SmolStr> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::L_BRACE)
            .filter(|t| t.kind().is_name())
            .map(text_of)
            .collect()
    }
}

// ============================================================================
// Generalization sets
// ============================================================================

ast_node!(GensetDef, GENSET_DEF);

impl GensetDef {
    pub fn is_disjoint(&self) -> bool {
        first_token(&self.0, SyntaxKind::DISJOINT_KW).is_some()
    }

    pub fn is_complete(&self) -> bool {
        first_token(&self.0, SyntaxKind::COMPLETE_KW).is_some()
    }

    /// Name written right after `genset`, if any
    pub fn name(&self) -> Option<SmolStr> {
        let mut iter = tokens(&self.0).skip_while(|t| t.kind() != SyntaxKind::GENSET_KW);
        iter.next();
        iter.next().filter(|t| t.kind().is_name()).map(text_of)
    }

    /// `general G` in the block form, `specializes G` in the inline form
    pub fn general(&self) -> Option<SmolStr> {
        let mut iter = tokens(&self.0).skip_while(|t| {
            !matches!(t.kind(), SyntaxKind::GENERAL_KW | SyntaxKind::SPECIALIZES_KW)
        });
        iter.next();
        iter.next()
            .filter(|t| t.kind() == SyntaxKind::CLASS_NAME)
            .map(text_of)
    }

    pub fn specifics(&self) -> Vec<SmolStr> {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::NAME_LIST)
            .flat_map(|list| {
                tokens(&list)
                    .filter(|t| t.kind() == SyntaxKind::CLASS_NAME)
                    .map(text_of)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

// ============================================================================
// External relations
// ============================================================================

ast_node!(RelationDef, RELATION_DEF);

impl RelationDef {
    pub fn stereotype(&self) -> Option<RelationStereotype> {
        relation_stereotype(&self.0)
    }

    pub fn domain(&self) -> Option<SmolStr> {
        first_token(&self.0, SyntaxKind::CLASS_NAME).map(text_of)
    }

    pub fn range(&self) -> Option<SmolStr> {
        tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::CLASS_NAME)
            .nth(1)
            .map(text_of)
    }

    /// Name between the two relation symbols, if any
    pub fn name(&self) -> Option<SmolStr> {
        tokens(&self.0)
            .skip_while(|t| !t.kind().is_relation_symbol())
            .nth(1)
            .filter(|t| t.kind().is_name())
            .map(text_of)
    }

    pub fn cardinalities(&self) -> Vec<CardinalityNode> {
        self.0.children().filter_map(CardinalityNode::cast).collect()
    }
}

// ============================================================================
// Cardinality
// ============================================================================

ast_node!(CardinalityNode, CARDINALITY);

impl CardinalityNode {
    /// Normalized value, recomputed from the bracket contents
    pub fn value(&self) -> Option<Cardinality> {
        let mut bounds = tokens(&self.0).filter_map(|t| match t.kind() {
            SyntaxKind::STAR => Some(Bound::Unbounded),
            SyntaxKind::INTEGER => t.text().parse().ok().map(Bound::Finite),
            _ => None,
        });
        let lower = bounds.next()?;
        let upper = bounds.next().unwrap_or(lower);
        Some(Cardinality { lower, upper })
    }
}
