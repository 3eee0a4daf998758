//! Syntax kinds for the Rowan-based syntax tree
//!
//! One enum covers both the classified tokens produced by the lexer and the
//! composite nodes built by the parser.

/// All syntax kinds (tokens and nodes) in TONTO
///
/// Tokens are leaf nodes (names, keywords, stereotypes, punctuation).
/// Nodes are composite (package, class, genset, relation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (dropped by `tokenize`, never reaches the tree)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    INTEGER,            // 42
    STRING,             // "hello" or 'hello'
    BOOLEAN,            // true / false

    // =========================================================================
    // CLASSIFIED IDENTIFIERS
    // =========================================================================
    CLASS_NAME,         // Person
    RELATION_NAME,      // hasName
    INSTANCE_NAME,      // person1
    DATATYPE_NAME,      // ColorDataType
    IDENT,              // _anything_else

    // =========================================================================
    // STEREOTYPES (case-sensitive)
    // =========================================================================
    CLASS_STEREOTYPE,   // kind, subkind, role, ...
    RELATION_STEREOTYPE, // material, mediation, ...

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    COMMA,              // ,
    COLON,              // :
    DOT,                // .
    DOT_DOT,            // ..
    AT,                 // @
    STAR,               // *
    MINUS,              // -
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    DASH_DASH,          // --   (plain association)
    CONTAINS,           // <>-- (whole to part)
    CONTAINED_BY,       // --<> (part to whole)

    // =========================================================================
    // KEYWORDS (case-insensitive)
    // =========================================================================
    // Structural
    ONTOLOGY_KW,
    CLASS_KW,
    SUBCLASSOF_KW,
    INDIVIDUAL_KW,
    PROPERTY_KW,
    DOMAIN_KW,
    RANGE_KW,
    DATATYPE_KW,
    ANNOTATION_KW,
    EQUIVALENTTO_KW,
    DISJOINTWITH_KW,
    SAMEAS_KW,
    DIFFERENTFROM_KW,
    IMPORT_KW,
    PACKAGE_KW,
    GENSET_KW,
    DISJOINT_KW,
    COMPLETE_KW,
    GENERAL_KW,
    SPECIFICS_KW,
    WHERE_KW,
    ENUM_KW,
    RELATION_KW,
    SPECIALIZES_KW,

    // Native types
    NUMBER_KW,
    STRING_KW,
    BOOLEAN_KW,
    DATE_KW,
    TIME_KW,
    DATETIME_KW,

    // Attribute metadata
    CONST_KW,
    ORDERED_KW,
    DERIVED_KW,
    SUBSETS_KW,
    REDEFINES_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    IMPORT,
    PACKAGE,
    CLASS_DEF,
    SPECIALIZATION,
    CLASS_BODY,
    ATTRIBUTE_DEF,
    METADATA_LIST,
    INTERNAL_RELATION,
    DATATYPE_DEF,
    ENUM_DEF,
    GENSET_DEF,
    NAME_LIST,
    RELATION_DEF,
    CARDINALITY,

    // Special
    ERROR,
    EOF,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ONTOLOGY_KW as u16) && (self as u16) <= (Self::REDEFINES_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::CONTAINED_BY as u16)
    }

    /// Check if this is one of the classified identifier kinds
    pub fn is_name(self) -> bool {
        matches!(
            self,
            Self::CLASS_NAME
                | Self::RELATION_NAME
                | Self::INSTANCE_NAME
                | Self::DATATYPE_NAME
                | Self::IDENT
        )
    }

    /// Check if this is one of the three relation symbols
    pub fn is_relation_symbol(self) -> bool {
        matches!(self, Self::DASH_DASH | Self::CONTAINS | Self::CONTAINED_BY)
    }


    /// Check if a token of this kind can open a top-level declaration
    pub fn is_declaration_start(self) -> bool {
        matches!(
            self,
            Self::CLASS_STEREOTYPE
                | Self::RELATION_STEREOTYPE
                | Self::AT
                | Self::IMPORT_KW
                | Self::PACKAGE_KW
                | Self::DATATYPE_KW
                | Self::ENUM_KW
                | Self::GENSET_KW
                | Self::DISJOINT_KW
                | Self::COMPLETE_KW
                | Self::RELATION_KW
        )
    }

    /// Short human-readable category, used in messages and token tables
    pub fn describe(self) -> &'static str {
        match self {
            Self::INTEGER => "integer",
            Self::STRING => "string",
            Self::BOOLEAN => "boolean",
            Self::CLASS_NAME => "class name",
            Self::RELATION_NAME => "relation name",
            Self::INSTANCE_NAME => "instance name",
            Self::DATATYPE_NAME => "datatype name",
            Self::IDENT => "identifier",
            Self::CLASS_STEREOTYPE => "class stereotype",
            Self::RELATION_STEREOTYPE => "relation stereotype",
            Self::DASH_DASH | Self::CONTAINS | Self::CONTAINED_BY => "relation symbol",
            Self::EOF => "end of file",
            kind if kind.is_keyword() => "keyword",
            kind if kind.is_punct() => "punctuation",
            kind if kind.is_trivia() => "trivia",
            _ => "node",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TontoLanguage {}

impl rowan::Language for TontoLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<TontoLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<TontoLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<TontoLanguage>;
