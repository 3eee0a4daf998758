//! Declaration records produced by the parser.

use smol_str::SmolStr;

use super::cardinality::Cardinality;
use super::stereotype::{ClassStereotype, RelationStereotype};

/// A class declaration such as `kind Person specializes Agent { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: SmolStr,
    pub stereotype: ClassStereotype,
    pub specializes: Option<SmolStr>,
    pub attributes: Vec<Attribute>,
    pub internal_relations: Vec<InternalRelation>,
    pub line: u32,
}

impl ClassDecl {
    pub fn new(name: impl Into<SmolStr>, stereotype: ClassStereotype, line: u32) -> Self {
        Self {
            name: name.into(),
            stereotype,
            specializes: None,
            attributes: Vec::new(),
            internal_relations: Vec::new(),
            line,
        }
    }

    /// Internal relations carrying the given stereotype, in declaration order.
    pub fn relations_with(
        &self,
        stereotype: RelationStereotype,
    ) -> impl Iterator<Item = &InternalRelation> {
        self.internal_relations
            .iter()
            .filter(move |rel| rel.stereotype == Some(stereotype))
    }
}

/// Built-in attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Number,
    String,
    Boolean,
    Date,
    Time,
    DateTime,
}

impl NativeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NativeType::Number => "number",
            NativeType::String => "string",
            NativeType::Boolean => "boolean",
            NativeType::Date => "date",
            NativeType::Time => "time",
            NativeType::DateTime => "datetime",
        }
    }
}

/// The declared type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Native(NativeType),
    Class(SmolStr),
    Datatype(SmolStr),
}

impl AttributeType {
    pub fn name(&self) -> &str {
        match self {
            AttributeType::Native(native) => native.as_str(),
            AttributeType::Class(name) | AttributeType::Datatype(name) => name,
        }
    }
}

/// Attribute metadata flags written in `{ ... }` after the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetadataFlags {
    pub is_const: bool,
    pub ordered: bool,
    pub derived: bool,
    pub subsets: bool,
    pub redefines: bool,
}

/// `name : Type [card] { meta }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: SmolStr,
    pub ty: AttributeType,
    pub cardinality: Option<Cardinality>,
    pub metadata: MetadataFlags,
    pub line: u32,
}

/// Relation symbol between the two cardinalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationSymbol {
    /// `--`
    Plain,
    /// `<>--`, composite to part
    Contains,
    /// `--<>`, part to composite
    ContainedBy,
}

impl RelationSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationSymbol::Plain => "--",
            RelationSymbol::Contains => "<>--",
            RelationSymbol::ContainedBy => "--<>",
        }
    }
}

/// A relation declared inside a class body. The owning class is the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalRelation {
    pub stereotype: Option<RelationStereotype>,
    pub domain_cardinality: Cardinality,
    pub symbol: RelationSymbol,
    pub name: Option<SmolStr>,
    pub range_cardinality: Cardinality,
    pub target: SmolStr,
    pub line: u32,
}

/// A top-level `relation` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRelation {
    pub stereotype: Option<RelationStereotype>,
    pub domain: SmolStr,
    pub domain_cardinality: Cardinality,
    pub symbol: RelationSymbol,
    pub name: Option<SmolStr>,
    pub range_cardinality: Cardinality,
    pub range: SmolStr,
    pub line: u32,
}

/// A generalization set, normalized from either surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralizationSet {
    pub name: Option<SmolStr>,
    pub disjoint: bool,
    pub complete: bool,
    pub general: SmolStr,
    pub specifics: Vec<SmolStr>,
    pub line: u32,
}

impl GeneralizationSet {
    pub fn has_specific(&self, name: &str) -> bool {
        self.specifics.iter().any(|specific| specific == name)
    }

    /// Display name, falling back to the general for anonymous sets.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => format!("<genset of {}>", self.general),
        }
    }
}

/// `datatype NameDataType { attributes }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datatype {
    pub name: SmolStr,
    pub attributes: Vec<Attribute>,
    pub line: u32,
}

/// `enum Name { a, b, c }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: SmolStr,
    pub instances: Vec<SmolStr>,
    pub line: u32,
}

/// `import Name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: SmolStr,
    pub line: u32,
}
