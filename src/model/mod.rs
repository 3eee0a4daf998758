//! Ontology model: the structured output of the parser.
//!
//! Records are created once while parsing and never mutated afterwards. The
//! only way a model grows after parsing is [`OntologyModel::merge`], which
//! appends the declarations of an imported file.

mod cardinality;
mod decl;
mod stereotype;

pub use cardinality::{Bound, Cardinality};
pub use decl::{
    Attribute, AttributeType, ClassDecl, Datatype, EnumType, ExternalRelation,
    GeneralizationSet, Import, InternalRelation, MetadataFlags, NativeType, RelationSymbol,
};
pub use stereotype::{ClassStereotype, RelationStereotype};

use smol_str::SmolStr;

/// Everything declared by one file, or by a root file plus its imports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyModel {
    pub package: Option<SmolStr>,
    pub imports: Vec<Import>,
    pub classes: Vec<ClassDecl>,
    pub relations: Vec<ExternalRelation>,
    pub gensets: Vec<GeneralizationSet>,
    pub datatypes: Vec<Datatype>,
    pub enums: Vec<EnumType>,
}

impl OntologyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the declarations of `other`.
    ///
    /// Package and imports of `other` are not carried over: the import walker
    /// has already followed them.
    pub fn merge(&mut self, other: OntologyModel) {
        self.classes.extend(other.classes);
        self.relations.extend(other.relations);
        self.gensets.extend(other.gensets);
        self.datatypes.extend(other.datatypes);
        self.enums.extend(other.enums);
    }

    /// First class declared with `name`.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn classes_with(&self, stereotype: ClassStereotype) -> impl Iterator<Item = &ClassDecl> {
        self.classes
            .iter()
            .filter(move |class| class.stereotype == stereotype)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.relations.is_empty()
            && self.gensets.is_empty()
            && self.datatypes.is_empty()
            && self.enums.is_empty()
    }
}
