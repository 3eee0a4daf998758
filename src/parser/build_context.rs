//! Per-parse accumulator for the ontology model and syntax errors.
//!
//! A fresh context is created for every [`parse`](super::parse) call and
//! returned with the result, so nothing leaks between parses.

use crate::model::{
    ClassDecl, Datatype, EnumType, ExternalRelation, GeneralizationSet, Import, OntologyModel,
};

use super::errors::SyntaxError;

#[derive(Debug, Default)]
pub struct BuildContext {
    model: OntologyModel,
    errors: Vec<SyntaxError>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: SyntaxError) {
        tracing::debug!(line = error.line, code = %error.code, "{}", error.message);
        self.errors.push(error);
    }

    pub fn has_package(&self) -> bool {
        self.model.package.is_some()
    }

    pub fn set_package(&mut self, name: &str) {
        self.model.package = Some(name.into());
    }

    pub fn add_import(&mut self, import: Import) {
        self.model.imports.push(import);
    }

    pub fn add_class(&mut self, class: ClassDecl) {
        tracing::trace!(name = %class.name, stereotype = %class.stereotype, "class");
        self.model.classes.push(class);
    }

    pub fn add_relation(&mut self, relation: ExternalRelation) {
        self.model.relations.push(relation);
    }

    pub fn add_genset(&mut self, genset: GeneralizationSet) {
        self.model.gensets.push(genset);
    }

    pub fn add_datatype(&mut self, datatype: Datatype) {
        self.model.datatypes.push(datatype);
    }

    pub fn add_enum(&mut self, enumeration: EnumType) {
        self.model.enums.push(enumeration);
    }

    pub fn finish(self) -> (OntologyModel, Vec<SyntaxError>) {
        (self.model, self.errors)
    }
}
