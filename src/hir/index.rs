//! Lookup indices over a (possibly import-merged) ontology model.
//!
//! The index borrows the model, so a model that grows after indexing must be
//! indexed again.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::model::{
    ClassDecl, ClassStereotype, ExternalRelation, GeneralizationSet, InternalRelation,
    OntologyModel, RelationStereotype,
};

/// A relation touching a class, from either declaration site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationRef<'m> {
    External(&'m ExternalRelation),
    /// Declared inside `owner`'s body; `owner` is the domain
    Internal {
        owner: &'m ClassDecl,
        relation: &'m InternalRelation,
    },
}

impl<'m> RelationRef<'m> {
    pub fn stereotype(&self) -> Option<RelationStereotype> {
        match *self {
            RelationRef::External(relation) => relation.stereotype,
            RelationRef::Internal { relation, .. } => relation.stereotype,
        }
    }

    pub fn domain(&self) -> &'m str {
        match *self {
            RelationRef::External(relation) => relation.domain.as_str(),
            RelationRef::Internal { owner, .. } => owner.name.as_str(),
        }
    }

    pub fn range(&self) -> &'m str {
        match *self {
            RelationRef::External(relation) => relation.range.as_str(),
            RelationRef::Internal { relation, .. } => relation.target.as_str(),
        }
    }
}

/// The four indices the pattern checks run against.
#[derive(Debug, Clone)]
pub struct ModelIndex<'m> {
    model: &'m OntologyModel,
    /// name -> first class declared with that name
    classes_by_name: FxHashMap<&'m str, &'m ClassDecl>,
    /// stereotype -> classes, both in declaration order
    classes_by_stereotype: IndexMap<ClassStereotype, Vec<&'m ClassDecl>>,
    gensets_by_general: FxHashMap<&'m str, Vec<&'m GeneralizationSet>>,
    relations_by_class: FxHashMap<&'m str, Vec<RelationRef<'m>>>,
}

impl<'m> ModelIndex<'m> {
    pub fn new(model: &'m OntologyModel) -> Self {
        let mut index = Self {
            model,
            classes_by_name: FxHashMap::default(),
            classes_by_stereotype: IndexMap::new(),
            gensets_by_general: FxHashMap::default(),
            relations_by_class: FxHashMap::default(),
        };

        for class in &model.classes {
            index.classes_by_name.entry(class.name.as_str()).or_insert(class);
            index
                .classes_by_stereotype
                .entry(class.stereotype)
                .or_default()
                .push(class);

            for relation in &class.internal_relations {
                let relation = RelationRef::Internal {
                    owner: class,
                    relation,
                };
                index.add_relation(relation);
            }
        }

        for relation in &model.relations {
            index.add_relation(RelationRef::External(relation));
        }

        for genset in &model.gensets {
            index
                .gensets_by_general
                .entry(genset.general.as_str())
                .or_default()
                .push(genset);
        }

        tracing::debug!(
            classes = index.classes_by_name.len(),
            stereotypes = index.classes_by_stereotype.len(),
            gensets = model.gensets.len(),
            "built model index"
        );
        index
    }

    fn add_relation(&mut self, relation: RelationRef<'m>) {
        let (domain, range) = (relation.domain(), relation.range());
        self.relations_by_class
            .entry(domain)
            .or_default()
            .push(relation);
        if range != domain {
            self.relations_by_class.entry(range).or_default().push(relation);
        }
    }

    pub fn model(&self) -> &'m OntologyModel {
        self.model
    }

    pub fn class(&self, name: &str) -> Option<&'m ClassDecl> {
        self.classes_by_name.get(name).copied()
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes_by_name.contains_key(name)
    }

    pub fn classes_with(&self, stereotype: ClassStereotype) -> &[&'m ClassDecl] {
        self.classes_by_stereotype
            .get(&stereotype)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gensets whose general is `name`, in declaration order
    pub fn gensets_over(&self, name: &str) -> &[&'m GeneralizationSet] {
        self.gensets_by_general
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Relations with `name` at either end
    pub fn relations_of(&self, name: &str) -> &[RelationRef<'m>] {
        self.relations_by_class
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stereotype of the class `name` resolves to
    pub fn stereotype_of(&self, name: &str) -> Option<ClassStereotype> {
        self.class(name).map(|class| class.stereotype)
    }
}
