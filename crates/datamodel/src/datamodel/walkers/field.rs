use super::{model::ModelWalker, r#enum::EnumWalker, relation::RelationWalker, Walker};
use crate::datamodel::{Cardinality, Field, FieldId, FieldType, ScalarKind};

/// Definition of a field in a model.
pub type FieldWalker<'a> = Walker<'a, FieldId>;

/// The type of a field, with enums and relations walked.
#[derive(Clone, Copy)]
pub enum FieldTypeWalker<'a> {
    Scalar(&'a ScalarKind),
    Enum(EnumWalker<'a>),
    Relation(RelationWalker<'a>),
}

impl<'a> FieldWalker<'a> {
    /// The model this field belongs to.
    pub fn model(self) -> ModelWalker<'a> {
        self.walk(self.get().model_id())
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The raw documentation comment attached to the field.
    pub fn documentation(self) -> Option<&'a str> {
        self.get().documentation.as_deref()
    }

    pub fn cardinality(self) -> Cardinality {
        self.get().cardinality
    }

    pub fn r#type(self) -> &'a FieldType {
        &self.get().r#type
    }

    pub fn type_walker(self) -> FieldTypeWalker<'a> {
        match self.r#type() {
            FieldType::Scalar(kind) => FieldTypeWalker::Scalar(kind),
            FieldType::Enum(enum_id) => FieldTypeWalker::Enum(self.walk(*enum_id)),
            FieldType::Relation(relation) => FieldTypeWalker::Relation(RelationWalker::new(self, relation)),
        }
    }

    /// The scalar kind, if the field holds a scalar.
    pub fn scalar(self) -> Option<&'a ScalarKind> {
        match self.r#type() {
            FieldType::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// The enum, if the field holds an enum value.
    pub fn r#enum(self) -> Option<EnumWalker<'a>> {
        match self.r#type() {
            FieldType::Enum(enum_id) => Some(self.walk(*enum_id)),
            _ => None,
        }
    }

    /// The relation, if the field points to another model.
    pub fn relation(self) -> Option<RelationWalker<'a>> {
        self.get()
            .relation()
            .map(|relation| RelationWalker::new(self, relation))
    }

    pub fn is_relation(self) -> bool {
        self.get().relation().is_some()
    }

    /// Scalar or enum fields; the ones a foreign key can be made of.
    pub fn is_key_compatible(self) -> bool {
        !self.is_relation()
    }

    fn get(self) -> &'a Field {
        &self.datamodel.fields[self.id.0 as usize]
    }
}
