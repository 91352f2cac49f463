use super::{field::FieldWalker, model::ModelWalker};
use crate::{datamodel::Relation, error::DataModelError, Result};

/// Which side of a relation a field is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSide {
    /// The model holding the field also holds the foreign key.
    ForeignKey,
    /// The foreign key is on the opposite model, or there is none.
    BackReference,
}

/// A relation, seen from one of its fields.
#[derive(Clone, Copy)]
pub struct RelationWalker<'a> {
    field: FieldWalker<'a>,
    relation: &'a Relation,
}

impl<'a> RelationWalker<'a> {
    pub(super) fn new(field: FieldWalker<'a>, relation: &'a Relation) -> Self {
        Self { field, relation }
    }

    /// The field this relation is seen from.
    pub fn field(self) -> FieldWalker<'a> {
        self.field
    }

    pub fn name(self) -> &'a str {
        &self.relation.name
    }

    /// The model the field points to.
    pub fn target_model(self) -> ModelWalker<'a> {
        self.field.datamodel().walk(self.relation.target)
    }

    pub fn side(self) -> RelationSide {
        if self.relation.from_fields.is_empty() {
            RelationSide::BackReference
        } else {
            RelationSide::ForeignKey
        }
    }

    /// The field on the target model representing the other side of the relation.
    pub fn opposite_field(self) -> Option<FieldWalker<'a>> {
        self.relation.opposite.map(|id| self.field.datamodel().walk(id))
    }

    /// The other side of the relation, seen from the opposite field.
    pub fn opposite(self) -> Option<RelationWalker<'a>> {
        self.opposite_field().and_then(FieldWalker::relation)
    }

    /// Names of the foreign key fields on this field's model. Empty on the back-reference side.
    pub fn foreign_key_field_names(self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.relation.from_fields.iter().map(String::as_str)
    }

    /// Names of the fields on the target model the foreign key points to.
    pub fn referenced_field_names(self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.relation.to_fields.iter().map(String::as_str)
    }

    pub(crate) fn validate_keys(self) -> Result<()> {
        if self.relation.from_fields.len() != self.relation.to_fields.len() {
            return Err(DataModelError::KeyArity {
                model: self.field.model().name().to_string(),
                field: self.field.name().to_string(),
            });
        }

        let own_keys = self.foreign_key_field_names().map(|name| (self.field.model(), name));
        let target_keys = self.referenced_field_names().map(|name| (self.target_model(), name));

        for (model, key_field) in own_keys.chain(target_keys) {
            let valid = model
                .find_field(key_field)
                .is_some_and(FieldWalker::is_key_compatible);

            if !valid {
                return Err(DataModelError::UnknownKeyField {
                    model: self.field.model().name().to_string(),
                    field: self.field.name().to_string(),
                    key_model: model.name().to_string(),
                    key_field: key_field.to_string(),
                });
            }
        }

        Ok(())
    }

    /// The only other field on the target model with the same relation name pointing back to us.
    pub(crate) fn find_opposite_field(self) -> Result<FieldWalker<'a>> {
        let own_model = self.field.model().id();

        let mut candidates = self.target_model().relation_fields().filter(|candidate| {
            candidate.field().id() != self.field.id()
                && candidate.name() == self.name()
                && candidate.target_model().id() == own_model
        });

        let opposite = candidates.next().ok_or_else(|| DataModelError::MissingOppositeField {
            model: self.field.model().name().to_string(),
            field: self.field.name().to_string(),
            relation: self.name().to_string(),
        })?;

        if candidates.next().is_some() {
            return Err(DataModelError::AmbiguousRelation {
                model: self.field.model().name().to_string(),
                field: self.field.name().to_string(),
                target: self.target_model().name().to_string(),
            });
        }

        Ok(opposite.field())
    }
}
