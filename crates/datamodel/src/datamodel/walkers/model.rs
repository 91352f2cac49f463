use super::{field::FieldWalker, relation::RelationWalker, Walker};
use crate::datamodel::{FieldId, Model, ModelId};

/// Definition of a model.
pub type ModelWalker<'a> = Walker<'a, ModelId>;

impl<'a> ModelWalker<'a> {
    /// The name of the model, also the name of its GraphQL object type.
    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The raw documentation comment attached to the model.
    pub fn documentation(self) -> Option<&'a str> {
        self.get().documentation.as_deref()
    }

    /// An iterator over the fields of the model, in declaration order.
    pub fn fields(self) -> impl Iterator<Item = FieldWalker<'a>> + 'a {
        let range = super::range_for_key(&self.datamodel.fields, self.id, |field| field.model_id());

        range.map(move |id| self.walk(FieldId(id as u32)))
    }

    /// An iterator over the fields pointing to another model.
    pub fn relation_fields(self) -> impl Iterator<Item = RelationWalker<'a>> + 'a {
        self.fields().filter_map(FieldWalker::relation)
    }

    /// Find a field by name.
    pub fn find_field(self, name: &str) -> Option<FieldWalker<'a>> {
        self.datamodel
            .names
            .get_field_id(self.id, name)
            .map(|id| self.walk(id))
    }

    fn get(self) -> &'a Model {
        &self.datamodel.models[self.id.0 as usize]
    }
}
