mod r#enum;
mod field;
mod ids;
mod model;
mod names;
mod scalar;
mod walkers;

pub use field::{Cardinality, Field, FieldType, Relation};
pub use ids::{EnumId, EnumMemberId, FieldId, ModelId};
pub use model::Model;
pub use r#enum::{Enum, EnumMember};
pub use scalar::ScalarKind;
pub use walkers::{
    EnumMemberWalker, EnumWalker, FieldTypeWalker, FieldWalker, ModelWalker, RelationSide, RelationWalker, Walker,
};

use names::Names;

use crate::{error::DataModelError, Result};

/// Definition of a relational datamodel. Holds the models, their fields,
/// the enums and their members for us to project a GraphQL schema.
///
/// Everything is stored in flat vectors indexed by the typed ids, and
/// iterated with walkers. Declaration order is preserved everywhere: the
/// projected schema must come out identical for identical input.
///
/// The definition is built by the [`input`](crate::input) module and
/// is immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct DataModel {
    /// Ordered by declaration.
    models: Vec<Model>,
    /// Ordered by model id, then declaration position.
    fields: Vec<Field>,
    /// Ordered by declaration.
    enums: Vec<Enum>,
    /// Ordered by enum id, then declaration position.
    enum_members: Vec<EnumMember>,
    names: Names,
}

impl DataModel {
    /// Reads a datamodel from its JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        let input = serde_json::from_str(document)?;
        crate::input::build(input)
    }

    /// Iterates over all models in declaration order.
    pub fn models(&self) -> impl ExactSizeIterator<Item = ModelWalker<'_>> + '_ {
        (0..self.models.len()).map(move |id| self.walk(ModelId(id as u32)))
    }

    /// Iterates over all enums in declaration order.
    pub fn enums(&self) -> impl ExactSizeIterator<Item = EnumWalker<'_>> + '_ {
        (0..self.enums.len()).map(move |id| self.walk(EnumId(id as u32)))
    }

    pub fn find_model(&self, name: &str) -> Option<ModelWalker<'_>> {
        self.names.get_model_id(name).map(|id| self.walk(id))
    }

    pub fn find_enum(&self, name: &str) -> Option<EnumWalker<'_>> {
        self.names.get_enum_id(name).map(|id| self.walk(id))
    }

    /// Walk an item in the definition by its ID.
    pub fn walk<Id>(&self, id: Id) -> Walker<'_, Id> {
        Walker { id, datamodel: self }
    }

    pub(crate) fn get_model_id(&self, name: &str) -> Option<ModelId> {
        self.names.get_model_id(name)
    }

    pub(crate) fn get_enum_id(&self, name: &str) -> Option<EnumId> {
        self.names.get_enum_id(name)
    }

    /// Adds a model to the definition.
    pub(crate) fn push_model(&mut self, model: Model) -> Result<ModelId> {
        let id = ModelId(self.models.len() as u32);

        if self.names.get_enum_id(&model.name).is_some() {
            return Err(DataModelError::NameClash(model.name));
        }

        if !self.names.intern_model(&model.name, id) {
            return Err(DataModelError::DuplicateModel(model.name));
        }

        self.models.push(model);

        Ok(id)
    }

    /// Adds a field to its model. Fields must be pushed grouped by model, in model id order.
    pub(crate) fn push_field(&mut self, field: Field) -> Result<FieldId> {
        let id = FieldId(self.fields.len() as u32);

        if !self.names.intern_field(field.model_id(), &field.name, id) {
            return Err(DataModelError::DuplicateField {
                model: self.models[field.model_id().0 as usize].name.clone(),
                field: field.name,
            });
        }

        self.fields.push(field);

        Ok(id)
    }

    /// Adds an enum to the definition. Its members must be pushed before the next enum.
    pub(crate) fn push_enum(&mut self, r#enum: Enum) -> Result<EnumId> {
        let id = EnumId(self.enums.len() as u32);

        if self.names.get_model_id(&r#enum.name).is_some() {
            return Err(DataModelError::NameClash(r#enum.name));
        }

        if !self.names.intern_enum(&r#enum.name, id) {
            return Err(DataModelError::DuplicateEnum(r#enum.name));
        }

        self.enums.push(r#enum);

        Ok(id)
    }

    pub(crate) fn push_enum_member(&mut self, member: EnumMember) -> Result<EnumMemberId> {
        let id = EnumMemberId(self.enum_members.len() as u32);

        if !self.names.intern_enum_member(member.enum_id(), &member.name, id) {
            return Err(DataModelError::DuplicateEnumMember {
                enum_name: self.enums[member.enum_id().0 as usize].name.clone(),
                member: member.name,
            });
        }

        self.enum_members.push(member);

        Ok(id)
    }

    /// Finalizes the definition: validates relation keys and links both sides of every relation.
    pub(crate) fn finalize(&mut self) -> Result<()> {
        let mut opposites = Vec::new();

        for field in self.models().flat_map(|model| model.fields()) {
            let Some(relation) = field.relation() else {
                continue;
            };

            relation.validate_keys()?;

            let opposite = relation.find_opposite_field()?;

            let opposite_holds_key = opposite
                .relation()
                .is_some_and(|opposite| opposite.side() == RelationSide::ForeignKey);

            if relation.side() == RelationSide::ForeignKey && opposite_holds_key {
                return Err(DataModelError::AmbiguousForeignKey {
                    model: field.model().name().to_string(),
                    field: field.name().to_string(),
                    relation: relation.name().to_string(),
                });
            }

            opposites.push((field.id(), opposite.id()));
        }

        for (field_id, opposite_id) in opposites {
            if let FieldType::Relation(relation) = &mut self.fields[field_id.0 as usize].r#type {
                relation.opposite = Some(opposite_id);
            }
        }

        tracing::debug!(
            models = self.models.len(),
            enums = self.enums.len(),
            "finalized datamodel definition"
        );

        Ok(())
    }
}
