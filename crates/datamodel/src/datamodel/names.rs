use std::collections::HashMap;

use super::{EnumId, EnumMemberId, FieldId, ModelId};

/// Name indexes of the definition. Names are unique per namespace: models and enums share
/// one, fields live in their model and members in their enum.
#[derive(Default, Debug, Clone)]
pub(super) struct Names {
    models: HashMap<String, ModelId>,
    enums: HashMap<String, EnumId>,
    fields: HashMap<(ModelId, String), FieldId>,
    enum_members: HashMap<(EnumId, String), EnumMemberId>,
}

impl Names {
    /// Returns false if the name was already taken.
    pub(super) fn intern_model(&mut self, name: &str, model_id: ModelId) -> bool {
        self.models.insert(name.to_string(), model_id).is_none()
    }

    pub(super) fn intern_enum(&mut self, name: &str, enum_id: EnumId) -> bool {
        self.enums.insert(name.to_string(), enum_id).is_none()
    }

    pub(super) fn intern_field(&mut self, model_id: ModelId, name: &str, field_id: FieldId) -> bool {
        self.fields.insert((model_id, name.to_string()), field_id).is_none()
    }

    pub(super) fn intern_enum_member(&mut self, enum_id: EnumId, name: &str, member_id: EnumMemberId) -> bool {
        self.enum_members.insert((enum_id, name.to_string()), member_id).is_none()
    }

    pub(super) fn get_model_id(&self, name: &str) -> Option<ModelId> {
        self.models.get(name).copied()
    }

    pub(super) fn get_enum_id(&self, name: &str) -> Option<EnumId> {
        self.enums.get(name).copied()
    }

    pub(super) fn get_field_id(&self, model_id: ModelId, name: &str) -> Option<FieldId> {
        self.fields.get(&(model_id, name.to_string())).copied()
    }

    pub(super) fn get_enum_member_id(&self, enum_id: EnumId, name: &str) -> Option<EnumMemberId> {
        self.enum_members.get(&(enum_id, name.to_string())).copied()
    }
}
