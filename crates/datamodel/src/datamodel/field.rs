use serde::{Deserialize, Serialize};

use super::{EnumId, FieldId, ModelId, ScalarKind};

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    One,
    OptionalOne,
    Many,
}

impl Cardinality {
    pub fn from_flags(is_list: bool, is_required: bool) -> Self {
        match (is_list, is_required) {
            (true, _) => Self::Many,
            (false, true) => Self::One,
            (false, false) => Self::OptionalOne,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FieldType {
    Scalar(ScalarKind),
    Enum(EnumId),
    Relation(Relation),
}

/// Relation metadata of a field pointing to another model.
#[derive(Debug, Clone)]
pub struct Relation {
    pub(crate) name: String,
    pub(crate) target: ModelId,
    /// Foreign key fields on the model holding this field. Empty on the back-reference side.
    pub(crate) from_fields: Vec<String>,
    /// Fields on the target referenced by `from_fields`, same order.
    pub(crate) to_fields: Vec<String>,
    /// Set on finalize.
    pub(crate) opposite: Option<FieldId>,
}

impl Relation {
    pub(crate) fn new(name: String, target: ModelId, from_fields: Vec<String>, to_fields: Vec<String>) -> Self {
        Self {
            name,
            target,
            from_fields,
            to_fields,
            opposite: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) model_id: ModelId,
    pub(crate) name: String,
    pub(crate) documentation: Option<String>,
    pub(crate) cardinality: Cardinality,
    pub(crate) r#type: FieldType,
}

impl Field {
    pub(crate) fn new(model_id: ModelId, name: String, cardinality: Cardinality, r#type: FieldType) -> Self {
        Self {
            model_id,
            name,
            documentation: None,
            cardinality,
            r#type,
        }
    }

    pub(crate) fn set_documentation(&mut self, documentation: Option<String>) {
        self.documentation = documentation;
    }

    pub(crate) fn model_id(&self) -> ModelId {
        self.model_id
    }

    pub(crate) fn relation(&self) -> Option<&Relation> {
        match &self.r#type {
            FieldType::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}
