use graphql_wrapping_types::Wrapping;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::ProjectionError, settings::GeneratorSettings, Result};

/// Everything a generation run produces, keyed by name in declaration order.
///
/// Serialized to JSON, this is the artifact the runtime loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchema {
    pub settings: GeneratorSettings,
    /// Custom scalars in order of first use.
    #[serde(default)]
    pub custom_scalars: Vec<String>,
    #[serde(default)]
    pub enums: IndexMap<String, EnumDescriptor>,
    #[serde(default)]
    pub models: IndexMap<String, ModelDescriptor>,
}

impl GeneratedSchema {
    pub fn get_model(&self, name: &str) -> Result<&ModelDescriptor> {
        self.models
            .get(name)
            .ok_or_else(|| ProjectionError::ModelNotFound(name.to_string()))
    }

    pub fn get_enum(&self, name: &str) -> Result<&EnumDescriptor> {
        self.enums
            .get(name)
            .ok_or_else(|| ProjectionError::EnumNotFound(name.to_string()))
    }

    /// Every relation field resolver, model by model.
    pub fn resolvers(&self) -> impl Iterator<Item = &ResolverDescriptor> + '_ {
        self.models
            .values()
            .flat_map(|model| model.fields.values())
            .filter_map(|field| field.resolver.as_ref())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(artifact: &str) -> Result<Self> {
        Ok(serde_json::from_str(artifact)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(rename = "$name")]
    pub name: String,
    #[serde(rename = "$description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl ModelDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The GraphQL type with its wrapping, e.g. `[Post!]!`.
    #[serde(rename = "type")]
    pub type_signature: String,
    pub named_type: String,
    pub wrapping: Wrapping,
    pub is_list: bool,
    pub is_nullable: bool,
    pub requires_resolver: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<ResolverDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<EnumMemberDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMemberDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How a relation field is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchStrategy {
    /// At most one record, null when not found.
    FetchUnique,
    /// All records pointing to the parent, possibly none.
    FetchManyByForeignKey,
}

/// The resolver of a relation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverDescriptor {
    pub model: String,
    pub field: String,
    pub target_model: String,
    pub fetch_strategy: FetchStrategy,
    /// Equalities between target and parent fields selecting the related records.
    pub key_pairs: Vec<KeyPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub target_field: String,
    pub parent_field: String,
}

impl KeyPair {
    pub fn new(target_field: impl Into<String>, parent_field: impl Into<String>) -> Self {
        Self {
            target_field: target_field.into(),
            parent_field: parent_field.into(),
        }
    }
}
