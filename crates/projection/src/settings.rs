use serde::{Deserialize, Serialize};

/// What an `Int` identifier becomes in the GraphQL schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdIntMapping {
    #[default]
    #[serde(rename = "ID")]
    Id,
    Int,
}

impl IdIntMapping {
    pub fn as_str(self) -> &'static str {
        match self {
            IdIntMapping::Id => "ID",
            IdIntMapping::Int => "Int",
        }
    }
}

/// Options of a generation run.
///
/// Serialized with the `camelCase` keys of the generator block of a schema file. The
/// `snake_case` keys of the TOML configuration are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    #[serde(rename = "projectIdIntToGraphQL", alias = "project_id_int_to_graphql")]
    pub project_id_int_to_graphql: IdIntMapping,
    /// Carry the formatted documentation into the generated Rust module.
    pub jsdoc: bool,
    /// Key of the database client in the request context.
    #[serde(rename = "prismaClientContextField", alias = "prisma_client_context_field")]
    pub prisma_client_context_field: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            project_id_int_to_graphql: IdIntMapping::Id,
            jsdoc: true,
            prisma_client_context_field: String::from("prisma"),
        }
    }
}
