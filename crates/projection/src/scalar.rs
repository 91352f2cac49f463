use schema_bridge_datamodel::ScalarKind;

use crate::{error::UnsupportedScalarError, settings::GeneratorSettings};

/// Whether the GraphQL library knows the scalar, or needs an implementation under the given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarCategory {
    Standard,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarMapping {
    pub target_name: &'static str,
    pub category: ScalarCategory,
}

impl ScalarMapping {
    const fn standard(target_name: &'static str) -> Self {
        Self {
            target_name,
            category: ScalarCategory::Standard,
        }
    }

    const fn custom(target_name: &'static str) -> Self {
        Self {
            target_name,
            category: ScalarCategory::Custom,
        }
    }

    pub fn is_custom(self) -> bool {
        self.category == ScalarCategory::Custom
    }
}

/// Maps a source scalar kind to its GraphQL scalar.
pub fn map_scalar(kind: &ScalarKind, settings: &GeneratorSettings) -> Result<ScalarMapping, UnsupportedScalarError> {
    let mapping = match kind {
        ScalarKind::Boolean => ScalarMapping::standard("Boolean"),
        ScalarKind::String => ScalarMapping::standard("String"),
        ScalarKind::Int => ScalarMapping::standard("Int"),
        ScalarKind::Float => ScalarMapping::standard("Float"),
        ScalarKind::StringId => ScalarMapping::standard("ID"),
        ScalarKind::IntId => ScalarMapping::standard(settings.project_id_int_to_graphql.as_str()),
        ScalarKind::Json => ScalarMapping::custom("Json"),
        ScalarKind::DateTime => ScalarMapping::custom("DateTime"),
        ScalarKind::BigInt => ScalarMapping::custom("BigInt"),
        ScalarKind::Bytes => ScalarMapping::custom("Bytes"),
        ScalarKind::Decimal => ScalarMapping::custom("Decimal"),
        ScalarKind::Unsupported(type_name) => {
            return Err(UnsupportedScalarError {
                type_name: type_name.clone(),
            })
        }
    };

    Ok(mapping)
}
