//! The schema as the runtime sees it: generated, or not yet.
//!
//! Before the generation step has run there is no artifact to load. The guard then
//! stands in for every descriptor, and reading one fails with an error telling how to
//! generate the schema. The state is decided once per process and never goes back.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use schema_bridge_projection::{EnumDescriptor, GeneratedSchema, ModelDescriptor};

use crate::error::RuntimeError;

/// Variable overriding where the artifact is read from.
pub const ARTIFACT_ENV_VAR: &str = "SCHEMA_BRIDGE_ARTIFACT";

/// Where the generation step writes the artifact by default.
pub const DEFAULT_ARTIFACT_PATH: &str = "./generated/schema-bridge.json";

static GLOBAL: OnceLock<RuntimeGuard> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationState {
    Generated(Box<GeneratedSchema>),
    Ungenerated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeGuard {
    state: GenerationState,
}

impl RuntimeGuard {
    pub fn generated(schema: GeneratedSchema) -> Self {
        Self {
            state: GenerationState::Generated(Box::new(schema)),
        }
    }

    pub fn ungenerated() -> Self {
        Self {
            state: GenerationState::Ungenerated,
        }
    }

    /// Loads the artifact at the given path. A missing file means the schema is not generated.
    pub fn from_artifact_path(path: &Path) -> Result<Self, RuntimeError> {
        let artifact = match std::fs::read_to_string(path) {
            Ok(artifact) => artifact,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no generated schema");
                return Ok(Self::ungenerated());
            }
            Err(source) => {
                return Err(RuntimeError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let schema = GeneratedSchema::from_json(&artifact).map_err(|source| RuntimeError::InvalidArtifact {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), models = schema.models.len(), "loaded generated schema");

        Ok(Self::generated(schema))
    }

    /// Loads the artifact from the path in the environment, or the default one.
    pub fn from_env() -> Result<Self, RuntimeError> {
        let path = std::env::var_os(ARTIFACT_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH));

        Self::from_artifact_path(&path)
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.state, GenerationState::Generated(_))
    }

    /// The generated schema. Every other accessor goes through here.
    pub fn schema(&self) -> Result<&GeneratedSchema, RuntimeError> {
        self.guarded("the schema")
    }

    pub fn model(&self, name: &str) -> Result<&ModelDescriptor, RuntimeError> {
        let schema = self.guarded(&format!("model `{name}`"))?;
        Ok(schema.get_model(name)?)
    }

    pub fn r#enum(&self, name: &str) -> Result<&EnumDescriptor, RuntimeError> {
        let schema = self.guarded(&format!("enum `{name}`"))?;
        Ok(schema.get_enum(name)?)
    }

    pub fn model_handle(&self, name: impl Into<String>) -> ModelHandle<'_> {
        ModelHandle {
            guard: self,
            name: name.into(),
        }
    }

    pub fn enum_handle(&self, name: impl Into<String>) -> EnumHandle<'_> {
        EnumHandle {
            guard: self,
            name: name.into(),
        }
    }

    fn guarded(&self, item: &str) -> Result<&GeneratedSchema, RuntimeError> {
        match &self.state {
            GenerationState::Generated(schema) => Ok(&**schema),
            GenerationState::Ungenerated => Err(RuntimeError::GenerationRequired { item: item.to_string() }),
        }
    }
}

/// A model by name, looked up on use.
#[derive(Debug, Clone)]
pub struct ModelHandle<'a> {
    guard: &'a RuntimeGuard,
    name: String,
}

impl<'a> ModelHandle<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> Result<&'a ModelDescriptor, RuntimeError> {
        self.guard.model(&self.name)
    }
}

/// An enum by name, looked up on use.
#[derive(Debug, Clone)]
pub struct EnumHandle<'a> {
    guard: &'a RuntimeGuard,
    name: String,
}

impl<'a> EnumHandle<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> Result<&'a EnumDescriptor, RuntimeError> {
        self.guard.r#enum(&self.name)
    }
}

/// The process-wide guard, loaded from the environment on first use.
///
/// An unreadable artifact is logged and leaves the schema ungenerated.
pub fn global() -> &'static RuntimeGuard {
    GLOBAL.get_or_init(|| {
        RuntimeGuard::from_env().unwrap_or_else(|error| {
            tracing::error!("{error}");
            RuntimeGuard::ungenerated()
        })
    })
}

/// Installs the generated schema as the process-wide guard. Only possible before its first use.
pub fn install_global(schema: GeneratedSchema) -> Result<&'static RuntimeGuard, RuntimeError> {
    GLOBAL
        .set(RuntimeGuard::generated(schema))
        .map_err(|_| RuntimeError::AlreadyInitialized)?;

    Ok(global())
}

/// A model of the process-wide schema.
pub fn model(name: impl Into<String>) -> ModelHandle<'static> {
    global().model_handle(name)
}

/// An enum of the process-wide schema.
pub fn r#enum(name: impl Into<String>) -> EnumHandle<'static> {
    global().enum_handle(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_ungenerated() {
        let guard = RuntimeGuard::from_artifact_path(Path::new("./does/not/exist.json")).unwrap();

        assert_eq!(guard.state(), &GenerationState::Ungenerated);
        assert!(matches!(
            guard.schema(),
            Err(RuntimeError::GenerationRequired { item }) if item == "the schema"
        ));
    }
}
