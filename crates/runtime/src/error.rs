use std::path::PathBuf;

use schema_bridge_projection::ProjectionError;

/// Errors of the database client behind a [`RecordFetcher`](crate::RecordFetcher).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The client was asked to reject a query matching no record.
    #[error("no `{model}` record matches the query")]
    NotFound { model: String },
    #[error("database client error: {0}")]
    Client(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("the request context has no database client under the key `{key}`")]
    MissingContextBinding { key: String },
    #[error("`{model}.{field}` is not a relation field of the generated schema")]
    UnknownRelation { model: String, field: String },
    #[error("could not resolve `{model}.{field}`")]
    Fetch {
        model: String,
        field: String,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("the schema has not been generated yet, run `schema-bridge generate` before reading {item}")]
    GenerationRequired { item: String },
    #[error(transparent)]
    NotFound(#[from] ProjectionError),
    #[error("could not read the generated schema at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the generated schema at {} is invalid", path.display())]
    InvalidArtifact {
        path: PathBuf,
        #[source]
        source: ProjectionError,
    },
    #[error("the runtime guard is already initialized")]
    AlreadyInitialized,
}
