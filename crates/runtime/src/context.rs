use std::{collections::HashMap, fmt, sync::Arc};

use schema_bridge_projection::{GeneratedSchema, GeneratorSettings};

use crate::{
    error::ResolverError,
    fetch::{Record, RecordFetcher},
    resolver::{RelationResolver, ResolvedValue},
};

/// Per-request values handed over by the GraphQL server, database clients among them.
#[derive(Clone, Default)]
pub struct RequestContext {
    fetchers: HashMap<String, Arc<dyn RecordFetcher>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, fetcher: Arc<dyn RecordFetcher>) {
        self.fetchers.insert(key.into(), fetcher);
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, fetcher: Arc<dyn RecordFetcher>) -> Self {
        self.insert(key, fetcher);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn RecordFetcher>> {
        self.fetchers.get(key)
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("keys", &self.fetchers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Where the database client is found in a request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBinding {
    key: String,
}

impl ContextBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.prisma_client_context_field.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bind(&self, context: &RequestContext) -> Result<Arc<dyn RecordFetcher>, ResolverError> {
        context
            .get(&self.key)
            .cloned()
            .ok_or_else(|| ResolverError::MissingContextBinding { key: self.key.clone() })
    }
}

/// Resolves a relation field with the database client of the request context.
pub async fn resolve_in_context(
    schema: &GeneratedSchema,
    model: &str,
    field: &str,
    parent: &Record,
    context: &RequestContext,
) -> Result<ResolvedValue, ResolverError> {
    let fetcher = ContextBinding::from_settings(&schema.settings).bind(context)?;

    let descriptor = schema
        .models
        .get(model)
        .and_then(|descriptor| descriptor.field(field))
        .and_then(|field| field.resolver.clone())
        .ok_or_else(|| ResolverError::UnknownRelation {
            model: model.to_string(),
            field: field.to_string(),
        })?;

    RelationResolver::new(descriptor, fetcher).resolve(parent).await
}
