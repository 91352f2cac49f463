use std::sync::Arc;

use indexmap::IndexMap;
use schema_bridge_projection::{FetchStrategy, GeneratedSchema, ResolverDescriptor};
use serde_json::Value;

use crate::{
    error::{FetchError, ResolverError},
    fetch::{Filter, ManyQuery, Record, RecordFetcher, UniqueQuery},
};

/// The value of a resolved relation field.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Null,
    Record(Record),
    List(Vec<Record>),
}

impl ResolvedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedValue::Null)
    }
}

impl From<ResolvedValue> for Value {
    fn from(value: ResolvedValue) -> Self {
        match value {
            ResolvedValue::Null => Value::Null,
            ResolvedValue::Record(record) => Value::Object(record),
            ResolvedValue::List(records) => Value::Array(records.into_iter().map(Value::Object).collect()),
        }
    }
}

/// Resolves one relation field through the given fetcher.
#[derive(Clone)]
pub struct RelationResolver {
    descriptor: ResolverDescriptor,
    fetcher: Arc<dyn RecordFetcher>,
}

impl RelationResolver {
    pub fn new(descriptor: ResolverDescriptor, fetcher: Arc<dyn RecordFetcher>) -> Self {
        Self { descriptor, fetcher }
    }

    pub fn descriptor(&self) -> &ResolverDescriptor {
        &self.descriptor
    }

    /// Fetches the records related to the parent.
    ///
    /// A unique relation is null when nothing matches, whatever the not-found policy of
    /// the client. A list relation is empty when nothing matches. A parent without a
    /// value for every key field resolves the same way, without querying the client.
    #[tracing::instrument(
        name = "resolve relation",
        skip_all,
        fields(
            model = %self.descriptor.model,
            field = %self.descriptor.field,
            strategy = ?self.descriptor.fetch_strategy,
        )
    )]
    pub async fn resolve(&self, parent: &Record) -> Result<ResolvedValue, ResolverError> {
        let Some(filter) = self.filter_for(parent) else {
            tracing::debug!("parent has no key value");
            return Ok(self.empty());
        };

        let target = &self.descriptor.target_model;

        match self.descriptor.fetch_strategy {
            FetchStrategy::FetchUnique => {
                let query = UniqueQuery::new(filter).reject_on_not_found(false);

                match self.fetcher.find_unique(target, query).await {
                    Ok(Some(record)) => Ok(ResolvedValue::Record(record)),
                    Ok(None) => Ok(ResolvedValue::Null),
                    Err(FetchError::NotFound { .. }) => {
                        tracing::debug!("suppressed a not found error from the client");
                        Ok(ResolvedValue::Null)
                    }
                    Err(source) => Err(self.fetch_error(source)),
                }
            }
            FetchStrategy::FetchManyByForeignKey => {
                let records = self
                    .fetcher
                    .find_many(target, ManyQuery::new(filter))
                    .await
                    .map_err(|source| self.fetch_error(source))?;

                Ok(ResolvedValue::List(records))
            }
        }
    }

    fn filter_for(&self, parent: &Record) -> Option<Filter> {
        let mut filter = Filter::new();

        for pair in &self.descriptor.key_pairs {
            match parent.get(&pair.parent_field) {
                None | Some(Value::Null) => return None,
                Some(value) => filter.push(&pair.target_field, value.clone()),
            }
        }

        Some(filter)
    }

    fn empty(&self) -> ResolvedValue {
        match self.descriptor.fetch_strategy {
            FetchStrategy::FetchUnique => ResolvedValue::Null,
            FetchStrategy::FetchManyByForeignKey => ResolvedValue::List(Vec::new()),
        }
    }

    fn fetch_error(&self, source: FetchError) -> ResolverError {
        ResolverError::Fetch {
            model: self.descriptor.model.clone(),
            field: self.descriptor.field.clone(),
            source,
        }
    }
}

/// Every relation resolver of a generated schema, bound to one fetcher.
#[derive(Clone)]
pub struct RelationResolvers {
    resolvers: IndexMap<(String, String), RelationResolver>,
}

impl RelationResolvers {
    pub fn assemble(schema: &GeneratedSchema, fetcher: Arc<dyn RecordFetcher>) -> Self {
        let resolvers = schema
            .resolvers()
            .map(|descriptor| {
                let key = (descriptor.model.clone(), descriptor.field.clone());
                (key, RelationResolver::new(descriptor.clone(), fetcher.clone()))
            })
            .collect();

        Self { resolvers }
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn get(&self, model: &str, field: &str) -> Result<&RelationResolver, ResolverError> {
        self.resolvers
            .get(&(model.to_string(), field.to_string()))
            .ok_or_else(|| ResolverError::UnknownRelation {
                model: model.to_string(),
                field: field.to_string(),
            })
    }

    pub async fn resolve(&self, model: &str, field: &str, parent: &Record) -> Result<ResolvedValue, ResolverError> {
        self.get(model, field)?.resolve(parent).await
    }

    /// Resolves every relation field of the model for one parent, concurrently.
    ///
    /// Each field gets its own result: a failing field does not fail its siblings.
    pub async fn resolve_all(
        &self,
        model: &str,
        parent: &Record,
    ) -> Vec<(String, Result<ResolvedValue, ResolverError>)> {
        let futures = self
            .resolvers
            .iter()
            .filter(|((resolver_model, _), _)| resolver_model == model)
            .map(|((_, field), resolver)| async move { (field.clone(), resolver.resolve(parent).await) });

        futures_util::future::join_all(futures).await
    }
}
