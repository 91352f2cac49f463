use serde_json::{Map, Value};

use crate::error::FetchError;

/// A database record, as a JSON object keyed by field name.
pub type Record = Map<String, Value>;

/// A field equal to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub equals: Value,
}

/// A conjunction of equality conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, equals: Value) {
        self.conditions.push(Condition {
            field: field.into(),
            equals,
        });
    }

    #[must_use]
    pub fn and(mut self, field: impl Into<String>, equals: Value) -> Self {
        self.push(field, equals);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.conditions
            .iter()
            .all(|condition| record.get(&condition.field) == Some(&condition.equals))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueQuery {
    pub filter: Filter,
    /// Overrides the not-found policy of the client when set.
    pub reject_on_not_found: Option<bool>,
}

impl UniqueQuery {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            reject_on_not_found: None,
        }
    }

    #[must_use]
    pub fn reject_on_not_found(mut self, reject: bool) -> Self {
        self.reject_on_not_found = Some(reject);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManyQuery {
    pub filter: Filter,
}

impl ManyQuery {
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }
}

/// The database client relation resolvers fetch through.
#[async_trait::async_trait]
pub trait RecordFetcher: Send + Sync {
    /// At most one record of the model matching the query.
    async fn find_unique(&self, model: &str, query: UniqueQuery) -> Result<Option<Record>, FetchError>;

    /// Every record of the model matching the query.
    async fn find_many(&self, model: &str, query: ManyQuery) -> Result<Vec<Record>, FetchError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn filters_match_on_every_condition() {
        let Value::Object(record) = json!({ "id": "post1", "authorId": "user1", "published": true }) else {
            unreachable!()
        };

        assert!(Filter::new().matches(&record));
        assert!(Filter::new().and("authorId", json!("user1")).matches(&record));
        assert!(!Filter::new()
            .and("authorId", json!("user1"))
            .and("published", json!(false))
            .matches(&record));
        assert!(!Filter::new().and("missing", Value::Null).matches(&record));
    }
}
