use futures_util::lock::Mutex;
use indexmap::IndexMap;

use crate::{
    error::FetchError,
    fetch::{ManyQuery, Record, RecordFetcher, UniqueQuery},
};

/// What a client does when a unique query matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Return nothing, unless the query asks to reject.
    #[default]
    ReturnNone,
    /// Reject, unless the query opts out.
    Reject,
    /// Reject whatever the query asks.
    AlwaysReject,
}

/// A [`RecordFetcher`] over records held in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryRecordFetcher {
    records: Mutex<IndexMap<String, Vec<Record>>>,
    not_found_policy: NotFoundPolicy,
}

impl InMemoryRecordFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found_policy = policy;
        self
    }

    #[must_use]
    pub fn with_records(mut self, model: &str, records: impl IntoIterator<Item = Record>) -> Self {
        self.records
            .get_mut()
            .entry(model.to_string())
            .or_default()
            .extend(records);

        self
    }

    pub async fn insert(&self, model: &str, record: Record) {
        self.records
            .lock()
            .await
            .entry(model.to_string())
            .or_default()
            .push(record);
    }

    fn rejects(&self, query: &UniqueQuery) -> bool {
        match (self.not_found_policy, query.reject_on_not_found) {
            (NotFoundPolicy::AlwaysReject, _) => true,
            (_, Some(reject)) => reject,
            (policy, None) => policy == NotFoundPolicy::Reject,
        }
    }
}

#[async_trait::async_trait]
impl RecordFetcher for InMemoryRecordFetcher {
    async fn find_unique(&self, model: &str, query: UniqueQuery) -> Result<Option<Record>, FetchError> {
        let record = self
            .records
            .lock()
            .await
            .get(model)
            .and_then(|records| records.iter().find(|record| query.filter.matches(record)))
            .cloned();

        match record {
            None if self.rejects(&query) => Err(FetchError::NotFound {
                model: model.to_string(),
            }),
            record => Ok(record),
        }
    }

    async fn find_many(&self, model: &str, query: ManyQuery) -> Result<Vec<Record>, FetchError> {
        let records = self
            .records
            .lock()
            .await
            .get(model)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| query.filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(records)
    }
}
