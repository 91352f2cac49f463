#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Runtime side of a generated schema: relation resolvers fetching through an explicit
//! [`RecordFetcher`], and the [`RuntimeGuard`] standing in for the schema until it
//! has been generated.

mod context;
mod error;
mod fetch;
pub mod guard;
mod memory;
mod resolver;

pub use context::{resolve_in_context, ContextBinding, RequestContext};
pub use error::{FetchError, ResolverError, RuntimeError};
pub use fetch::{Condition, Filter, ManyQuery, Record, RecordFetcher, UniqueQuery};
pub use guard::{EnumHandle, GenerationState, ModelHandle, RuntimeGuard};
pub use memory::{InMemoryRecordFetcher, NotFoundPolicy};
pub use resolver::{RelationResolver, RelationResolvers, ResolvedValue};
