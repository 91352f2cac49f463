mod r#enum;
mod enum_member;
mod field;
mod model;
mod relation;

pub use enum_member::EnumMemberWalker;
pub use field::{FieldTypeWalker, FieldWalker};
pub use model::ModelWalker;
pub use r#enum::EnumWalker;
pub use relation::{RelationSide, RelationWalker};

use std::ops::Range;

use super::DataModel;

/// An abstraction to iterate over a datamodel definition.
///
/// The `Id` must be something that points to an object in the definition.
#[derive(Clone, Copy)]
pub struct Walker<'a, Id> {
    pub(super) id: Id,
    pub(super) datamodel: &'a DataModel,
}

impl<Id> PartialEq for Walker<'_, Id>
where
    Id: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'a, Id> Walker<'a, Id>
where
    Id: Copy,
{
    pub fn id(self) -> Id {
        self.id
    }

    /// The definition this walker belongs to.
    pub fn datamodel(self) -> &'a DataModel {
        self.datamodel
    }

    fn walk<OtherId>(self, id: OtherId) -> Walker<'a, OtherId> {
        self.datamodel.walk(id)
    }
}

/// For a slice sorted by a key K, return the contiguous range of items matching the key.
fn range_for_key<I, K>(slice: &[I], key: K, extract: fn(&I) -> K) -> Range<usize>
where
    K: Copy + Ord,
{
    let start = slice.partition_point(|item| extract(item) < key);
    let end = slice.partition_point(|item| extract(item) <= key);

    start..end
}
