use super::{enum_member::EnumMemberWalker, Walker};
use crate::datamodel::{Enum, EnumId, EnumMemberId};

/// Definition of an enum.
pub type EnumWalker<'a> = Walker<'a, EnumId>;

impl<'a> EnumWalker<'a> {
    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The raw documentation comment attached to the enum.
    pub fn documentation(self) -> Option<&'a str> {
        self.get().documentation.as_deref()
    }

    /// An iterator over the members of the enum, in declaration order.
    pub fn members(self) -> impl Iterator<Item = EnumMemberWalker<'a>> + 'a {
        let range = super::range_for_key(&self.datamodel.enum_members, self.id, |member| member.enum_id());

        range.map(move |id| self.walk(EnumMemberId(id as u32)))
    }

    /// Find a member by name.
    pub fn find_member(self, name: &str) -> Option<EnumMemberWalker<'a>> {
        self.datamodel
            .names
            .get_enum_member_id(self.id, name)
            .map(|id| self.walk(id))
    }

    fn get(self) -> &'a Enum {
        &self.datamodel.enums[self.id.0 as usize]
    }
}
