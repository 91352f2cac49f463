use super::{r#enum::EnumWalker, Walker};
use crate::datamodel::{EnumMember, EnumMemberId};

/// A member of an enum.
pub type EnumMemberWalker<'a> = Walker<'a, EnumMemberId>;

impl<'a> EnumMemberWalker<'a> {
    /// The enum this member belongs to.
    pub fn r#enum(self) -> EnumWalker<'a> {
        self.walk(self.get().enum_id())
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn documentation(self) -> Option<&'a str> {
        self.get().documentation.as_deref()
    }

    fn get(self) -> &'a EnumMember {
        &self.datamodel.enum_members[self.id.0 as usize]
    }
}
