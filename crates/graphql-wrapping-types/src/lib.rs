#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::fmt;

/// Maximum number of nested lists a [`Wrapping`] can hold.
pub const MAX_LIST_DEPTH: u8 = 7;

const INNER_REQUIRED: u16 = 0b1;
const DEPTH_SHIFT: u16 = 1;
const DEPTH_MASK: u16 = 0b1110;
const LIST_SHIFT: u16 = 4;

/// The list and non-null wrappers around a named GraphQL type, packed into a `u16`.
///
/// Bit 0 tells whether the named (innermost) type is required, bits 1 to 3 hold the
/// number of list wrappers and each following bit tells whether the list at that depth
/// is required, innermost first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Wrapping(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWrapping {
    RequiredList,
    NullableList,
}

impl Wrapping {
    pub const fn new(inner_is_required: bool) -> Self {
        if inner_is_required {
            Self::required()
        } else {
            Self::nullable()
        }
    }

    pub const fn nullable() -> Self {
        Wrapping(0)
    }

    pub const fn required() -> Self {
        Wrapping(INNER_REQUIRED)
    }

    /// A single list around the named type.
    pub const fn list(inner_is_required: bool, list_is_required: bool) -> Self {
        let mut bits = 1 << DEPTH_SHIFT;

        if inner_is_required {
            bits |= INNER_REQUIRED;
        }

        if list_is_required {
            bits |= 1 << LIST_SHIFT;
        }

        Wrapping(bits)
    }

    pub const fn inner_is_required(self) -> bool {
        self.0 & INNER_REQUIRED != 0
    }

    pub const fn list_depth(self) -> u8 {
        ((self.0 & DEPTH_MASK) >> DEPTH_SHIFT) as u8
    }

    pub const fn is_list(self) -> bool {
        self.list_depth() > 0
    }

    /// Whether the outermost type is required.
    pub const fn is_required(self) -> bool {
        match self.list_depth() {
            0 => self.inner_is_required(),
            depth => self.list_is_required_at(depth - 1),
        }
    }

    pub const fn is_nullable(self) -> bool {
        !self.is_required()
    }

    /// Wraps the current type in a nullable list. Returns `None` past [`MAX_LIST_DEPTH`].
    pub fn wrapped_by_nullable_list(self) -> Option<Self> {
        self.wrap(false)
    }

    /// Wraps the current type in a required list. Returns `None` past [`MAX_LIST_DEPTH`].
    pub fn wrapped_by_required_list(self) -> Option<Self> {
        self.wrap(true)
    }

    /// List wrappers from the innermost to the outermost one.
    pub fn list_wrappings(self) -> impl DoubleEndedIterator<Item = ListWrapping> + ExactSizeIterator {
        (0..self.list_depth()).map(move |depth| {
            if self.list_is_required_at(depth) {
                ListWrapping::RequiredList
            } else {
                ListWrapping::NullableList
            }
        })
    }

    /// Renders the wrapped type the way it appears in SDL, e.g. `[User!]!`.
    pub fn type_display(self, name: &str) -> impl fmt::Display + '_ {
        TypeDisplay { wrapping: self, name }
    }

    const fn list_is_required_at(self, depth: u8) -> bool {
        self.0 & (1 << (LIST_SHIFT + depth as u16)) != 0
    }

    fn wrap(self, required: bool) -> Option<Self> {
        let depth = self.list_depth();

        if depth >= MAX_LIST_DEPTH {
            return None;
        }

        let mut bits = (self.0 & !DEPTH_MASK) | (u16::from(depth + 1) << DEPTH_SHIFT);

        if required {
            bits |= 1 << (LIST_SHIFT + u16::from(depth));
        }

        Some(Wrapping(bits))
    }
}

impl fmt::Debug for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapping")
            .field("inner_is_required", &self.inner_is_required())
            .field("list_wrappings", &self.list_wrappings().collect::<Vec<_>>())
            .finish()
    }
}

struct TypeDisplay<'a> {
    wrapping: Wrapping,
    name: &'a str,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.wrapping.list_depth() {
            f.write_str("[")?;
        }

        f.write_str(self.name)?;

        if self.wrapping.inner_is_required() {
            f.write_str("!")?;
        }

        for list in self.wrapping.list_wrappings() {
            match list {
                ListWrapping::RequiredList => f.write_str("]!")?,
                ListWrapping::NullableList => f.write_str("]")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_wrappings() {
        assert_eq!(Wrapping::required().type_display("ID").to_string(), "ID!");
        assert_eq!(Wrapping::nullable().type_display("ID").to_string(), "ID");
        assert!(Wrapping::required().is_required());
        assert!(!Wrapping::nullable().is_list());
    }

    #[test]
    fn nested_lists() {
        let wrapping = Wrapping::required()
            .wrapped_by_nullable_list()
            .and_then(Wrapping::wrapped_by_required_list)
            .unwrap();

        assert_eq!(wrapping.list_depth(), 2);
        assert!(wrapping.is_required());
        assert!(wrapping.inner_is_required());
        assert_eq!(
            wrapping.list_wrappings().collect::<Vec<_>>(),
            vec![ListWrapping::NullableList, ListWrapping::RequiredList]
        );
        assert_eq!(wrapping.type_display("Post").to_string(), "[[Post!]]!");
    }

    #[test]
    fn outermost_list_decides_nullability() {
        let wrapping = Wrapping::required().wrapped_by_nullable_list().unwrap();

        assert!(wrapping.is_nullable());
        assert!(wrapping.inner_is_required());
        assert_eq!(wrapping.type_display("Post").to_string(), "[Post!]");
    }

    #[test]
    fn depth_is_bounded() {
        let mut wrapping = Wrapping::nullable();

        for _ in 0..MAX_LIST_DEPTH {
            wrapping = wrapping.wrapped_by_required_list().unwrap();
        }

        assert_eq!(wrapping.list_depth(), MAX_LIST_DEPTH);
        assert!(wrapping.wrapped_by_nullable_list().is_none());
    }

    #[test]
    fn serializes_as_bits() {
        let wrapping = Wrapping::required().wrapped_by_required_list().unwrap();
        let json = serde_json::to_string(&wrapping).unwrap();

        assert_eq!(json, "19");
        assert_eq!(Wrapping::list(true, true), wrapping);
        assert_eq!(serde_json::from_str::<Wrapping>(&json).unwrap(), wrapping);
    }
}
