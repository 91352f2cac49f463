use graphql_wrapping_types::Wrapping;
use schema_bridge_datamodel::Cardinality;

/// The list and null wrapping of a projected field.
///
/// Fixed by the cardinality alone: a `many` field is always a required list of
/// required items. No data is an empty list, never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullability {
    pub is_list: bool,
    pub is_nullable: bool,
}

impl Nullability {
    pub fn project(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::One => Nullability {
                is_list: false,
                is_nullable: false,
            },
            Cardinality::OptionalOne => Nullability {
                is_list: false,
                is_nullable: true,
            },
            Cardinality::Many => Nullability {
                is_list: true,
                is_nullable: false,
            },
        }
    }

    pub fn wrapping(self) -> Wrapping {
        if self.is_list {
            Wrapping::list(true, !self.is_nullable)
        } else {
            Wrapping::new(!self.is_nullable)
        }
    }
}
