use std::fmt;

/// The closed set of scalar kinds a field can hold.
///
/// `StringId` and `IntId` are `String` and `Int` fields acting as the model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    String,
    Int,
    Float,
    StringId,
    IntId,
    Json,
    DateTime,
    BigInt,
    Bytes,
    Decimal,
    /// A type we cannot represent, named as in the source schema.
    Unsupported(String),
}

impl ScalarKind {
    /// Reads a scalar kind from its name in the source schema.
    pub fn from_type_name(name: &str, is_id: bool) -> Self {
        match (name, is_id) {
            ("String", true) => Self::StringId,
            ("Int", true) => Self::IntId,
            ("Boolean", _) => Self::Boolean,
            ("String", _) => Self::String,
            ("Int", _) => Self::Int,
            ("Float", _) => Self::Float,
            ("Json", _) => Self::Json,
            ("DateTime", _) => Self::DateTime,
            ("BigInt", _) => Self::BigInt,
            ("Bytes", _) => Self::Bytes,
            ("Decimal", _) => Self::Decimal,
            (other, _) => Self::Unsupported(other.to_string()),
        }
    }

    /// The name of the kind in the source schema.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::String | Self::StringId => "String",
            Self::Int | Self::IntId => "Int",
            Self::Float => "Float",
            Self::Json => "Json",
            Self::DateTime => "DateTime",
            Self::BigInt => "BigInt",
            Self::Bytes => "Bytes",
            Self::Decimal => "Decimal",
            Self::Unsupported(name) => name,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::StringId | Self::IntId)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}
