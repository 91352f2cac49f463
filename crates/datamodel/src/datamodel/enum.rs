use super::EnumId;

#[derive(Debug, Clone)]
pub struct Enum {
    pub(crate) name: String,
    pub(crate) documentation: Option<String>,
}

impl Enum {
    pub(crate) fn new(name: String, documentation: Option<String>) -> Self {
        Self { name, documentation }
    }
}

#[derive(Debug, Clone)]
pub struct EnumMember {
    pub(crate) enum_id: EnumId,
    pub(crate) name: String,
    pub(crate) documentation: Option<String>,
}

impl EnumMember {
    pub(crate) fn new(enum_id: EnumId, name: String, documentation: Option<String>) -> Self {
        Self {
            enum_id,
            name,
            documentation,
        }
    }

    pub(crate) fn enum_id(&self) -> EnumId {
        self.enum_id
    }
}
