/// Errors found while loading a datamodel document.
#[derive(Debug, thiserror::Error)]
pub enum DataModelError {
    #[error("invalid datamodel document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
    #[error("model `{0}` is defined more than once")]
    DuplicateModel(String),
    #[error("enum `{0}` is defined more than once")]
    DuplicateEnum(String),
    #[error("`{0}` is defined both as a model and as an enum")]
    NameClash(String),
    #[error("field `{field}` is defined more than once in model `{model}`")]
    DuplicateField { model: String, field: String },
    #[error("value `{member}` is defined more than once in enum `{enum_name}`")]
    DuplicateEnumMember { enum_name: String, member: String },
    #[error("field `{model}.{field}` refers to an unknown enum `{enum_name}`")]
    UnknownEnum {
        model: String,
        field: String,
        enum_name: String,
    },
    #[error("relation field `{model}.{field}` refers to an unknown model `{target}`")]
    UnknownRelationTarget {
        model: String,
        field: String,
        target: String,
    },
    #[error("relation field `{model}.{field}` uses `{key_model}.{key_field}` as a key, but it is not a scalar field")]
    UnknownKeyField {
        model: String,
        field: String,
        key_model: String,
        key_field: String,
    },
    #[error("relation field `{model}.{field}` must list as many referenced fields as foreign key fields")]
    KeyArity { model: String, field: String },
    #[error("relation field `{model}.{field}` has no opposite field for relation `{relation}`")]
    MissingOppositeField {
        model: String,
        field: String,
        relation: String,
    },
    #[error(
        "relation field `{model}.{field}` matches several fields of `{target}`, \
         name the relations to tell them apart"
    )]
    AmbiguousRelation {
        model: String,
        field: String,
        target: String,
    },
    #[error("both sides of relation `{relation}` declare a foreign key (`{model}.{field}`)")]
    AmbiguousForeignKey {
        model: String,
        field: String,
        relation: String,
    },
}
