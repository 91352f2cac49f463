/// A source scalar without a GraphQL counterpart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the type `{type_name}` has no GraphQL scalar equivalent")]
pub struct UnsupportedScalarError {
    pub type_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("field `{model}.{field}` cannot be projected")]
    UnsupportedScalar {
        model: String,
        field: String,
        #[source]
        source: UnsupportedScalarError,
    },
    #[error(
        "relation `{relation}` of field `{model}.{field}` has no foreign key on either side, \
         only one-to-one and one-to-many relations can be resolved"
    )]
    RelationWithoutForeignKey {
        model: String,
        field: String,
        relation: String,
    },
    #[error("model `{0}` is not part of the generated schema")]
    ModelNotFound(String),
    #[error("enum `{0}` is not part of the generated schema")]
    EnumNotFound(String),
    #[error("the name `{name}` is generated twice in `{scope}`")]
    NameCollision { scope: String, name: String },
    #[error("invalid generated artifact: {0}")]
    Artifact(#[from] serde_json::Error),
}
