use schema_bridge_datamodel::{Cardinality, RelationSide, RelationWalker};

use crate::{
    descriptor::{FetchStrategy, KeyPair, ResolverDescriptor},
    error::ProjectionError,
    Result,
};

/// Derives the resolver of a relation field.
///
/// On the foreign key side the target is selected by the fields the key references.
/// On the back-reference side the target holds the key, pointing to the parent.
pub(crate) fn derive(relation: RelationWalker<'_>) -> Result<ResolverDescriptor> {
    let field = relation.field();

    let fetch_strategy = match field.cardinality() {
        Cardinality::Many => FetchStrategy::FetchManyByForeignKey,
        Cardinality::One | Cardinality::OptionalOne => FetchStrategy::FetchUnique,
    };

    let key_pairs: Vec<_> = match relation.side() {
        RelationSide::ForeignKey => relation
            .referenced_field_names()
            .zip(relation.foreign_key_field_names())
            .map(|(target, parent)| KeyPair::new(target, parent))
            .collect(),
        RelationSide::BackReference => relation
            .opposite()
            .filter(|opposite| opposite.side() == RelationSide::ForeignKey)
            .map(|opposite| {
                opposite
                    .foreign_key_field_names()
                    .zip(opposite.referenced_field_names())
                    .map(|(target, parent)| KeyPair::new(target, parent))
                    .collect()
            })
            .unwrap_or_default(),
    };

    if key_pairs.is_empty() {
        return Err(ProjectionError::RelationWithoutForeignKey {
            model: field.model().name().to_string(),
            field: field.name().to_string(),
            relation: relation.name().to_string(),
        });
    }

    Ok(ResolverDescriptor {
        model: field.model().name().to_string(),
        field: field.name().to_string(),
        target_model: relation.target_model().name().to_string(),
        fetch_strategy,
        key_pairs,
    })
}
