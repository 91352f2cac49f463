use indexmap::{IndexMap, IndexSet};
use schema_bridge_datamodel::{DataModel, EnumWalker, FieldTypeWalker, FieldWalker, ModelWalker};

use crate::{
    descriptor::{EnumDescriptor, EnumMemberDescriptor, FieldDescriptor, GeneratedSchema, ModelDescriptor},
    documentation::format_description,
    error::ProjectionError,
    nullability::Nullability,
    resolver,
    scalar::map_scalar,
    settings::GeneratorSettings,
    Result,
};

/// Projects every enum and model of the datamodel, in declaration order.
#[tracing::instrument(skip_all, fields(models = datamodel.models().len(), enums = datamodel.enums().len()))]
pub fn project(datamodel: &DataModel, settings: &GeneratorSettings) -> Result<GeneratedSchema> {
    let mut output = OutputContext::new(settings);

    for r#enum in datamodel.enums() {
        output.create_enum(project_enum(r#enum));
    }

    for model in datamodel.models() {
        let descriptor = project_model(model, &mut output)?;
        output.create_model(descriptor);
    }

    let schema = output.finish();

    tracing::debug!(
        custom_scalars = schema.custom_scalars.len(),
        resolvers = schema.resolvers().count(),
        "projected schema"
    );

    Ok(schema)
}

struct OutputContext<'a> {
    settings: &'a GeneratorSettings,
    custom_scalars: IndexSet<&'static str>,
    enums: IndexMap<String, EnumDescriptor>,
    models: IndexMap<String, ModelDescriptor>,
}

impl<'a> OutputContext<'a> {
    fn new(settings: &'a GeneratorSettings) -> Self {
        Self {
            settings,
            custom_scalars: IndexSet::new(),
            enums: IndexMap::new(),
            models: IndexMap::new(),
        }
    }

    fn register_custom_scalar(&mut self, name: &'static str) {
        self.custom_scalars.insert(name);
    }

    fn create_enum(&mut self, r#enum: EnumDescriptor) {
        tracing::debug!(name = r#enum.name.as_str(), members = r#enum.members.len(), "projected enum");
        self.enums.insert(r#enum.name.clone(), r#enum);
    }

    fn create_model(&mut self, model: ModelDescriptor) {
        tracing::debug!(name = model.name.as_str(), fields = model.fields.len(), "projected model");
        self.models.insert(model.name.clone(), model);
    }

    fn finish(self) -> GeneratedSchema {
        GeneratedSchema {
            settings: self.settings.clone(),
            custom_scalars: self.custom_scalars.into_iter().map(String::from).collect(),
            enums: self.enums,
            models: self.models,
        }
    }
}

fn project_enum(r#enum: EnumWalker<'_>) -> EnumDescriptor {
    let members = r#enum
        .members()
        .map(|member| EnumMemberDescriptor {
            name: member.name().to_string(),
            description: format_description(member.documentation()),
        })
        .collect();

    EnumDescriptor {
        name: r#enum.name().to_string(),
        description: format_description(r#enum.documentation()),
        members,
    }
}

fn project_model(model: ModelWalker<'_>, output: &mut OutputContext<'_>) -> Result<ModelDescriptor> {
    let mut fields = IndexMap::new();

    for field in model.fields() {
        let descriptor = project_field(field, output)?;
        fields.insert(descriptor.name.clone(), descriptor);
    }

    Ok(ModelDescriptor {
        name: model.name().to_string(),
        description: format_description(model.documentation()),
        fields,
    })
}

fn project_field(field: FieldWalker<'_>, output: &mut OutputContext<'_>) -> Result<FieldDescriptor> {
    let nullability = Nullability::project(field.cardinality());
    let wrapping = nullability.wrapping();

    let (named_type, resolver) = match field.type_walker() {
        FieldTypeWalker::Scalar(kind) => {
            let mapping = map_scalar(kind, output.settings).map_err(|source| ProjectionError::UnsupportedScalar {
                model: field.model().name().to_string(),
                field: field.name().to_string(),
                source,
            })?;

            if mapping.is_custom() {
                output.register_custom_scalar(mapping.target_name);
            }

            (mapping.target_name.to_string(), None)
        }
        FieldTypeWalker::Enum(r#enum) => (r#enum.name().to_string(), None),
        FieldTypeWalker::Relation(relation) => {
            let resolver = resolver::derive(relation)?;
            (relation.target_model().name().to_string(), Some(resolver))
        }
    };

    let type_signature = wrapping.type_display(&named_type).to_string();

    Ok(FieldDescriptor {
        name: field.name().to_string(),
        description: format_description(field.documentation()),
        type_signature,
        named_type,
        wrapping,
        is_list: nullability.is_list,
        is_nullable: nullability.is_nullable,
        requires_resolver: resolver.is_some(),
        resolver,
    })
}
