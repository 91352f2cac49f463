//! The JSON document a datamodel is read from.
//!
//! The shape follows the datamodel meta-format emitted by schema tooling: a list of models
//! with their fields, and a list of enums with their values. Parsing the schema language
//! itself is the job of that tooling.

use serde::Deserialize;

use crate::{
    datamodel::{Cardinality, DataModel, Enum, EnumMember, Field, FieldType, Model, Relation, ScalarKind},
    error::DataModelError,
    Result,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelInput {
    #[serde(default)]
    pub models: Vec<ModelInput>,
    #[serde(default)]
    pub enums: Vec<EnumInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldInput>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Enum,
    Object,
    Unsupported,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    pub name: String,
    pub kind: FieldKind,
    #[serde(rename = "type")]
    pub r#type: String,
    pub is_required: bool,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub relation_from_fields: Vec<String>,
    #[serde(default)]
    pub relation_to_fields: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumInput {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValueInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueInput {
    pub name: String,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Builds and validates a definition from the input document.
pub fn build(input: DataModelInput) -> Result<DataModel> {
    let mut datamodel = DataModel::default();

    // order matters: field types refer to enums and models by name
    for r#enum in input.enums {
        let enum_id = datamodel.push_enum(Enum::new(r#enum.name, r#enum.documentation))?;

        for value in r#enum.values {
            datamodel.push_enum_member(EnumMember::new(enum_id, value.name, value.documentation))?;
        }
    }

    let mut models = Vec::with_capacity(input.models.len());

    for model in input.models {
        let model_id = datamodel.push_model(Model::new(model.name.clone(), model.documentation))?;
        models.push((model_id, model.name, model.fields));
    }

    for (model_id, model_name, fields) in models {
        for field in fields {
            let cardinality = Cardinality::from_flags(field.is_list, field.is_required);
            let r#type = field_type(&datamodel, &model_name, &field)?;

            let mut definition = Field::new(model_id, field.name, cardinality, r#type);
            definition.set_documentation(field.documentation);

            datamodel.push_field(definition)?;
        }
    }

    datamodel.finalize()?;

    Ok(datamodel)
}

fn field_type(datamodel: &DataModel, model_name: &str, field: &FieldInput) -> Result<FieldType> {
    let r#type = match field.kind {
        FieldKind::Scalar => FieldType::Scalar(ScalarKind::from_type_name(&field.r#type, field.is_id)),
        FieldKind::Unsupported => FieldType::Scalar(ScalarKind::Unsupported(field.r#type.clone())),
        FieldKind::Enum => {
            let enum_id = datamodel
                .get_enum_id(&field.r#type)
                .ok_or_else(|| DataModelError::UnknownEnum {
                    model: model_name.to_string(),
                    field: field.name.clone(),
                    enum_name: field.r#type.clone(),
                })?;

            FieldType::Enum(enum_id)
        }
        FieldKind::Object => {
            let target = datamodel
                .get_model_id(&field.r#type)
                .ok_or_else(|| DataModelError::UnknownRelationTarget {
                    model: model_name.to_string(),
                    field: field.name.clone(),
                    target: field.r#type.clone(),
                })?;

            FieldType::Relation(Relation::new(
                field.relation_name.clone().unwrap_or_default(),
                target,
                field.relation_from_fields.clone(),
                field.relation_to_fields.clone(),
            ))
        }
    };

    Ok(r#type)
}
