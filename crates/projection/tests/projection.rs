#![allow(unused_crate_dependencies)]

use indoc::indoc;
use schema_bridge_datamodel::DataModel;
use schema_bridge_projection::{
    project, FetchStrategy, GeneratedSchema, GeneratorSettings, IdIntMapping, KeyPair, ProjectionError,
};

const BLOG: &str = include_str!("fixtures/blog.json");

fn project_blog(settings: &GeneratorSettings) -> GeneratedSchema {
    let datamodel = DataModel::from_json(BLOG).unwrap();
    project(&datamodel, settings).unwrap()
}

#[test]
fn models_and_fields_follow_declaration_order() {
    let schema = project_blog(&GeneratorSettings::default());

    let models: Vec<_> = schema.models.keys().map(String::as_str).collect();
    assert_eq!(models, ["User", "Post", "Profile"]);

    let fields: Vec<_> = schema.get_model("Post").unwrap().fields.keys().map(String::as_str).collect();
    assert_eq!(fields, ["id", "title", "rating", "metadata", "authorId", "author"]);
}

#[test]
fn type_signatures() {
    let schema = project_blog(&GeneratorSettings::default());

    let signatures: Vec<_> = schema
        .models
        .values()
        .flat_map(|model| model.fields.values())
        .map(|field| (field.name.as_str(), field.type_signature.as_str()))
        .collect();

    assert_eq!(
        signatures,
        [
            ("id", "ID!"),
            ("role", "Role!"),
            ("createdAt", "DateTime!"),
            ("posts", "[Post!]!"),
            ("profile", "Profile"),
            ("id", "ID!"),
            ("title", "String!"),
            ("rating", "Decimal"),
            ("metadata", "Json"),
            ("authorId", "String!"),
            ("author", "User!"),
            ("id", "ID!"),
            ("userId", "String"),
            ("user", "User"),
        ]
    );
}

#[test]
fn descriptions_are_single_lines() {
    let schema = project_blog(&GeneratorSettings::default());

    let user = schema.get_model("User").unwrap();
    assert_eq!(user.description.as_deref(), Some("A person with an account"));

    let title = schema.get_model("Post").unwrap().field("title").unwrap();
    assert_eq!(title.description.as_deref(), Some("The title of the post"));

    let role = schema.get_enum("Role").unwrap();
    assert_eq!(role.description.as_deref(), Some("What a user may do."));

    let members: Vec<_> = role
        .members
        .iter()
        .map(|member| (member.name.as_str(), member.description.as_deref()))
        .collect();
    assert_eq!(members, [("ADMIN", None), ("READER", Some("Read only"))]);
}

#[test]
fn custom_scalars_in_order_of_first_use() {
    let schema = project_blog(&GeneratorSettings::default());

    assert_eq!(schema.custom_scalars, ["DateTime", "Decimal", "Json"]);
}

#[test]
fn int_identifiers_can_stay_ints() {
    let settings = GeneratorSettings {
        project_id_int_to_graphql: IdIntMapping::Int,
        ..Default::default()
    };

    let schema = project_blog(&settings);
    let id = schema.get_model("Post").unwrap().field("id").unwrap();

    assert_eq!(id.type_signature, "Int!");
    assert_eq!(schema.get_model("User").unwrap().field("id").unwrap().type_signature, "ID!");
}

#[test]
fn relation_fields_carry_resolvers() {
    let schema = project_blog(&GeneratorSettings::default());
    let user = schema.get_model("User").unwrap();

    let posts = user.field("posts").unwrap();
    assert!(posts.requires_resolver);
    assert!(posts.is_list);
    assert!(!posts.is_nullable);

    let resolver = posts.resolver.as_ref().unwrap();
    assert_eq!(resolver.target_model, "Post");
    assert_eq!(resolver.fetch_strategy, FetchStrategy::FetchManyByForeignKey);
    assert_eq!(resolver.key_pairs, [KeyPair::new("authorId", "id")]);

    let author = schema.get_model("Post").unwrap().field("author").unwrap();
    let resolver = author.resolver.as_ref().unwrap();
    assert_eq!(resolver.fetch_strategy, FetchStrategy::FetchUnique);
    assert_eq!(resolver.key_pairs, [KeyPair::new("id", "authorId")]);

    let id = user.field("id").unwrap();
    assert!(!id.requires_resolver);
    assert!(id.resolver.is_none());

    let resolved: Vec<_> = schema
        .resolvers()
        .map(|resolver| format!("{}.{}", resolver.model, resolver.field))
        .collect();
    assert_eq!(resolved, ["User.posts", "User.profile", "Post.author", "Profile.user"]);
}

#[test]
fn user_profile_scenario() {
    let schema = project_blog(&GeneratorSettings::default());

    let profile = schema.get_model("User").unwrap().field("profile").unwrap();
    assert!(!profile.is_list);
    assert!(profile.is_nullable);

    let resolver = profile.resolver.as_ref().unwrap();
    assert_eq!(resolver.fetch_strategy, FetchStrategy::FetchUnique);
    assert_eq!(resolver.key_pairs, [KeyPair::new("userId", "id")]);

    let id = schema.get_model("Profile").unwrap().field("id").unwrap();
    assert!(!id.is_list);
    assert!(!id.is_nullable);
}

#[test]
fn projection_is_deterministic() {
    let first = project_blog(&GeneratorSettings::default()).to_json().unwrap();
    let second = project_blog(&GeneratorSettings::default()).to_json().unwrap();

    assert_eq!(first, second);
}

#[test]
fn artifact_reads_back() {
    let schema = project_blog(&GeneratorSettings::default());
    let artifact = schema.to_json().unwrap();

    assert!(artifact.contains(r#""$name": "User""#));
    assert!(artifact.contains(r#""$description": "A person with an account""#));
    assert!(artifact.contains(r#""fetchStrategy": "fetch-many-by-foreign-key""#));
    assert!(artifact.contains(r#""projectIdIntToGraphQL": "ID""#));
    assert!(artifact.contains(r#""prismaClientContextField": "prisma""#));
    assert!(!artifact.contains("prisma_client_context_field"));
    assert_eq!(GeneratedSchema::from_json(&artifact).unwrap(), schema);
}

#[test]
fn lookups_of_unknown_names_fail() {
    let schema = project_blog(&GeneratorSettings::default());

    assert!(matches!(schema.get_model("Comment"), Err(ProjectionError::ModelNotFound(name)) if name == "Comment"));
    assert!(matches!(schema.get_enum("User"), Err(ProjectionError::EnumNotFound(_))));
}

#[test]
fn unsupported_scalars_fail_the_generation() {
    let document = indoc! {r#"
        {
          "models": [
            {
              "name": "Document",
              "fields": [
                { "name": "id", "kind": "scalar", "type": "String", "isId": true, "isRequired": true },
                { "name": "search", "kind": "unsupported", "type": "tsvector", "isRequired": false }
              ]
            }
          ]
        }
    "#};

    let datamodel = DataModel::from_json(document).unwrap();
    let error = project(&datamodel, &GeneratorSettings::default()).unwrap_err();

    match error {
        ProjectionError::UnsupportedScalar { model, field, source } => {
            assert_eq!(model, "Document");
            assert_eq!(field, "search");
            assert_eq!(source.type_name, "tsvector");
        }
        other => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn relations_without_foreign_key_cannot_be_resolved() {
    let document = indoc! {r#"
        {
          "models": [
            {
              "name": "Post",
              "fields": [
                { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true },
                { "name": "tags", "kind": "object", "type": "Tag", "isRequired": true, "isList": true, "relationName": "PostToTag" }
              ]
            },
            {
              "name": "Tag",
              "fields": [
                { "name": "id", "kind": "scalar", "type": "Int", "isId": true, "isRequired": true },
                { "name": "posts", "kind": "object", "type": "Post", "isRequired": true, "isList": true, "relationName": "PostToTag" }
              ]
            }
          ]
        }
    "#};

    let datamodel = DataModel::from_json(document).unwrap();
    let error = project(&datamodel, &GeneratorSettings::default()).unwrap_err();

    assert!(matches!(
        error,
        ProjectionError::RelationWithoutForeignKey { ref model, ref field, ref relation }
            if model == "Post" && field == "tags" && relation == "PostToTag"
    ));
}
