#![allow(unused_crate_dependencies)]

use indoc::indoc;
use quote::quote;
use schema_bridge_datamodel::DataModel;
use schema_bridge_projection::{codegen, project, render_sdl, GeneratedSchema, GeneratorSettings, ProjectionError};

const BLOG: &str = include_str!("fixtures/blog.json");

fn project_blog(settings: &GeneratorSettings) -> GeneratedSchema {
    let datamodel = DataModel::from_json(BLOG).unwrap();
    project(&datamodel, settings).unwrap()
}

#[test]
fn blog_sdl() {
    let schema = project_blog(&GeneratorSettings::default());
    let sdl = render_sdl(&schema).unwrap();

    insta::assert_snapshot!(sdl, @r###"
    scalar DateTime

    scalar Decimal

    scalar Json

    """
    What a user may do.
    """
    enum Role {
        ADMIN
        """
        Read only
        """
        READER
    }

    """
    A person with an account
    """
    type User {
        id: ID!
        role: Role!
        createdAt: DateTime!
        posts: [Post!]!
        profile: Profile
    }

    type Post {
        id: ID!
        """
        The title of the post
        """
        title: String!
        rating: Decimal
        metadata: Json
        authorId: String!
        author: User!
    }

    type Profile {
        id: ID!
        userId: String
        user: User
    }
    "###);
}

#[test]
fn empty_types_have_no_body() {
    let document = indoc! {r#"
        {
          "enums": [{ "name": "Nothing", "values": [] }],
          "models": [{ "name": "Marker", "fields": [] }]
        }
    "#};

    let datamodel = DataModel::from_json(document).unwrap();
    let schema = project(&datamodel, &GeneratorSettings::default()).unwrap();

    assert_eq!(render_sdl(&schema).unwrap(), "enum Nothing\n\ntype Marker\n");
}

#[test]
fn rust_module_exposes_names() {
    let schema = project_blog(&GeneratorSettings::default());
    let code = codegen::generate(&schema).unwrap();

    assert!(code.starts_with("// @generated by schema-bridge"));

    let expected = [
        quote! { pub const CONTEXT_FIELD: &str = "prisma"; },
        quote! { pub const NAME: &str = "User"; },
        quote! { pub const AUTHOR_ID: &str = "authorId"; },
        quote! { pub const RELATIONS: &[&str] = &["posts", "profile"]; },
        quote! { pub const READER: &str = "READER"; },
        quote! { pub mod post },
    ];

    for tokens in expected {
        let tokens = tokens.to_string();
        assert!(code.contains(&tokens), "missing `{tokens}`");
    }
}

#[test]
fn descriptions_become_doc_comments() {
    let documented = quote! { #[doc = " A person with an account"] pub mod user }.to_string();
    let member = quote! { #[doc = " Read only"] pub const READER: &str = "READER"; }.to_string();

    let schema = project_blog(&GeneratorSettings::default());
    let code = codegen::generate(&schema).unwrap();

    assert!(code.contains(&documented));
    assert!(code.contains(&member));

    let settings = GeneratorSettings {
        jsdoc: false,
        ..Default::default()
    };

    let schema = project_blog(&settings);
    let code = codegen::generate(&schema).unwrap();

    assert!(!code.contains(&documented));
    assert!(code.contains(&quote! { pub const READER: &str = "READER"; }.to_string()));
}

#[test]
fn colliding_constants_are_rejected() {
    let document = indoc! {r#"
        {
          "models": [
            {
              "name": "Post",
              "fields": [
                { "name": "authorId", "kind": "scalar", "type": "String", "isRequired": true },
                { "name": "author_id", "kind": "scalar", "type": "String", "isRequired": true }
              ]
            }
          ]
        }
    "#};

    let datamodel = DataModel::from_json(document).unwrap();
    let schema = project(&datamodel, &GeneratorSettings::default()).unwrap();
    let error = codegen::generate(&schema).unwrap_err();

    assert!(matches!(
        error,
        ProjectionError::NameCollision { ref scope, ref name } if scope == "Post" && name == "author_id"
    ));
}
