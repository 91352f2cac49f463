//! Generation of a Rust module exposing the projected schema.
//!
//! The module carries one submodule per enum and model with their GraphQL names as
//! constants, the context key of the database client, and the JSON artifact the
//! runtime loads. With `jsdoc` enabled the descriptions become doc comments.

use std::collections::HashSet;

use inflector::Inflector;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::{
    descriptor::{EnumDescriptor, GeneratedSchema, ModelDescriptor},
    error::ProjectionError,
    Result,
};

const HEADER: &str = "// @generated by schema-bridge. Do not edit by hand.";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move",
    "mut", "override", "priv", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Generate the source of the Rust module for a generated schema.
pub fn generate(schema: &GeneratedSchema) -> Result<String> {
    let tokens = ModuleBuilder::new(schema).generate()?;

    Ok(format!("{HEADER}\n{tokens}\n"))
}

struct ModuleBuilder<'a> {
    schema: &'a GeneratedSchema,
}

impl<'a> ModuleBuilder<'a> {
    fn new(schema: &'a GeneratedSchema) -> Self {
        Self { schema }
    }

    fn generate(self) -> Result<TokenStream> {
        let artifact = self.schema.to_json()?;
        let context_field = &self.schema.settings.prisma_client_context_field;

        let mut names = Names::new("enums");
        let enums = self
            .schema
            .enums
            .values()
            .map(|r#enum| self.enum_module(r#enum, &mut names))
            .collect::<Result<Vec<_>>>()?;

        let mut names = Names::new("models");
        let models = self
            .schema
            .models
            .values()
            .map(|model| self.model_module(model, &mut names))
            .collect::<Result<Vec<_>>>()?;

        Ok(quote! {
            /// The generated schema, as loaded by the runtime.
            pub const ARTIFACT: &str = #artifact;

            /// Key of the database client in the request context.
            pub const CONTEXT_FIELD: &str = #context_field;

            pub mod enums {
                #(#enums)*
            }

            pub mod models {
                #(#models)*
            }
        })
    }

    fn enum_module(&self, r#enum: &EnumDescriptor, names: &mut Names) -> Result<TokenStream> {
        let module = names.claim(&r#enum.name, r#enum.name.to_snake_case())?;
        let name = &r#enum.name;
        let doc = self.doc(r#enum.description.as_deref());

        let mut member_names = Names::new(&r#enum.name);
        let members = r#enum
            .members
            .iter()
            .map(|member| -> Result<TokenStream> {
                let ident = member_names.claim(&member.name, member.name.to_screaming_snake_case())?;
                let value = &member.name;
                let doc = self.doc(member.description.as_deref());

                Ok(quote! {
                    #doc
                    pub const #ident: &str = #value;
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(quote! {
            #doc
            pub mod #module {
                pub const NAME: &str = #name;

                pub mod members {
                    #(#members)*
                }
            }
        })
    }

    fn model_module(&self, model: &ModelDescriptor, names: &mut Names) -> Result<TokenStream> {
        let module = names.claim(&model.name, model.name.to_snake_case())?;
        let name = &model.name;
        let doc = self.doc(model.description.as_deref());

        let mut field_names = Names::new(&model.name);
        let fields = model
            .fields
            .values()
            .map(|field| -> Result<TokenStream> {
                let ident = field_names.claim(&field.name, field.name.to_screaming_snake_case())?;
                let value = &field.name;
                let doc = self.doc(field.description.as_deref());

                Ok(quote! {
                    #doc
                    pub const #ident: &str = #value;
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let relations = model
            .fields
            .values()
            .filter(|field| field.requires_resolver)
            .map(|field| &field.name);

        Ok(quote! {
            #doc
            pub mod #module {
                pub const NAME: &str = #name;

                /// Fields resolved through the database client.
                pub const RELATIONS: &[&str] = &[#(#relations),*];

                pub mod fields {
                    #(#fields)*
                }
            }
        })
    }

    fn doc(&self, description: Option<&str>) -> Option<TokenStream> {
        if !self.schema.settings.jsdoc {
            return None;
        }

        let description = format!(" {}", description?);

        Some(quote!(#[doc = #description]))
    }
}

/// Identifiers already generated in one module.
struct Names {
    scope: String,
    taken: HashSet<String>,
}

impl Names {
    fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            taken: HashSet::new(),
        }
    }

    fn claim(&mut self, name: &str, ident: String) -> Result<Ident> {
        let ident = sanitize(ident);

        if !self.taken.insert(ident.clone()) {
            return Err(ProjectionError::NameCollision {
                scope: self.scope.clone(),
                name: name.to_string(),
            });
        }

        Ok(Ident::new(&ident, Span::call_site()))
    }
}

fn sanitize(ident: String) -> String {
    let mut ident: String = ident
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if KEYWORDS.contains(&ident.as_str()) || ident == "_" {
        ident.push('_');
    }

    ident
}
