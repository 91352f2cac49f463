#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Projects a relational datamodel into GraphQL descriptors.
//!
//! The projection is a pure function of the datamodel and the generator settings:
//! the same input always yields the same [`GeneratedSchema`], byte for byte once
//! serialized. The schema can then be rendered as SDL, as a Rust module, or read
//! back by the runtime to resolve relation fields.

pub mod codegen;
mod descriptor;
mod documentation;
mod emitter;
mod error;
mod nullability;
mod resolver;
mod scalar;
mod sdl;
mod settings;

pub use descriptor::{
    EnumDescriptor, EnumMemberDescriptor, FetchStrategy, FieldDescriptor, GeneratedSchema, KeyPair, ModelDescriptor,
    ResolverDescriptor,
};
pub use documentation::format_description;
pub use emitter::project;
pub use error::{ProjectionError, UnsupportedScalarError};
pub use nullability::Nullability;
pub use scalar::{map_scalar, ScalarCategory, ScalarMapping};
pub use sdl::render_sdl;
pub use settings::{GeneratorSettings, IdIntMapping};

pub type Result<T> = std::result::Result<T, ProjectionError>;
