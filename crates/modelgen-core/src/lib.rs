//! Core contracts for modelgen.
//!
//! This crate defines the canonical entity-model types, validation helpers,
//! and inheritance resolution shared by the emitter and the CLI.

pub mod error;
pub mod inherit;
pub mod loader;
pub mod naming;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use inherit::{flatten_members, linearize, Member, MemberDecl};
pub use loader::load_model;
pub use naming::snake_case;
pub use schema::{Attribute, Cardinality, Entity, EntityModel, Relationship, ScalarType};
pub use validation::validate_model;

/// Current contract version for `model.json` documents.
pub const MODEL_VERSION: &str = "0.1";
