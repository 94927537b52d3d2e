//! Class emission engine for modelgen.
//!
//! This crate turns a validated entity model into generated data classes:
//! a resolved class description per entity, a rendered Rust source unit per
//! class, and plain value-holder instances implementing the generated
//! object contract.

pub mod class;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod instance;
pub mod model;
pub mod render;

pub use class::{ClassModel, FieldRepr, FieldSpec};
pub use engine::{EmissionEngine, EmissionResult};
pub use errors::EmitError;
pub use fields::FieldKind;
pub use instance::{Instance, ScalarValue};
pub use model::{ClassReport, EmissionReport, EmitOptions};
pub use render::render_class;
