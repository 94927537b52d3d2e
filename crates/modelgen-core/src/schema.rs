use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level snapshot of a domain model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntityModel {
    /// Contract version for this model format.
    pub model_version: String,
    /// Model name when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Entities in declaration order. Emission order follows this order.
    pub entities: Vec<Entity>,
}

/// A named type to be generated as a data class.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    pub name: String,
    /// Single supertype, when this entity inherits from another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Locally declared scalar attributes, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Locally declared relationship ends, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

/// A simply-typed scalar field owned by exactly one entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    pub name: String,
    pub scalar: ScalarType,
}

/// Scalar types supported for attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Text,
    Int,
    Float,
    Bool,
}

/// A unidirectional relationship end declared on one entity.
///
/// Declaring a relationship on entity A creates a field only on A; no inverse
/// field appears on the target unless separately declared.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Relationship {
    pub name: String,
    /// Name of the target entity.
    pub target: String,
    pub cardinality: Cardinality,
}

/// Declared multiplicity of a relationship end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cardinality {
    /// Exactly one target instance.
    One,
    /// Zero or more target instances, order-preserving, duplicates permitted.
    Many,
    /// Exactly `count` target instances, order-significant. Requires count >= 2.
    Fixed { count: u32 },
}

impl EntityModel {
    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }
}
