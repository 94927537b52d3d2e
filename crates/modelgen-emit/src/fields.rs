use modelgen_core::{Cardinality, Relationship, ScalarType};

/// Field representation chosen for a relationship end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A single owned reference, unset until assigned.
    Scalar { target: String },
    /// A growable, insertion-ordered sequence, empty at construction.
    OrderedCollection { target: String },
    /// Exactly `len` references, set as a whole.
    FixedTuple { target: String, len: u32 },
}

impl FieldKind {
    /// Map a relationship's declared cardinality to a field representation.
    ///
    /// The mapping is total and cardinality-driven only; it never inspects
    /// the relationship's name or the target entity's identity.
    pub fn resolve(rel: &Relationship) -> FieldKind {
        match rel.cardinality {
            Cardinality::One => FieldKind::Scalar {
                target: rel.target.clone(),
            },
            Cardinality::Many => FieldKind::OrderedCollection {
                target: rel.target.clone(),
            },
            Cardinality::Fixed { count } => FieldKind::FixedTuple {
                target: rel.target.clone(),
                len: count,
            },
        }
    }

    /// Name of the entity this field points at.
    pub fn target(&self) -> &str {
        match self {
            FieldKind::Scalar { target }
            | FieldKind::OrderedCollection { target }
            | FieldKind::FixedTuple { target, .. } => target,
        }
    }
}

/// Rust type used for a scalar attribute in generated classes.
pub fn rust_scalar_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Text => "String",
        ScalarType::Int => "i64",
        ScalarType::Float => "f64",
        ScalarType::Bool => "bool",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(cardinality: Cardinality) -> Relationship {
        Relationship {
            name: "contains".to_string(),
            target: "SoccerTeam".to_string(),
            cardinality,
        }
    }

    #[test]
    fn one_maps_to_scalar() {
        let kind = FieldKind::resolve(&rel(Cardinality::One));
        assert_eq!(
            kind,
            FieldKind::Scalar {
                target: "SoccerTeam".to_string()
            }
        );
    }

    #[test]
    fn many_maps_to_ordered_collection() {
        let kind = FieldKind::resolve(&rel(Cardinality::Many));
        assert_eq!(
            kind,
            FieldKind::OrderedCollection {
                target: "SoccerTeam".to_string()
            }
        );
    }

    #[test]
    fn fixed_maps_to_tuple_of_exact_size() {
        let kind = FieldKind::resolve(&rel(Cardinality::Fixed { count: 2 }));
        assert_eq!(
            kind,
            FieldKind::FixedTuple {
                target: "SoccerTeam".to_string(),
                len: 2,
            }
        );
    }
}
