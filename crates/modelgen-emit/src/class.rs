use modelgen_core::{flatten_members, linearize, Entity, EntityModel, MemberDecl, Result, ScalarType};

use crate::fields::FieldKind;
use crate::instance::Instance;

/// Fully resolved description of one generated class.
///
/// Built once per entity from the inheritance and cardinality resolvers;
/// the emitter and the instance runtime both consume it without looking
/// back at the model.
#[derive(Debug, Clone)]
pub struct ClassModel {
    pub name: String,
    pub parent: Option<String>,
    /// Ancestor chain, the class itself first, root last.
    pub chain: Vec<String>,
    /// Flattened fields, ancestor-first then local.
    pub fields: Vec<FieldSpec>,
}

/// One field of a generated class.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    /// Entity that declared this member.
    pub declared_by: String,
    pub repr: FieldRepr,
}

/// Representation of a generated field.
#[derive(Debug, Clone)]
pub enum FieldRepr {
    Attribute(ScalarType),
    Relation(FieldKind),
}

impl ClassModel {
    /// Resolve an entity into a class model.
    pub fn build(model: &EntityModel, entity: &Entity) -> Result<ClassModel> {
        let chain = linearize(model, entity)?
            .iter()
            .map(|ancestor| ancestor.name.clone())
            .collect();

        let fields = flatten_members(model, entity)?
            .into_iter()
            .map(|member| {
                let repr = match &member.decl {
                    MemberDecl::Attribute(attr) => FieldRepr::Attribute(attr.scalar),
                    MemberDecl::Relationship(rel) => FieldRepr::Relation(FieldKind::resolve(rel)),
                };
                FieldSpec {
                    name: member.name().to_string(),
                    declared_by: member.declared_by,
                    repr,
                }
            })
            .collect();

        Ok(ClassModel {
            name: entity.name.clone(),
            parent: entity.parent.clone(),
            chain,
            fields,
        })
    }

    /// Look up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Number of fields inherited from ancestors.
    pub fn inherited_fields(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.declared_by != self.name)
            .count()
    }

    /// Construct a fresh instance of this class.
    ///
    /// Scalar and tuple fields start unset; collection fields start as
    /// empty, insertion-ordered sequences.
    pub fn instantiate(&self) -> Instance {
        Instance::new(self)
    }
}
