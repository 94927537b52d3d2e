use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::inherit::flatten_members;
use crate::naming::snake_case;
use crate::schema::{Cardinality, EntityModel};

/// Validate internal consistency of an entity model.
///
/// This checks:
/// - duplicate entity names and duplicate member names within one entity
/// - relationship targets and inheritance edges referencing declared entities
/// - fixed-arity cardinalities with a count of at least 2
/// - inheritance cycles and inherited/local member collisions
/// - distinct names that converge on the same generated snake_case ident
pub fn validate_model(model: &EntityModel) -> Result<()> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for entity in &model.entities {
        if !names.insert(entity.name.as_str()) {
            return Err(Error::DuplicateEntity {
                name: entity.name.clone(),
            });
        }

        let mut members: BTreeSet<&str> = BTreeSet::new();
        for attr in &entity.attributes {
            if !members.insert(attr.name.as_str()) {
                return Err(Error::DuplicateMember {
                    entity: entity.name.clone(),
                    member: attr.name.clone(),
                });
            }
        }
        for rel in &entity.relationships {
            if !members.insert(rel.name.as_str()) {
                return Err(Error::DuplicateMember {
                    entity: entity.name.clone(),
                    member: rel.name.clone(),
                });
            }
        }
    }

    for entity in &model.entities {
        if let Some(parent) = entity.parent.as_deref() {
            if !names.contains(parent) {
                return Err(Error::UnknownParent {
                    entity: entity.name.clone(),
                    parent: parent.to_string(),
                });
            }
        }

        for rel in &entity.relationships {
            if !names.contains(rel.target.as_str()) {
                return Err(Error::UnknownTarget {
                    entity: entity.name.clone(),
                    relationship: rel.name.clone(),
                    target: rel.target.clone(),
                });
            }
            if let Cardinality::Fixed { count } = rel.cardinality {
                if count < 2 {
                    return Err(Error::InvalidFixedCount {
                        entity: entity.name.clone(),
                        relationship: rel.name.clone(),
                        count,
                    });
                }
            }
        }
    }

    // Entity names become module names in the generated output; two names
    // that snake_case to the same ident would emit the same file twice.
    let mut modules: BTreeMap<String, &str> = BTreeMap::new();
    for entity in &model.entities {
        let ident = snake_case(&entity.name);
        if let Some(first) = modules.insert(ident.clone(), entity.name.as_str()) {
            return Err(Error::EntityIdentCollision {
                first: first.to_string(),
                second: entity.name.clone(),
                ident,
            });
        }
    }

    // Walking every chain here surfaces cycles and member collisions at load
    // time, so the emitter can assume a fully resolved model. The flattened
    // set is also checked for snake_case ident collisions, since members
    // that are distinct as declared can still converge on one field ident
    // in the rendered class.
    for entity in &model.entities {
        let mut idents: BTreeMap<String, String> = BTreeMap::new();
        for member in flatten_members(model, entity)? {
            let ident = snake_case(member.name());
            if let Some(first) = idents.insert(ident.clone(), member.name().to_string()) {
                return Err(Error::MemberIdentCollision {
                    entity: entity.name.clone(),
                    first,
                    second: member.name().to_string(),
                    ident,
                });
            }
        }
    }

    Ok(())
}
