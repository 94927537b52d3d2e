use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::{Attribute, Entity, EntityModel, Relationship};

/// A flattened member together with the entity that declared it.
#[derive(Debug, Clone)]
pub struct Member {
    pub declared_by: String,
    pub decl: MemberDecl,
}

/// Either kind of entity member.
#[derive(Debug, Clone)]
pub enum MemberDecl {
    Attribute(Attribute),
    Relationship(Relationship),
}

impl Member {
    pub fn name(&self) -> &str {
        match &self.decl {
            MemberDecl::Attribute(attr) => &attr.name,
            MemberDecl::Relationship(rel) => &rel.name,
        }
    }
}

/// Linearize the supertype chain of an entity.
///
/// Returns the entity itself followed by each ancestor up to the root.
/// A parent reference outside the model or a loop in the chain is rejected.
pub fn linearize<'a>(model: &'a EntityModel, entity: &'a Entity) -> Result<Vec<&'a Entity>> {
    let mut chain = vec![entity];
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    visited.insert(entity.name.as_str());

    let mut current = entity;
    while let Some(parent_name) = current.parent.as_deref() {
        let parent = model.entity(parent_name).ok_or_else(|| Error::UnknownParent {
            entity: current.name.clone(),
            parent: parent_name.to_string(),
        })?;
        if !visited.insert(parent.name.as_str()) {
            return Err(Error::InheritanceCycle {
                entity: entity.name.clone(),
            });
        }
        chain.push(parent);
        current = parent;
    }

    Ok(chain)
}

/// Flatten the member set of an entity, ancestor-first then local.
///
/// Each member carries the name of the entity that declared it. A local
/// member whose name collides with an inherited one is rejected; the
/// generated model has no override mechanism, so shadowing would be silent.
pub fn flatten_members(model: &EntityModel, entity: &Entity) -> Result<Vec<Member>> {
    let chain = linearize(model, entity)?;

    let mut members: Vec<Member> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for owner in chain.iter().rev() {
        for attr in &owner.attributes {
            push_member(
                &mut members,
                &mut seen,
                &entity.name,
                Member {
                    declared_by: owner.name.clone(),
                    decl: MemberDecl::Attribute(attr.clone()),
                },
            )?;
        }
        for rel in &owner.relationships {
            push_member(
                &mut members,
                &mut seen,
                &entity.name,
                Member {
                    declared_by: owner.name.clone(),
                    decl: MemberDecl::Relationship(rel.clone()),
                },
            )?;
        }
    }

    Ok(members)
}

fn push_member(
    members: &mut Vec<Member>,
    seen: &mut BTreeSet<String>,
    entity: &str,
    member: Member,
) -> Result<()> {
    if !seen.insert(member.name().to_string()) {
        let ancestor = members
            .iter()
            .find(|existing| existing.name() == member.name())
            .map(|existing| existing.declared_by.clone())
            .unwrap_or_else(|| member.declared_by.clone());
        return Err(Error::MemberRedefinition {
            entity: entity.to_string(),
            member: member.name().to_string(),
            ancestor,
        });
    }
    members.push(member);
    Ok(())
}
