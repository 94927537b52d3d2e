use thiserror::Error;

/// Core error type shared across modelgen crates.
///
/// Every variant carries enough context (entity/member names) to locate the
/// offending declaration in the model document.
#[derive(Debug, Error)]
pub enum Error {
    /// The model document could not be parsed.
    #[error("invalid model document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entities share the same name.
    #[error("duplicate entity name: {name}")]
    DuplicateEntity { name: String },
    /// Two members of the same entity share a name.
    #[error("duplicate member name: {entity}.{member}")]
    DuplicateMember { entity: String, member: String },
    /// A relationship points at an entity the model does not declare.
    #[error("relationship '{entity}.{relationship}' targets undeclared entity '{target}'")]
    UnknownTarget {
        entity: String,
        relationship: String,
        target: String,
    },
    /// An inheritance edge points at an entity the model does not declare.
    #[error("entity '{entity}' extends undeclared entity '{parent}'")]
    UnknownParent { entity: String, parent: String },
    /// The supertype chain of an entity loops back on itself.
    #[error("inheritance cycle through entity '{entity}'")]
    InheritanceCycle { entity: String },
    /// A fixed-arity cardinality with fewer than two targets.
    #[error("relationship '{entity}.{relationship}' declares fixed({count}); fixed arity requires at least 2")]
    InvalidFixedCount {
        entity: String,
        relationship: String,
        count: u32,
    },
    /// Two entity names map to the same generated module name.
    #[error("entities '{first}' and '{second}' collide as module '{ident}'")]
    EntityIdentCollision {
        first: String,
        second: String,
        ident: String,
    },
    /// Two member names on one class map to the same generated field ident.
    #[error("members '{entity}.{first}' and '{entity}.{second}' collide as field ident '{ident}'")]
    MemberIdentCollision {
        entity: String,
        first: String,
        second: String,
        ident: String,
    },
    /// A local member re-declares a name already inherited from an ancestor.
    #[error("member redefinition: '{entity}.{member}' is already declared by ancestor '{ancestor}'")]
    MemberRedefinition {
        entity: String,
        member: String,
        ancestor: String,
    },
}

/// Convenience alias for results returned by modelgen crates.
pub type Result<T> = std::result::Result<T, Error>;
