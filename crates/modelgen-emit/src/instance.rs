use std::collections::BTreeMap;

use crate::class::{ClassModel, FieldRepr};
use crate::errors::EmitError;
use crate::fields::FieldKind;

/// Scalar attribute value held by an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone)]
enum Slot {
    Scalar(Option<ScalarValue>),
    Link(Option<Box<Instance>>),
    Seq(Vec<Instance>),
    Tuple {
        len: u32,
        values: Option<Vec<Instance>>,
    },
}

/// A plain, unsynchronized value holder for one generated class.
///
/// Accessors return the current value; mutators replace it wholesale.
/// In-place growth of a collection goes through the mutable sequence
/// borrow, not a separate operation. Concurrent mutation is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct Instance {
    class: String,
    chain: Vec<String>,
    slots: BTreeMap<String, Slot>,
}

impl Instance {
    pub(crate) fn new(class: &ClassModel) -> Instance {
        let mut slots = BTreeMap::new();
        for field in &class.fields {
            let slot = match &field.repr {
                FieldRepr::Attribute(_) => Slot::Scalar(None),
                FieldRepr::Relation(FieldKind::Scalar { .. }) => Slot::Link(None),
                FieldRepr::Relation(FieldKind::OrderedCollection { .. }) => Slot::Seq(Vec::new()),
                FieldRepr::Relation(FieldKind::FixedTuple { len, .. }) => Slot::Tuple {
                    len: *len,
                    values: None,
                },
            };
            slots.insert(field.name.clone(), slot);
        }
        Instance {
            class: class.name.clone(),
            chain: class.chain.clone(),
            slots,
        }
    }

    /// Name of the generated class this instance belongs to.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Type-membership check against any ancestor in the chain.
    pub fn is_instance_of(&self, type_name: &str) -> bool {
        self.chain.iter().any(|ancestor| ancestor == type_name)
    }

    /// Current value of a scalar attribute field.
    pub fn scalar(&self, field: &str) -> Result<Option<&ScalarValue>, EmitError> {
        match self.slot(field)? {
            Slot::Scalar(value) => Ok(value.as_ref()),
            _ => Err(self.kind_mismatch(field, "scalar attribute")),
        }
    }

    /// Replace a scalar attribute field.
    pub fn set_scalar(&mut self, field: &str, value: ScalarValue) -> Result<(), EmitError> {
        let mismatch = self.kind_mismatch(field, "scalar attribute");
        match self.slot_mut(field)? {
            Slot::Scalar(slot) => {
                *slot = Some(value);
                Ok(())
            }
            _ => Err(mismatch),
        }
    }

    /// Current target of a single-valued relationship field.
    pub fn link(&self, field: &str) -> Result<Option<&Instance>, EmitError> {
        match self.slot(field)? {
            Slot::Link(value) => Ok(value.as_deref()),
            _ => Err(self.kind_mismatch(field, "single-valued")),
        }
    }

    /// Replace a single-valued relationship field.
    pub fn set_link(&mut self, field: &str, value: Instance) -> Result<(), EmitError> {
        let mismatch = self.kind_mismatch(field, "single-valued");
        match self.slot_mut(field)? {
            Slot::Link(slot) => {
                *slot = Some(Box::new(value));
                Ok(())
            }
            _ => Err(mismatch),
        }
    }

    /// Current contents of an ordered-collection field.
    pub fn seq(&self, field: &str) -> Result<&[Instance], EmitError> {
        match self.slot(field)? {
            Slot::Seq(values) => Ok(values),
            _ => Err(self.kind_mismatch(field, "collection")),
        }
    }

    /// Mutable borrow of an ordered-collection field, for in-place growth.
    pub fn seq_mut(&mut self, field: &str) -> Result<&mut Vec<Instance>, EmitError> {
        let mismatch = self.kind_mismatch(field, "collection");
        match self.slot_mut(field)? {
            Slot::Seq(values) => Ok(values),
            _ => Err(mismatch),
        }
    }

    /// Replace the whole sequence of an ordered-collection field.
    pub fn set_seq(&mut self, field: &str, values: Vec<Instance>) -> Result<(), EmitError> {
        let mismatch = self.kind_mismatch(field, "collection");
        match self.slot_mut(field)? {
            Slot::Seq(slot) => {
                *slot = values;
                Ok(())
            }
            _ => Err(mismatch),
        }
    }

    /// Current contents of a fixed-tuple field, when set.
    pub fn tuple(&self, field: &str) -> Result<Option<&[Instance]>, EmitError> {
        match self.slot(field)? {
            Slot::Tuple { values, .. } => Ok(values.as_deref()),
            _ => Err(self.kind_mismatch(field, "fixed-tuple")),
        }
    }

    /// Populate a fixed-tuple field wholesale.
    ///
    /// The value count must equal the declared arity; tuples are never
    /// grown incrementally or silently truncated.
    pub fn set_tuple(&mut self, field: &str, values: Vec<Instance>) -> Result<(), EmitError> {
        let class = self.class.clone();
        let mismatch = self.kind_mismatch(field, "fixed-tuple");
        match self.slot_mut(field)? {
            Slot::Tuple { len, values: slot } => {
                if values.len() != *len as usize {
                    return Err(EmitError::ArityMismatch {
                        class,
                        field: field.to_string(),
                        expected: *len,
                        actual: values.len(),
                    });
                }
                *slot = Some(values);
                Ok(())
            }
            _ => Err(mismatch),
        }
    }

    fn slot(&self, field: &str) -> Result<&Slot, EmitError> {
        self.slots.get(field).ok_or_else(|| EmitError::UnknownField {
            class: self.class.clone(),
            field: field.to_string(),
        })
    }

    fn slot_mut(&mut self, field: &str) -> Result<&mut Slot, EmitError> {
        let class = self.class.clone();
        self.slots.get_mut(field).ok_or_else(|| EmitError::UnknownField {
            class,
            field: field.to_string(),
        })
    }

    fn kind_mismatch(&self, field: &str, expected: &'static str) -> EmitError {
        EmitError::FieldKindMismatch {
            class: self.class.clone(),
            field: field.to_string(),
            expected,
        }
    }
}
