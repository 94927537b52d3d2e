use crate::error::Result;
use crate::schema::EntityModel;
use crate::validation::validate_model;

/// Parse and validate a JSON model document.
///
/// This is the single entry point for untrusted model input: a model that
/// loads successfully is fully resolved and safe to emit from.
pub fn load_model(json: &str) -> Result<EntityModel> {
    let model: EntityModel = serde_json::from_str(json)?;
    validate_model(&model)?;
    Ok(model)
}
