use thiserror::Error;

/// Errors emitted by the class emitter and the instance runtime.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("model error: {0}")]
    Model(#[from] modelgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown field '{field}' on class '{class}'")]
    UnknownField { class: String, field: String },
    #[error("field '{class}.{field}' is not a {expected} field")]
    FieldKindMismatch {
        class: String,
        field: String,
        expected: &'static str,
    },
    #[error("field '{class}.{field}' holds a tuple of {expected} values, got {actual}")]
    ArityMismatch {
        class: String,
        field: String,
        expected: u32,
        actual: usize,
    },
}
