use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the emission engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Directory where generated sources are written.
    pub out_dir: PathBuf,
    /// Also write `emission_report.json` next to the generated sources.
    pub write_report: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("generated"),
            write_report: true,
        }
    }
}

/// Summary of one emitted class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub fields: usize,
    pub inherited_fields: usize,
    pub bytes: u64,
}

/// Report for an emission run.
///
/// Contains no run ids or timestamps: regenerating from an unchanged model
/// must produce byte-identical artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub classes: Vec<ClassReport>,
    pub files_written: usize,
    pub bytes_written: u64,
}

impl EmissionReport {
    pub fn new(model: Option<String>) -> Self {
        Self {
            model,
            classes: Vec::new(),
            files_written: 0,
            bytes_written: 0,
        }
    }
}
