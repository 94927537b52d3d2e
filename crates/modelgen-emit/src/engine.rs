use std::fs;
use std::path::PathBuf;

use tracing::info;

use modelgen_core::{validate_model, EntityModel};

use crate::class::ClassModel;
use crate::errors::EmitError;
use crate::model::{ClassReport, EmissionReport, EmitOptions};
use crate::render::{module_name, render_class, render_module_index};

/// Result of an emission run.
#[derive(Debug, Clone)]
pub struct EmissionResult {
    pub out_dir: PathBuf,
    pub report: EmissionReport,
}

/// Entry point for emitting generated classes from an entity model.
///
/// Emission is all-or-nothing: every class is resolved and rendered before
/// the first byte is written, so a malformed model never leaves partial
/// output behind.
#[derive(Debug, Clone)]
pub struct EmissionEngine {
    options: EmitOptions,
}

impl EmissionEngine {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, model: &EntityModel) -> Result<EmissionResult, EmitError> {
        validate_model(model)?;

        let mut report = EmissionReport::new(model.name.clone());
        let mut classes = Vec::with_capacity(model.entities.len());
        let mut units = Vec::with_capacity(model.entities.len());

        // Resolve and render in declaration order; nothing touches the
        // filesystem until the whole model has been rendered.
        for entity in &model.entities {
            let class = ClassModel::build(model, entity)?;
            let source = render_class(&class);
            info!(
                entity = %class.name,
                fields = class.fields.len(),
                inherited = class.inherited_fields(),
                "class rendered"
            );
            report.classes.push(ClassReport {
                entity: class.name.clone(),
                parent: class.parent.clone(),
                fields: class.fields.len(),
                inherited_fields: class.inherited_fields(),
                bytes: source.len() as u64,
            });
            units.push((file_name(&class.name), source));
            classes.push(class);
        }

        units.push(("mod.rs".to_string(), render_module_index(&classes)));

        fs::create_dir_all(&self.options.out_dir)?;
        for (name, source) in &units {
            let path = self.options.out_dir.join(name);
            fs::write(&path, source)?;
            report.files_written += 1;
            report.bytes_written += source.len() as u64;
        }

        if self.options.write_report {
            let report_path = self.options.out_dir.join("emission_report.json");
            fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
        }

        info!(
            classes = report.classes.len(),
            files = report.files_written,
            bytes_written = report.bytes_written,
            "emission completed"
        );

        Ok(EmissionResult {
            out_dir: self.options.out_dir.clone(),
            report,
        })
    }
}

fn file_name(entity: &str) -> String {
    format!("{}.rs", module_name(entity).trim_start_matches("r#"))
}
