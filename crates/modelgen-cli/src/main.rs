use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use modelgen_core::{load_model, Error as CoreError, MODEL_VERSION};
use modelgen_emit::{EmissionEngine, EmitError, EmitOptions};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
enum CliError {
    #[error("model error: {0}")]
    Model(#[from] CoreError),
    #[error("emission error: {0}")]
    Emit(#[from] EmitError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "modelgen", version, about = "Entity-model to data-class generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one Rust source unit per entity from a model document.
    Generate(GenerateArgs),
    /// Validate a model document without emitting anything.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the model JSON document.
    #[arg(value_name = "MODEL")]
    model: PathBuf,
    /// Output directory for generated sources.
    #[arg(long, default_value = "generated")]
    out: PathBuf,
    /// Skip writing emission_report.json.
    #[arg(long, default_value_t = false)]
    no_report: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to the model JSON document.
    #[arg(value_name = "MODEL")]
    model: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let model = load_from_path(&args.model)?;
    let engine = EmissionEngine::new(EmitOptions {
        out_dir: args.out,
        write_report: !args.no_report,
    });
    let result = engine.run(&model)?;
    info!(
        out_dir = %result.out_dir.display(),
        classes = result.report.classes.len(),
        bytes_written = result.report.bytes_written,
        "generation finished"
    );
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let model = load_from_path(&args.model)?;
    info!(
        model = model.name.as_deref().unwrap_or(""),
        entities = model.entities.len(),
        "model is valid"
    );
    Ok(())
}

fn load_from_path(path: &PathBuf) -> Result<modelgen_core::EntityModel, CliError> {
    let contents = fs::read_to_string(path)?;
    let model = load_model(&contents)?;
    if model.model_version != MODEL_VERSION {
        warn!(
            found = %model.model_version,
            expected = MODEL_VERSION,
            "model contract version differs from this build"
        );
    }
    Ok(model)
}
