//! generate_cad: build the actuator and arm models and write them as STEP / STL.
//!
//! # Logging
//!
//! `-v` logs each model and file, `-vv` adds per-part detail. `RUST_LOG`
//! overrides both, e.g. `RUST_LOG=frog_cad=debug`.
//!
//! # Example
//!
//! ```bash
//! generate_cad --model medium_actuator --out-dir target/cad
//! STL_OUTPUT_PATH=cube.stl generate_cad --model test_cube --format stl
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use frog_cad::config::{Resolution, load_actuator_params, load_arm_params};
use frog_cad::errors::CadError;
use frog_cad::export::{ExportOptions, export_models};
use frog_cad::io::Format;
use frog_cad::models::{MODELS, ModelContext, select_models};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parametric CAD generator for the BLDC actuator and the FROG arm.
#[derive(Parser, Debug)]
#[command(name = "generate_cad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output root; files go to `<out>/step` and `<out>/stl`
    #[arg(long, default_value = "target/cad")]
    out_dir: PathBuf,

    /// Model to build (repeatable); all models when omitted
    #[arg(long = "model", short = 'm')]
    models: Vec<String>,

    /// List the available models and exit
    #[arg(long)]
    list: bool,

    /// Which files to write
    #[arg(long, value_enum, default_value = "both")]
    format: Format,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Segments on a full circle for body outlines
    #[arg(long)]
    segments: Option<usize>,

    /// RON file replacing the cycloidal actuator parameters
    #[arg(long)]
    actuator: Option<PathBuf>,

    /// RON file replacing the strain-wave actuator parameters
    #[arg(long)]
    strain_wave: Option<PathBuf>,

    /// RON file replacing the arm parameters
    #[arg(long)]
    arm: Option<PathBuf>,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "frog_cad=info,generate_cad=info",
            2 => "frog_cad=debug,generate_cad=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn context(cli: &Cli) -> Result<ModelContext> {
    let mut ctx = ModelContext::default();
    if let Some(path) = &cli.actuator {
        ctx.actuator = load_actuator_params(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    if let Some(path) = &cli.strain_wave {
        ctx.strain_wave = load_actuator_params(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    if let Some(path) = &cli.arm {
        ctx.arm = load_arm_params(path).with_context(|| format!("loading {}", path.display()))?;
    }
    if let Some(segments) = cli.segments {
        ctx.resolution = Resolution::with_segments(segments);
    }
    Ok(ctx)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for model in MODELS {
            println!("{:<24} {}", model.name, model.description);
        }
        return Ok(());
    }

    let names = select_models(&cli.models);

    let ctx = context(&cli)?;
    let options = ExportOptions {
        out_dir: cli.out_dir.clone(),
        format: cli.format,
        ascii_stl: cli.ascii,
    };

    tracing::info!(models = names.len(), out_dir = %options.out_dir.display(), "generating");
    let summary = export_models(&names, &ctx, &options);
    tracing::info!(
        models = summary.models,
        files = summary.files,
        failures = summary.failures,
        "done"
    );

    if !summary.is_success() {
        return Err(CadError::ExportFailed(summary.failures).into());
    }
    Ok(())
}
