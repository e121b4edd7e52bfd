//! Writing built models to disk.
//!
//! Layout under the output directory:
//!
//! ```text
//! <out>/step/<model>.step
//! <out>/stl/<model>.stl
//! <out>/stl/<model>_<part>.stl   (extra parts)
//! ```
//!
//! With exactly one model selected, `STEP_OUTPUT_PATH` and `STL_OUTPUT_PATH`
//! replace the main file paths. A failed write is logged and counted; the
//! remaining files and models are still attempted.

use crate::assembly::Assembly;
use crate::errors::CadError;
use crate::io::Format;
use crate::models::{Model, ModelContext, ModelOutput, find_model};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub const STEP_OUTPUT_ENV: &str = "STEP_OUTPUT_PATH";
pub const STL_OUTPUT_ENV: &str = "STL_OUTPUT_PATH";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub format: Format,
    /// Write ASCII STL instead of binary.
    pub ascii_stl: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("target/cad"),
            format: Format::Both,
            ascii_stl: false,
        }
    }
}

/// Where one model's main files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub step: PathBuf,
    pub stl: PathBuf,
}

impl OutputPaths {
    /// Default layout under `out_dir`.
    pub fn new(out_dir: &Path, model: &str) -> Self {
        Self {
            step: out_dir.join("step").join(format!("{model}.step")),
            stl: out_dir.join("stl").join(format!("{model}.stl")),
        }
    }

    /// Default layout with `STEP_OUTPUT_PATH` / `STL_OUTPUT_PATH` applied when set.
    pub fn from_env(out_dir: &Path, model: &str) -> Self {
        let mut paths = Self::new(out_dir, model);
        if let Some(step) = std::env::var_os(STEP_OUTPUT_ENV) {
            paths.step = PathBuf::from(step);
        }
        if let Some(stl) = std::env::var_os(STL_OUTPUT_ENV) {
            paths.stl = PathBuf::from(stl);
        }
        paths
    }

    /// Sibling of the main STL for an extra part: `<stem>_<label>.stl`.
    pub fn part_stl(&self, label: &str) -> PathBuf {
        let stem = self
            .stl
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.stl.with_file_name(format!("{stem}_{label}.stl"))
    }
}

/// What happened to one model.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: usize,
}

impl ExportReport {
    fn record(&mut self, path: &Path, result: Result<(), CadError>) {
        match result {
            Ok(()) => {
                if path.exists() {
                    debug!(path = %path.display(), "wrote");
                    self.written.push(path.to_path_buf());
                } else {
                    warn!(path = %path.display(), "file not found after export");
                }
            },
            Err(e) => {
                error!(path = %path.display(), error = %e, "export failed");
                self.failures += 1;
            },
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(feature = "stl-io")]
fn write_stl(assembly: &Assembly, path: &Path, ascii: bool) -> Result<(), CadError> {
    let bytes = if ascii {
        assembly.to_stl_ascii().into_bytes()
    } else {
        assembly.to_stl_binary()?
    };
    write_file(path, &bytes)
}

#[cfg(not(feature = "stl-io"))]
fn write_stl(_assembly: &Assembly, path: &Path, _ascii: bool) -> Result<(), CadError> {
    warn!(path = %path.display(), "built without `stl-io`, skipping");
    Ok(())
}

#[cfg(feature = "step-io")]
fn write_step(assembly: &Assembly, path: &Path) -> Result<(), CadError> {
    write_file(path, assembly.to_step().as_bytes())
}

#[cfg(not(feature = "step-io"))]
fn write_step(_assembly: &Assembly, path: &Path) -> Result<(), CadError> {
    warn!(path = %path.display(), "built without `step-io`, skipping");
    Ok(())
}

/// Write an already built model.
pub fn write_output(
    output: &ModelOutput,
    paths: &OutputPaths,
    options: &ExportOptions,
) -> ExportReport {
    let mut report = ExportReport::default();
    debug!(
        model = %output.main.label,
        parts = output.main.len(),
        polygons = output.main.polygon_count(),
        "writing"
    );

    if options.format.wants_step() {
        report.record(&paths.step, write_step(&output.main, &paths.step));
    }
    if options.format.wants_stl() {
        report.record(&paths.stl, write_stl(&output.main, &paths.stl, options.ascii_stl));
        for part in &output.extra_parts {
            let path = paths.part_stl(&part.label);
            let single =
                Assembly::new(part.label.clone()).with(part.label.clone(), part.mesh.clone());
            report.record(&path, write_stl(&single, &path, options.ascii_stl));
        }
    }
    report
}

/// Build `model` and write its files.
///
/// Construction errors are returned; write errors are logged and counted in the report.
pub fn export_model(
    model: &Model,
    ctx: &ModelContext,
    paths: &OutputPaths,
    options: &ExportOptions,
) -> Result<ExportReport, CadError> {
    info!(model = model.name, "building");
    let output = model.build(ctx)?;
    let report = write_output(&output, paths, options);
    info!(
        model = model.name,
        files = report.written.len(),
        failures = report.failures,
        "finished"
    );
    Ok(report)
}

/// Totals over every selected model.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub models: usize,
    pub files: usize,
    pub failures: usize,
}

impl ExportSummary {
    pub const fn is_success(&self) -> bool {
        self.failures == 0
    }

    fn add(&mut self, name: &str, result: Result<ExportReport, CadError>) {
        self.models += 1;
        match result {
            Ok(report) => {
                self.files += report.written.len();
                self.failures += report.failures;
            },
            Err(e) => {
                error!(model = name, error = %e, "could not build model");
                self.failures += 1;
            },
        }
    }
}

fn export_one(
    name: &str,
    single: bool,
    ctx: &ModelContext,
    options: &ExportOptions,
) -> Result<ExportReport, CadError> {
    let model = find_model(name)?;
    let paths = if single {
        OutputPaths::from_env(&options.out_dir, name)
    } else {
        OutputPaths::new(&options.out_dir, name)
    };
    export_model(model, ctx, &paths, options)
}

/// Export every model in `names`; failures do not stop the others.
pub fn export_models(
    names: &[String],
    ctx: &ModelContext,
    options: &ExportOptions,
) -> ExportSummary {
    let single = names.len() == 1;

    #[cfg(feature = "parallel")]
    let results: Vec<(&String, Result<ExportReport, CadError>)> = {
        use rayon::prelude::*;
        names
            .par_iter()
            .map(|name| (name, export_one(name, single, ctx, options)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(&String, Result<ExportReport, CadError>)> = names
        .iter()
        .map(|name| (name, export_one(name, single, ctx, options)))
        .collect();

    let mut summary = ExportSummary::default();
    for (name, result) in results {
        summary.add(name, result);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let paths = OutputPaths::new(Path::new("out"), "medium_actuator");
        assert_eq!(paths.step, PathBuf::from("out/step/medium_actuator.step"));
        assert_eq!(paths.stl, PathBuf::from("out/stl/medium_actuator.stl"));
        assert_eq!(
            paths.part_stl("disc_a"),
            PathBuf::from("out/stl/medium_actuator_disc_a.stl")
        );
    }

    #[test]
    fn failed_build_is_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = ExportOptions {
            out_dir: dir.path().to_path_buf(),
            ..ExportOptions::default()
        };
        let summary = export_models(
            &["no_such_model".to_string(), "test_cube".to_string()],
            &ModelContext::default(),
            &options,
        );
        assert_eq!(summary.models, 2);
        assert_eq!(summary.failures, 1);
        assert!(!summary.is_success());
        assert!(dir.path().join("stl/test_cube.stl").exists());
    }
}
