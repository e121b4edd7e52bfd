mod support;

use frog_cad::export::{ExportOptions, OutputPaths, export_model, export_models, write_output};
use frog_cad::io::Format;
use frog_cad::models::{ModelContext, find_model, select_models};
use std::fs;

#[test]
fn test_cube_writes_step_and_stl() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = ExportOptions {
        out_dir: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };
    let paths = OutputPaths::new(dir.path(), "test_cube");
    let model = find_model("test_cube").expect("registered");
    let report = export_model(model, &ModelContext::default(), &paths, &options).expect("builds");
    assert_eq!(report.failures, 0);
    assert_eq!(report.written.len(), 2);

    let step = fs::read_to_string(&paths.step).expect("step written");
    assert!(step.starts_with("ISO-10303-21;"));
    assert_eq!(step.matches("CLOSED_SHELL").count(), 1);

    // binary STL: header, count, 12 triangles of 50 bytes
    let stl = fs::read(&paths.stl).expect("stl written");
    assert_eq!(stl.len(), 84 + 12 * 50);
}

#[test]
fn ascii_stl_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = ExportOptions {
        out_dir: dir.path().to_path_buf(),
        format: Format::Stl,
        ascii_stl: true,
    };
    let summary = export_models(&["test_cube".to_string()], &ModelContext::default(), &options);
    assert!(summary.is_success());
    let text = fs::read_to_string(dir.path().join("stl/test_cube.stl")).expect("stl");
    assert!(text.starts_with("solid test_cube"));
    assert!(!dir.path().join("step").exists());
}

#[test]
fn extra_parts_get_suffixed_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = ExportOptions {
        out_dir: dir.path().to_path_buf(),
        format: Format::Stl,
        ascii_stl: false,
    };
    let ctx = ModelContext {
        resolution: support::coarse(),
        ..ModelContext::default()
    };
    let output = find_model("rotor_hub")
        .and_then(|m| m.build(&ctx))
        .expect("rotor builds");
    let paths = OutputPaths::new(dir.path(), "rotor_hub");
    let report = write_output(&output, &paths, &options);
    assert_eq!(report.failures, 0);
    assert!(dir.path().join("stl/rotor_hub.stl").exists());
    assert!(dir.path().join("stl/rotor_hub_lower.stl").exists());
    assert!(dir.path().join("stl/rotor_hub_upper.stl").exists());
}

#[test]
fn unwritable_target_is_counted_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    // a file where the `stl` directory should be
    fs::write(dir.path().join("stl"), b"in the way").expect("blocker");
    let options = ExportOptions {
        out_dir: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };
    let paths = OutputPaths::new(dir.path(), "test_cube");
    let model = find_model("test_cube").expect("registered");
    let report = export_model(model, &ModelContext::default(), &paths, &options).expect("builds");
    assert_eq!(report.failures, 1);
    assert!(paths.step.exists());
}

#[test]
fn unknown_name_does_not_stop_the_others() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = ExportOptions {
        out_dir: dir.path().to_path_buf(),
        format: Format::Stl,
        ..ExportOptions::default()
    };
    let names = select_models(&["gripper".to_string(), "test_cube".to_string()]);
    let summary = export_models(&names, &ModelContext::default(), &options);
    assert_eq!(summary.models, 2);
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.files, 1);
    assert!(dir.path().join("stl/test_cube.stl").exists());
}
