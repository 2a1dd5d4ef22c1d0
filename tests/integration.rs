//! Integration tests that compile the JSON fixtures in tests/integration/ through
//! the library API and the compile_model CLI.

use nodemodel::registry_io::{load_live_data, load_model, load_registry};
use nodemodel::types::{PortCapacity, PortDirection};
use nodemodel::{ModelCache, ModelError, PropertyPath, TypeModel, TypeRef};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

fn integration_dir() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("integration")
}

fn fixture(name: &str) -> PathBuf {
  integration_dir().join(name)
}

fn path(s: &str) -> PropertyPath {
  PropertyPath::parse(s).expect("valid path")
}

const MIX_OUTLINE: &str = "\
Mix
  input: float (single)
  output: Result <- out : Signal (multiple)
  list: Taps <- taps : Signal (multiple)
  # Mix
  - Amount (amount) space=1
  + Advanced (settings)
    - Gain (settings.gain)
    + Curve (settings.curve)
      - Points (settings.curve.points)
  - Offset (offset)
";

/// Runs the compile_model binary. Returns (stdout, stderr, success).
fn run_compile_model(args: &[&str], env: &[(&str, &str)]) -> (String, String, bool) {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_compile_model"));
  cmd
    .args(args)
    .env_remove("NODEMODEL_REGISTRY")
    .env_remove("NODEMODEL_FORMAT");
  for (k, v) in env {
    cmd.env(k, v);
  }
  let out = cmd.output().expect("run compile_model");
  (
    String::from_utf8_lossy(&out.stdout).into_owned(),
    String::from_utf8_lossy(&out.stderr).into_owned(),
    out.status.success(),
  )
}

fn compile_mix(data: &serde_json::Value) -> Arc<TypeModel> {
  let registry = load_registry(&fixture("types.json")).expect("registry");
  ModelCache::new()
    .model_for(&registry, "Mix", data)
    .expect("compile Mix")
}

// ---- library API ----

#[test]
fn mix_defaults_compile_to_expected_outline() {
  let model = compile_mix(&serde_json::Value::Null);
  assert_eq!(model.to_string(), MIX_OUTLINE);
}

#[test]
fn mix_ports_are_classified() {
  let model = compile_mix(&serde_json::Value::Null);
  assert_eq!(model.input.direction, PortDirection::Input);
  assert!(model.input.path.is_root());
  assert_eq!(model.input.display_name.as_deref(), Some("Mix Node"));

  assert_eq!(model.outputs.len(), 1);
  let out = &model.outputs[0];
  assert_eq!(out.path, path("out"));
  assert_eq!(out.capacity, PortCapacity::Multiple);
  assert_eq!(out.label(), "Result");

  assert_eq!(model.list_ports.len(), 1);
  assert_eq!(
    model.list_ports[0].payload_type,
    TypeRef::Named("Signal".to_string())
  );
}

#[test]
fn ports_and_hidden_fields_are_not_layout_entries() {
  let model = compile_mix(&serde_json::Value::Null);
  let entries: Vec<String> = model.entry_paths().iter().map(|p| p.to_string()).collect();
  for excluded in ["out", "taps", "secret", "settings.curve.debug", "offset.x"] {
    assert!(!entries.contains(&excluded.to_string()), "{} in layout", excluded);
  }
  for port in model.port_paths() {
    assert!(!model.entry_paths().contains(&port));
  }
}

#[test]
fn live_data_does_not_change_the_layout() {
  let data = load_live_data(&fixture("mix.json")).expect("live data");
  let live = compile_mix(&data);
  let defaults = compile_mix(&serde_json::Value::Null);
  assert_eq!(*live, *defaults);
}

#[test]
fn malformed_ports_are_dropped() {
  let registry = load_registry(&fixture("types.json")).expect("registry");
  let model = ModelCache::new()
    .model_for(&registry, "Labels", &serde_json::Value::Null)
    .expect("compile Labels");
  assert!(model.outputs.is_empty());
  assert!(model.list_ports.is_empty());
  assert!(model.entries.is_empty());
  assert_eq!(model.input.capacity, PortCapacity::Multiple);
}

#[test]
fn non_node_types_are_rejected() {
  let registry = load_registry(&fixture("types.json")).expect("registry");
  let cache = ModelCache::new();
  assert!(matches!(
    cache.model_for(&registry, "Settings", &serde_json::Value::Null),
    Err(ModelError::NotANodeType(_))
  ));
  let node_types: Vec<&str> = registry.node_types().collect();
  assert_eq!(node_types, vec!["Mix", "Labels"]);
}

// ---- CLI ----

#[test]
fn cli_prints_outline() {
  let registry = fixture("types.json");
  let (stdout, stderr, success) = run_compile_model(&[registry.to_str().expect("path"), "Mix"], &[]);
  assert!(success, "stderr={}", stderr);
  assert_eq!(stdout, MIX_OUTLINE);
}

#[test]
fn cli_json_output_round_trips_through_file() {
  let dir = tempfile::tempdir().expect("tempdir");
  let saved = dir.path().join("out").join("Mix.model.json");
  let registry = fixture("types.json");
  let data = fixture("mix.json");
  let (stdout, stderr, success) = run_compile_model(
    &[
      "--data",
      data.to_str().expect("path"),
      "--format",
      "json",
      "--output",
      saved.to_str().expect("path"),
      registry.to_str().expect("path"),
      "Mix",
    ],
    &[],
  );
  assert!(success, "stderr={}", stderr);
  let printed: TypeModel = serde_json::from_str(&stdout).expect("stdout is a model");
  let loaded = load_model(&saved).expect("saved model");
  assert_eq!(printed, loaded);
  assert_eq!(loaded.to_string(), MIX_OUTLINE);
}

#[test]
fn cli_env_overrides_flags() {
  let registry = fixture("types.json");
  let (stdout, stderr, success) = run_compile_model(
    &["does-not-exist.json", "Mix"],
    &[
      ("NODEMODEL_REGISTRY", registry.to_str().expect("path")),
      ("NODEMODEL_FORMAT", "json"),
    ],
  );
  assert!(success, "stderr={}", stderr);
  let model: TypeModel = serde_json::from_str(&stdout).expect("stdout is a model");
  assert_eq!(model.node_type, "Mix");
}

#[test]
fn cli_fails_on_unknown_type() {
  let registry = fixture("types.json");
  let (_, stderr, success) = run_compile_model(&[registry.to_str().expect("path"), "Nope"], &[]);
  assert!(!success);
  assert!(stderr.contains("Nope"), "stderr={}", stderr);
}

#[test]
fn cli_fails_on_missing_registry() {
  let (_, stderr, success) = run_compile_model(&["missing/types.json", "Mix"], &[]);
  assert!(!success);
  assert!(stderr.contains("Error reading"), "stderr={}", stderr);
}

#[test]
fn cli_fails_on_self_containing_type() {
  let registry = fixture("recursive.json");
  let (stdout, stderr, success) = run_compile_model(&[registry.to_str().expect("path"), "Chain"], &[]);
  assert!(!success);
  assert!(stdout.is_empty());
  assert!(stderr.contains("contains itself"), "stderr={}", stderr);
  assert!(stderr.contains("next.back"), "stderr={}", stderr);
}

#[test]
fn self_containing_type_is_an_error_not_a_crash() {
  let registry = load_registry(&fixture("recursive.json")).expect("registry");
  let cache = ModelCache::new();
  assert!(matches!(
    cache.model_for(&registry, "Chain", &serde_json::Value::Null),
    Err(ModelError::RecursiveType { ref type_name, .. }) if type_name == "Chain"
  ));
  assert!(cache.is_empty());
}
