//! Registry and live-data loading, compiled model saving (JSON).

use crate::error::ModelError;
use crate::registry::TypeRegistry;
use crate::types::TypeModel;
use std::path::Path;
use tracing::instrument;

/// Default filename for a type registry.
pub const REGISTRY_FILENAME: &str = "types.json";

/// Loads a type registry from `path`.
#[instrument(level = "trace", skip(path))]
pub fn load_registry(path: &Path) -> Result<TypeRegistry, ModelError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Loads a node's live data (any JSON value) from `path`.
#[instrument(level = "trace", skip(path))]
pub fn load_live_data(path: &Path) -> Result<serde_json::Value, ModelError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Saves a compiled model to `path` as pretty JSON, creating the parent directory.
#[instrument(level = "trace", skip(path, model))]
pub fn save_model(path: &Path, model: &TypeModel) -> Result<(), ModelError> {
  let json = serde_json::to_string_pretty(model)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}

/// Loads a model saved by [save_model].
#[instrument(level = "trace", skip(path))]
pub fn load_model(path: &Path) -> Result<TypeModel, ModelError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}
