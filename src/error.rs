//! Errors raised while loading declarations or reading live node data.
//!
//! Model compilation itself never fails: malformed attribute usage is logged
//! and the field is dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
  #[error("unknown type '{0}'")]
  UnknownType(String),

  #[error("type '{0}' does not declare a node input")]
  NotANodeType(String),

  #[error("invalid live data at '{path}': expected {expected}")]
  InvalidLiveData { path: String, expected: String },

  #[error("unknown concrete type '{type_name}' assigned at '{path}'")]
  UnknownConcreteType { path: String, type_name: String },

  #[error("type '{type_name}' contains itself at '{path}' without a reference or collection in between")]
  RecursiveType { path: String, type_name: String },

  #[error("field '{field}' of type '{type_name}' is not a valid path segment")]
  InvalidFieldName { type_name: String, field: String },

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
