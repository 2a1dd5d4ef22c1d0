//! A connection point on a node.

use super::{PropertyPath, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortDirection {
  Input,
  Output,
}

/// How many links a port accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortCapacity {
  #[default]
  Single,
  Multiple,
}

impl fmt::Display for PortCapacity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PortCapacity::Single => write!(f, "single"),
      PortCapacity::Multiple => write!(f, "multiple"),
    }
  }
}

/// A connection point on a node, backed by the field at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
  pub path: PropertyPath,
  pub payload_type: TypeRef,
  pub direction: PortDirection,
  pub capacity: PortCapacity,
  pub display_name: Option<String>,
}

impl PortDescriptor {
  /// Output port for a field.
  pub fn output(
    path: PropertyPath,
    payload_type: TypeRef,
    capacity: PortCapacity,
    display_name: Option<String>,
  ) -> Self {
    Self {
      path,
      payload_type,
      direction: PortDirection::Output,
      capacity,
      display_name,
    }
  }

  /// Label shown on the port: the explicit display name, else the last field name.
  pub fn label(&self) -> &str {
    self
      .display_name
      .as_deref()
      .or_else(|| self.path.last_field())
      .unwrap_or("")
  }
}
