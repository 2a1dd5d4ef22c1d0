//! Leaf property entry and its layout decorations.

use super::PropertyPath;
use serde::{Deserialize, Serialize};

/// Where a property is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
  #[default]
  Default,
  Show,
  Hide,
}

/// Layout decorations accumulated from a field's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorations {
  /// Header labels in declaration order.
  pub headers: Vec<String>,
  /// Number of spacing markers.
  pub spacing: u32,
  /// First non-default display-mode override, if any.
  pub display_mode: Option<DisplayMode>,
}

impl Decorations {
  pub fn is_empty(&self) -> bool {
    self.headers.is_empty() && self.spacing == 0 && self.display_mode.is_none()
  }

  /// Effective mode; `Default` when no override was declared.
  pub fn mode(&self) -> DisplayMode {
    self.display_mode.unwrap_or_default()
  }
}

/// A leaf property in the compiled model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
  pub path: PropertyPath,
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Decorations::is_empty")]
  pub decorations: Decorations,
}

impl PropertyDescriptor {
  pub fn new(path: PropertyPath, display_name: impl Into<String>, decorations: Decorations) -> Self {
    Self {
      path,
      display_name: display_name.into(),
      decorations,
    }
  }
}
