//! Nested visual grouping of properties.

use super::{Decorations, PropertyDescriptor, PropertyPath};
use serde::{Deserialize, Serialize};

/// An entry of a node's property layout: a leaf or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelEntry {
  Property(PropertyDescriptor),
  Group(GroupNode),
}

impl ModelEntry {
  pub fn path(&self) -> &PropertyPath {
    match self {
      ModelEntry::Property(p) => &p.path,
      ModelEntry::Group(g) => &g.path,
    }
  }

  pub fn as_group(&self) -> Option<&GroupNode> {
    match self {
      ModelEntry::Group(g) => Some(g),
      ModelEntry::Property(_) => None,
    }
  }

  pub fn as_property(&self) -> Option<&PropertyDescriptor> {
    match self {
      ModelEntry::Property(p) => Some(p),
      ModelEntry::Group(_) => None,
    }
  }
}

/// A group starting at `path`; every child path lies strictly below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
  pub label: String,
  pub path: PropertyPath,
  #[serde(default, skip_serializing_if = "Decorations::is_empty")]
  pub decorations: Decorations,
  pub children: Vec<ModelEntry>,
}

impl GroupNode {
  pub fn new(label: impl Into<String>, path: PropertyPath) -> Self {
    Self {
      label: label.into(),
      path,
      decorations: Decorations::default(),
      children: Vec::new(),
    }
  }

  /// Pre-order visit of this group and everything below it.
  pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a ModelEntry, Option<&'a GroupNode>)) {
    for child in &self.children {
      f(child, Some(self));
      if let ModelEntry::Group(g) = child {
        g.visit(f);
      }
    }
  }
}
