//! Compiled layout model of one node type.

use super::{GroupNode, ModelEntry, PortDescriptor, PropertyPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiled model of a node type: its ports and its property layout.
///
/// Built once per type by [crate::ModelCache] and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModel {
  pub node_type: String,
  /// Implicit input port synthesized from the node declaration.
  pub input: PortDescriptor,
  pub outputs: Vec<PortDescriptor>,
  pub list_ports: Vec<PortDescriptor>,
  /// Top-level layout entries in declaration order.
  pub entries: Vec<ModelEntry>,
}

impl TypeModel {
  /// Pre-order visit of every layout entry with its enclosing group.
  pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a ModelEntry, Option<&'a GroupNode>)) {
    for entry in &self.entries {
      f(entry, None);
      if let ModelEntry::Group(g) = entry {
        g.visit(f);
      }
    }
  }

  /// Paths of every layout entry (groups and leaves), pre-order.
  pub fn entry_paths(&self) -> Vec<&PropertyPath> {
    let mut paths = Vec::new();
    self.visit(&mut |entry, _| paths.push(entry.path()));
    paths
  }

  /// Paths of all field-backed ports (outputs, then list ports).
  pub fn port_paths(&self) -> Vec<&PropertyPath> {
    self
      .outputs
      .iter()
      .chain(self.list_ports.iter())
      .map(|p| &p.path)
      .collect()
  }

  /// Finds the group synthesized at `path`, at any nesting level.
  pub fn find_group(&self, path: &PropertyPath) -> Option<&GroupNode> {
    let mut found = None;
    self.visit(&mut |entry, _| {
      if let ModelEntry::Group(g) = entry {
        if found.is_none() && &g.path == path {
          found = Some(g);
        }
      }
    });
    found
  }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[ModelEntry], indent: usize) -> fmt::Result {
  for entry in entries {
    let pad = "  ".repeat(indent);
    match entry {
      ModelEntry::Property(p) => {
        for header in &p.decorations.headers {
          writeln!(f, "{}# {}", pad, header)?;
        }
        write!(f, "{}- {} ({})", pad, p.display_name, p.path)?;
        if p.decorations.spacing > 0 {
          write!(f, " space={}", p.decorations.spacing)?;
        }
        if let Some(mode) = p.decorations.display_mode {
          write!(f, " mode={:?}", mode)?;
        }
        writeln!(f)?;
      }
      ModelEntry::Group(g) => {
        for header in &g.decorations.headers {
          writeln!(f, "{}# {}", pad, header)?;
        }
        writeln!(f, "{}+ {} ({})", pad, g.label, g.path)?;
        write_entries(f, &g.children, indent + 1)?;
      }
    }
  }
  Ok(())
}

impl fmt::Display for TypeModel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.node_type)?;
    writeln!(
      f,
      "  input: {} ({})",
      self.input.payload_type, self.input.capacity
    )?;
    for port in &self.outputs {
      writeln!(
        f,
        "  output: {} <- {} : {} ({})",
        port.label(),
        port.path,
        port.payload_type,
        port.capacity
      )?;
    }
    for port in &self.list_ports {
      writeln!(
        f,
        "  list: {} <- {} : {} ({})",
        port.label(),
        port.path,
        port.payload_type,
        port.capacity
      )?;
    }
    write_entries(f, &self.entries, 1)
  }
}
