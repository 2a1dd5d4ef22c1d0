//! Declaration-level information about a node type.

use super::{PortCapacity, PortDescriptor, PortDirection, PropertyPath, TypeRef};
use serde::{Deserialize, Serialize};

/// What a node type declares about itself, independent of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDeclaration {
  pub type_name: String,
  pub display_name: Option<String>,
  pub input_type: TypeRef,
  pub input_capacity: PortCapacity,
}

impl NodeDeclaration {
  /// The node's single implicit input port, anchored at the node root.
  pub fn input_port(&self) -> PortDescriptor {
    PortDescriptor {
      path: PropertyPath::root(),
      payload_type: self.input_type.clone(),
      direction: PortDirection::Input,
      capacity: self.input_capacity,
      display_name: self.display_name.clone(),
    }
  }
}
