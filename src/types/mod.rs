//! Data types of the compiled node model.
//!
//! Paths, declared types and attributes describe the input side; ports,
//! property descriptors, groups and [TypeModel] describe the compiled output.

mod attribute;
mod group_node;
mod node_declaration;
mod port_descriptor;
mod property_descriptor;
mod property_kind;
#[cfg(test)]
mod property_kind_test;
mod property_path;
#[cfg(test)]
mod property_path_test;
mod type_model;
#[cfg(test)]
mod type_model_test;
mod type_ref;
#[cfg(test)]
mod type_ref_test;

pub use attribute::{Attribute, AttributeKind, PortSpec};
pub use group_node::{GroupNode, ModelEntry};
pub use node_declaration::NodeDeclaration;
pub use port_descriptor::{PortCapacity, PortDescriptor, PortDirection};
pub use property_descriptor::{Decorations, DisplayMode, PropertyDescriptor};
pub use property_kind::PropertyKind;
pub use property_path::{PathSegment, PropertyPath};
pub use type_model::TypeModel;
pub use type_ref::{TypeRef, ValueBundle};
