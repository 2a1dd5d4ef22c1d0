//! # nodemodel
//!
//! Compiles the declared fields of a node type into a cached layout model for
//! a visual graph editor: which fields are ports, which are grouped, in what
//! order, and with which decorations.
//!
//! ## Architecture
//!
//! - [attribute_bag]: attributes declared on the field at a relative path.
//! - [classifier]: dispatch table from attribute kind to handler.
//! - [compiler]: pre-order traversal of the live property tree and grouping.
//! - [model_cache]: compiles each node type at most once.
//!
//! [registry] and [serialized_object] provide the declaration data and the
//! live property tree the compiler reads.

pub mod attribute_bag;
pub mod classifier;
pub mod compiler;
pub mod error;
pub mod model_cache;
pub mod property_cursor;
pub mod registry;
pub mod registry_io;
pub mod serialized_object;
pub mod types;

pub use attribute_bag::AttributeSource;
pub use classifier::{Classifier, DepthSignal};
pub use compiler::compile_type_model;
pub use error::ModelError;
pub use model_cache::ModelCache;
pub use property_cursor::{PropertyCursor, PropertyInfo};
pub use registry::{FieldDecl, TypeDecl, TypeRegistry};
pub use serialized_object::SerializedObject;
pub use types::{
  Attribute, GroupNode, ModelEntry, NodeDeclaration, PortDescriptor, PropertyDescriptor,
  PropertyPath, TypeModel, TypeRef,
};
