//! Declared node and field types: the reflection data the compiler reads.
//!
//! A [TypeRegistry] is usually loaded from JSON (see [crate::registry_io]):
//!
//! ```json
//! { "types": [
//!   { "name": "Mix", "input": { "type": "float" },
//!     "fields": [ { "name": "amount", "type": "float", "attributes": [{ "header": "Mix" }] } ] }
//! ] }
//! ```

use crate::error::ModelError;
use crate::types::{Attribute, NodeDeclaration, PathSegment, PortCapacity, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input port declared by a node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDecl {
  #[serde(rename = "type")]
  pub ty: TypeRef,
  #[serde(default)]
  pub capacity: PortCapacity,
}

/// A declared field of a structured type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(rename = "type")]
  pub ty: TypeRef,
  /// Field stores arbitrary subtypes of its declared type.
  #[serde(default)]
  pub serialize_reference: bool,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub attributes: Vec<Attribute>,
}

impl FieldDecl {
  pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
    Self {
      name: name.into(),
      display_name: None,
      ty,
      serialize_reference: false,
      attributes: Vec::new(),
    }
  }

  pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
    self.attributes = attributes;
    self
  }

  pub fn by_reference(mut self) -> Self {
    self.serialize_reference = true;
    self
  }

  /// Explicit display name, else the nicified field name.
  pub fn label(&self) -> String {
    self
      .display_name
      .clone()
      .unwrap_or_else(|| nicify_name(&self.name))
  }
}

/// A declared structured type; node types also declare an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub input: Option<InputDecl>,
  #[serde(default)]
  pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
  pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
    Self {
      name: name.into(),
      display_name: None,
      input: None,
      fields,
    }
  }

  /// Marks this type as a node type with the given input.
  pub fn with_input(mut self, ty: TypeRef, capacity: PortCapacity) -> Self {
    self.input = Some(InputDecl { ty, capacity });
    self
  }

  pub fn field(&self, name: &str) -> Option<&FieldDecl> {
    self.fields.iter().find(|f| f.name == name)
  }

  /// Fails on field names that cannot round-trip through a [crate::types::PropertyPath].
  pub fn validate(&self) -> Result<(), ModelError> {
    match self
      .fields
      .iter()
      .find(|f| !PathSegment::is_valid_field_name(&f.name))
    {
      Some(field) => Err(ModelError::InvalidFieldName {
        type_name: self.name.clone(),
        field: field.name.clone(),
      }),
      None => Ok(()),
    }
  }
}

/// On-disk shape of a registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistryFile {
  types: Vec<TypeDecl>,
}

/// Registered types, looked up by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RegistryFile", into = "RegistryFile")]
pub struct TypeRegistry {
  types: Vec<TypeDecl>,
  index: HashMap<String, usize>,
}

impl TryFrom<RegistryFile> for TypeRegistry {
  type Error = ModelError;

  fn try_from(file: RegistryFile) -> Result<Self, Self::Error> {
    for decl in &file.types {
      decl.validate()?;
    }
    Ok(TypeRegistry::from_types(file.types))
  }
}

impl From<TypeRegistry> for RegistryFile {
  fn from(registry: TypeRegistry) -> Self {
    RegistryFile {
      types: registry.types,
    }
  }
}

impl TypeRegistry {
  /// Builds a registry; a later declaration with the same name replaces an earlier one.
  pub fn from_types(types: Vec<TypeDecl>) -> Self {
    let mut registry = TypeRegistry::default();
    for decl in types {
      registry.insert(decl);
    }
    registry
  }

  pub fn insert(&mut self, decl: TypeDecl) {
    match self.index.get(&decl.name) {
      Some(&i) => self.types[i] = decl,
      None => {
        self.index.insert(decl.name.clone(), self.types.len());
        self.types.push(decl);
      }
    }
  }

  pub fn get(&self, name: &str) -> Option<&TypeDecl> {
    self.index.get(name).map(|&i| &self.types[i])
  }

  /// Declared types in registration order.
  pub fn types(&self) -> &[TypeDecl] {
    &self.types
  }

  /// Names of the types that declare a node input.
  pub fn node_types(&self) -> impl Iterator<Item = &str> {
    self
      .types
      .iter()
      .filter(|t| t.input.is_some())
      .map(|t| t.name.as_str())
  }

  /// Declaration info for a node type.
  pub fn node_declaration(&self, name: &str) -> Result<NodeDeclaration, ModelError> {
    let decl = self
      .get(name)
      .ok_or_else(|| ModelError::UnknownType(name.to_string()))?;
    let input = decl
      .input
      .as_ref()
      .ok_or_else(|| ModelError::NotANodeType(name.to_string()))?;
    Ok(NodeDeclaration {
      type_name: decl.name.clone(),
      display_name: decl.display_name.clone(),
      input_type: input.ty.clone(),
      input_capacity: input.capacity,
    })
  }
}

/// Turns a field identifier into a display label: `maxSpeed`, `max_speed` and
/// `m_MaxSpeed` all become `Max Speed`.
pub fn nicify_name(name: &str) -> String {
  let trimmed = name.strip_prefix("m_").unwrap_or(name).trim_start_matches('_');
  let mut out = String::new();
  let mut prev: Option<char> = None;
  for c in trimmed.chars() {
    if c == '_' {
      if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
      }
      prev = Some(c);
      continue;
    }
    if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase()) && !out.ends_with(' ') {
      out.push(' ');
    }
    if out.is_empty() || out.ends_with(' ') {
      out.extend(c.to_uppercase());
    } else {
      out.push(c);
    }
    prev = Some(c);
  }
  out.trim_end().to_string()
}
