//! Declared type of a serialized field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-size compound values that have children but no user-editable structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueBundle {
  Vector2,
  Vector3,
  Vector4,
  Quaternion,
  Color,
  Rect,
  Bounds,
  Hash128,
}

impl ValueBundle {
  /// Component fields exposed by the host property tree, with their types.
  pub fn components(self) -> Vec<(&'static str, TypeRef)> {
    let float = |names: &[&'static str]| -> Vec<(&'static str, TypeRef)> {
      names.iter().map(|n| (*n, TypeRef::Float)).collect()
    };
    match self {
      ValueBundle::Vector2 => float(&["x", "y"]),
      ValueBundle::Vector3 => float(&["x", "y", "z"]),
      ValueBundle::Vector4 | ValueBundle::Quaternion => float(&["x", "y", "z", "w"]),
      ValueBundle::Color => float(&["r", "g", "b", "a"]),
      ValueBundle::Rect => float(&["x", "y", "width", "height"]),
      ValueBundle::Bounds => vec![
        ("center", TypeRef::Value(ValueBundle::Vector3)),
        ("extents", TypeRef::Value(ValueBundle::Vector3)),
      ],
      ValueBundle::Hash128 => Vec::new(),
    }
  }
}

impl fmt::Display for ValueBundle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValueBundle::Vector2 => write!(f, "Vector2"),
      ValueBundle::Vector3 => write!(f, "Vector3"),
      ValueBundle::Vector4 => write!(f, "Vector4"),
      ValueBundle::Quaternion => write!(f, "Quaternion"),
      ValueBundle::Color => write!(f, "Color"),
      ValueBundle::Rect => write!(f, "Rect"),
      ValueBundle::Bounds => write!(f, "Bounds"),
      ValueBundle::Hash128 => write!(f, "Hash128"),
    }
  }
}

/// Declared type of a field, as written in the type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
  Int,
  Float,
  Bool,
  Char,
  String,
  Enum(String),
  Value(ValueBundle),
  /// Reference to an asset object; drawn as a single object field.
  Object(String),
  /// A structured type registered in the type registry.
  Named(String),
  Array(Box<TypeRef>),
  List(Box<TypeRef>),
}

impl TypeRef {
  /// Element type of an array or list.
  pub fn element(&self) -> Option<&TypeRef> {
    match self {
      TypeRef::Array(elem) | TypeRef::List(elem) => Some(elem),
      _ => None,
    }
  }

  pub fn is_collection(&self) -> bool {
    self.element().is_some()
  }

  /// Character and string types, which the host stores as sequences.
  pub fn is_text_like(&self) -> bool {
    matches!(self, TypeRef::Char | TypeRef::String)
  }

  /// Registered type name for `Named` types.
  pub fn named(&self) -> Option<&str> {
    match self {
      TypeRef::Named(name) => Some(name),
      _ => None,
    }
  }
}

impl fmt::Display for TypeRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TypeRef::Int => write!(f, "int"),
      TypeRef::Float => write!(f, "float"),
      TypeRef::Bool => write!(f, "bool"),
      TypeRef::Char => write!(f, "char"),
      TypeRef::String => write!(f, "string"),
      TypeRef::Enum(name) | TypeRef::Object(name) | TypeRef::Named(name) => write!(f, "{}", name),
      TypeRef::Value(bundle) => write!(f, "{}", bundle),
      TypeRef::Array(elem) => write!(f, "{}[]", elem),
      TypeRef::List(elem) => write!(f, "List<{}>", elem),
    }
  }
}
