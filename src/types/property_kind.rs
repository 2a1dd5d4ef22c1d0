//! Kind tag reported by the host property tree for each property.

use serde::{Deserialize, Serialize};

/// Kind tag of a property in the host property tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
  Integer,
  Float,
  Boolean,
  Character,
  String,
  Enum,
  ObjectReference,
  /// Polymorphic field whose concrete type is chosen at assignment time.
  ManagedReference,
  Array,
  /// Fixed-size compound value (vectors, quaternion, rect, bounds, hash).
  CompoundValue,
  /// Structured user type.
  Generic,
}

impl PropertyKind {
  pub fn is_polymorphic(self) -> bool {
    self == PropertyKind::ManagedReference
  }

  /// Only structured user types are entered automatically; references,
  /// compound values and collections stay opaque.
  pub fn auto_descends(self) -> bool {
    self == PropertyKind::Generic
  }
}
