//! Read-only query interface over a live serialized property tree.

use crate::types::{PropertyKind, PropertyPath, TypeRef};

/// What the host reports about the property under a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
  pub path: PropertyPath,
  pub depth: usize,
  pub display_name: String,
  pub declared_type: TypeRef,
  pub kind: PropertyKind,
}

/// Pre-order cursor over the visible properties of one object.
pub trait PropertyCursor: Clone {
  /// Moves to the next visible property, entering the current property's
  /// children when `enter_children` is set. Returns false past the last property.
  fn next_visible(&mut self, enter_children: bool) -> bool;

  /// Property under the cursor; None once the cursor has run off the end.
  fn property(&self) -> Option<&PropertyInfo>;

  /// Cursor at the first property following the current property's subtree.
  fn end_property(&self) -> Self;

  /// True if both cursors point at the same property.
  fn equal_contents(&self, other: &Self) -> bool;
}
