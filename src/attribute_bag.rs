//! Resolves the attributes declared on the field at a relative path.

use crate::registry::{FieldDecl, TypeRegistry};
use crate::types::{Attribute, PathSegment, PropertyPath, TypeRef};

/// Attribute lookup by declaring type and relative path.
///
/// Implementations are pure: repeated calls with the same arguments return
/// the same attributes, and unresolvable paths yield an empty slice.
pub trait AttributeSource {
  fn attributes(&self, type_name: &str, path: &PropertyPath) -> &[Attribute];
}

impl TypeRegistry {
  /// Walks `path` from `type_name` to the declaring field.
  ///
  /// Index segments keep the collection's own field, so every element resolves
  /// to the collection's declaration.
  pub fn resolve_field(&self, type_name: &str, path: &PropertyPath) -> Option<&FieldDecl> {
    let root = self.get(type_name)?;
    let mut field: Option<&FieldDecl> = None;
    let mut current: Option<&TypeRef> = None;
    for segment in path.segments() {
      match segment {
        PathSegment::Field(name) => {
          let owner = match current {
            None => root,
            Some(ty) => self.get(ty.named()?)?,
          };
          let next = owner.field(name)?;
          current = Some(&next.ty);
          field = Some(next);
        }
        PathSegment::Index(_) => {
          current = Some(current?.element()?);
        }
      }
    }
    field
  }
}

impl AttributeSource for TypeRegistry {
  fn attributes(&self, type_name: &str, path: &PropertyPath) -> &[Attribute] {
    self
      .resolve_field(type_name, path)
      .map(|f| f.attributes.as_slice())
      .unwrap_or(&[])
  }
}
