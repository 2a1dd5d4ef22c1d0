//! In-memory property tree built from type declarations and live JSON data.
//!
//! Live values follow the declared field layout: structured fields are JSON
//! objects, arrays and lists are JSON arrays, and polymorphic fields carry the
//! concrete type name under `"$type"`. Missing values fall back to the
//! declaration, so an empty object yields the declared shape with empty
//! collections and null references.

use crate::error::ModelError;
use crate::property_cursor::{PropertyCursor, PropertyInfo};
use crate::registry::{TypeDecl, TypeRegistry};
use crate::types::{PropertyKind, PropertyPath, TypeRef};
use serde_json::Value;
use tracing::instrument;

/// JSON key naming the concrete type of a polymorphic value.
pub const CONCRETE_TYPE_KEY: &str = "$type";

#[derive(Debug, Clone)]
struct Entry {
  info: PropertyInfo,
  /// Index one past the last property of this subtree.
  end: usize,
}

/// Flattened pre-order property tree of one object.
#[derive(Debug, Clone)]
pub struct SerializedObject {
  type_name: String,
  entries: Vec<Entry>,
}

/// Maps a declared type to the host kind tag.
pub fn kind_of(ty: &TypeRef, by_reference: bool) -> PropertyKind {
  if by_reference && !ty.is_collection() {
    return PropertyKind::ManagedReference;
  }
  match ty {
    TypeRef::Int => PropertyKind::Integer,
    TypeRef::Float => PropertyKind::Float,
    TypeRef::Bool => PropertyKind::Boolean,
    TypeRef::Char => PropertyKind::Character,
    TypeRef::String => PropertyKind::String,
    TypeRef::Enum(_) => PropertyKind::Enum,
    TypeRef::Value(_) => PropertyKind::CompoundValue,
    TypeRef::Object(_) => PropertyKind::ObjectReference,
    TypeRef::Named(_) => PropertyKind::Generic,
    TypeRef::Array(_) | TypeRef::List(_) => PropertyKind::Array,
  }
}

struct Builder<'r> {
  registry: &'r TypeRegistry,
  entries: Vec<Entry>,
  /// Structured types expanded inline since the last reference or element.
  /// Only live data bounds expansion below those, so a repeat here never ends.
  inline: Vec<String>,
}

impl Builder<'_> {
  fn push(&mut self, info: PropertyInfo) -> usize {
    let index = self.entries.len();
    self.entries.push(Entry { info, end: index + 1 });
    index
  }

  fn close(&mut self, index: usize) {
    self.entries[index].end = self.entries.len();
  }

  fn expand_fields(
    &mut self,
    decl: &TypeDecl,
    path: &PropertyPath,
    value: Option<&Value>,
  ) -> Result<(), ModelError> {
    let object = match value {
      None | Some(Value::Null) => None,
      Some(Value::Object(map)) => Some(map),
      Some(_) => {
        return Err(ModelError::InvalidLiveData {
          path: path.to_string(),
          expected: "object".to_string(),
        });
      }
    };
    decl.validate()?;
    for field in &decl.fields {
      let field_value = object.and_then(|m| m.get(&field.name));
      self.expand(
        field.label(),
        &field.ty,
        field.serialize_reference,
        path.child(field.name.clone()),
        field_value,
      )?;
    }
    Ok(())
  }

  fn expand(
    &mut self,
    display_name: String,
    ty: &TypeRef,
    by_reference: bool,
    path: PropertyPath,
    value: Option<&Value>,
  ) -> Result<(), ModelError> {
    let registry = self.registry;
    let kind = kind_of(ty, by_reference);
    let index = self.push(PropertyInfo {
      depth: path.depth(),
      path: path.clone(),
      display_name,
      declared_type: ty.clone(),
      kind,
    });

    match kind {
      PropertyKind::ManagedReference => {
        if let Some(concrete) = value.and_then(|v| v.get(CONCRETE_TYPE_KEY)) {
          let type_name = concrete.as_str().ok_or_else(|| ModelError::InvalidLiveData {
            path: path.to_string(),
            expected: "type name string".to_string(),
          })?;
          let decl = registry
            .get(type_name)
            .ok_or_else(|| ModelError::UnknownConcreteType {
              path: path.to_string(),
              type_name: type_name.to_string(),
            })?;
          let outer = std::mem::replace(&mut self.inline, vec![decl.name.clone()]);
          self.expand_fields(decl, &path, value)?;
          self.inline = outer;
        }
      }
      PropertyKind::Generic => {
        let name = ty.named().unwrap_or_default();
        let decl = registry
          .get(name)
          .ok_or_else(|| ModelError::UnknownType(name.to_string()))?;
        if self.inline.iter().any(|t| t == name) {
          return Err(ModelError::RecursiveType {
            path: path.to_string(),
            type_name: name.to_string(),
          });
        }
        self.inline.push(decl.name.clone());
        self.expand_fields(decl, &path, value)?;
        self.inline.pop();
      }
      PropertyKind::CompoundValue => {
        if let TypeRef::Value(bundle) = ty {
          for (name, component) in bundle.components() {
            let component_value = value.and_then(|v| v.get(name));
            self.expand(
              crate::registry::nicify_name(name),
              &component,
              false,
              path.child(name),
              component_value,
            )?;
          }
        }
      }
      PropertyKind::Array => {
        let items: &[Value] = match value {
          None | Some(Value::Null) => &[],
          Some(Value::Array(items)) => items,
          Some(_) => {
            return Err(ModelError::InvalidLiveData {
              path: path.to_string(),
              expected: "array".to_string(),
            });
          }
        };
        if let Some(elem) = ty.element() {
          let outer = std::mem::take(&mut self.inline);
          for (i, item) in items.iter().enumerate() {
            self.expand(
              format!("Element {}", i),
              elem,
              by_reference,
              path.element(i),
              Some(item),
            )?;
          }
          self.inline = outer;
        }
      }
      _ => {}
    }

    self.close(index);
    Ok(())
  }
}

impl SerializedObject {
  /// Builds the property tree of a `type_name` instance holding `data`.
  #[instrument(level = "trace", skip(registry, data))]
  pub fn new(registry: &TypeRegistry, type_name: &str, data: &Value) -> Result<Self, ModelError> {
    let decl = registry
      .get(type_name)
      .ok_or_else(|| ModelError::UnknownType(type_name.to_string()))?;
    let mut builder = Builder {
      registry,
      entries: Vec::new(),
      inline: vec![decl.name.clone()],
    };
    let root = builder.push(PropertyInfo {
      path: PropertyPath::root(),
      depth: 0,
      display_name: decl
        .display_name
        .clone()
        .unwrap_or_else(|| decl.name.clone()),
      declared_type: TypeRef::Named(decl.name.clone()),
      kind: PropertyKind::Generic,
    });
    builder.expand_fields(decl, &PropertyPath::root(), Some(data))?;
    builder.close(root);
    Ok(Self {
      type_name: type_name.to_string(),
      entries: builder.entries,
    })
  }

  /// Property tree of an instance with no live data (declared defaults only).
  pub fn with_defaults(registry: &TypeRegistry, type_name: &str) -> Result<Self, ModelError> {
    Self::new(registry, type_name, &Value::Null)
  }

  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  /// Cursor positioned at the object root.
  pub fn cursor(&self) -> ObjectCursor<'_> {
    ObjectCursor {
      object: self,
      index: 0,
    }
  }

  /// Every property, root included, in pre-order.
  pub fn properties(&self) -> impl Iterator<Item = &PropertyInfo> {
    self.entries.iter().map(|e| &e.info)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// [PropertyCursor] over a [SerializedObject].
#[derive(Debug, Clone)]
pub struct ObjectCursor<'a> {
  object: &'a SerializedObject,
  index: usize,
}

impl PropertyCursor for ObjectCursor<'_> {
  fn next_visible(&mut self, enter_children: bool) -> bool {
    let Some(entry) = self.object.entries.get(self.index) else {
      return false;
    };
    self.index = if enter_children && entry.end > self.index + 1 {
      self.index + 1
    } else {
      entry.end
    };
    self.index < self.object.entries.len()
  }

  fn property(&self) -> Option<&PropertyInfo> {
    self.object.entries.get(self.index).map(|e| &e.info)
  }

  fn end_property(&self) -> Self {
    let end = self
      .object
      .entries
      .get(self.index)
      .map(|e| e.end)
      .unwrap_or(self.object.entries.len());
    Self {
      object: self.object,
      index: end,
    }
  }

  fn equal_contents(&self, other: &Self) -> bool {
    std::ptr::eq(self.object, other.object) && self.index == other.index
  }
}
