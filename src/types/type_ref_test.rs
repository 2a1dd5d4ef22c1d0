//! Tests for `TypeRef` and `ValueBundle`.

use super::{TypeRef, ValueBundle};

#[test]
fn display_scalars_and_collections() {
  assert_eq!(TypeRef::Int.to_string(), "int");
  assert_eq!(TypeRef::Array(Box::new(TypeRef::Float)).to_string(), "float[]");
  assert_eq!(
    TypeRef::List(Box::new(TypeRef::Named("Port".to_string()))).to_string(),
    "List<Port>"
  );
  assert_eq!(TypeRef::Value(ValueBundle::Quaternion).to_string(), "Quaternion");
}

#[test]
fn element_of_collections_only() {
  let list = TypeRef::List(Box::new(TypeRef::Int));
  assert_eq!(list.element(), Some(&TypeRef::Int));
  assert!(list.is_collection());
  assert_eq!(TypeRef::String.element(), None);
  assert!(!TypeRef::Named("A".to_string()).is_collection());
}

#[test]
fn text_like() {
  assert!(TypeRef::Char.is_text_like());
  assert!(TypeRef::String.is_text_like());
  assert!(!TypeRef::Int.is_text_like());
}

#[test]
fn deserializes_snake_case_json() {
  let t: TypeRef = serde_json::from_str(r#"{"list":{"named":"Edge"}}"#).unwrap();
  assert_eq!(t, TypeRef::List(Box::new(TypeRef::Named("Edge".to_string()))));
  let v: TypeRef = serde_json::from_str(r#"{"value":"vector3"}"#).unwrap();
  assert_eq!(v, TypeRef::Value(ValueBundle::Vector3));
  let s: TypeRef = serde_json::from_str(r#""string""#).unwrap();
  assert_eq!(s, TypeRef::String);
}

#[test]
fn bundle_components() {
  assert_eq!(ValueBundle::Vector2.components().len(), 2);
  assert_eq!(ValueBundle::Quaternion.components().len(), 4);
  let bounds = ValueBundle::Bounds.components();
  assert_eq!(bounds[0].0, "center");
  assert_eq!(bounds[0].1, TypeRef::Value(ValueBundle::Vector3));
  assert!(ValueBundle::Hash128.components().is_empty());
}
