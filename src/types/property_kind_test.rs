//! Tests for `PropertyKind`.

use super::PropertyKind;

#[test]
fn only_managed_reference_is_polymorphic() {
  assert!(PropertyKind::ManagedReference.is_polymorphic());
  assert!(!PropertyKind::ObjectReference.is_polymorphic());
  assert!(!PropertyKind::Generic.is_polymorphic());
}

#[test]
fn only_generic_auto_descends() {
  assert!(PropertyKind::Generic.auto_descends());
  for kind in [
    PropertyKind::ManagedReference,
    PropertyKind::CompoundValue,
    PropertyKind::Array,
    PropertyKind::String,
    PropertyKind::Integer,
  ] {
    assert!(!kind.auto_descends(), "{:?} must not descend", kind);
  }
}
