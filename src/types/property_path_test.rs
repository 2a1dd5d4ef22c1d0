//! Tests for `PropertyPath`.

use super::{PathSegment, PropertyPath};

fn p(s: &str) -> PropertyPath {
  PropertyPath::parse(s).unwrap()
}

#[test]
fn parse_dotted_and_indexed() {
  let path = p("settings.curves[2].weight");
  assert_eq!(
    path.segments(),
    &[
      PathSegment::Field("settings".to_string()),
      PathSegment::Field("curves".to_string()),
      PathSegment::Index(2),
      PathSegment::Field("weight".to_string()),
    ]
  );
  assert_eq!(path.depth(), 4);
}

#[test]
fn parse_nested_indices() {
  let path = p("grid[1][3]");
  assert_eq!(path.segments().len(), 3);
  assert_eq!(path.segments()[2], PathSegment::Index(3));
}

#[test]
fn parse_empty_is_root() {
  assert!(p("").is_root());
  assert_eq!(p("").depth(), 0);
}

#[test]
fn parse_rejects_malformed() {
  assert!(PropertyPath::parse("a..b").is_none());
  assert!(PropertyPath::parse("a[x]").is_none());
  assert!(PropertyPath::parse("a[1").is_none());
  assert!(PropertyPath::parse("[1]").is_none());
}

#[test]
fn display_roundtrips_text() {
  for s in ["a", "a.b", "a[0]", "a.b[12].c", "grid[1][3]"] {
    assert_eq!(p(s).to_string(), s);
  }
}

#[test]
fn child_and_element_build_paths() {
  let path = PropertyPath::root().child("list").element(0).child("x");
  assert_eq!(path.to_string(), "list[0].x");
}

#[test]
fn strict_prefix_is_segment_wise() {
  assert!(p("foo").is_strict_prefix_of(&p("foo.bar")));
  assert!(!p("foo").is_strict_prefix_of(&p("foobar")));
  assert!(!p("foo").is_strict_prefix_of(&p("foobar.baz")));
  assert!(!p("foo.bar").is_strict_prefix_of(&p("foo.bar")));
  assert!(PropertyPath::root().is_strict_prefix_of(&p("a")));
}

#[test]
fn contains_includes_self() {
  assert!(p("a.b").contains(&p("a.b")));
  assert!(p("a").contains(&p("a[1].c")));
  assert!(!p("a.b").contains(&p("a")));
}

#[test]
fn last_field_skips_indices() {
  assert_eq!(p("items[3]").last_field(), Some("items"));
  assert_eq!(p("a.b").last_field(), Some("b"));
  assert_eq!(PropertyPath::root().last_field(), None);
}

#[test]
fn serde_uses_string_form() {
  let json = serde_json::to_string(&p("a.b[1]")).unwrap();
  assert_eq!(json, "\"a.b[1]\"");
  let back: PropertyPath = serde_json::from_str(&json).unwrap();
  assert_eq!(back, p("a.b[1]"));
  assert!(serde_json::from_str::<PropertyPath>("\"a..b\"").is_err());
}

#[test]
fn valid_field_names_round_trip_as_one_segment() {
  for name in ["speed", "m_Speed", "max speed"] {
    assert!(PathSegment::is_valid_field_name(name));
    let path = PropertyPath::root().child(name);
    assert_eq!(p(&path.to_string()), path);
  }
  for name in ["", "a.b", "grid[0]", "x]", " padded"] {
    assert!(!PathSegment::is_valid_field_name(name), "{:?}", name);
  }
}
