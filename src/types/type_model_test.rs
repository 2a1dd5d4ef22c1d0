//! Tests for `TypeModel` and `NodeDeclaration`.

use super::{
  Decorations, GroupNode, ModelEntry, NodeDeclaration, PortCapacity, PortDescriptor,
  PortDirection, PropertyDescriptor, PropertyPath, TypeModel, TypeRef,
};

fn p(s: &str) -> PropertyPath {
  PropertyPath::parse(s).unwrap()
}

fn sample() -> TypeModel {
  let decl = NodeDeclaration {
    type_name: "Blend".to_string(),
    display_name: Some("Blend".to_string()),
    input_type: TypeRef::Float,
    input_capacity: PortCapacity::Multiple,
  };
  let mut group = GroupNode::new("Curve", p("curve"));
  group.children.push(ModelEntry::Property(PropertyDescriptor::new(
    p("curve.weight"),
    "Weight",
    Decorations::default(),
  )));
  TypeModel {
    node_type: "Blend".to_string(),
    input: decl.input_port(),
    outputs: vec![PortDescriptor::output(
      p("result"),
      TypeRef::Float,
      PortCapacity::Single,
      None,
    )],
    list_ports: vec![PortDescriptor::output(
      p("extras"),
      TypeRef::Int,
      PortCapacity::Multiple,
      Some("Extras".to_string()),
    )],
    entries: vec![
      ModelEntry::Property(PropertyDescriptor::new(
        p("amount"),
        "Amount",
        Decorations {
          headers: vec!["Mix".to_string()],
          spacing: 1,
          display_mode: None,
        },
      )),
      ModelEntry::Group(group),
    ],
  }
}

#[test]
fn input_port_is_root_input() {
  let model = sample();
  assert!(model.input.path.is_root());
  assert_eq!(model.input.direction, PortDirection::Input);
  assert_eq!(model.input.capacity, PortCapacity::Multiple);
}

#[test]
fn entry_paths_pre_order() {
  let model = sample();
  let paths: Vec<String> = model.entry_paths().iter().map(|p| p.to_string()).collect();
  assert_eq!(paths, vec!["amount", "curve", "curve.weight"]);
}

#[test]
fn port_paths_lists_outputs_then_lists() {
  let model = sample();
  let paths: Vec<String> = model.port_paths().iter().map(|p| p.to_string()).collect();
  assert_eq!(paths, vec!["result", "extras"]);
}

#[test]
fn find_group_by_path() {
  let model = sample();
  assert_eq!(model.find_group(&p("curve")).unwrap().label, "Curve");
  assert!(model.find_group(&p("amount")).is_none());
}

#[test]
fn display_outline() {
  let text = sample().to_string();
  assert!(text.starts_with("Blend\n"));
  assert!(text.contains("input: float (multiple)"));
  assert!(text.contains("output: result <- result : float (single)"));
  assert!(text.contains("list: Extras <- extras : int (multiple)"));
  assert!(text.contains("  # Mix\n  - Amount (amount) space=1\n"));
  assert!(text.contains("  + Curve (curve)\n    - Weight (curve.weight)\n"));
}

#[test]
fn json_roundtrip_preserves_structure() {
  let model = sample();
  let json = serde_json::to_string(&model).unwrap();
  let back: TypeModel = serde_json::from_str(&json).unwrap();
  assert_eq!(back, model);
}
