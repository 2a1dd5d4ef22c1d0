//! Compile a node type's live property tree to a [TypeModel].
//!
//! One pre-order pass over the node's properties:
//! - every visited property is classified by its declared attributes;
//! - a skip decision hides all deeper properties until traversal climbs back
//!   to the skip depth;
//! - structured fields become groups and are entered, everything else is a
//!   leaf and is not entered;
//! - each entry is attached to the most recently opened group whose path is a
//!   strict prefix of its own, or to the top level.

use crate::attribute_bag::AttributeSource;
use crate::classifier::{Classifier, DepthSignal, PortSink};
use crate::property_cursor::PropertyCursor;
use crate::types::{
  GroupNode, ModelEntry, NodeDeclaration, PropertyDescriptor, PropertyPath, TypeModel,
};
use std::collections::HashMap;
use tracing::{info, instrument, trace};

enum Slot {
  Leaf(PropertyDescriptor),
  /// Index into the group arena.
  Group(usize),
}

struct PendingGroup {
  node: GroupNode,
  children: Vec<Slot>,
}

/// Collects entries into groups by path containment; groups live in an arena
/// until traversal ends.
#[derive(Default)]
struct LayoutBuilder {
  groups: Vec<PendingGroup>,
  top: Vec<Slot>,
}

impl LayoutBuilder {
  /// Most recently created group containing `path`.
  fn parent_of(&self, path: &PropertyPath) -> Option<usize> {
    self
      .groups
      .iter()
      .rposition(|g| g.node.path.is_strict_prefix_of(path))
  }

  fn attach(&mut self, path: &PropertyPath, slot: Slot) {
    match self.parent_of(path) {
      Some(i) => self.groups[i].children.push(slot),
      None => self.top.push(slot),
    }
  }

  fn add_property(&mut self, property: PropertyDescriptor) {
    let path = property.path.clone();
    self.attach(&path, Slot::Leaf(property));
  }

  fn add_group(&mut self, group: GroupNode) {
    let path = group.path.clone();
    let index = self.groups.len();
    self.attach(&path, Slot::Group(index));
    self.groups.push(PendingGroup {
      node: group,
      children: Vec::new(),
    });
  }

  /// Assembles the owned entry tree. Child groups always have a higher arena
  /// index than their parent, so groups are finished from last to first.
  fn finish(mut self) -> Vec<ModelEntry> {
    let mut done: HashMap<usize, GroupNode> = HashMap::new();
    while let Some(pending) = self.groups.pop() {
      let index = self.groups.len();
      let mut node = pending.node;
      node.children = resolve(pending.children, &mut done);
      done.insert(index, node);
    }
    resolve(self.top, &mut done)
  }
}

fn resolve(slots: Vec<Slot>, done: &mut HashMap<usize, GroupNode>) -> Vec<ModelEntry> {
  slots
    .into_iter()
    .filter_map(|slot| match slot {
      Slot::Leaf(p) => Some(ModelEntry::Property(p)),
      Slot::Group(i) => done.remove(&i).map(ModelEntry::Group),
    })
    .collect()
}

/// Compiles the model of `decl` from a cursor positioned at the node root.
///
/// Attributes are looked up on `decl.type_name`. Malformed port declarations
/// are logged and dropped; compilation itself cannot fail.
#[instrument(level = "trace", skip_all, fields(node_type = %decl.type_name))]
pub fn compile_type_model<C, A>(
  decl: &NodeDeclaration,
  attributes: &A,
  classifier: &Classifier,
  mut cursor: C,
) -> TypeModel
where
  C: PropertyCursor,
  A: AttributeSource + ?Sized,
{
  let node_type = decl.type_name.as_str();
  let end = cursor.end_property();
  let mut sink = PortSink::default();
  let mut layout = LayoutBuilder::default();
  let mut skip_below: Option<usize> = None;
  let mut classified = 0usize;

  let mut has_next = cursor.next_visible(true);
  while has_next {
    if cursor.equal_contents(&end) {
      break;
    }
    let Some(property) = cursor.property().cloned() else {
      break;
    };
    let mut enter_children = false;

    if matches!(skip_below, Some(depth) if property.depth > depth) {
      trace!(path = %property.path, "skipped below settled field");
    } else {
      skip_below = None;
      classified += 1;
      let outcome = classifier.classify(
        node_type,
        &property,
        attributes.attributes(node_type, &property.path),
        &mut sink,
      );
      match outcome.signal {
        DepthSignal::SkipToDepth(depth) => skip_below = Some(depth),
        DepthSignal::Continue if property.kind.auto_descends() => {
          enter_children = true;
          let label = outcome
            .group_label
            .unwrap_or_else(|| property.display_name.clone());
          let mut group = GroupNode::new(label, property.path.clone());
          group.decorations = outcome.decorations;
          layout.add_group(group);
        }
        DepthSignal::Continue => {
          layout.add_property(PropertyDescriptor::new(
            property.path.clone(),
            property.display_name.clone(),
            outcome.decorations,
          ));
        }
      }
    }

    has_next = cursor.next_visible(enter_children);
  }

  let model = TypeModel {
    node_type: decl.type_name.clone(),
    input: decl.input_port(),
    outputs: sink.outputs,
    list_ports: sink.list_ports,
    entries: layout.finish(),
  };
  info!(
    node_type,
    classified,
    outputs = model.outputs.len(),
    list_ports = model.list_ports.len(),
    entries = model.entries.len(),
    "compilation complete"
  );
  model
}
