//! Attribute classification: maps each recognized attribute kind to a handler
//! that updates the per-field context and decides whether traversal skips the
//! field's subtree.

use crate::property_cursor::PropertyInfo;
use crate::types::{
  Attribute, AttributeKind, Decorations, DisplayMode, PortCapacity, PortDescriptor, PortSpec,
  TypeRef,
};
use std::collections::HashMap;
use tracing::{instrument, warn};

/// Traversal decision returned by an attribute handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthSignal {
  /// Keep classifying; the generic descend rules decide what happens next.
  Continue,
  /// The field is settled: skip every following property deeper than the depth.
  SkipToDepth(usize),
}

/// Ports discovered while classifying the fields of one node type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSink {
  pub outputs: Vec<PortDescriptor>,
  pub list_ports: Vec<PortDescriptor>,
}

/// State accumulated while scanning the attributes of a single field.
#[derive(Debug)]
pub struct FieldContext<'a> {
  pub node_type: &'a str,
  pub property: &'a PropertyInfo,
  pub headers: Vec<String>,
  pub spacing: u32,
  pub display_mode: Option<DisplayMode>,
  pub group_label: Option<String>,
}

impl<'a> FieldContext<'a> {
  pub fn new(node_type: &'a str, property: &'a PropertyInfo) -> Self {
    Self {
      node_type,
      property,
      headers: Vec::new(),
      spacing: 0,
      display_mode: None,
      group_label: None,
    }
  }

  fn skip_here(&self) -> DepthSignal {
    DepthSignal::SkipToDepth(self.property.depth)
  }
}

/// Result of classifying one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
  pub signal: DepthSignal,
  pub decorations: Decorations,
  pub group_label: Option<String>,
}

/// Attribute handler: updates the field context and sink, returns the traversal decision.
pub type Handler = fn(&mut FieldContext<'_>, &Attribute, &mut PortSink) -> DepthSignal;

fn hidden(ctx: &mut FieldContext<'_>, _attr: &Attribute, _sink: &mut PortSink) -> DepthSignal {
  ctx.skip_here()
}

fn port_spec(attr: &Attribute) -> PortSpec {
  match attr {
    Attribute::Port(spec) | Attribute::Output(spec) => spec.clone(),
    _ => PortSpec::default(),
  }
}

fn output_port(ctx: &mut FieldContext<'_>, attr: &Attribute, sink: &mut PortSink) -> DepthSignal {
  let property = ctx.property;
  if !property.kind.is_polymorphic() {
    warn!(
      node_type = ctx.node_type,
      path = %property.path,
      "port attribute requires a serialize-by-reference field; field is not a port"
    );
    return ctx.skip_here();
  }
  let spec = port_spec(attr);
  sink.outputs.push(PortDescriptor::output(
    property.path.clone(),
    property.declared_type.clone(),
    spec.capacity,
    spec.name,
  ));
  ctx.skip_here()
}

/// Element type usable as a list port payload, or None for non-collections and text.
fn list_port_element(ty: &TypeRef) -> Option<&TypeRef> {
  ty.element().filter(|elem| !elem.is_text_like())
}

fn port_list(ctx: &mut FieldContext<'_>, _attr: &Attribute, sink: &mut PortSink) -> DepthSignal {
  let property = ctx.property;
  let Some(element) = list_port_element(&property.declared_type) else {
    warn!(
      node_type = ctx.node_type,
      path = %property.path,
      declared_type = %property.declared_type,
      "port list attribute requires an array or list of non-text elements; field is not a port"
    );
    return ctx.skip_here();
  };
  sink.list_ports.push(PortDescriptor::output(
    property.path.clone(),
    element.clone(),
    PortCapacity::Multiple,
    Some(property.display_name.clone()),
  ));
  ctx.skip_here()
}

fn display_mode(ctx: &mut FieldContext<'_>, attr: &Attribute, _sink: &mut PortSink) -> DepthSignal {
  let Attribute::DisplayMode(mode) = attr else {
    return DepthSignal::Continue;
  };
  if ctx.display_mode.is_some() || *mode == DisplayMode::Default {
    return DepthSignal::Continue;
  }
  ctx.display_mode = Some(*mode);
  if *mode == DisplayMode::Hide {
    return ctx.skip_here();
  }
  DepthSignal::Continue
}

fn header(ctx: &mut FieldContext<'_>, attr: &Attribute, _sink: &mut PortSink) -> DepthSignal {
  if let Attribute::Header(label) = attr {
    ctx.headers.push(label.clone());
  }
  DepthSignal::Continue
}

fn space(ctx: &mut FieldContext<'_>, _attr: &Attribute, _sink: &mut PortSink) -> DepthSignal {
  ctx.spacing += 1;
  DepthSignal::Continue
}

fn group_label(ctx: &mut FieldContext<'_>, attr: &Attribute, _sink: &mut PortSink) -> DepthSignal {
  if let Attribute::GroupLabel(label) = attr {
    if ctx.group_label.is_none() {
      ctx.group_label = Some(label.clone());
    }
  }
  DepthSignal::Continue
}

/// Handler registered for an attribute kind; None for kinds with no behavior.
fn handler_for(kind: AttributeKind) -> Option<Handler> {
  match kind {
    AttributeKind::Hidden => Some(hidden),
    AttributeKind::Port | AttributeKind::Output => Some(output_port),
    AttributeKind::PortList => Some(port_list),
    AttributeKind::DisplayMode => Some(display_mode),
    AttributeKind::Header => Some(header),
    AttributeKind::Space => Some(space),
    AttributeKind::GroupLabel => Some(group_label),
    AttributeKind::Other => None,
  }
}

/// Dispatch table from attribute kind to handler, built once.
#[derive(Debug, Clone)]
pub struct Classifier {
  handlers: HashMap<AttributeKind, Handler>,
}

impl Default for Classifier {
  fn default() -> Self {
    Self::new()
  }
}

impl Classifier {
  pub fn new() -> Self {
    let handlers = AttributeKind::ALL
      .iter()
      .filter_map(|&kind| handler_for(kind).map(|h| (kind, h)))
      .collect();
    Self { handlers }
  }

  pub fn handles(&self, kind: AttributeKind) -> bool {
    self.handlers.contains_key(&kind)
  }

  /// Runs the handlers of `attributes` in declaration order, stopping at the
  /// first one that settles the field with a skip.
  #[instrument(level = "trace", skip(self, property, attributes, sink), fields(path = %property.path))]
  pub fn classify(
    &self,
    node_type: &str,
    property: &PropertyInfo,
    attributes: &[Attribute],
    sink: &mut PortSink,
  ) -> FieldOutcome {
    let mut ctx = FieldContext::new(node_type, property);
    let mut signal = DepthSignal::Continue;
    for attr in attributes {
      let Some(handler) = self.handlers.get(&attr.kind()) else {
        continue;
      };
      signal = handler(&mut ctx, attr, sink);
      if let DepthSignal::SkipToDepth(_) = signal {
        break;
      }
    }
    FieldOutcome {
      signal,
      decorations: Decorations {
        headers: ctx.headers,
        spacing: ctx.spacing,
        display_mode: ctx.display_mode,
      },
      group_label: ctx.group_label,
    }
  }
}
