//! Metadata markers declared on fields.

use super::{DisplayMode, PortCapacity};
use serde::{Deserialize, Serialize};

/// Arguments of a port-declaring attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
  #[serde(default)]
  pub capacity: PortCapacity,
  #[serde(default)]
  pub name: Option<String>,
}

/// A metadata marker declared on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
  /// Excludes the field and its subtree from the model.
  Hidden,
  Port(PortSpec),
  Output(PortSpec),
  PortList,
  DisplayMode(DisplayMode),
  Header(String),
  Space,
  /// Label for the group synthesized from a structured field.
  GroupLabel(String),
  /// Attribute with no registered behavior (tooltips, ranges, ...).
  Other(String),
}

/// Discriminant of [Attribute], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
  Hidden,
  Port,
  Output,
  PortList,
  DisplayMode,
  Header,
  Space,
  GroupLabel,
  Other,
}

impl AttributeKind {
  pub const ALL: [AttributeKind; 9] = [
    AttributeKind::Hidden,
    AttributeKind::Port,
    AttributeKind::Output,
    AttributeKind::PortList,
    AttributeKind::DisplayMode,
    AttributeKind::Header,
    AttributeKind::Space,
    AttributeKind::GroupLabel,
    AttributeKind::Other,
  ];
}

impl Attribute {
  pub fn kind(&self) -> AttributeKind {
    match self {
      Attribute::Hidden => AttributeKind::Hidden,
      Attribute::Port(_) => AttributeKind::Port,
      Attribute::Output(_) => AttributeKind::Output,
      Attribute::PortList => AttributeKind::PortList,
      Attribute::DisplayMode(_) => AttributeKind::DisplayMode,
      Attribute::Header(_) => AttributeKind::Header,
      Attribute::Space => AttributeKind::Space,
      Attribute::GroupLabel(_) => AttributeKind::GroupLabel,
      Attribute::Other(_) => AttributeKind::Other,
    }
  }
}
