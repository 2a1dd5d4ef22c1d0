//! Structured relative path of a property inside a node's field tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One step of a [PropertyPath]: a named field or a collection element index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
  Field(String),
  Index(usize),
}

impl PathSegment {
  /// True if `name` renders as a single `Field` segment that parses back unchanged.
  pub fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty()
      && name.trim() == name
      && !name.contains(['.', '[', ']'])
  }
}

/// Path relative to the node root, e.g. `settings.curves[2].weight`.
///
/// Group parentage compares whole segments, so `foo` is never treated as a
/// prefix of `foobar`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath {
  segments: Vec<PathSegment>,
}

impl PropertyPath {
  /// The node root (no segments).
  pub fn root() -> Self {
    Self::default()
  }

  /// Parses `a.b[2].c`. Returns None for empty segments or malformed indices.
  pub fn parse(s: &str) -> Option<Self> {
    let s = s.trim();
    if s.is_empty() {
      return Some(Self::root());
    }
    let mut segments = Vec::new();
    for part in s.split('.') {
      let (name, mut rest) = match part.find('[') {
        Some(i) => (&part[..i], &part[i..]),
        None => (part, ""),
      };
      if name.is_empty() {
        return None;
      }
      segments.push(PathSegment::Field(name.to_string()));
      while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        let index = inner[..close].parse().ok()?;
        segments.push(PathSegment::Index(index));
        rest = &inner[close + 1..];
      }
    }
    Some(Self { segments })
  }

  /// Returns this path extended by a named field.
  pub fn child(&self, name: impl Into<String>) -> Self {
    let mut segments = self.segments.clone();
    segments.push(PathSegment::Field(name.into()));
    Self { segments }
  }

  /// Returns this path extended by an element index.
  pub fn element(&self, index: usize) -> Self {
    let mut segments = self.segments.clone();
    segments.push(PathSegment::Index(index));
    Self { segments }
  }

  pub fn segments(&self) -> &[PathSegment] {
    &self.segments
  }

  /// Number of segments; the root has depth 0.
  pub fn depth(&self) -> usize {
    self.segments.len()
  }

  pub fn is_root(&self) -> bool {
    self.segments.is_empty()
  }

  /// True if `self` is a proper, segment-wise prefix of `other`.
  pub fn is_strict_prefix_of(&self, other: &PropertyPath) -> bool {
    self.segments.len() < other.segments.len() && other.segments.starts_with(&self.segments)
  }

  /// True if `other` equals `self` or lies underneath it.
  pub fn contains(&self, other: &PropertyPath) -> bool {
    other.segments.starts_with(&self.segments)
  }

  /// Name of the last `Field` segment, skipping trailing indices.
  pub fn last_field(&self) -> Option<&str> {
    self.segments.iter().rev().find_map(|s| match s {
      PathSegment::Field(name) => Some(name.as_str()),
      PathSegment::Index(_) => None,
    })
  }
}

impl fmt::Display for PropertyPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, segment) in self.segments.iter().enumerate() {
      match segment {
        PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
        PathSegment::Field(name) => write!(f, ".{}", name)?,
        PathSegment::Index(index) => write!(f, "[{}]", index)?,
      }
    }
    Ok(())
  }
}

impl Serialize for PropertyPath {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for PropertyPath {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    PropertyPath::parse(&s)
      .ok_or_else(|| serde::de::Error::custom(format!("invalid property path '{}'", s)))
  }
}
