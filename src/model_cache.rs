//! Per-type cache of compiled node models.

use crate::attribute_bag::AttributeSource;
use crate::classifier::Classifier;
use crate::compiler::compile_type_model;
use crate::error::ModelError;
use crate::property_cursor::PropertyCursor;
use crate::registry::TypeRegistry;
use crate::serialized_object::SerializedObject;
use crate::types::{NodeDeclaration, TypeModel};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Compiled models keyed by node type name.
///
/// A type is compiled at most once; the model is then shared read-only for the
/// cache's lifetime. There is no eviction: the key space is the set of node
/// types in use.
pub struct ModelCache {
  classifier: Classifier,
  models: DashMap<String, Arc<TypeModel>>,
}

impl Default for ModelCache {
  fn default() -> Self {
    Self::new()
  }
}

impl ModelCache {
  pub fn new() -> Self {
    Self {
      classifier: Classifier::new(),
      models: DashMap::new(),
    }
  }

  /// Returns the model of `decl`, compiling it from `root` on first request.
  ///
  /// The entry stays locked while compiling, so concurrent callers for the same
  /// type wait for the one compilation instead of racing.
  #[instrument(level = "trace", skip_all, fields(node_type = %decl.type_name))]
  pub fn get_or_build<C, A>(&self, decl: &NodeDeclaration, attributes: &A, root: C) -> Arc<TypeModel>
  where
    C: PropertyCursor,
    A: AttributeSource + ?Sized,
  {
    if let Some(model) = self.models.get(&decl.type_name) {
      debug!(node_type = %decl.type_name, "model cache hit");
      return Arc::clone(model.value());
    }
    let model = self
      .models
      .entry(decl.type_name.clone())
      .or_insert_with(|| Arc::new(compile_type_model(decl, attributes, &self.classifier, root)));
    Arc::clone(model.value())
  }

  /// Model of a registered node type, building its live property tree from
  /// `data` only on a cache miss.
  pub fn model_for(
    &self,
    registry: &TypeRegistry,
    type_name: &str,
    data: &serde_json::Value,
  ) -> Result<Arc<TypeModel>, ModelError> {
    if let Some(model) = self.get(type_name) {
      debug!(node_type = type_name, "model cache hit");
      return Ok(model);
    }
    let decl = registry.node_declaration(type_name)?;
    let object = SerializedObject::new(registry, type_name, data)?;
    Ok(self.get_or_build(&decl, registry, object.cursor()))
  }

  pub fn get(&self, type_name: &str) -> Option<Arc<TypeModel>> {
    self.models.get(type_name).map(|m| Arc::clone(m.value()))
  }

  pub fn contains(&self, type_name: &str) -> bool {
    self.models.contains_key(type_name)
  }

  pub fn len(&self) -> usize {
    self.models.len()
  }

  pub fn is_empty(&self) -> bool {
    self.models.is_empty()
  }
}
