//! Consolidated in-memory fakes for the bridge's capability traits.
//!
//! Every host-coupled interface has one fake here so unit and integration
//! tests share the same setup instead of redefining it per file.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::fields::{FieldDef, FieldGroup, FieldGroupRegistry};
use crate::resolver::{ImagePredicate, ValueStore};
use crate::schema::registry::{AttachmentId, AttributeSpec, SchemaRegistry};

/// Field-definition registry backed by an in-memory list.
#[derive(Default)]
pub struct InMemoryFieldGroups {
    groups: Vec<(FieldGroup, Vec<FieldDef>)>,
}

impl InMemoryFieldGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, group: FieldGroup, fields: Vec<FieldDef>) {
        self.groups.push((group, fields));
    }
}

impl FieldGroupRegistry for InMemoryFieldGroups {
    fn list_groups(&self) -> Vec<FieldGroup> {
        self.groups.iter().map(|(group, _)| group.clone()).collect()
    }

    fn fields_of(&self, group: &FieldGroup) -> Vec<FieldDef> {
        self.groups
            .iter()
            .find(|(candidate, _)| candidate.key == group.key)
            .map(|(_, fields)| fields.clone())
            .unwrap_or_default()
    }
}

/// Schema registry keeping registrations in a map, last write wins.
#[derive(Default)]
pub struct InMemorySchemaRegistry {
    attributes: HashMap<(String, String), AttributeSpec>,
}

impl InMemorySchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, type_name: &str, attr_name: &str) -> Option<&AttributeSpec> {
        self.attributes
            .get(&(type_name.to_string(), attr_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl SchemaRegistry for InMemorySchemaRegistry {
    fn register_attribute(&mut self, type_name: &str, attr_name: &str, spec: AttributeSpec) {
        self.attributes
            .insert((type_name.to_string(), attr_name.to_string()), spec);
    }
}

/// Value store backed by a `(record id, field name)` map.
#[derive(Default)]
pub struct InMemoryValueStore {
    values: HashMap<(u64, String), Value>,
}

impl InMemoryValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, record_id: u64, field_name: &str, value: Value) {
        self.values.insert((record_id, field_name.to_string()), value);
    }
}

impl ValueStore for InMemoryValueStore {
    fn get(&self, record_id: u64, field_name: &str) -> BridgeResult<Option<Value>> {
        Ok(self
            .values
            .get(&(record_id, field_name.to_string()))
            .cloned())
    }
}

/// Value store whose every lookup fails, for degradation tests.
pub struct FailingValueStore;

impl ValueStore for FailingValueStore {
    fn get(&self, _record_id: u64, _field_name: &str) -> BridgeResult<Option<Value>> {
        Err(BridgeError::Store("lookup unavailable".to_string()))
    }
}

/// Image predicate answering true for a fixed id set.
pub struct FixedImagePredicate {
    images: HashSet<AttachmentId>,
}

impl FixedImagePredicate {
    pub fn new(images: impl IntoIterator<Item = AttachmentId>) -> Self {
        Self {
            images: images.into_iter().collect(),
        }
    }
}

impl ImagePredicate for FixedImagePredicate {
    fn is_image(&self, id: AttachmentId) -> bool {
        self.images.contains(&id)
    }
}
