//! Query-time resolution of a bound gallery field into an ordered list of
//! attachment identifiers.

use log::{debug, warn};
use serde_json::Value;

use super::record::{positive_id, record_id};
use super::store::{IdResolver, ImagePredicate, ValueStore};
use crate::error::{BridgeError, BridgeResult};
use crate::schema::registry::AttachmentId;

/// Resolves the stored value of a gallery field into attachment ids.
///
/// Resolution runs during page-render/query time, so an authoring mistake
/// must degrade to an empty gallery rather than break the page: malformed
/// values, unresolvable records, and store failures all yield `[]`.
/// Relative order of the stored ids is preserved end to end because the
/// output feeds ordered gallery and slideshow elements.
///
/// The resolver holds no mutable state; one instance can serve any number
/// of concurrent in-flight queries.
pub struct GalleryResolver<'a> {
    store: &'a dyn ValueStore,
    images: &'a dyn ImagePredicate,
    id_fallback: Option<&'a dyn IdResolver>,
}

impl<'a> GalleryResolver<'a> {
    pub fn new(store: &'a dyn ValueStore, images: &'a dyn ImagePredicate) -> Self {
        Self {
            store,
            images,
            id_fallback: None,
        }
    }

    /// Installs a host fallback for record-identifier extraction.
    pub fn with_id_resolver(mut self, id_fallback: &'a dyn IdResolver) -> Self {
        self.id_fallback = Some(id_fallback);
        self
    }

    /// Resolves `field_name` on `record` to the ordered list of image
    /// attachment ids. Always returns, possibly empty; never panics.
    pub fn resolve(&self, record: &Value, field_name: &str) -> Vec<AttachmentId> {
        if field_name.is_empty() {
            return Vec::new();
        }

        let record_id = match record_id(record, self.id_fallback) {
            Some(id) => id,
            None => return Vec::new(),
        };

        let raw = match self.store.get(record_id, field_name) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(
                    "Value lookup failed for field '{}' on record {}: {}",
                    field_name, record_id, e
                );
                return Vec::new();
            }
        };

        let candidates = match candidate_ids(raw) {
            Ok(ids) => ids,
            Err(e) => {
                debug!(
                    "Discarding stored value for field '{}' on record {}: {}",
                    field_name, record_id, e
                );
                return Vec::new();
            }
        };

        candidates
            .into_iter()
            .filter(|id| self.images.is_image(*id))
            .collect()
    }
}

/// Normalizes a raw stored value into the candidate id sequence.
///
/// A textual value is deserialized defensively since some stores hand back
/// the serialized form. Elements that do not convert to a positive integer
/// are dropped silently; original order is kept.
///
/// # Errors
///
/// Returns `BridgeError::MalformedRecord` when the value is neither a list
/// nor a serialized list.
fn candidate_ids(raw: Value) -> BridgeResult<Vec<AttachmentId>> {
    let value = match raw {
        Value::String(text) => {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_json::from_str(&text).map_err(|e| {
                BridgeError::MalformedRecord(format!("stored value is not a list: {}", e))
            })?
        }
        other => other,
    };

    match value {
        Value::Array(items) => Ok(items.iter().filter_map(positive_id).collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(BridgeError::MalformedRecord(format!(
            "stored value is not list-shaped: {}",
            other
        ))),
    }
}
