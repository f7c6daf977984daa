use serde_json::Value;

use crate::error::BridgeResult;
use crate::schema::registry::AttachmentId;

/// Read access to the host's per-record field-value store.
pub trait ValueStore {
    /// Fetches the raw stored value for `(record_id, field_name)`.
    ///
    /// `Ok(None)` means no value is stored, which resolves to an empty
    /// gallery. The value may come back as a native list or as a textual
    /// serialized form; the resolver normalizes both.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::Store` when the underlying lookup fails; the
    /// resolver logs and treats this as an absent value.
    fn get(&self, record_id: u64, field_name: &str) -> BridgeResult<Option<Value>>;
}

/// Answers whether an attachment identifier refers to an image.
pub trait ImagePredicate {
    fn is_image(&self, id: AttachmentId) -> bool;
}

/// Host fallback for extracting a record identifier when the generic
/// shapes (`ID` key, bare number) do not match.
pub trait IdResolver {
    fn resolve_id(&self, record: &Value) -> Option<u64>;
}
