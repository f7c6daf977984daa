use serde::{Deserialize, Serialize};

/// Identifier of an externally-stored media record. Always positive by
/// construction; the bridge validates and passes these through, it never
/// creates or mutates the attachments themselves.
pub type AttachmentId = u64;

/// Declared value shape of a registered attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    /// An ordered list whose elements are opaque references of the named
    /// host type.
    ListOf(String),
}

/// Descriptive metadata attached to a registered attribute for host UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub label: String,
    pub group: String,
}

/// The resolver binding captured at registration time.
///
/// The raw field name is fixed here once and reused verbatim for every
/// resolution against any record of the attribute's content type; it is
/// never re-derived per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverBinding {
    pub field: String,
}

/// Everything the bridge registers for one derived attribute: declared
/// element type, UI metadata, and the resolver binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub attribute_type: AttributeType,
    pub metadata: AttributeMetadata,
    pub binding: ResolverBinding,
}

/// The host schema system the bridge publishes into.
///
/// Registration happens once, during schema initialization. When the same
/// (type, attribute) pair is registered twice, the host decides; the
/// in-memory implementation in [`crate::testing_utils`] keeps the last
/// registration.
pub trait SchemaRegistry {
    fn register_attribute(&mut self, type_name: &str, attr_name: &str, spec: AttributeSpec);
}
