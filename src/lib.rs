//! A host-agnostic field bridge.
//!
//! The bridge discovers externally-defined "gallery" fields on content
//! records and republishes them as queryable list-valued schema
//! attributes with a deterministic resolver:
//!
//! - [`schema::SchemaExtender`] runs once at schema-initialization time,
//!   walking the host's field groups and registering one derived
//!   attribute per gallery field and targeted content type.
//! - [`resolver::GalleryResolver`] runs per query, translating the stored
//!   field value into an ordered list of image attachment identifiers.
//!
//! All host services (field definitions, schema registry, value store,
//! image predicate) are injected as capability traits so the bridge can
//! be exercised in isolation; in-memory implementations live in
//! [`testing_utils`].

pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod resolver;
pub mod schema;
pub mod testing_utils;

pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use fields::{FieldDef, FieldGroup, FieldGroupRegistry, LocationRule};
pub use resolver::{GalleryResolver, IdResolver, ImagePredicate, ValueStore};
pub use schema::{
    AttachmentId, AttributeMetadata, AttributeSpec, AttributeType, ResolverBinding, SchemaExtender,
    SchemaRegistry,
};
