pub mod extender;
pub mod naming;
pub mod registry;

pub use extender::SchemaExtender;
pub use registry::{
    AttachmentId, AttributeMetadata, AttributeSpec, AttributeType, ResolverBinding, SchemaRegistry,
};
