/// Common constants used across the field bridge.
///
/// These defaults are used by [`crate::config::BridgeConfig`] when explicit
/// values are not provided, and by the location-rule parser to recognize
/// content-type targeting rules.
pub const LOCATION_PARAM_POST_TYPE: &str = "post_type";
pub const LOCATION_OPERATOR_EQUALS: &str = "==";

pub const DEFAULT_GALLERY_FIELD_TYPE: &str = "gallery";
pub const DEFAULT_ATTRIBUTE_SUFFIX: &str = "_gallery";
pub const DEFAULT_LABEL_DECORATOR: &str = " (Gallery)";
pub const DEFAULT_ATTRIBUTE_GROUP: &str = "Gallery Fields";

/// Element type name declared for every registered list attribute.
pub const ATTACHMENT_TYPE_NAME: &str = "Attachment";
