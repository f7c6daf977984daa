//! Configuration for the field bridge.
//!
//! The bridge ships with defaults matching its stock deployment; hosts
//! that use a different field-type tag or attribute naming scheme can
//! deserialize a `BridgeConfig` from their own configuration files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{
    DEFAULT_ATTRIBUTE_GROUP, DEFAULT_ATTRIBUTE_SUFFIX, DEFAULT_GALLERY_FIELD_TYPE,
    DEFAULT_LABEL_DECORATOR,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Field-type tag the extender acts on; every other field type is
    /// ignored.
    #[serde(default = "default_gallery_field_type")]
    pub gallery_field_type: String,

    /// Suffix appended to the snake_cased field name to form the published
    /// attribute name.
    #[serde(default = "default_attribute_suffix")]
    pub attribute_suffix: String,

    /// Decorator appended to the attribute label shown in host UIs.
    #[serde(default = "default_label_decorator")]
    pub label_decorator: String,

    /// Grouping tag attached to every registered attribute for UI
    /// categorization.
    #[serde(default = "default_attribute_group")]
    pub attribute_group: String,

    /// Host-supplied content-type name overrides, consulted before the
    /// built-in mapping table and the PascalCase fallback.
    #[serde(default)]
    pub type_name_overrides: HashMap<String, String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            gallery_field_type: default_gallery_field_type(),
            attribute_suffix: default_attribute_suffix(),
            label_decorator: default_label_decorator(),
            attribute_group: default_attribute_group(),
            type_name_overrides: HashMap::new(),
        }
    }
}

fn default_gallery_field_type() -> String {
    DEFAULT_GALLERY_FIELD_TYPE.to_string()
}

fn default_attribute_suffix() -> String {
    DEFAULT_ATTRIBUTE_SUFFIX.to_string()
}

fn default_label_decorator() -> String {
    DEFAULT_LABEL_DECORATOR.to_string()
}

fn default_attribute_group() -> String {
    DEFAULT_ATTRIBUTE_GROUP.to_string()
}
