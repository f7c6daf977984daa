use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::location::LocationRule;

/// A single externally-defined field.
///
/// The bridge reads these, it never creates or mutates them. Only `name`,
/// `label`, and `field_type` matter here; whatever else the host attaches
/// to a field stays with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            field_type: field_type.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Display label for the field: the explicit label when set and
    /// non-empty, otherwise the raw name.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.name,
        }
    }
}

/// A named bundle of field definitions plus the location rules selecting
/// which content types it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldGroup {
    pub key: String,
    #[serde(default)]
    pub title: String,
    /// Disjunction of conjunctions: outer Vec is OR, inner Vec is AND.
    #[serde(default)]
    pub location: Vec<Vec<LocationRule>>,
}

impl FieldGroup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: String::new(),
            location: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_location_group(&mut self, rules: Vec<LocationRule>) {
        self.location.push(rules);
    }

    /// Flattens the location rules into the set of targeted content-type
    /// names.
    ///
    /// Every recognized `post_type ==` rule contributes its value;
    /// duplicates across OR groups are dropped, preserving first-seen
    /// order. A group with no location rules targets nothing.
    pub fn content_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut types = Vec::new();
        for or_group in &self.location {
            for rule in or_group {
                if let Some(content_type) = rule.content_type() {
                    if seen.insert(content_type.to_string()) {
                        types.push(content_type.to_string());
                    }
                }
            }
        }
        types
    }
}
