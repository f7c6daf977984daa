//! Schema-initialization pass that republishes gallery fields as
//! list-valued schema attributes.

use log::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::constants::ATTACHMENT_TYPE_NAME;
use crate::error::{BridgeError, BridgeResult};
use crate::fields::{FieldDef, FieldGroup, FieldGroupRegistry};
use crate::schema::naming::{schema_type_name, to_snake_case};
use crate::schema::registry::{
    AttributeMetadata, AttributeSpec, AttributeType, ResolverBinding, SchemaRegistry,
};

/// Walks the host's field groups once, at schema-initialization time, and
/// registers a derived list-of-attachments attribute for every gallery
/// field on every content type its group targets.
///
/// Registration is purely additive and tolerant: an absent field-group
/// registry, an empty group, an unrecognized location rule, or a field
/// with no usable name all contribute nothing rather than failing the
/// pass.
pub struct SchemaExtender {
    config: BridgeConfig,
}

impl Default for SchemaExtender {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl SchemaExtender {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Verifies that the host capabilities the extender needs are present.
    ///
    /// `extend` itself stays silent when they are not; this check exists
    /// so a host can surface an operator-facing notice naming what is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::MissingDependency` when the field-definition
    /// registry is absent.
    pub fn check_dependencies(groups: Option<&dyn FieldGroupRegistry>) -> BridgeResult<()> {
        if groups.is_none() {
            return Err(BridgeError::MissingDependency(
                "field-definition registry".to_string(),
            ));
        }
        Ok(())
    }

    /// Runs the registration pass. Returns the number of attributes
    /// registered; zero is a normal outcome, not a failure.
    pub fn extend(
        &self,
        groups: Option<&dyn FieldGroupRegistry>,
        schema: &mut dyn SchemaRegistry,
    ) -> usize {
        let groups = match groups {
            Some(groups) => groups,
            None => {
                warn!("Field-definition registry unavailable; registering no gallery attributes");
                return 0;
            }
        };

        let mut registered = 0;
        let field_groups = groups.list_groups();
        info!(
            "Extending schema from {} field group(s)",
            field_groups.len()
        );

        for group in &field_groups {
            let fields = groups.fields_of(group);
            if fields.is_empty() {
                continue;
            }

            for field in &fields {
                if field.field_type != self.config.gallery_field_type {
                    continue;
                }
                registered += self.register_field(group, field, schema);
            }
        }

        info!("Registered {} gallery attribute(s)", registered);
        registered
    }

    /// Registers one attribute per content type the field's group targets.
    fn register_field(
        &self,
        group: &FieldGroup,
        field: &FieldDef,
        schema: &mut dyn SchemaRegistry,
    ) -> usize {
        let attr_name = match self.attribute_name(field) {
            Ok(name) => name,
            Err(e) => {
                debug!("Skipping field in group '{}': {}", group.key, e);
                return 0;
            }
        };

        let mut registered = 0;
        for content_type in group.content_types() {
            let type_name = match schema_type_name(&self.config, &content_type) {
                Some(name) => name,
                None => {
                    debug!(
                        "Skipping unresolvable content type '{}' in group '{}'",
                        content_type, group.key
                    );
                    continue;
                }
            };

            schema.register_attribute(&type_name, &attr_name, self.attribute_spec(field));
            info!(
                "Registered gallery attribute '{}' on type '{}' for field '{}'",
                attr_name, type_name, field.name
            );
            registered += 1;
        }
        registered
    }

    /// Derives the published attribute name from the field's raw name.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::MalformedRecord` when the field carries no
    /// usable name.
    fn attribute_name(&self, field: &FieldDef) -> BridgeResult<String> {
        let base = to_snake_case(&field.name);
        if base.is_empty() {
            return Err(BridgeError::MalformedRecord(
                "field has no usable name".to_string(),
            ));
        }
        Ok(format!("{}{}", base, self.config.attribute_suffix))
    }

    fn attribute_spec(&self, field: &FieldDef) -> AttributeSpec {
        AttributeSpec {
            attribute_type: AttributeType::ListOf(ATTACHMENT_TYPE_NAME.to_string()),
            metadata: AttributeMetadata {
                label: format!("{}{}", field.display_label(), self.config.label_decorator),
                group: self.config.attribute_group.clone(),
            },
            binding: ResolverBinding {
                field: field.name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::LocationRule;
    use crate::testing_utils::{InMemoryFieldGroups, InMemorySchemaRegistry};

    fn gallery_group(key: &str, content_type: &str, field_name: &str) -> (FieldGroup, FieldDef) {
        let mut group = FieldGroup::new(key);
        group.add_location_group(vec![LocationRule::new("post_type", "==", content_type)]);
        (group, FieldDef::new(field_name, "gallery"))
    }

    #[test]
    fn test_registers_gallery_field() {
        let mut registry = InMemoryFieldGroups::new();
        let (group, field) = gallery_group("g1", "post", "photos");
        registry.add_group(group, vec![field]);

        let mut schema = InMemorySchemaRegistry::new();
        let count = SchemaExtender::default().extend(Some(&registry), &mut schema);

        assert_eq!(count, 1);
        let spec = schema.get("Post", "photos_gallery").unwrap();
        assert_eq!(spec.binding.field, "photos");
        assert_eq!(
            spec.attribute_type,
            AttributeType::ListOf("Attachment".to_string())
        );
        assert_eq!(spec.metadata.label, "photos (Gallery)");
        assert_eq!(spec.metadata.group, "Gallery Fields");
    }

    #[test]
    fn test_missing_registry_is_a_noop() {
        let mut schema = InMemorySchemaRegistry::new();
        let count = SchemaExtender::default().extend(None, &mut schema);
        assert_eq!(count, 0);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_non_gallery_fields_are_skipped() {
        let mut registry = InMemoryFieldGroups::new();
        let mut group = FieldGroup::new("g1");
        group.add_location_group(vec![LocationRule::new("post_type", "==", "post")]);
        registry.add_group(group, vec![FieldDef::new("title", "text")]);

        let mut schema = InMemorySchemaRegistry::new();
        let count = SchemaExtender::default().extend(Some(&registry), &mut schema);
        assert_eq!(count, 0);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_group_without_location_registers_nothing() {
        let mut registry = InMemoryFieldGroups::new();
        registry.add_group(
            FieldGroup::new("g1"),
            vec![FieldDef::new("photos", "gallery")],
        );

        let mut schema = InMemorySchemaRegistry::new();
        assert_eq!(
            SchemaExtender::default().extend(Some(&registry), &mut schema),
            0
        );
    }

    #[test]
    fn test_camel_case_field_name_is_snake_cased() {
        let mut registry = InMemoryFieldGroups::new();
        let (group, field) = gallery_group("g1", "decoration", "heroImages");
        registry.add_group(group, vec![field]);

        let mut schema = InMemorySchemaRegistry::new();
        SchemaExtender::default().extend(Some(&registry), &mut schema);
        let spec = schema.get("Decoration", "hero_images_gallery").unwrap();
        // The binding keeps the raw name; only the published attribute is
        // snake_cased.
        assert_eq!(spec.binding.field, "heroImages");
    }

    #[test]
    fn test_check_dependencies() {
        assert!(matches!(
            SchemaExtender::check_dependencies(None),
            Err(BridgeError::MissingDependency(_))
        ));
        let registry = InMemoryFieldGroups::new();
        assert!(SchemaExtender::check_dependencies(Some(&registry)).is_ok());
    }
}
