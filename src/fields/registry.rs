use super::types::{FieldDef, FieldGroup};

/// Read-only access to the host's field-definition registry.
///
/// The registry is owned by the host; the bridge only enumerates it during
/// schema initialization. Implementations back onto whatever the host
/// field system exposes, or onto an in-memory fake in tests.
pub trait FieldGroupRegistry {
    /// Returns every registered field group.
    fn list_groups(&self) -> Vec<FieldGroup>;

    /// Returns the fields belonging to a group. An empty result means the
    /// group contributes nothing, it is not an error.
    fn fields_of(&self, group: &FieldGroup) -> Vec<FieldDef>;
}
