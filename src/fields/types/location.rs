use serde::{Deserialize, Serialize};

use crate::constants::{LOCATION_OPERATOR_EQUALS, LOCATION_PARAM_POST_TYPE};

/// One condition in a field group's targeting expression.
///
/// Rules are grouped as a disjunction of conjunctions: the outer list is
/// OR, each inner list is AND. The bridge only recognizes rules of the
/// shape `post_type == <value>`; every other shape is ignored rather than
/// rejected, since field groups routinely carry rules aimed at other host
/// subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRule {
    pub param: String,
    pub operator: String,
    pub value: String,
}

impl LocationRule {
    pub fn new(
        param: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Returns the content-type name this rule targets, if it is a
    /// recognized `post_type ==` rule.
    pub fn content_type(&self) -> Option<&str> {
        if self.param == LOCATION_PARAM_POST_TYPE && self.operator == LOCATION_OPERATOR_EQUALS {
            Some(&self.value)
        } else {
            None
        }
    }
}
