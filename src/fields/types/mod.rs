pub mod group;
pub mod location;

pub use group::{FieldDef, FieldGroup};
pub use location::LocationRule;
