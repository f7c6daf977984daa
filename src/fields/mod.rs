pub mod registry;
pub mod types;

pub use registry::FieldGroupRegistry;
pub use types::{FieldDef, FieldGroup, LocationRule};
