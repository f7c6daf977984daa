//! # Field Bridge Error Handling
//!
//! Unified error handling for the bridge, providing structured error
//! information for the few places where an external lookup or a malformed
//! input is worth reporting.
//!
//! The bridge itself never lets these errors escape its public entry
//! points: registration and resolution degrade to "contribute nothing" at
//! the smallest possible unit. Errors exist so that internal helpers can
//! use `?` and so that hosts running a dependency check can surface a
//! meaningful notice.

use thiserror::Error;

/// Unified error type for bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A required host capability is absent at registration time.
    ///
    /// The bridge disables itself silently when this happens; the variant
    /// exists so [`crate::schema::SchemaExtender::check_dependencies`] can
    /// name the missing capability for an operator-facing notice.
    #[error("Missing host capability: {0}")]
    MissingDependency(String),

    /// A field group, location rule, or stored value deviates from the
    /// expected shape. The offending unit is skipped, never propagated.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The external value store failed to answer a lookup.
    #[error("Value store error: {0}")]
    Store(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
