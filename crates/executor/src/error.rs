//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant carries the reason as a typed field
//! - **Serializable**: Can be converted to/from JSON for the CLI runner

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `NotFound` | Unknown namespace, plan, address space, address or connection |
/// | `AlreadyExists` | Duplicate (Name, Namespace) on create |
/// | `InvalidArgument` | Bad type name, missing name prefix, unknown patch type |
/// | `Unsupported` | Merge or strategic merge patch requested |
/// | `ImmutableField` | Patch changes Name, Namespace, Uid or CreationTimestamp |
/// | `PatchFailed` | Patch document unparsable, inapplicable, or yields an invalid resource |
///
/// # Example
///
/// ```
/// use consolemock_executor::{Command, Error, Executor, ObjectKey};
///
/// let mut executor = Executor::seeded(1).unwrap();
/// let err = executor
///     .execute(Command::DeleteAddress {
///         input: ObjectKey::new("nowhere.x", "app1_ns"),
///     })
///     .unwrap_err();
/// assert!(matches!(err, Error::NotFound { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// A referenced entity does not exist
    #[error("not found: {reason}")]
    NotFound { reason: String },

    /// The composite key is already taken
    #[error("already exists: {reason}")]
    AlreadyExists { reason: String },

    /// A request field holds a value outside its domain
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The request is understood but not implemented
    #[error("unsupported: {reason}")]
    Unsupported { reason: String },

    /// A patch tried to change an identity field
    #[error("immutable field: {reason}")]
    ImmutableField { reason: String },

    /// A patch could not produce a valid replacement
    #[error("patch failed: {reason}")]
    PatchFailed { reason: String },
}
