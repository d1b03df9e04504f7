//! Error types for the console mock
//!
//! Every layer (catalog lookups, queries, mutations, patch application)
//! reports failures through [`Error`]. Errors are raised at the point of
//! detection and propagate to the caller unchanged; nothing retries.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

use crate::json::PatchError;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the console mock
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `NotFound` | Unknown namespace, plan, address space, address or key |
/// | `AlreadyExists` | Duplicate (Name, Namespace) on create |
/// | `InvalidArgument` | Bad type enum, bad name prefix, unrecognised patch media type |
/// | `Unsupported` | Recognised but unimplemented patch media type |
/// | `ImmutableField` | Patch alters Name, Namespace or Uid |
/// | `PatchFailed` | The patch could not produce a new document |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Referenced entity does not exist
    #[error("not found: {reason}")]
    NotFound {
        /// Human readable description of what was missing
        reason: String,
    },

    /// Entity with the same composite key already exists
    #[error("already exists: {reason}")]
    AlreadyExists {
        /// Human readable description of the clash
        reason: String,
    },

    /// Input failed validation
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human readable description of the bad input
        reason: String,
    },

    /// Operation is recognised but not implemented
    #[error("unsupported: {reason}")]
    Unsupported {
        /// Human readable description of what is unsupported
        reason: String,
    },

    /// Patch attempted to change an identity field
    #[error("immutable field: {reason}")]
    ImmutableField {
        /// Human readable description of the violation
        reason: String,
    },

    /// Patch could not be applied
    #[error("patch failed: {reason}")]
    PatchFailed {
        /// Human readable description of the failure
        reason: String,
    },
}

impl Error {
    /// Create a NotFound error
    pub fn not_found(reason: impl Into<String>) -> Self {
        Error::NotFound {
            reason: reason.into(),
        }
    }

    /// Create a NotFound error for an unrecognised name, listing the known ones
    ///
    /// ```
    /// use consolemock_core::Error;
    ///
    /// let err = Error::unrecognised("namespace", "nope", ["app1_ns", "app2_ns"]);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "not found: unrecognised namespace 'nope', known ones are: app1_ns, app2_ns"
    /// );
    /// ```
    pub fn unrecognised<I, S>(what: &str, name: &str, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known: Vec<String> = known.into_iter().map(|s| s.as_ref().to_string()).collect();
        Error::NotFound {
            reason: format!(
                "unrecognised {} '{}', known ones are: {}",
                what,
                name,
                known.join(", ")
            ),
        }
    }

    /// Create an AlreadyExists error
    pub fn already_exists(reason: impl Into<String>) -> Self {
        Error::AlreadyExists {
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an Unsupported error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Error::Unsupported {
            reason: reason.into(),
        }
    }

    /// Create an ImmutableField error
    pub fn immutable_field(reason: impl Into<String>) -> Self {
        Error::ImmutableField {
            reason: reason.into(),
        }
    }

    /// Create a PatchFailed error
    pub fn patch_failed(reason: impl Into<String>) -> Self {
        Error::PatchFailed {
            reason: reason.into(),
        }
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<PatchError> for Error {
    fn from(e: PatchError) -> Self {
        Error::PatchFailed {
            reason: e.to_string(),
        }
    }
}
