//! Error conversion from the engine's error type.
//!
//! Every engine error category has an executor counterpart, so the
//! conversion is one-to-one and keeps the reason text.

use crate::Error;
use consolemock_core::Error as CoreError;

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { reason } => Error::NotFound { reason },
            CoreError::AlreadyExists { reason } => Error::AlreadyExists { reason },
            CoreError::InvalidArgument { reason } => Error::InvalidArgument { reason },
            CoreError::Unsupported { reason } => Error::Unsupported { reason },
            CoreError::ImmutableField { reason } => Error::ImmutableField { reason },
            CoreError::PatchFailed { reason } => Error::PatchFailed { reason },
        }
    }
}
