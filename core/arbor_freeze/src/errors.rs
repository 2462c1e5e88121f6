//! Error types for the freeze lifecycle.
//!
//! Every fallible operation in this crate surfaces one of the
//! [`FreezeError`] variants to its immediate caller. Nothing is logged or
//! retried internally; [`crate::Freezable::try_freeze`] is the sole
//! sanctioned error-swallowing operation.

use std::fmt;

/// Result of a freeze-lifecycle operation.
pub type FreezeResult<T = ()> = Result<T, FreezeError>;

/// Error raised by freeze-lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreezeError {
    /// Structural mutation attempted on a frozen value.
    ///
    /// Always recoverable: check `is_frozen()` first, or branch on the
    /// result. Mutators never swallow this.
    Frozen,
    /// `freeze()` attempted when `can_freeze()` is false (e.g. a double
    /// freeze).
    AlreadyFrozen,
    /// Index outside `[0, len)` (`[0, len]` for insertion).
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
}

impl fmt::Display for FreezeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreezeError::Frozen => write!(f, "frozen values cannot be modified"),
            FreezeError::AlreadyFrozen => write!(
                f,
                "value cannot be frozen; check can_freeze() before calling \
                 freeze(), or use try_freeze() instead"
            ),
            FreezeError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for FreezeError {}
