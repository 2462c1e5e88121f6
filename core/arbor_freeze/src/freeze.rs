//! The freeze contract: a one-way transition from mutable to
//! permanently read-only.
//!
//! Values are built freely on a single thread, frozen exactly once, and
//! only then shared. The frozen flag is the synchronization boundary:
//! `&mut self` mutators make pre-freeze mutation exclusive by
//! construction, and ownership transfer at hand-off provides the
//! happens-before edge for later concurrent reads.

use crate::errors::{FreezeError, FreezeResult};

/// A value that supports the one-way freeze transition.
///
/// Once `is_frozen()` reports `true` it reports `true` for the rest of
/// the value's lifetime; implementors must route the `false → true`
/// transition through a single point (see [`FreezeFlag`]).
pub trait Freezable {
    /// Whether the value has been frozen.
    fn is_frozen(&self) -> bool;

    /// Whether `freeze()` would currently be permitted.
    ///
    /// Defaults to "not yet frozen". Implementors may add further
    /// preconditions.
    fn can_freeze(&self) -> bool {
        !self.is_frozen()
    }

    /// Perform the one-way freeze transition.
    ///
    /// Errors with [`FreezeError::AlreadyFrozen`] when `can_freeze()` is
    /// false. Container implementations cascade into their contents
    /// before the flag engages.
    fn freeze(&mut self) -> FreezeResult;

    /// Best-effort freeze: `true` on success, `false` on *any* failure.
    ///
    /// This swallows every error from the freeze attempt, including
    /// cascade failures surfaced by contained elements, not just the
    /// already-frozen precondition. Callers that need to distinguish
    /// failure causes should call [`freeze`](Freezable::freeze) directly.
    fn try_freeze(&mut self) -> bool {
        if !self.can_freeze() {
            return false;
        }
        self.freeze().is_ok()
    }

    /// No-op when already frozen, otherwise a full `freeze()`
    /// propagating its failure.
    fn freeze_if_unfrozen(&mut self) -> FreezeResult {
        if self.is_frozen() {
            return Ok(());
        }
        self.freeze()
    }
}

/// Optional-capability query: does this value participate in the freeze
/// contract?
///
/// Containers query this once per element when cascading a freeze.
/// Element types outside the contract return `None` and are skipped.
pub trait AsFreezable {
    /// The freezable view of this value, if it has one.
    fn as_freezable(&mut self) -> Option<&mut dyn Freezable>;
}

/// Declare types that do not participate in the freeze contract.
macro_rules! not_freezable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFreezable for $ty {
                #[inline]
                fn as_freezable(&mut self) -> Option<&mut dyn Freezable> {
                    None
                }
            }
        )*
    };
}

not_freezable!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    &'static str,
);

/// The one-way frozen flag.
///
/// Newtyped so the frozen check and the `false → true` transition have a
/// single implementation point shared by every freezable type.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct FreezeFlag {
    frozen: bool,
}

impl FreezeFlag {
    /// A fresh, unfrozen flag.
    #[inline]
    pub const fn new() -> Self {
        FreezeFlag { frozen: false }
    }

    /// Whether the flag has engaged.
    #[inline]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Guard for mutators: errors with [`FreezeError::Frozen`] once the
    /// flag has engaged.
    #[inline]
    pub const fn verify_unfrozen(&self) -> FreezeResult {
        if self.frozen {
            Err(FreezeError::Frozen)
        } else {
            Ok(())
        }
    }

    /// Engage the flag. Errors with [`FreezeError::AlreadyFrozen`] on a
    /// second call; the flag never reverts.
    #[inline]
    pub fn engage(&mut self) -> FreezeResult {
        if self.frozen {
            return Err(FreezeError::AlreadyFrozen);
        }
        self.frozen = true;
        Ok(())
    }
}
