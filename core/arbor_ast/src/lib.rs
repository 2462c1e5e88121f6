//! Arbor AST node contracts.
//!
//! The node-facing half of the Arbor core:
//! - [`Span`] / [`Spanned`] for source locations (diagnostics only)
//! - [`Matchable`] and the [`Match`] binding accumulator for structural
//!   pattern matching over built trees
//! - [`Modifier`] / [`ModifierToken`], the leaf token node for
//!   declaration modifiers
//!
//! Trees are built mutably, frozen once through the
//! [`arbor_freeze`] contract, then traversed read-only; matching is
//! side-effect-free on the nodes themselves and works the same before
//! and after freezing.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated
/// types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod matching;
mod span;
mod token;
mod traits;

pub use matching::{Binding, Checkpoint, Match, Matchable};
pub use span::Span;
pub use token::{Modifier, ModifierToken};
pub use traits::Spanned;
