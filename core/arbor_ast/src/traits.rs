//! Focused node traits.
//!
//! Each trait provides one capability so consumers never depend on
//! methods they do not use.

use super::Span;

/// Trait for nodes that carry a source location.
///
/// The span is diagnostic/formatting state only; it plays no part in
/// structural matching.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}
