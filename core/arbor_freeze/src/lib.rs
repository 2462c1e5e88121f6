//! Arbor freeze-lifecycle primitives.
//!
//! Tree-shaped IRs in Arbor follow a build-then-publish discipline: one
//! thread constructs and mutates freely, freezes the root exactly once,
//! and only then hands the structure out for read-only traversal. This
//! crate provides the pieces that discipline rests on:
//!
//! - [`Freezable`] / [`AsFreezable`] — the one-way freeze contract and
//!   the optional-capability query containers use to cascade.
//! - [`FreezeFlag`] — the one-way boolean, newtyped so the transition
//!   has a single implementation point.
//! - [`FreezeList`] / [`ListHooks`] — an ordered container that rejects
//!   mutation once frozen and notifies a hook strategy of every
//!   structural change.
//! - [`FreezeError`] / [`FreezeResult`] — the error taxonomy shared by
//!   all of the above.
//!
//! This crate is standalone: it has zero `arbor_*` dependencies, so
//! external tools can use the container without pulling in the AST
//! layer.

mod errors;
mod freeze;
mod list;

pub use errors::{FreezeError, FreezeResult};
pub use freeze::{AsFreezable, Freezable, FreezeFlag};
pub use list::{FreezeList, ListHooks, NoHooks};
