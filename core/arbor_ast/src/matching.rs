//! Structural matching contract and binding accumulator.
//!
//! Every Arbor node implements [`Matchable`] so a generic tree-walking
//! matcher can test a concrete tree against a pattern tree without
//! knowing node-specific shape. Leaf nodes compare values; composite
//! pattern nodes (choice groups, wildcards, named groups — defined by
//! the pattern layer, not here) recursively delegate to their children
//! and record group bindings into the caller-owned [`Match`].
//!
//! # Rollback
//!
//! `matches` must never leave partial bindings behind on a failed
//! attempt. Composite implementations take a [`Match::checkpoint`]
//! before trying an alternative and [`Match::restore`] it when the
//! alternative fails; bindings are positional, so restore is a
//! truncation.

use std::any::Any;
use std::fmt;

use smallvec::SmallVec;

/// A node that supports structural matching against a pattern node.
///
/// `matches` is a pure structural predicate: it must not mutate `self`,
/// and it works identically on frozen and unfrozen nodes. It may append
/// group bindings to `m`, but a `false` return must leave `m` exactly as
/// it found it (checkpoint/restore around any speculative bindings).
pub trait Matchable {
    /// Test whether `other` structurally matches this node, recording
    /// group bindings into `m`.
    fn matches<'t>(&self, other: &'t dyn Matchable, m: &mut Match<'t>) -> bool;

    /// The concrete-type view used by leaf implementations to test the
    /// kind of `other`.
    fn as_any(&self) -> &dyn Any;
}

/// A single group binding: a name and the bound node.
pub struct Binding<'t> {
    name: String,
    node: &'t dyn Matchable,
}

impl<'t> Binding<'t> {
    /// The group name this node was bound under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound node.
    #[inline]
    pub fn node(&self) -> &'t dyn Matchable {
        self.node
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bound nodes carry no Debug bound; show the group name.
        write!(f, "Binding({})", self.name)
    }
}

/// A positional marker into a [`Match`], used to roll back the bindings
/// of a failed alternative.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Checkpoint(usize);

/// Caller-owned accumulator of group bindings produced while testing a
/// concrete tree against a pattern tree.
///
/// Bindings are kept in the order they were recorded; the same group
/// name may be bound repeatedly (repeated groups bind once per matched
/// node). Rollback is positional via [`checkpoint`](Match::checkpoint) /
/// [`restore`](Match::restore).
#[derive(Default)]
pub struct Match<'t> {
    bindings: SmallVec<[Binding<'t>; 4]>,
}

impl<'t> Match<'t> {
    /// An empty match context.
    #[inline]
    pub fn new() -> Self {
        Match {
            bindings: SmallVec::new(),
        }
    }

    /// Number of recorded bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Record a binding of `node` under `name`.
    pub fn add(&mut self, name: impl Into<String>, node: &'t dyn Matchable) {
        let name = name.into();
        tracing::trace!(group = %name, "binding recorded");
        self.bindings.push(Binding { name, node });
    }

    /// All nodes bound under `name`, in binding order.
    pub fn get<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'t dyn Matchable> + 'a {
        self.bindings
            .iter()
            .filter(move |binding| binding.name == name)
            .map(Binding::node)
    }

    /// All recorded bindings, in order.
    #[inline]
    pub fn bindings(&self) -> &[Binding<'t>] {
        &self.bindings
    }

    /// Mark the current binding position.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.bindings.len())
    }

    /// Discard every binding recorded after `checkpoint`.
    ///
    /// Bindings recorded before the checkpoint are untouched, so a
    /// failed alternative rolls back exactly its own speculative
    /// bindings.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        let discarded = self.bindings.len().saturating_sub(checkpoint.0);
        if discarded > 0 {
            tracing::trace!(discarded, "bindings rolled back");
            self.bindings.truncate(checkpoint.0);
        }
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bound nodes have no Debug bound; list the group names.
        f.debug_list()
            .entries(self.bindings.iter().map(Binding::name))
            .finish()
    }
}
