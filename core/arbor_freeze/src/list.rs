//! Freeze-aware ordered container with structural-change hooks.
//!
//! [`FreezeList`] backs the child storage of composite tree nodes: it is
//! freely mutable while a tree is being built, notifies a [`ListHooks`]
//! strategy of every structural change (so owners can maintain parent
//! pointers, indices, or other derived invariants), and becomes
//! permanently read-only after [`FreezeList::freeze_with`] (or the
//! [`Freezable`] trait methods), cascading the freeze into contained
//! elements that support the contract.
//!
//! # Hook ordering
//!
//! "After" hooks (insert, remove) observe post-state: the store is
//! already mutated when they run. "Before" hooks (replace, clear) run
//! strictly before the mutation so the outgoing state is observable.
//! Exactly one hook fires per successful mutation; failed mutations fire
//! none. Hooks never receive the container itself, so a hook cannot
//! reentrantly mutate the list it is observing.

use std::fmt;
use std::ops::Index;

use crate::errors::{FreezeError, FreezeResult};
use crate::freeze::{AsFreezable, Freezable, FreezeFlag};

/// Structural-change strategy for a [`FreezeList`].
///
/// All methods default to no-ops; plain containers use [`NoHooks`] and
/// pay nothing. Owners that maintain derived invariants implement the
/// methods they care about and attach the strategy with
/// [`FreezeList::with_hooks`].
pub trait ListHooks<E> {
    /// Runs after an element is inserted. `element` is the post-state
    /// value of the slot; `appended` is true when the insertion was at
    /// the old end of the list.
    fn after_insert(&mut self, _index: usize, _element: &E, _appended: bool) {}

    /// Runs strictly before `outgoing` at `index` is replaced by
    /// `incoming`.
    fn before_replace(&mut self, _index: usize, _outgoing: &E, _incoming: &E) {}

    /// Runs after `removed` has been taken out of slot `index`.
    fn after_remove(&mut self, _index: usize, _removed: &E) {}

    /// Runs strictly before the list empties; `elements` is the full
    /// outgoing contents.
    fn before_clear(&mut self, _elements: &[E]) {}
}

/// The no-op strategy.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct NoHooks;

impl<E> ListHooks<E> for NoHooks {}

/// Ordered, hook-notifying container with a one-way freeze transition.
///
/// Insertion order is significant and duplicates are permitted. Elements
/// are owned by the list; element types that implement [`AsFreezable`]
/// participate in freeze cascades.
pub struct FreezeList<E, H = NoHooks> {
    items: Vec<E>,
    hooks: H,
    frozen: FreezeFlag,
}

impl<E, H: Default> FreezeList<E, H> {
    /// Create an empty, unfrozen list with a default-constructed
    /// strategy.
    #[inline]
    pub fn new() -> Self {
        Self::with_hooks(H::default())
    }
}

impl<E, H> FreezeList<E, H> {
    /// Create an empty, unfrozen list with the given strategy.
    #[inline]
    pub const fn with_hooks(hooks: H) -> Self {
        FreezeList {
            items: Vec::new(),
            hooks,
            frozen: FreezeFlag::new(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    /// The first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// The last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.items.last()
    }

    /// Iterate over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// The attached strategy.
    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the attached strategy's own state.
    ///
    /// This does not grant access to the list contents, frozen or not.
    #[inline]
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }
}

impl<E, H: ListHooks<E>> FreezeList<E, H> {
    /// Append an element.
    ///
    /// Errors with [`FreezeError::Frozen`] once the list is frozen. On
    /// success the insertion hook fires with `appended = true`.
    #[inline]
    pub fn push(&mut self, element: E) -> FreezeResult {
        self.insert(self.items.len(), element)
    }

    /// Insert an element at `index`, shifting later elements right.
    ///
    /// Valid for `0 <= index <= len`. Errors with
    /// [`FreezeError::Frozen`] when frozen and
    /// [`FreezeError::OutOfRange`] on a bad index. On success the
    /// insertion hook fires with `appended = (index == old len)`.
    pub fn insert(&mut self, index: usize, element: E) -> FreezeResult {
        self.frozen.verify_unfrozen()?;
        if index > self.items.len() {
            return Err(FreezeError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let appended = index == self.items.len();
        self.items.insert(index, element);
        self.hooks.after_insert(index, &self.items[index], appended);
        Ok(())
    }

    /// Replace the element at `index`, returning the outgoing element.
    ///
    /// The pre-replace hook runs before the store is mutated so the
    /// outgoing element is observable in place.
    pub fn replace(&mut self, index: usize, element: E) -> FreezeResult<E> {
        self.frozen.verify_unfrozen()?;
        if index >= self.items.len() {
            return Err(FreezeError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.hooks.before_replace(index, &self.items[index], &element);
        Ok(std::mem::replace(&mut self.items[index], element))
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// The removal hook always fires with the removed element.
    pub fn remove(&mut self, index: usize) -> FreezeResult<E> {
        self.frozen.verify_unfrozen()?;
        if index >= self.items.len() {
            return Err(FreezeError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.hooks.after_remove(index, &removed);
        Ok(removed)
    }

    /// Remove the first element structurally equal to `value`.
    ///
    /// The frozen check precedes the scan, so a frozen list errors even
    /// when the value is absent. Returns whether a match was found and
    /// removed.
    pub fn remove_value(&mut self, value: &E) -> FreezeResult<bool>
    where
        E: PartialEq,
    {
        self.frozen.verify_unfrozen()?;
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.remove(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove all elements.
    ///
    /// The pre-clear hook runs with the full outgoing contents before
    /// the store empties.
    pub fn clear(&mut self) -> FreezeResult {
        self.frozen.verify_unfrozen()?;
        self.hooks.before_clear(&self.items);
        self.items.clear();
        Ok(())
    }
}

impl<E: AsFreezable, H> FreezeList<E, H> {
    /// Perform the one-way freeze transition, optionally cascading.
    ///
    /// Errors with [`FreezeError::AlreadyFrozen`] when `can_freeze()` is
    /// false. With `cascade`, each element's freeze capability is
    /// queried once and every freezable, not-yet-frozen element is
    /// frozen first; a cascade failure propagates and leaves this list's
    /// own flag disengaged. The flag engages last, after which the list
    /// is read-only for the rest of its lifetime.
    pub fn freeze_with(&mut self, cascade: bool) -> FreezeResult {
        if self.frozen.is_frozen() {
            return Err(FreezeError::AlreadyFrozen);
        }
        if cascade {
            for item in &mut self.items {
                if let Some(freezable) = item.as_freezable() {
                    freezable.freeze_if_unfrozen()?;
                }
            }
        }
        self.frozen.engage()
    }
}

impl<E: AsFreezable, H> Freezable for FreezeList<E, H> {
    #[inline]
    fn is_frozen(&self) -> bool {
        self.frozen.is_frozen()
    }

    /// Full freeze: cascades into contained elements.
    fn freeze(&mut self) -> FreezeResult {
        self.freeze_with(true)
    }
}

impl<E: AsFreezable, H> AsFreezable for FreezeList<E, H> {
    #[inline]
    fn as_freezable(&mut self) -> Option<&mut dyn Freezable> {
        Some(self)
    }
}

impl<E, H: Default> Default for FreezeList<E, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for FreezeList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        FreezeList {
            items: iter.into_iter().collect(),
            hooks: NoHooks,
            frozen: FreezeFlag::new(),
        }
    }
}

impl<E, H> Index<usize> for FreezeList<E, H> {
    type Output = E;

    /// Panicking access; prefer [`FreezeList::get`] for fallible access.
    #[inline]
    fn index(&self, index: usize) -> &E {
        &self.items[index]
    }
}

impl<'a, E, H> IntoIterator for &'a FreezeList<E, H> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E: fmt::Debug, H> fmt::Debug for FreezeList<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The strategy is deliberately omitted; it is owner state, not
        // list state.
        f.debug_struct("FreezeList")
            .field("items", &self.items)
            .field("frozen", &self.frozen.is_frozen())
            .finish()
    }
}
