//! Insertion-ordered hash multi-set over intrusive elements.

use crate::linked::{Linked, HEAD};
use crate::table::{AddError, Core, CursorMut, FindAll, IntoIter, Iter};

use core::fmt;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// An insertion-ordered hash multi-set.
///
/// Shares its storage discipline with [`LinkedSet`](crate::LinkedSet) —
/// intrusive links, one slot array, no per-element allocation — but admits
/// any number of equal elements. Duplicates keep their insertion order,
/// both in whole-container iteration and in [`find_all`].
///
/// Because equal elements are indistinguishable to [`remove`] and
/// [`take`], those methods drop the *earliest inserted* equal element. To
/// remove a specific instance, walk a [`cursor_mut`] to it and call
/// [`CursorMut::remove`].
///
/// [`find_all`]: LinkedMultiSet::find_all
/// [`remove`]: LinkedMultiSet::remove
/// [`take`]: LinkedMultiSet::take
/// [`cursor_mut`]: LinkedMultiSet::cursor_mut
pub struct LinkedMultiSet<T, S = RandomState>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    core: Core<T, S>,
}

impl<T: Linked + Hash + Eq> LinkedMultiSet<T> {
    /// Creates an empty multi-set with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty multi-set sized for `expected` elements.
    ///
    /// The slot count is `2 * expected + 1`, with a floor of five slots.
    pub fn with_capacity(expected: usize) -> Self {
        Self::with_capacity_and_hasher(expected, RandomState::new())
    }
}

impl<T, S> LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty multi-set using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty multi-set sized for `expected` elements, using
    /// `hasher`.
    pub fn with_capacity_and_hasher(expected: usize, hasher: S) -> Self {
        Self {
            core: Core::with_capacity_and_hasher(expected, hasher),
        }
    }

    /// Returns the number of elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns `true` if the multi-set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    /// Returns the current slot count.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.core.num_slots()
    }

    /// Returns a reference to the hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.core.hasher()
    }

    /// Adds an element, returning `true` if it was inserted.
    ///
    /// Equal elements are admitted; the only rejection is an element whose
    /// link fields show it is already a member of a container, in which
    /// case `e` is dropped and `false` returned.
    pub fn add(&mut self, e: T) -> bool {
        self.try_add(e).is_ok()
    }

    /// Adds an element, handing it back on rejection.
    pub fn try_add(&mut self, e: T) -> Result<(), AddError<T>> {
        self.core.insert_multi(e).map(|_| ())
    }

    /// Adds an element that must not be rejected.
    ///
    /// # Panics
    ///
    /// Panics if the element is already linked.
    pub fn must_add(&mut self, e: T) {
        if let Err(err) = self.try_add(e) {
            panic!("unable to add element: {err}");
        }
    }

    /// Returns `true` if at least one element equals `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.core.find_slot(key).is_some()
    }

    /// Returns one stored element equal to `key`: the earliest inserted.
    pub fn find(&self, key: &T) -> Option<&T> {
        self.core.find_slot(key).map(|slot| self.core.get(slot))
    }

    /// Returns a lazy iterator over every element equal to `key`, in
    /// insertion order.
    pub fn find_all<'a, 'k>(&'a self, key: &'k T) -> FindAll<'a, 'k, T> {
        self.core.probe_all(key)
    }

    /// Removes the earliest inserted element equal to `key` and returns
    /// it, links reset.
    pub fn take(&mut self, key: &T) -> Option<T> {
        let slot = self.core.find_slot(key)?;
        Some(self.core.remove_at(slot, HEAD).0)
    }

    /// Removes the earliest inserted element equal to `key`, returning
    /// `true` if one was present.
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes all elements, keeping the current slot count.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.core.iter()
    }

    /// Returns a cursor over the elements in insertion order which can
    /// remove the element it last yielded.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, S> {
        self.core.cursor_mut()
    }
}

impl<T, S> Default for LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<T, S> fmt::Debug for LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for e in iter {
            self.add(e);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for LinkedMultiSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> IntoIter<T, S> {
        IntoIter { core: self.core }
    }
}
