//! Insertion-ordered hash set over intrusive elements.

use crate::linked::{Linked, HEAD};
use crate::table::{AddError, Core, CursorMut, IntoIter, Iter};

use core::fmt;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// An insertion-ordered hash set.
///
/// Elements carry their own order-list links (see [`Linked`]), so the set
/// performs no per-element allocation: one slot array holds everything.
/// Iteration yields elements in the order they were added; `add`,
/// `contains` and `remove` are amortized O(1).
///
/// Equal elements are unique within the set. For a container that admits
/// duplicates, see [`LinkedMultiSet`](crate::LinkedMultiSet).
///
/// # Example
///
/// ```
/// use linkslot::{Linked, LinkedSet, Links};
/// use std::hash::{Hash, Hasher};
///
/// #[derive(Debug)]
/// struct Topic {
///     name: &'static str,
///     links: Links,
/// }
///
/// impl Topic {
///     fn new(name: &'static str) -> Self {
///         Self { name, links: Links::new() }
///     }
/// }
///
/// impl Hash for Topic {
///     fn hash<H: Hasher>(&self, state: &mut H) {
///         self.name.hash(state);
///     }
/// }
///
/// impl PartialEq for Topic {
///     fn eq(&self, other: &Self) -> bool {
///         self.name == other.name
///     }
/// }
///
/// impl Eq for Topic {}
///
/// impl Linked for Topic {
///     fn prev(&self) -> u32 { self.links.prev() }
///     fn next(&self) -> u32 { self.links.next() }
///     fn set_prev(&mut self, slot: u32) { self.links.set_prev(slot); }
///     fn set_next(&mut self, slot: u32) { self.links.set_next(slot); }
/// }
///
/// let mut topics = LinkedSet::new();
/// assert!(topics.add(Topic::new("alpha")));
/// assert!(topics.add(Topic::new("beta")));
/// assert!(!topics.add(Topic::new("alpha"))); // duplicate
///
/// let names: Vec<_> = topics.iter().map(|t| t.name).collect();
/// assert_eq!(names, ["alpha", "beta"]);
///
/// assert!(topics.remove(&Topic::new("alpha")));
/// assert!(!topics.contains(&Topic::new("alpha")));
/// ```
pub struct LinkedSet<T, S = RandomState>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    core: Core<T, S>,
}

impl<T: Linked + Hash + Eq> LinkedSet<T> {
    /// Creates an empty set with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set sized for `expected` elements.
    ///
    /// The slot count is `2 * expected + 1`, with a floor of five slots.
    pub fn with_capacity(expected: usize) -> Self {
        Self::with_capacity_and_hasher(expected, RandomState::new())
    }
}

impl<T, S> LinkedSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty set using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set sized for `expected` elements, using `hasher`.
    pub fn with_capacity_and_hasher(expected: usize, hasher: S) -> Self {
        Self {
            core: Core::with_capacity_and_hasher(expected, hasher),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns `true` if the set holds no elements.
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
    /// Returns `false`, dropping `e`, when an equal element is already
    /// present or when `e`'s link fields show it is already a member of a
    /// container. Use [`try_add`](LinkedSet::try_add) to get the rejected
    /// element back.
    pub fn add(&mut self, e: T) -> bool {
        self.try_add(e).is_ok()
    }

    /// Adds an element, handing it back on rejection.
    pub fn try_add(&mut self, e: T) -> Result<(), AddError<T>> {
        self.core.insert_unique(e).map(|_| ())
    }

    /// Adds an element that must not be rejected.
    ///
    /// # Panics
    ///
    /// Panics if the element is a duplicate or already linked.
    pub fn must_add(&mut self, e: T) {
        if let Err(err) = self.try_add(e) {
            panic!("unable to add element: {err}");
        }
    }

    /// Returns `true` if the set holds an element equal to `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.core.find_slot(key).is_some()
    }

    /// Returns the stored element equal to `key`, if any.
    pub fn find(&self, key: &T) -> Option<&T> {
        self.core.find_slot(key).map(|slot| self.core.get(slot))
    }

    /// Removes the element equal to `key` and returns it, links reset, so
    /// it can be inserted elsewhere.
    pub fn take(&mut self, key: &T) -> Option<T> {
        let slot = self.core.find_slot(key)?;
        Some(self.core.remove_at(slot, HEAD).0)
    }

    /// Removes the element equal to `key`, returning `true` if one was
    /// present.
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

impl<T, S> Default for LinkedSet<T, S>
where
    T: Linked + Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<T, S> fmt::Debug for LinkedSet<T, S>
where
    T: Linked + Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for LinkedSet<T, S>
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

impl<T, S> Extend<T> for LinkedSet<T, S>
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

impl<'a, T, S> IntoIterator for &'a LinkedSet<T, S>
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

impl<T, S> IntoIterator for LinkedSet<T, S>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked::Links;
    use std::hash::Hasher;

    #[derive(Debug, Clone)]
    struct TestElement {
        key: u64,
        tag: u32,
        links: Links,
    }

    impl TestElement {
        fn new(key: u64) -> Self {
            Self::tagged(key, 0)
        }

        fn tagged(key: u64, tag: u32) -> Self {
            Self {
                key,
                tag,
                links: Links::new(),
            }
        }
    }

    impl Hash for TestElement {
        fn hash<H: Hasher>(&self, state: &mut H) {
            state.write_u64(self.key);
        }
    }

    impl PartialEq for TestElement {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for TestElement {}

    impl Linked for TestElement {
        fn prev(&self) -> u32 {
            self.links.prev()
        }
        fn next(&self) -> u32 {
            self.links.next()
        }
        fn set_prev(&mut self, slot: u32) {
            self.links.set_prev(slot);
        }
        fn set_next(&mut self, slot: u32) {
            self.links.set_next(slot);
        }
    }

    fn keys(set: &LinkedSet<TestElement>) -> Vec<u64> {
        set.iter().map(|e| e.key).collect()
    }

    #[test]
    fn new_set_is_empty_with_minimum_slots() {
        let set: LinkedSet<TestElement> = LinkedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.num_slots(), 5);
    }

    #[test]
    fn equal_add_is_rejected_and_size_unchanged() {
        let mut set = LinkedSet::new();
        assert!(set.add(TestElement::new(1)));
        assert!(set.add(TestElement::new(2)));
        assert!(!set.add(TestElement::new(1)));

        assert_eq!(set.len(), 2);
        assert_eq!(keys(&set), vec![1, 2]);
    }

    #[test]
    fn try_add_returns_the_rejected_element() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::tagged(1, 7));

        let dup = TestElement::tagged(1, 8);
        let err = set.try_add(dup).unwrap_err();
        assert!(matches!(err, AddError::Duplicate(_)));
        assert_eq!(err.into_inner().tag, 8);

        // The original element is untouched.
        assert_eq!(set.find(&TestElement::new(1)).unwrap().tag, 7);
    }

    #[test]
    fn a_clone_carrying_live_links_is_rejected() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::new(1));

        let ghost = set.find(&TestElement::new(1)).unwrap().clone();
        assert!(ghost.is_linked());
        assert!(!set.add(ghost));
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[should_panic(expected = "unable to add element")]
    fn must_add_panics_on_duplicates() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::new(1));
        set.must_add(TestElement::new(1));
    }

    #[test]
    fn iteration_follows_insertion_order_across_removals() {
        let mut set = LinkedSet::new();
        for key in [3, 1, 4, 1, 5, 9, 2, 6] {
            set.add(TestElement::new(key));
        }
        assert_eq!(keys(&set), vec![3, 1, 4, 5, 9, 2, 6]);

        set.remove(&TestElement::new(4));
        set.remove(&TestElement::new(3));
        assert_eq!(keys(&set), vec![1, 5, 9, 2, 6]);

        set.add(TestElement::new(3));
        assert_eq!(keys(&set), vec![1, 5, 9, 2, 6, 3]);
    }

    #[test]
    fn find_returns_the_stored_instance() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::tagged(10, 42));

        let found = set.find(&TestElement::new(10)).unwrap();
        assert_eq!(found.tag, 42);
        assert!(set.find(&TestElement::new(11)).is_none());
    }

    #[test]
    fn take_resets_links_and_allows_reinsertion() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::new(1));
        set.must_add(TestElement::new(2));

        let taken = set.take(&TestElement::new(1)).unwrap();
        assert!(!taken.is_linked());
        assert!(!set.contains(&TestElement::new(1)));

        let mut other = LinkedSet::new();
        assert!(other.add(taken));
        assert!(other.contains(&TestElement::new(1)));
    }

    #[test]
    fn remove_of_a_missing_element_is_false() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::new(1));
        assert!(!set.remove(&TestElement::new(2)));
        assert!(set.remove(&TestElement::new(1)));
        assert!(!set.remove(&TestElement::new(1)));
        assert!(set.is_empty());
    }

    #[test]
    fn contains_still_succeeds_for_all_survivors_after_removal() {
        let mut set = LinkedSet::with_capacity(16);
        let survivors: Vec<u64> = (0..6).map(|i| i * 3).collect();
        for &key in &survivors {
            set.must_add(TestElement::new(key));
        }
        set.must_add(TestElement::new(100));
        assert!(set.remove(&TestElement::new(100)));

        for &key in &survivors {
            assert!(set.contains(&TestElement::new(key)), "lost key {key}");
        }
    }

    #[test]
    fn cursor_removes_the_second_of_four() {
        let mut set = LinkedSet::new();
        for key in [1, 2, 3, 4] {
            set.must_add(TestElement::new(key));
        }

        let mut cursor = set.cursor_mut();
        cursor.next();
        cursor.next();
        let removed = cursor.remove();
        assert_eq!(removed.key, 2);
        assert!(!removed.is_linked());

        assert_eq!(keys(&set), vec![1, 3, 4]);
    }

    #[test]
    fn growth_preserves_iteration_order() {
        let mut set = LinkedSet::new();
        let before = set.num_slots();
        for key in 0..64 {
            set.must_add(TestElement::new(key * 7));
        }
        assert!(set.num_slots() > before);
        assert_eq!(keys(&set), (0..64).map(|k| k * 7).collect::<Vec<_>>());
    }

    #[test]
    fn from_iterator_keeps_first_of_equal_elements() {
        let set: LinkedSet<TestElement> = [
            TestElement::tagged(1, 0),
            TestElement::tagged(2, 1),
            TestElement::tagged(1, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.find(&TestElement::new(1)).unwrap().tag, 0);
    }

    #[test]
    fn into_iterator_drains_in_insertion_order() {
        let mut set = LinkedSet::new();
        for key in [5, 3, 8] {
            set.must_add(TestElement::new(key));
        }

        let drained: Vec<u64> = set.into_iter().map(|e| e.key).collect();
        assert_eq!(drained, vec![5, 3, 8]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut set = LinkedSet::new();
        for key in [1, 2, 3] {
            set.must_add(TestElement::new(key));
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(keys(&set), Vec::<u64>::new());

        set.must_add(TestElement::new(2));
        assert_eq!(keys(&set), vec![2]);
    }

    #[test]
    fn debug_output_lists_elements_in_order() {
        let mut set = LinkedSet::new();
        set.must_add(TestElement::tagged(1, 0));
        let rendered = format!("{set:?}");
        assert!(rendered.starts_with('{') && rendered.ends_with('}'));
        assert!(rendered.contains("key: 1"));
    }
}
