//! Insertion-ordered hash containers with intrusive links.
//!
//! [`LinkedSet`] and [`LinkedMultiSet`] combine an open-addressed hash
//! table with a doubly-linked insertion-order list threaded through the
//! elements themselves. The containers allocate one slot array and nothing
//! else: elements embed their own `prev`/`next` slot indices via the
//! [`Linked`] trait (usually by embedding a [`Links`] header), so
//! membership costs no per-element allocation.
//!
//! Lookup walks a linear probe run from the element's home slot; deletion
//! uses backward-shift re-homing so probe runs never cross an empty slot;
//! iteration follows the order list and yields elements exactly in
//! insertion order. The multi-set admits equal elements and keeps them in
//! insertion order too, with [`LinkedMultiSet::find_all`] exposing the
//! duplicates for one key.
//!
//! Because the link fields live inside the element, an element can belong
//! to at most one container at a time; `add` rejects an element whose
//! links are live. Containers are single-threaded: there is no internal
//! synchronization, and the borrow checker rules out mutation during
//! iteration.
//!
//! # Example
//!
//! ```
//! use linkslot::{Linked, LinkedMultiSet, Links};
//! use std::hash::{Hash, Hasher};
//!
//! struct Batch {
//!     partition: u32,
//!     bytes: usize,
//!     links: Links,
//! }
//!
//! impl Batch {
//!     fn new(partition: u32, bytes: usize) -> Self {
//!         Self { partition, bytes, links: Links::new() }
//!     }
//! }
//!
//! // Hash and equality use the partition only; the link fields are
//! // container state and stay out of both.
//! impl Hash for Batch {
//!     fn hash<H: Hasher>(&self, state: &mut H) {
//!         self.partition.hash(state);
//!     }
//! }
//!
//! impl PartialEq for Batch {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.partition == other.partition
//!     }
//! }
//!
//! impl Eq for Batch {}
//!
//! impl Linked for Batch {
//!     fn prev(&self) -> u32 { self.links.prev() }
//!     fn next(&self) -> u32 { self.links.next() }
//!     fn set_prev(&mut self, slot: u32) { self.links.set_prev(slot); }
//!     fn set_next(&mut self, slot: u32) { self.links.set_next(slot); }
//! }
//!
//! let mut batches = LinkedMultiSet::new();
//! batches.must_add(Batch::new(0, 100));
//! batches.must_add(Batch::new(1, 50));
//! batches.must_add(Batch::new(0, 200));
//!
//! // Iteration is insertion order, duplicates included.
//! let sizes: Vec<usize> = batches.iter().map(|b| b.bytes).collect();
//! assert_eq!(sizes, [100, 50, 200]);
//!
//! // All batches for partition 0, oldest first.
//! let key = Batch::new(0, 0);
//! let p0: Vec<usize> = batches.find_all(&key).map(|b| b.bytes).collect();
//! assert_eq!(p0, [100, 200]);
//! ```

mod linked;
mod list;
mod multiset;
mod set;
mod table;

pub use linked::{Linked, Links, HEAD, UNLINKED};
pub use multiset::LinkedMultiSet;
pub use set::LinkedSet;
pub use table::{AddError, CursorMut, FindAll, IntoIter, Iter};
