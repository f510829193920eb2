//! Circular doubly-linked deque anchored by a sentinel node.
//!
//! This module provides [`SentinelLinkedDeque`]. One permanent sentinel node
//! sits between the last and the first element, so inserting or removing at
//! either end never has to special-case an empty list or a boundary node.
//!
//! Nodes live in a slot arena and link to each other by index. Slot 0 is the
//! sentinel; it carries no element and is never released. Removing a node
//! frees its slot immediately: the last slot is swapped into the hole and its
//! neighbours are relinked, so the arena always holds exactly `size + 1`
//! nodes. Spare allocation is returned once the arena is mostly unused.
//!
//! ```text
//!        +-------------------------------------------+
//!        v                                           |
//!   [sentinel] <-> [first] <-> ... <-> [last] <------+
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use static_assertions::assert_impl_all;

use super::{Deque, display_bracketed, write_separated};

/// Slot of the sentinel node.
const SENTINEL: usize = 0;

/// The arena gives memory back once its allocation exceeds this many times
/// its length.
const SHRINK_RATIO: usize = 4;

#[derive(Clone)]
struct Node<T> {
    /// `None` only for the sentinel.
    item: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            item: None,
            prev: SENTINEL,
            next: SENTINEL,
        }
    }
}

/// A double-ended queue backed by a circular doubly-linked list with a
/// sentinel node.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `add_first`     | O(1)       |
/// | `add_last`      | O(1)       |
/// | `remove_first`  | O(1)       |
/// | `remove_last`   | O(1)       |
/// | `get`           | O(n/2)     |
/// | `get_forward`   | O(n)       |
/// | `get_recursive` | O(n)       |
/// | `size`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::SentinelLinkedDeque;
///
/// let mut deque = SentinelLinkedDeque::new();
/// deque.add_last(1);
/// deque.add_last(2);
/// deque.add_first(0);
///
/// assert_eq!(deque.get(1), Some(&1));
/// assert_eq!(deque.remove_last(), Some(2));
/// assert_eq!(deque.size(), 2);
/// ```
#[derive(Clone)]
pub struct SentinelLinkedDeque<T> {
    /// Sentinel at slot 0 followed by exactly `size` linked nodes.
    nodes: Vec<Node<T>>,
    size: usize,
}

assert_impl_all!(SentinelLinkedDeque<i32>: Send, Sync, Clone, Default);

impl<T> SentinelLinkedDeque<T> {
    /// Creates an empty deque holding only the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::SentinelLinkedDeque;
    ///
    /// let deque: SentinelLinkedDeque<i32> = SentinelLinkedDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.size(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            size: 0,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1) - the size is maintained on every insertion and removal
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the sentinel links to itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next == SENTINEL
    }

    /// Inserts `item` at the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::SentinelLinkedDeque;
    ///
    /// let mut deque = SentinelLinkedDeque::new();
    /// deque.add_first(2);
    /// deque.add_first(1);
    /// assert_eq!(deque.get(0), Some(&1));
    /// ```
    pub fn add_first(&mut self, item: T) {
        let first = self.nodes[SENTINEL].next;
        self.link_between(item, SENTINEL, first);
    }

    /// Inserts `item` at the back.
    pub fn add_last(&mut self, item: T) {
        let last = self.nodes[SENTINEL].prev;
        self.link_between(item, last, SENTINEL);
    }

    /// Removes and returns the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::SentinelLinkedDeque;
    ///
    /// let mut deque: SentinelLinkedDeque<i32> = (1..=2).collect();
    /// assert_eq!(deque.remove_first(), Some(1));
    /// assert_eq!(deque.remove_first(), Some(2));
    /// assert_eq!(deque.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.nodes[SENTINEL].next;
        self.unlink(first)
    }

    /// Removes and returns the back element, or `None` if the deque is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes[SENTINEL].prev;
        self.unlink(last)
    }

    /// Returns a reference to the element at `index`, counted from the front.
    ///
    /// Walks forward from the first node when `index` lies in the front half,
    /// and backward from the last node otherwise.
    ///
    /// # Complexity
    ///
    /// O(min(index, size - index))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::SentinelLinkedDeque;
    ///
    /// let deque: SentinelLinkedDeque<char> = "abcde".chars().collect();
    /// assert_eq!(deque.get(1), Some(&'b'));
    /// assert_eq!(deque.get(4), Some(&'e'));
    /// assert_eq!(deque.get(5), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        let node = self.locate(index)?;
        self.nodes[node].item.as_ref()
    }

    /// Returns a mutable reference to the element at `index`, counted from the
    /// front.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.locate(index)?;
        self.nodes[node].item.as_mut()
    }

    /// Same as [`get`](Self::get), but always walks forward from the first
    /// node, one link at a time.
    ///
    /// This is the iterative counterpart of
    /// [`get_recursive`](Self::get_recursive) and is safe for any index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::SentinelLinkedDeque;
    ///
    /// let deque: SentinelLinkedDeque<u32> = (0..100_000).collect();
    /// assert_eq!(deque.get_forward(99_999), Some(&99_999));
    /// assert_eq!(deque.get_forward(100_000), None);
    /// ```
    pub fn get_forward(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        let mut node = self.nodes[SENTINEL].next;
        for _ in 0..index {
            node = self.nodes[node].next;
        }
        self.nodes[node].item.as_ref()
    }

    /// Same as [`get_forward`](Self::get_forward), but walks recursively from
    /// the front.
    ///
    /// # Stack Overflow
    ///
    /// The recursion depth equals `index`. An index in the hundreds of
    /// thousands can exhaust the thread's stack, which aborts the process
    /// rather than panicking. Use [`get_forward`](Self::get_forward) or
    /// [`get`](Self::get) for deep indices.
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.get_recursive_from(self.nodes[SENTINEL].next, index)
    }

    fn get_recursive_from(&self, node: usize, remaining: usize) -> Option<&T> {
        if remaining == 0 {
            return self.nodes[node].item.as_ref();
        }
        self.get_recursive_from(self.nodes[node].next, remaining - 1)
    }

    /// Returns the front element, or `None` if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.nodes[SENTINEL].next].item.as_ref()
    }

    /// Returns the back element, or `None` if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.nodes[SENTINEL].prev].item.as_ref()
    }

    /// Removes every element, leaving only the sentinel.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.size = 0;
        self.release_spare_capacity();
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> SentinelLinkedDequeIterator<'_, T> {
        SentinelLinkedDequeIterator {
            nodes: &self.nodes,
            front: self.nodes[SENTINEL].next,
            back: self.nodes[SENTINEL].prev,
            remaining: self.size,
        }
    }

    /// Finds the slot holding the element at `index`.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.size {
            return None;
        }

        if index < (self.size >> 1) {
            let mut node = self.nodes[SENTINEL].next;
            for _ in 0..index {
                node = self.nodes[node].next;
            }
            Some(node)
        } else {
            let mut node = self.nodes[SENTINEL].prev;
            for _ in index + 1..self.size {
                node = self.nodes[node].prev;
            }
            Some(node)
        }
    }

    /// Appends a node for `item` and splices it between `prev` and `next`.
    fn link_between(&mut self, item: T, prev: usize, next: usize) {
        let slot = self.nodes.len();
        self.nodes.push(Node {
            item: Some(item),
            prev,
            next,
        });

        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.size += 1;
    }

    /// Splices `node` out of the chain, frees its slot and returns its item.
    ///
    /// The last slot moves into the freed one, so the links pointing at the
    /// moved node are redirected.
    fn unlink(&mut self, node: usize) -> Option<T> {
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;

        let released = self.nodes.swap_remove(node);
        if node < self.nodes.len() {
            let (moved_prev, moved_next) = (self.nodes[node].prev, self.nodes[node].next);
            self.nodes[moved_prev].next = node;
            self.nodes[moved_next].prev = node;
        }

        self.size -= 1;
        self.release_spare_capacity();
        released.item
    }

    /// Shrinks the arena allocation once it is mostly unused.
    fn release_spare_capacity(&mut self) {
        let length = self.nodes.len();
        if self.nodes.capacity() > length.saturating_mul(SHRINK_RATIO) {
            let previous_capacity = self.nodes.capacity();
            self.nodes.shrink_to(length.saturating_mul(2));
            tracing::trace!(
                previous_capacity,
                new_capacity = self.nodes.capacity(),
                "sentinel linked deque released spare node slots"
            );
        }
    }
}

// =============================================================================
// Deque Implementation
// =============================================================================

impl<T> Deque<T> for SentinelLinkedDeque<T> {
    #[inline]
    fn add_first(&mut self, item: T) {
        Self::add_first(self, item);
    }

    #[inline]
    fn add_last(&mut self, item: T) {
        Self::add_last(self, item);
    }

    #[inline]
    fn remove_first(&mut self) -> Option<T> {
        Self::remove_first(self)
    }

    #[inline]
    fn remove_last(&mut self) -> Option<T> {
        Self::remove_last(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn write_sequence(&self, output: &mut dyn fmt::Write) -> fmt::Result
    where
        T: fmt::Display,
    {
        write_separated(output, self)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A front-to-back iterator over references to elements of a
/// [`SentinelLinkedDeque`].
pub struct SentinelLinkedDequeIterator<'a, T> {
    nodes: &'a [Node<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for SentinelLinkedDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for SentinelLinkedDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.item.as_ref()
    }
}

impl<T> ExactSizeIterator for SentinelLinkedDequeIterator<'_, T> {}

impl<T> FusedIterator for SentinelLinkedDequeIterator<'_, T> {}

/// An owning front-to-back iterator over elements of a [`SentinelLinkedDeque`].
pub struct SentinelLinkedDequeIntoIterator<T> {
    deque: SentinelLinkedDeque<T>,
}

impl<T> Iterator for SentinelLinkedDequeIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.size, Some(self.deque.size))
    }
}

impl<T> DoubleEndedIterator for SentinelLinkedDequeIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_last()
    }
}

impl<T> ExactSizeIterator for SentinelLinkedDequeIntoIterator<T> {}

impl<T> FusedIterator for SentinelLinkedDequeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SentinelLinkedDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SentinelLinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for SentinelLinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> IntoIterator for SentinelLinkedDeque<T> {
    type Item = T;
    type IntoIter = SentinelLinkedDequeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SentinelLinkedDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a SentinelLinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = SentinelLinkedDequeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SentinelLinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SentinelLinkedDeque<T> {}

impl<T: Hash> Hash for SentinelLinkedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SentinelLinkedDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SentinelLinkedDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_bracketed(formatter, self)
    }
}

// =============================================================================
// Tests
// =============================================================================
