//! Growable ring-buffer deque.
//!
//! This module provides [`CircularArrayDeque`], a double-ended queue stored in
//! a contiguous buffer of optional slots with a `head` and a `tail` cursor.
//!
//! # Growth
//!
//! The buffer is never left full. Whenever an insertion makes `head == tail`
//! the buffer grows before the call returns, so `head == tail` always means
//! "empty" to an outside observer and no element counter is needed.
//!
//! Small buffers (fewer than 64 slots) grow by `capacity + 2`, larger ones by
//! half their capacity. Starting from the default of 8 slots the capacity
//! sequence is 8, 18, 38, 78, 117, 175, ...
//!
//! When the live range wraps around the end of the old buffer, the trailing
//! segment is moved to the end of the new buffer and `head` follows it:
//!
//! ```text
//!            T H                                T           H
//! before  [c d a b]              after  [c d _ _ _ _ _ _ a b]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use deque_engines::deque::CircularArrayDeque;
//!
//! let mut deque = CircularArrayDeque::new();
//! deque.add_last(1);
//! deque.add_last(2);
//! deque.add_first(0);
//!
//! assert_eq!(deque.get(0), Some(&0));
//! assert_eq!(deque.get(2), Some(&2));
//! assert_eq!(deque.size(), 3);
//! assert_eq!(deque.remove_first(), Some(0));
//! assert_eq!(deque.size(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FusedIterator, repeat_with};
use std::mem;

use static_assertions::assert_impl_all;

use super::error::CapacityError;
use super::ring::{decrement, distance, increment, offset};
use super::{Deque, display_bracketed, write_separated};

/// Number of slots allocated by [`CircularArrayDeque::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Buffers below this many slots grow by `capacity + 2`; larger ones by 50%.
const SMALL_CAPACITY_THRESHOLD: usize = 64;

/// Largest slot count whose allocation stays within `isize::MAX` bytes.
const fn maximum_capacity<T>() -> usize {
    let slot_size = mem::size_of::<Option<T>>();
    if slot_size == 0 {
        usize::MAX
    } else {
        isize::MAX.unsigned_abs() / slot_size
    }
}

/// Returns the capacity to grow to so that at least `needed` more slots exist,
/// or `None` if `limit` does not allow it.
fn grown_capacity(old_capacity: usize, needed: usize, limit: usize) -> Option<usize> {
    let jump = if old_capacity < SMALL_CAPACITY_THRESHOLD {
        old_capacity + 2
    } else {
        old_capacity >> 1
    };

    match old_capacity.checked_add(jump) {
        Some(candidate) if jump >= needed && candidate <= limit => Some(candidate),
        _ => resolve_capacity(old_capacity, needed, jump, limit),
    }
}

/// Capacity calculation for the edge cases: a jump smaller than what is
/// needed, or a jump that overshoots the limit.
fn resolve_capacity(old_capacity: usize, needed: usize, jump: usize, limit: usize) -> Option<usize> {
    let minimum = old_capacity
        .checked_add(needed)
        .filter(|&minimum| minimum <= limit)?;

    if needed > jump {
        return Some(minimum);
    }

    Some(
        old_capacity
            .checked_add(jump)
            .map_or(limit, |candidate| candidate.min(limit)),
    )
}

/// What the next insertion requires from the buffer.
enum Headroom {
    /// The insertion leaves at least one free slot.
    Available,
    /// The insertion fills the buffer; grow to this capacity afterwards.
    Grow(usize),
    /// The insertion would fill a buffer that cannot grow.
    Exhausted,
}

/// A double-ended queue backed by a growable circular array.
///
/// # Time Complexity
///
/// | Operation      | Complexity     |
/// |----------------|----------------|
/// | `add_first`    | O(1) amortized |
/// | `add_last`     | O(1) amortized |
/// | `remove_first` | O(1)           |
/// | `remove_last`  | O(1)           |
/// | `get`          | O(1)           |
/// | `size`         | O(1)           |
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::CircularArrayDeque;
///
/// let deque: CircularArrayDeque<i32> = (1..=1000).collect();
/// assert_eq!(deque.size(), 1000);
/// assert_eq!(deque.get(999), Some(&1000));
/// ```
#[derive(Clone)]
pub struct CircularArrayDeque<T> {
    /// Slot buffer; its length is the capacity.
    storage: Vec<Option<T>>,
    /// Slot of the first element.
    head: usize,
    /// Slot one past the last element.
    tail: usize,
    /// Largest capacity the buffer may grow to.
    limit: usize,
}

assert_impl_all!(CircularArrayDeque<i32>: Send, Sync, Clone, Default);

impl<T> CircularArrayDeque<T> {
    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::{CircularArrayDeque, DEFAULT_CAPACITY};
    ///
    /// let deque: CircularArrayDeque<i32> = CircularArrayDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with `capacity` slots (at least one).
    ///
    /// A buffer of `n` slots holds up to `n - 1` elements before it grows.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_limit(capacity, maximum_capacity::<T>())
    }

    /// Creates an empty deque with `capacity` slots that never grows beyond
    /// `limit` slots.
    ///
    /// `limit` is clamped to what the platform can allocate and `capacity` is
    /// clamped into `1..=limit`. Once the buffer cannot grow, insertions that
    /// would fill it fail with [`CapacityError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::CircularArrayDeque;
    ///
    /// let mut deque = CircularArrayDeque::with_capacity_limit(4, 4);
    /// for value in 0..3 {
    ///     deque.add_last(value);
    /// }
    /// assert!(deque.try_add_last(3).is_err());
    /// assert_eq!(deque.size(), 3);
    /// ```
    #[must_use]
    pub fn with_capacity_limit(capacity: usize, limit: usize) -> Self {
        let limit = limit.clamp(1, maximum_capacity::<T>());
        let capacity = capacity.clamp(1, limit);
        Self {
            storage: repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            limit,
        }
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn size(&self) -> usize {
        distance(self.tail, self.head, self.capacity())
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Inserts `item` at the front.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full and cannot grow. Use
    /// [`try_add_first`](Self::try_add_first) to recover the item instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::CircularArrayDeque;
    ///
    /// let mut deque = CircularArrayDeque::new();
    /// deque.add_first(2);
    /// deque.add_first(1);
    /// assert_eq!(deque.get(0), Some(&1));
    /// ```
    #[track_caller]
    pub fn add_first(&mut self, item: T) {
        if let Err(error) = self.try_add_first(item) {
            capacity_exhausted(&error);
        }
    }

    /// Inserts `item` at the back.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full and cannot grow. Use
    /// [`try_add_last`](Self::try_add_last) to recover the item instead.
    #[track_caller]
    pub fn add_last(&mut self, item: T) {
        if let Err(error) = self.try_add_last(item) {
            capacity_exhausted(&error);
        }
    }

    /// Inserts `item` at the front, growing the buffer if it becomes full.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] holding `item` if the buffer would become
    /// full and cannot grow. The deque is unchanged in that case.
    pub fn try_add_first(&mut self, item: T) -> Result<(), CapacityError<T>> {
        let headroom = self.reserve_for_insert();
        if matches!(headroom, Headroom::Exhausted) {
            return Err(self.capacity_error(item));
        }

        self.head = decrement(self.head, self.capacity());
        self.storage[self.head] = Some(item);

        self.settle(headroom);
        Ok(())
    }

    /// Inserts `item` at the back, growing the buffer if it becomes full.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] holding `item` if the buffer would become
    /// full and cannot grow. The deque is unchanged in that case.
    pub fn try_add_last(&mut self, item: T) -> Result<(), CapacityError<T>> {
        let headroom = self.reserve_for_insert();
        if matches!(headroom, Headroom::Exhausted) {
            return Err(self.capacity_error(item));
        }

        self.storage[self.tail] = Some(item);
        self.tail = increment(self.tail, self.capacity());

        self.settle(headroom);
        Ok(())
    }

    /// Removes and returns the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::CircularArrayDeque;
    ///
    /// let mut deque: CircularArrayDeque<i32> = (1..=2).collect();
    /// assert_eq!(deque.remove_first(), Some(1));
    /// assert_eq!(deque.remove_first(), Some(2));
    /// assert_eq!(deque.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        let item = self.storage[self.head].take()?;
        self.head = increment(self.head, self.capacity());
        Some(item)
    }

    /// Removes and returns the back element, or `None` if the deque is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        let last = decrement(self.tail, self.capacity());
        let item = self.storage[last].take()?;
        self.tail = last;
        Some(item)
    }

    /// Returns a reference to the element at `index`, counted from the front.
    ///
    /// Returns `None` if `index >= self.size()`.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size() {
            return None;
        }
        self.storage[offset(self.head, index, self.capacity())].as_ref()
    }

    /// Returns a mutable reference to the element at `index`, counted from the
    /// front.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size() {
            return None;
        }
        let slot = offset(self.head, index, self.capacity());
        self.storage[slot].as_mut()
    }

    /// Returns the front element, or `None` if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage[self.head].as_ref()
    }

    /// Returns the back element, or `None` if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.storage[decrement(self.tail, self.capacity())].as_ref()
    }

    /// Removes every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.storage.fill_with(|| None);
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deque_engines::deque::CircularArrayDeque;
    ///
    /// let mut deque = CircularArrayDeque::new();
    /// deque.add_last(2);
    /// deque.add_first(1);
    /// let collected: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(collected, vec![&1, &2]);
    /// ```
    pub fn iter(&self) -> CircularArrayDequeIterator<'_, T> {
        CircularArrayDequeIterator {
            storage: &self.storage,
            head: self.head,
            front: 0,
            back: self.size(),
        }
    }

    /// Checks whether the next insertion fills the buffer and, if so, works out
    /// and reserves the grown capacity up front so the insertion cannot fail
    /// halfway.
    fn reserve_for_insert(&mut self) -> Headroom {
        let capacity = self.capacity();
        if self.size() + 1 < capacity {
            return Headroom::Available;
        }

        match grown_capacity(capacity, 1, self.limit) {
            Some(new_capacity) => {
                if self.storage.try_reserve_exact(new_capacity - capacity).is_err() {
                    return Headroom::Exhausted;
                }
                Headroom::Grow(new_capacity)
            }
            None => Headroom::Exhausted,
        }
    }

    /// Resolves the ambiguous full state left by an insertion.
    fn settle(&mut self, headroom: Headroom) {
        if self.head != self.tail {
            return;
        }
        if let Headroom::Grow(new_capacity) = headroom {
            self.grow(new_capacity);
        }
    }

    /// Extends the buffer to `new_capacity` slots, moving the wrapped trailing
    /// segment to the end of the new buffer.
    fn grow(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();

        // head == tail with a live element at head is the full state.
        let wrapped = self.tail < self.head
            || (self.tail == self.head && self.storage[self.head].is_some());

        self.storage.resize_with(new_capacity, || None);

        if wrapped {
            let new_space = new_capacity - old_capacity;
            // [head, old) moves to [head + new_space, new); the vacated slots are
            // the `None`s rotated in from the end.
            self.storage[self.head..].rotate_right(new_space);
            self.head += new_space;
        }

        tracing::trace!(
            old_capacity,
            new_capacity,
            relocated = wrapped,
            "grew circular array deque"
        );
    }

    fn capacity_error(&self, item: T) -> CapacityError<T> {
        CapacityError {
            item,
            capacity: self.capacity(),
            limit: self.limit,
        }
    }
}

#[cold]
#[track_caller]
fn capacity_exhausted<T>(error: &CapacityError<T>) -> ! {
    tracing::error!(
        capacity = error.capacity,
        limit = error.limit,
        "circular array deque cannot grow"
    );
    panic!("{error}");
}

// =============================================================================
// Deque Implementation
// =============================================================================

impl<T> Deque<T> for CircularArrayDeque<T> {
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
/// [`CircularArrayDeque`].
pub struct CircularArrayDequeIterator<'a, T> {
    storage: &'a [Option<T>],
    head: usize,
    /// Logical index of the next element from the front.
    front: usize,
    /// Logical index one past the next element from the back.
    back: usize,
}

impl<'a, T> Iterator for CircularArrayDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let storage = self.storage;
        let slot = offset(self.head, self.front, storage.len());
        self.front += 1;
        storage[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for CircularArrayDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let storage = self.storage;
        let slot = offset(self.head, self.back, storage.len());
        storage[slot].as_ref()
    }
}

impl<T> ExactSizeIterator for CircularArrayDequeIterator<'_, T> {}

impl<T> FusedIterator for CircularArrayDequeIterator<'_, T> {}

/// An owning front-to-back iterator over elements of a [`CircularArrayDeque`].
pub struct CircularArrayDequeIntoIterator<T> {
    deque: CircularArrayDeque<T>,
}

impl<T> Iterator for CircularArrayDequeIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.size();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for CircularArrayDequeIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_last()
    }
}

impl<T> ExactSizeIterator for CircularArrayDequeIntoIterator<T> {}

impl<T> FusedIterator for CircularArrayDequeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CircularArrayDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for CircularArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> IntoIterator for CircularArrayDeque<T> {
    type Item = T;
    type IntoIter = CircularArrayDequeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CircularArrayDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = CircularArrayDequeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equality is element-wise; capacity and cursor positions are ignored.
impl<T: PartialEq> PartialEq for CircularArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArrayDeque<T> {}

impl<T: Hash> Hash for CircularArrayDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArrayDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularArrayDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_bracketed(formatter, self)
    }
}

// =============================================================================
// Tests
// =============================================================================
