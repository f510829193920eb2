//! Error types for the deque engines.
//!
//! Ordinary conditions such as removing from an empty deque or indexing past
//! the end are reported through `Option`. The only genuine failure is running
//! out of representable capacity in the circular array engine.

use std::fmt;

/// Returned when a [`CircularArrayDeque`](super::CircularArrayDeque) cannot grow
/// any further.
///
/// The rejected element is handed back so that nothing is lost, and the deque
/// is left exactly as it was before the call.
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::{CapacityError, CircularArrayDeque};
///
/// let mut deque = CircularArrayDeque::with_capacity_limit(2, 2);
/// deque.add_last(1);
/// let error: CapacityError<i32> = deque.try_add_last(2).unwrap_err();
/// assert_eq!(error.item, 2);
/// assert_eq!(
///     format!("{}", error),
///     "capacity exhausted: cannot grow beyond 2 slots (current capacity 2)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityError<T> {
    /// The element that could not be inserted.
    pub item: T,
    /// The capacity of the deque when the insertion was attempted.
    pub capacity: usize,
    /// The maximum capacity the deque is allowed to reach.
    pub limit: usize,
}

impl<T> CapacityError<T> {
    /// Consumes the error and returns the rejected element.
    #[inline]
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "capacity exhausted: cannot grow beyond {} slots (current capacity {})",
            self.limit, self.capacity
        )
    }
}

impl<T: fmt::Debug> std::error::Error for CapacityError<T> {}
