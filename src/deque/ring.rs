//! Circular index arithmetic shared by the ring-buffer engine.
//!
//! Every cursor movement in [`CircularArrayDeque`](super::CircularArrayDeque)
//! goes through these functions, so the wrap-around rules live in one place.
//! All of them require `0 <= index < modulus`.

/// Circularly increments `index` modulo `modulus`.
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::ring::increment;
///
/// assert_eq!(increment(3, 8), 4);
/// assert_eq!(increment(7, 8), 0);
/// ```
#[inline]
#[must_use]
pub const fn increment(index: usize, modulus: usize) -> usize {
    let next = index + 1;
    if next >= modulus { 0 } else { next }
}

/// Circularly decrements `index` modulo `modulus`.
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::ring::decrement;
///
/// assert_eq!(decrement(3, 8), 2);
/// assert_eq!(decrement(0, 8), 7);
/// ```
#[inline]
#[must_use]
pub const fn decrement(index: usize, modulus: usize) -> usize {
    if index == 0 { modulus - 1 } else { index - 1 }
}

/// Returns the circular distance from `behind` forward to `ahead`.
///
/// `ahead` must be logically ahead of `behind`. The corner case
/// `ahead == behind` resolves to 0, i.e. "empty".
///
/// # Examples
///
/// ```rust
/// use deque_engines::deque::ring::distance;
///
/// assert_eq!(distance(5, 2, 8), 3);
/// assert_eq!(distance(1, 6, 8), 3);
/// assert_eq!(distance(4, 4, 8), 0);
/// ```
#[inline]
#[must_use]
pub const fn distance(ahead: usize, behind: usize, modulus: usize) -> usize {
    if ahead >= behind {
        ahead - behind
    } else {
        ahead + modulus - behind
    }
}

/// Maps a logical offset from `head` onto a physical slot, wrapping at most once.
///
/// `logical` must be smaller than `modulus`.
#[inline]
#[must_use]
pub const fn offset(head: usize, logical: usize, modulus: usize) -> usize {
    let physical = head + logical;
    if physical >= modulus {
        physical - modulus
    } else {
        physical
    }
}
