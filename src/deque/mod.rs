//! Double-ended queues.
//!
//! This module provides the [`Deque`] capability contract and two engines
//! that satisfy it:
//!
//! - [`CircularArrayDeque`]: growable ring buffer with amortized O(1) insertion
//! - [`SentinelLinkedDeque`]: circular doubly-linked list anchored by a sentinel node
//!
//! Code that only needs deque semantics should depend on [`Deque`] rather than
//! on a particular engine. The trait is dyn-compatible.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(all(feature = "array", feature = "linked"))]
//! # fn main() {
//! use deque_engines::deque::{CircularArrayDeque, Deque, SentinelLinkedDeque};
//!
//! fn rotate<D: Deque<i32>>(deque: &mut D) {
//!     if let Some(front) = deque.remove_first() {
//!         deque.add_last(front);
//!     }
//! }
//!
//! let mut array: CircularArrayDeque<i32> = (1..=3).collect();
//! let mut linked: SentinelLinkedDeque<i32> = (1..=3).collect();
//! rotate(&mut array);
//! rotate(&mut linked);
//!
//! assert_eq!(array.get(0), Some(&2));
//! assert_eq!(linked.get(2), Some(&1));
//! # }
//! # #[cfg(not(all(feature = "array", feature = "linked")))]
//! # fn main() {}
//! ```

use std::fmt;

#[cfg(feature = "array")]
mod circular_array;
#[cfg(feature = "array")]
mod error;
pub mod ring;
#[cfg(feature = "linked")]
mod sentinel_linked;

#[cfg(feature = "array")]
pub use circular_array::{
    CircularArrayDeque, CircularArrayDequeIntoIterator, CircularArrayDequeIterator,
    DEFAULT_CAPACITY,
};
#[cfg(feature = "array")]
pub use error::CapacityError;
#[cfg(feature = "linked")]
pub use sentinel_linked::{
    SentinelLinkedDeque, SentinelLinkedDequeIntoIterator, SentinelLinkedDequeIterator,
};

/// The capability shared by every deque engine.
///
/// Insertion and removal happen at either end; elements are addressed by a
/// zero-based index counted from the front. Emptiness and out-of-bounds
/// access are ordinary conditions and are reported as `None`.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "linked")]
/// # fn main() {
/// use deque_engines::deque::{Deque, SentinelLinkedDeque};
///
/// let mut deque: Box<dyn Deque<i32>> = Box::new(SentinelLinkedDeque::<i32>::new());
/// deque.add_last(1);
/// deque.add_last(2);
/// deque.add_first(0);
///
/// assert_eq!(deque.size(), 3);
/// assert_eq!(deque.get(0), Some(&0));
/// assert_eq!(deque.remove_first(), Some(0));
/// assert_eq!(deque.size(), 2);
/// # }
/// # #[cfg(not(feature = "linked"))]
/// # fn main() {}
/// ```
pub trait Deque<T> {
    /// Inserts `item` at the front.
    fn add_first(&mut self, item: T);

    /// Inserts `item` at the back.
    fn add_last(&mut self, item: T);

    /// Removes and returns the front element, or `None` if the deque is empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the back element, or `None` if the deque is empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Returns the element at `index` counted from the front, or `None` if
    /// `index >= self.size()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Writes the elements front to back, separated by single spaces.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by `output`.
    fn write_sequence(&self, output: &mut dyn fmt::Write) -> fmt::Result
    where
        T: fmt::Display;

    /// Prints the elements front to back, separated by single spaces, followed
    /// by a newline on standard output.
    ///
    /// This is a diagnostic aid only. If an element's `Display` fails,
    /// nothing is printed and the failure is logged at `warn` level.
    fn print_sequence(&self)
    where
        T: fmt::Display,
    {
        match render_sequence::<T, Self>(self) {
            Ok(line) => println!("{line}"),
            Err(fmt::Error) => {
                tracing::warn!(size = self.size(), "an element failed to format; sequence not printed");
            }
        }
    }
}

/// Renders the whole sequence of `deque` into a fresh line.
fn render_sequence<T, D>(deque: &D) -> Result<String, fmt::Error>
where
    T: fmt::Display,
    D: Deque<T> + ?Sized,
{
    let mut line = String::new();
    deque.write_sequence(&mut line)?;
    Ok(line)
}

/// Writes `elements` separated by single spaces.
#[cfg(any(feature = "array", feature = "linked"))]
pub(crate) fn write_separated<'a, T, I>(output: &mut dyn fmt::Write, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            output.write_char(' ')?;
        }
        write!(output, "{element}")?;
    }
    Ok(())
}

/// Formats `elements` as `[a, b, c]`.
#[cfg(any(feature = "array", feature = "linked"))]
pub(crate) fn display_bracketed<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    elements: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}
