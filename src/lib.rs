//! # deque-engines
//!
//! Double-ended queues with two interchangeable backing strategies behind one
//! capability contract.
//!
//! ## Overview
//!
//! - **[`Deque`](deque::Deque)**: the shared contract (insert and remove at
//!   either end, indexed access, size, emptiness, diagnostic printing)
//! - **[`CircularArrayDeque`](deque::CircularArrayDeque)**: growable ring buffer
//!   with amortized O(1) insertion and O(1) indexed access
//! - **[`SentinelLinkedDeque`](deque::SentinelLinkedDeque)**: circular
//!   doubly-linked list anchored by a sentinel node, strictly O(1) at both ends
//!
//! Emptiness and out-of-bounds access are reported as `None`. The only failure
//! is capacity exhaustion in the ring buffer, reported as
//! [`CapacityError`](deque::CapacityError) by the `try_add_*` methods.
//!
//! ## Feature Flags
//!
//! - `array`: [`CircularArrayDeque`](deque::CircularArrayDeque) and
//!   [`CapacityError`](deque::CapacityError)
//! - `linked`: [`SentinelLinkedDeque`](deque::SentinelLinkedDeque)
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Growth events and capacity exhaustion are reported through [`tracing`].
//! The library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "array", feature = "linked"))]
//! # fn main() {
//! use deque_engines::prelude::*;
//!
//! let mut array: CircularArrayDeque<i32> = CircularArrayDeque::new();
//! let mut linked: SentinelLinkedDeque<i32> = SentinelLinkedDeque::new();
//!
//! for deque in [&mut array as &mut dyn Deque<i32>, &mut linked] {
//!     deque.add_last(1);
//!     deque.add_last(2);
//!     deque.add_first(0);
//! }
//!
//! assert_eq!(array.iter().collect::<Vec<_>>(), linked.iter().collect::<Vec<_>>());
//! # }
//! # #[cfg(not(all(feature = "array", feature = "linked")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`Deque`](crate::deque::Deque) contract and every enabled
/// engine.
///
/// # Usage
///
/// ```rust
/// use deque_engines::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deque::Deque;

    #[cfg(feature = "array")]
    pub use crate::deque::{CapacityError, CircularArrayDeque};

    #[cfg(feature = "linked")]
    pub use crate::deque::SentinelLinkedDeque;
}

pub mod deque;
