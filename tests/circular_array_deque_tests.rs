#![cfg(feature = "array")]
//! Unit tests for CircularArrayDeque.
//!
//! These tests cover the ring-buffer engine through its public surface:
//! cursor wrap-around, growth, capacity limits and the standard traits.

use deque_engines::deque::{CapacityError, CircularArrayDeque, DEFAULT_CAPACITY};
use rstest::rstest;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_deque_with_default_capacity() {
    let deque: CircularArrayDeque<i32> = CircularArrayDeque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.size(), 0);
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(3, 3)]
#[case(100, 100)]
fn test_with_capacity(#[case] requested: usize, #[case] expected: usize) {
    let deque: CircularArrayDeque<i32> = CircularArrayDeque::with_capacity(requested);
    assert_eq!(deque.capacity(), expected);
    assert!(deque.is_empty());
}

#[rstest]
fn test_default_matches_new() {
    let deque: CircularArrayDeque<String> = CircularArrayDeque::default();
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert!(deque.is_empty());
}

// =============================================================================
// Wrap-around
// =============================================================================

#[rstest]
fn test_add_first_wraps_to_end_of_buffer() {
    let mut deque = CircularArrayDeque::new();
    deque.add_first(1);
    deque.add_first(0);
    deque.add_last(2);
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[rstest]
fn test_cursors_cycle_through_buffer_without_growing() {
    let mut deque = CircularArrayDeque::new();
    for value in 0..100 {
        deque.add_last(value);
        deque.add_last(value + 1000);
        assert_eq!(deque.remove_first(), Some(value));
        assert_eq!(deque.remove_last(), Some(value + 1000));
    }
    assert!(deque.is_empty());
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
fn test_get_wraps_around_buffer_end() {
    let mut deque = CircularArrayDeque::new();
    for value in 0..6 {
        deque.add_last(value);
    }
    for _ in 0..4 {
        deque.remove_first();
    }
    for value in 6..10 {
        deque.add_last(value);
    }
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    let collected: Vec<Option<&i32>> = (0..6).map(|index| deque.get(index)).collect();
    assert_eq!(
        collected,
        vec![Some(&4), Some(&5), Some(&6), Some(&7), Some(&8), Some(&9)]
    );
    assert_eq!(deque.get(6), None);
}

// =============================================================================
// Growth
// =============================================================================

#[rstest]
fn test_growth_preserves_order_over_many_growth_events() {
    let mut deque = CircularArrayDeque::new();
    for value in 1..=1000 {
        deque.add_last(value);
    }
    assert!(deque.capacity() > 1000);
    for index in 0..1000 {
        assert_eq!(deque.get(index), Some(&(index as i32 + 1)));
    }
}

#[rstest]
fn test_growth_from_front_insertions_preserves_order() {
    let mut deque = CircularArrayDeque::new();
    for value in 0..300 {
        deque.add_first(value);
    }
    let collected: Vec<i32> = deque.iter().copied().collect();
    let expected: Vec<i32> = (0..300).rev().collect();
    assert_eq!(collected, expected);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(63)]
#[case(64)]
fn test_growth_from_every_wrap_offset(#[case] capacity: usize) {
    for shift in 0..capacity {
        let mut deque = CircularArrayDeque::with_capacity(capacity);
        for value in 0..shift {
            deque.add_last(value);
            deque.remove_first();
        }
        for value in 0..(capacity * 3) {
            deque.add_last(value);
        }
        let collected: Vec<usize> = deque.iter().copied().collect();
        assert_eq!(collected, (0..capacity * 3).collect::<Vec<_>>());
    }
}

#[rstest]
fn test_capacity_never_shrinks() {
    let mut deque: CircularArrayDeque<i32> = (0..100).collect();
    let grown = deque.capacity();
    while deque.remove_last().is_some() {}
    assert_eq!(deque.capacity(), grown);
}

// =============================================================================
// Capacity limits
// =============================================================================

#[rstest]
fn test_try_add_returns_item_when_exhausted() {
    let mut deque = CircularArrayDeque::with_capacity_limit(4, 4);
    for value in 0..3 {
        assert!(deque.try_add_last(value).is_ok());
    }

    let error = deque.try_add_first(-1).unwrap_err();
    assert_eq!(
        error,
        CapacityError {
            item: -1,
            capacity: 4,
            limit: 4,
        }
    );
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[rstest]
fn test_growth_stops_at_limit() {
    let mut deque = CircularArrayDeque::with_capacity_limit(8, 30);
    for value in 0..17 {
        deque.add_last(value);
    }
    assert_eq!(deque.capacity(), 18);

    deque.add_last(17);
    assert_eq!(deque.capacity(), 30);

    for value in 18..29 {
        deque.add_last(value);
    }
    assert_eq!(deque.size(), 29);
    assert!(deque.try_add_last(29).is_err());
    assert_eq!(deque.remove_first(), Some(0));
    assert!(deque.try_add_last(29).is_ok());
}

#[rstest]
#[should_panic(expected = "capacity exhausted")]
fn test_add_first_panics_when_exhausted() {
    let mut deque = CircularArrayDeque::with_capacity_limit(1, 1);
    deque.add_first(1);
}

// =============================================================================
// Access helpers
// =============================================================================

#[rstest]
fn test_front_and_back() {
    let mut deque = CircularArrayDeque::new();
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    deque.add_last(2);
    deque.add_first(1);
    assert_eq!(deque.front(), Some(&1));
    assert_eq!(deque.back(), Some(&2));
}

#[rstest]
fn test_get_mut_updates_element() {
    let mut deque: CircularArrayDeque<i32> = (0..5).collect();
    if let Some(element) = deque.get_mut(3) {
        *element = 30;
    }
    assert_eq!(deque.get(3), Some(&30));
    assert_eq!(deque.get_mut(5), None);
}

#[rstest]
fn test_clear_keeps_capacity() {
    let mut deque: CircularArrayDeque<i32> = (0..20).collect();
    let capacity = deque.capacity();
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.remove_first(), None);
    assert_eq!(deque.capacity(), capacity);
    deque.add_last(1);
    assert_eq!(deque.get(0), Some(&1));
}

// =============================================================================
// Iterators and standard traits
// =============================================================================

#[rstest]
fn test_iter_is_double_ended_and_exact_size() {
    let deque: CircularArrayDeque<i32> = (0..10).collect();
    let mut iterator = deque.iter();
    assert_eq!(iterator.len(), 10);
    assert_eq!(iterator.next(), Some(&0));
    assert_eq!(iterator.next_back(), Some(&9));
    assert_eq!(iterator.len(), 8);
    let reversed: Vec<i32> = deque.iter().rev().copied().collect();
    assert_eq!(reversed, (0..10).rev().collect::<Vec<_>>());
}

#[rstest]
fn test_into_iter_consumes_front_to_back() {
    let deque: CircularArrayDeque<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let collected: Vec<String> = deque.into_iter().collect();
    assert_eq!(collected, vec!["a", "b", "c"]);
}

#[rstest]
fn test_extend_appends_to_back() {
    let mut deque: CircularArrayDeque<i32> = (0..3).collect();
    deque.extend(3..6);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
}

#[rstest]
fn test_equality_ignores_capacity_and_cursor_position() {
    let mut left = CircularArrayDeque::with_capacity(64);
    left.extend([1, 2, 3]);

    let mut right = CircularArrayDeque::new();
    right.add_first(2);
    right.add_first(1);
    right.add_last(3);

    assert_eq!(left, right);
    right.remove_last();
    assert_ne!(left, right);
}

#[rstest]
fn test_equal_deques_hash_equal() {
    fn hash_of(deque: &CircularArrayDeque<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        deque.hash(&mut hasher);
        hasher.finish()
    }

    let left: CircularArrayDeque<i32> = (0..10).collect();
    let mut right = CircularArrayDeque::with_capacity(2);
    for value in (0..10).rev() {
        right.add_first(value);
    }
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[rstest]
fn test_clone_is_independent() {
    let original: CircularArrayDeque<i32> = (0..5).collect();
    let mut cloned = original.clone();
    cloned.add_last(5);
    assert_eq!(original.size(), 5);
    assert_eq!(cloned.size(), 6);
}

#[rstest]
fn test_debug_format() {
    let deque: CircularArrayDeque<i32> = (1..=3).collect();
    assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
}
