//! Generic tests for the Heap and DecreaseKeyHeap traits
//!
//! These tests only use the trait interface, so they run unchanged against
//! every ordering policy that yields a min-heap over `i32`.

use rust_pairing_heap::compare::Compare;
use rust_pairing_heap::pairing::PairingHeap;
use rust_pairing_heap::{DecreaseKeyHeap, Heap, HeapError};

/// Hand-written `<` ordering, exercising the custom policy path
#[derive(Default, Clone, Copy)]
struct NaturalLess;

impl Compare<i32> for NaturalLess {
    fn less(&self, a: &i32, b: &i32) -> bool {
        a < b
    }
}

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    heap.push(5);
    heap.push(1);
    heap.push(10);
    heap.push(3);

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(10));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test decrease_key operations extensively
fn test_decrease_key_operations<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();

    let _h1 = heap.push_with_handle(100);
    let h2 = heap.push_with_handle(200);
    let _h3 = heap.push_with_handle(300);
    let h4 = heap.push_with_handle(400);

    assert_eq!(heap.peek(), Some(&100));

    // Decrease key of element not at min
    heap.decrease_key(&h2, 50).unwrap();
    assert_eq!(heap.peek(), Some(&50));

    // Decrease key to become new min
    heap.decrease_key(&h4, 25).unwrap();
    assert_eq!(heap.peek(), Some(&25));

    // Decrease key of current min even more
    heap.decrease_key(&h4, 1).unwrap();
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(50));
    assert_eq!(heap.pop(), Some(100));
    assert_eq!(heap.pop(), Some(300));
    assert_eq!(heap.pop(), None);
}

/// Test decrease_key on multiple elements
fn test_multiple_decrease_keys<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let mut handles = Vec::new();

    for i in 0..20 {
        handles.push(heap.push_with_handle((i + 1) * 100));
    }

    for (i, handle) in handles.iter().enumerate() {
        heap.decrease_key(handle, i as i32).unwrap();
    }

    assert_eq!(heap.peek(), Some(&0));
    for i in 0..20 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test that raising a key is rejected without side effects
fn test_increase_rejected<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let h1 = heap.push_with_handle(10);
    heap.push(20);

    assert_eq!(heap.decrease_key(&h1, 30), Err(HeapError::InvalidPriority));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Some(10));
    assert_eq!(heap.pop(), Some(20));
}

/// Test decrease_key after pop reports a stale handle
fn test_decrease_key_after_pop<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handle = heap.push_with_handle(10);
    heap.push(20);

    assert_eq!(heap.pop(), Some(10));
    assert_eq!(heap.decrease_key(&handle, 1), Err(HeapError::InvalidHandle));
    assert_eq!(heap.peek(), Some(&20));
}

/// Test decrease_key to the same value (edge case)
fn test_decrease_key_same<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handle = heap.push_with_handle(10);
    heap.push(5);

    assert_eq!(heap.decrease_key(&handle, 10), Ok(()));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(10));
}

/// Test with duplicate values
fn test_duplicate_values<H: Heap<i32>>() {
    let mut heap = H::new();
    heap.push(5);
    heap.push(5);
    heap.push(5);
    heap.push(1);

    assert_eq!(heap.pop(), Some(1));
    for _ in 0..3 {
        assert_eq!(heap.pop(), Some(5));
    }
    assert!(heap.is_empty());
}

/// Test many operations in sequence
fn test_stress_operations<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let mut handles = Vec::new();

    for i in 0..100 {
        handles.push(heap.push_with_handle(i * 2));
    }

    for i in (0..100).step_by(3) {
        heap.decrease_key(&handles[i], i as i32 * 2 - 1).unwrap();
    }

    for _ in 0..20 {
        heap.pop();
    }

    assert!(!heap.is_empty());
    assert!(heap.peek().is_some());

    let mut count = 0;
    while heap.pop().is_some() {
        count += 1;
    }
    assert_eq!(count, 80);
}

/// Test that peek doesn't modify heap
fn test_peek_idempotent<H: Heap<i32>>() {
    let mut heap = H::new();
    heap.push(5);
    heap.push(1);

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Some(1));
}

/// Test single element heap
fn test_single_element<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handle = heap.push_with_handle(42);

    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), Some(&42));

    heap.decrease_key(&handle, 10).unwrap();
    assert_eq!(heap.peek(), Some(&10));

    assert_eq!(heap.pop(), Some(10));
    assert!(heap.is_empty());
}

/// Test clear followed by reuse
fn test_clear_and_reuse<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let stale = heap.push_with_handle(3);
    heap.push(1);
    heap.push(2);

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.decrease_key(&stale, 0), Err(HeapError::InvalidHandle));

    heap.push(7);
    assert_eq!(heap.pop(), Some(7));
}

/// Test with extreme values
fn test_extreme_values<H: Heap<i32>>() {
    let mut heap = H::new();
    heap.push(i32::MAX);
    heap.push(0);
    heap.push(i32::MIN);

    assert_eq!(heap.pop(), Some(i32::MIN));
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(heap.pop(), Some(i32::MAX));
}

macro_rules! heap_suite {
    ($module:ident, $heap:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$heap>();
            }

            #[test]
            fn decrease_key_operations() {
                test_decrease_key_operations::<$heap>();
            }

            #[test]
            fn multiple_decrease_keys() {
                test_multiple_decrease_keys::<$heap>();
            }

            #[test]
            fn increase_rejected() {
                test_increase_rejected::<$heap>();
            }

            #[test]
            fn decrease_key_after_pop() {
                test_decrease_key_after_pop::<$heap>();
            }

            #[test]
            fn decrease_key_same() {
                test_decrease_key_same::<$heap>();
            }

            #[test]
            fn duplicate_values() {
                test_duplicate_values::<$heap>();
            }

            #[test]
            fn stress_operations() {
                test_stress_operations::<$heap>();
            }

            #[test]
            fn peek_idempotent() {
                test_peek_idempotent::<$heap>();
            }

            #[test]
            fn single_element() {
                test_single_element::<$heap>();
            }

            #[test]
            fn clear_and_reuse() {
                test_clear_and_reuse::<$heap>();
            }

            #[test]
            fn extreme_values() {
                test_extreme_values::<$heap>();
            }
        }
    };
}

heap_suite!(pairing_min_order, PairingHeap<i32>);
heap_suite!(pairing_custom_order, PairingHeap<i32, NaturalLess>);
