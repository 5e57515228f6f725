//! Sorting through the queue.
//!
//! The classic priority-queue sort: insert everything, then drain the
//! minimum until the queue is empty. Thin wrapper over the engine with no
//! heap logic of its own.

use crate::queue::IndexedPriorityQueue;

/// Sorts `items` into non-decreasing order by draining an
/// [`IndexedPriorityQueue`].
///
/// O(n log n); the relative order of equal items is unspecified.
///
/// # Examples
///
/// ```
/// use ipq::pq_sort;
///
/// assert_eq!(pq_sort(vec![50, 10, 40, 20, 30]), vec![10, 20, 30, 40, 50]);
/// assert_eq!(pq_sort(Vec::<i32>::new()), Vec::<i32>::new());
/// ```
pub fn pq_sort<K: Ord>(items: Vec<K>) -> Vec<K> {
    let mut queue = IndexedPriorityQueue::new(items.len());
    for (index, key) in items.into_iter().enumerate() {
        queue
            .insert(index, key)
            .expect("enumerated indices are distinct");
    }

    let mut sorted = Vec::with_capacity(queue.len());
    while let Ok((_, key)) = queue.remove_min() {
        sorted.push(key);
    }
    sorted
}
