//! Indexed min-priority queue (ipq)
//!
//! An [`IndexedPriorityQueue`] maps a bounded universe of small integer
//! indices to keys of a totally ordered type. On top of the usual
//! insert / peek-min / remove-min operations, any present element can be
//! updated (`change_key`, `decrease_key`, `increase_key`) or removed
//! (`delete`) through its index in O(log n), which is what graph
//! relaxation and event-rescheduling workloads need from a heap.
//!
//! The engine is three parallel growable arrays: the binary heap of
//! indices, the index-to-heap-position inverse map, and the key storage.
//! No per-node allocation, no pointer graph.
//!
//! # Examples
//!
//! ```
//! use ipq::IndexedPriorityQueue;
//!
//! # fn main() -> Result<(), ipq::QueueError> {
//! let mut queue = IndexedPriorityQueue::new(8);
//! queue.insert(0, 50)?;
//! queue.insert(1, 10)?;
//! queue.insert(2, 40)?;
//!
//! assert_eq!(queue.min_index()?, 1);
//! queue.decrease_key(2, 5)?;
//! assert_eq!(queue.min_key()?, &5);
//!
//! let (index, key) = queue.remove_min()?;
//! assert_eq!((index, key), (2, 5));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod logging;
pub mod order;
pub mod queue;
pub mod sort;

// Re-export for convenience
pub use error::QueueError;
pub use order::{Compare, NaturalOrder, OrderBy};
pub use queue::IndexedPriorityQueue;
pub use sort::pq_sort;
