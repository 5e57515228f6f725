//! Error types for queue operations.
//!
//! Every rejection is a local, recoverable precondition violation: the
//! queue is left exactly as it was, and retrying without fixing the call is
//! pointless. Variants carry the offending index (and capacity where it
//! matters) so callers can report precisely what went wrong.

use thiserror::Error;

/// Rejection reasons for queue operations.
///
/// All variants are cheap value types; tests and callers can match or
/// compare them directly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The index is outside the current capacity. Only `insert` grows the
    /// queue; every other operation rejects out-of-range indices rather
    /// than silently growing. Range is always checked before presence, so
    /// a stale large index reports this, never [`NotFound`](Self::NotFound).
    #[error("index {index} is out of range for capacity {capacity}")]
    InvalidIndex {
        /// The out-of-range index the caller passed.
        index: usize,
        /// The queue's capacity at the time of the call.
        capacity: usize,
    },

    /// The index is in range but currently holds no key.
    #[error("index {index} is not in the queue")]
    NotFound {
        /// The absent index the caller passed.
        index: usize,
    },

    /// A minimum query or removal was attempted on an empty queue.
    #[error("queue underflow: no elements are present")]
    Empty,

    /// An insert targeted an index that already holds a key. One index maps
    /// to at most one key; remove it first to replace it wholesale, or use
    /// a key-change operation.
    #[error("index {index} is already in the queue")]
    DuplicateIndex {
        /// The already-present index the caller passed.
        index: usize,
    },

    /// `decrease_key` was called with a key not strictly less than the
    /// current one, or `increase_key` with one not strictly greater.
    /// Strictness lets callers (shortest-path relaxation, reschedule
    /// loops) detect stale updates instead of silently no-opping.
    #[error("non-monotonic key change for index {index}")]
    NonMonotonicKeyChange {
        /// The index whose key change violated monotonicity.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_display() {
        let err = QueueError::InvalidIndex {
            index: 12,
            capacity: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("capacity 8"));
    }

    #[test]
    fn not_found_display() {
        let msg = QueueError::NotFound { index: 3 }.to_string();
        assert!(msg.contains("index 3"));
        assert!(msg.contains("not in the queue"));
    }

    #[test]
    fn empty_display() {
        let msg = QueueError::Empty.to_string();
        assert!(msg.contains("underflow"));
    }

    #[test]
    fn duplicate_index_display() {
        let msg = QueueError::DuplicateIndex { index: 5 }.to_string();
        assert!(msg.contains("index 5"));
        assert!(msg.contains("already"));
    }

    #[test]
    fn non_monotonic_display() {
        let msg = QueueError::NonMonotonicKeyChange { index: 1 }.to_string();
        assert!(msg.contains("non-monotonic"));
        assert!(msg.contains("index 1"));
    }
}
