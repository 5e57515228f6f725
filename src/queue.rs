//! IndexedPriorityQueue - a binary min-heap addressable by external index.
//!
//! Three parallel arrays keep each other consistent: `heap` holds external
//! indices in binary-heap order (1-based, slot 0 unused), `pos` maps an
//! external index back to its current heap position, and `keys` stores the
//! key for each present index. The inverse mapping is what makes keyed
//! update and removal logarithmic instead of linear.
//!
//! # Complexity
//!
//! - `insert`: O(log n), amortized O(1) growth
//! - `remove_min`: O(log n)
//! - `change_key` / `decrease_key` / `increase_key` / `delete`: O(log n)
//! - `min_index` / `min_key` / `key_of` / `contains`: O(1)
//! - `len` / `is_empty` / `capacity`: O(1)

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::QueueError;
use crate::order::{Compare, NaturalOrder};

/// Capacity used by [`IndexedPriorityQueue::default`].
const DEFAULT_CAPACITY: usize = 10;

/// A min-priority queue over keys addressable by a caller-assigned index.
///
/// Indices are small integers in `0..capacity`; each may hold at most one
/// key at a time. Beyond the usual insert / peek-min / remove-min surface,
/// any present element can be updated or removed through its index in
/// O(log n), which is what Dijkstra-style relaxation and event reschedule
/// loops need.
///
/// The ordering strategy is fixed at construction: [`new`](Self::new) uses
/// the key type's natural order, [`with_comparator`](Self::with_comparator)
/// accepts any [`Compare`] implementation.
///
/// # Examples
///
/// ```
/// use ipq::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new(8);
/// queue.insert(0, 50).unwrap();
/// queue.insert(1, 10).unwrap();
/// queue.insert(2, 40).unwrap();
///
/// assert_eq!(queue.min_index().unwrap(), 1);
/// queue.decrease_key(2, 5).unwrap();
/// assert_eq!(queue.remove_min().unwrap(), (2, 5));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, C = NaturalOrder> {
    /// Binary heap of external indices, 1-based (slot 0 is never read).
    heap: Vec<usize>,
    /// External index -> current heap position; `None` marks an absent index.
    pos: Vec<Option<usize>>,
    /// External index -> key; populated exactly for present indices.
    keys: Vec<Option<K>>,
    /// Number of present elements (occupied heap positions `1..=len`).
    len: usize,
    /// Ordering strategy.
    cmp: C,
}

impl<K: Ord> IndexedPriorityQueue<K> {
    /// Creates an empty queue for indices `0..capacity` under the key
    /// type's natural order.
    ///
    /// A `capacity` of zero is allowed; the first insert grows the arrays.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let queue: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new(16);
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, NaturalOrder)
    }
}

impl<K: Ord> Default for IndexedPriorityQueue<K> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, C: Compare<K>> IndexedPriorityQueue<K, C> {
    /// Creates an empty queue for indices `0..capacity` with a custom
    /// ordering strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::{IndexedPriorityQueue, OrderBy};
    ///
    /// // A max-queue: reverse the natural order.
    /// let mut queue =
    ///     IndexedPriorityQueue::with_comparator(4, OrderBy(|a: &u32, b: &u32| b.cmp(a)));
    /// queue.insert(0, 1).unwrap();
    /// queue.insert(1, 9).unwrap();
    /// assert_eq!(queue.min_index().unwrap(), 1);
    /// ```
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: vec![0; capacity + 1],
            pos: vec![None; capacity],
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
            cmp,
        }
    }

    /// Returns the number of present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no element is present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current allocated extent of the index universe.
    ///
    /// Grows (never shrinks) as [`insert`](Self::insert) demands.
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if `index` currently holds a key.
    ///
    /// Out-of-range indices are simply not present; this never errors.
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity() && self.pos[index].is_some()
    }

    /// Inserts `key` at `index`.
    ///
    /// Grows the backing arrays (doubling) when `index` falls outside the
    /// current capacity; insertion is the only operation that grows.
    ///
    /// Returns [`QueueError::DuplicateIndex`] if `index` already holds a
    /// key. The queue is unchanged on rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::{IndexedPriorityQueue, QueueError};
    ///
    /// let mut queue = IndexedPriorityQueue::new(2);
    /// queue.insert(0, 7).unwrap();
    /// assert_eq!(
    ///     queue.insert(0, 8),
    ///     Err(QueueError::DuplicateIndex { index: 0 })
    /// );
    /// // Out-of-range index on insert grows the queue instead of failing.
    /// queue.insert(5, 3).unwrap();
    /// assert!(queue.capacity() >= 6);
    /// ```
    pub fn insert(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        if self.contains(index) {
            return Err(QueueError::DuplicateIndex { index });
        }
        if index >= self.capacity() {
            self.grow(index + 1);
        }
        self.len += 1;
        let position = self.len;
        self.heap[position] = index;
        self.pos[index] = Some(position);
        self.keys[index] = Some(key);
        self.sift_up(position);
        trace!(index, len = self.len, "inserted");
        Ok(())
    }

    /// Returns the external index holding the minimum key.
    ///
    /// Returns [`QueueError::Empty`] on an empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(2, 30).unwrap();
    /// queue.insert(3, 20).unwrap();
    /// assert_eq!(queue.min_index().unwrap(), 3);
    /// ```
    pub fn min_index(&self) -> Result<usize, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.heap[1])
    }

    /// Returns a reference to the minimum key without removing it.
    ///
    /// Returns [`QueueError::Empty`] on an empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 30).unwrap();
    /// queue.insert(1, 20).unwrap();
    /// assert_eq!(queue.min_key().unwrap(), &20);
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn min_key(&self) -> Result<&K, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.key(self.heap[1]))
    }

    /// Removes the minimum element and returns its `(index, key)` pair.
    ///
    /// The last heap position replaces the root and sinks until the heap
    /// order holds again. The removed index becomes absent and may be
    /// reused by a later insert.
    ///
    /// Returns [`QueueError::Empty`] on an empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 2).unwrap();
    /// queue.insert(1, 1).unwrap();
    /// assert_eq!(queue.remove_min().unwrap(), (1, 1));
    /// assert_eq!(queue.remove_min().unwrap(), (0, 2));
    /// assert!(queue.remove_min().is_err());
    /// ```
    pub fn remove_min(&mut self) -> Result<(usize, K), QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let min = self.heap[1];
        self.exchange(1, self.len);
        self.len -= 1;
        if self.len > 0 {
            self.sift_down(1);
        }
        self.pos[min] = None;
        let key = self.take_key(min);
        trace!(index = min, len = self.len, "removed minimum");
        Ok((min, key))
    }

    /// Returns a reference to the key currently held at `index`.
    ///
    /// Returns [`QueueError::InvalidIndex`] when `index` is out of range,
    /// [`QueueError::NotFound`] when it is in range but absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(1, 42).unwrap();
    /// assert_eq!(queue.key_of(1).unwrap(), &42);
    /// assert!(queue.key_of(2).is_err());
    /// ```
    pub fn key_of(&self, index: usize) -> Result<&K, QueueError> {
        self.check_present(index)?;
        Ok(self.key(index))
    }

    /// Replaces the key at `index` with `key`, restoring heap order in
    /// whichever direction the change requires.
    ///
    /// The element first swims toward the root, then sinks from wherever it
    /// ended up; at most one of the two walks moves it.
    ///
    /// Returns [`QueueError::InvalidIndex`] or [`QueueError::NotFound`] as
    /// for [`key_of`](Self::key_of).
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 10).unwrap();
    /// queue.insert(1, 20).unwrap();
    /// queue.change_key(1, 5).unwrap();
    /// assert_eq!(queue.min_index().unwrap(), 1);
    /// ```
    pub fn change_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let position = self.check_present(index)?;
        self.keys[index] = Some(key);
        self.sift_up(position);
        self.sift_down(self.position_of(index));
        Ok(())
    }

    /// Replaces the key at `index` with a strictly smaller one.
    ///
    /// The strictness requirement is deliberate: callers such as
    /// shortest-path relaxation use the rejection to catch stale updates.
    /// A key equal to or greater than the current one is rejected with
    /// [`QueueError::NonMonotonicKeyChange`] and the queue is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::{IndexedPriorityQueue, QueueError};
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 10).unwrap();
    /// queue.decrease_key(0, 4).unwrap();
    /// assert_eq!(
    ///     queue.decrease_key(0, 4),
    ///     Err(QueueError::NonMonotonicKeyChange { index: 0 })
    /// );
    /// ```
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let position = self.check_present(index)?;
        if self.cmp.compare(&key, self.key(index)) != Ordering::Less {
            return Err(QueueError::NonMonotonicKeyChange { index });
        }
        self.keys[index] = Some(key);
        self.sift_up(position);
        Ok(())
    }

    /// Replaces the key at `index` with a strictly greater one.
    ///
    /// Symmetric to [`decrease_key`](Self::decrease_key): an equal or
    /// smaller key is rejected with [`QueueError::NonMonotonicKeyChange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 10).unwrap();
    /// queue.insert(1, 20).unwrap();
    /// queue.increase_key(0, 30).unwrap();
    /// assert_eq!(queue.min_index().unwrap(), 1);
    /// ```
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        let position = self.check_present(index)?;
        if self.cmp.compare(&key, self.key(index)) != Ordering::Greater {
            return Err(QueueError::NonMonotonicKeyChange { index });
        }
        self.keys[index] = Some(key);
        self.sift_down(position);
        Ok(())
    }

    /// Removes the element at `index`, wherever it sits in the heap, and
    /// returns its key.
    ///
    /// The last heap position takes over the vacated slot and then swims or
    /// sinks as needed (the replacement can land anywhere in the tree).
    ///
    /// Returns [`QueueError::InvalidIndex`] or [`QueueError::NotFound`] as
    /// for [`key_of`](Self::key_of).
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 10).unwrap();
    /// queue.insert(1, 20).unwrap();
    /// assert_eq!(queue.delete(0).unwrap(), 10);
    /// assert!(queue.delete(0).is_err());
    /// assert_eq!(queue.min_index().unwrap(), 1);
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<K, QueueError> {
        let position = self.check_present(index)?;
        self.exchange(position, self.len);
        self.len -= 1;
        if position <= self.len {
            self.sift_up(position);
            self.sift_down(position);
        }
        self.pos[index] = None;
        let key = self.take_key(index);
        trace!(index, len = self.len, "deleted");
        Ok(key)
    }

    /// Iterates over the present `(index, &key)` pairs in unspecified
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 30).unwrap();
    /// queue.insert(2, 10).unwrap();
    /// let mut pairs: Vec<(usize, i32)> = queue.iter().map(|(i, &k)| (i, k)).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(0, 30), (2, 10)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (usize, &K)> + '_ {
        self.heap[1..=self.len]
            .iter()
            .map(move |&index| (index, self.key(index)))
    }

    /// Removes every element, retaining allocated capacity for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipq::IndexedPriorityQueue;
    ///
    /// let mut queue = IndexedPriorityQueue::new(4);
    /// queue.insert(0, 1).unwrap();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 4);
    /// queue.insert(0, 2).unwrap();
    /// assert_eq!(queue.min_key().unwrap(), &2);
    /// ```
    pub fn clear(&mut self) {
        for position in 1..=self.len {
            let index = self.heap[position];
            self.pos[index] = None;
            self.keys[index] = None;
        }
        self.len = 0;
    }

    /// Validates range, then presence. Returns the heap position so callers
    /// skip a second lookup. Range failure always wins over absence.
    fn check_present(&self, index: usize) -> Result<usize, QueueError> {
        if index >= self.capacity() {
            return Err(QueueError::InvalidIndex {
                index,
                capacity: self.capacity(),
            });
        }
        self.pos[index].ok_or(QueueError::NotFound { index })
    }

    /// Doubles capacity until at least `min_capacity` slots exist.
    fn grow(&mut self, min_capacity: usize) {
        let old_capacity = self.capacity();
        let mut new_capacity = old_capacity.max(1);
        while new_capacity < min_capacity {
            new_capacity *= 2;
        }
        self.heap.resize(new_capacity + 1, 0);
        self.pos.resize(new_capacity, None);
        self.keys.resize_with(new_capacity, || None);
        debug!(old_capacity, new_capacity, "grew backing arrays");
    }

    /// Key for a present index. Callers must have established presence.
    fn key(&self, index: usize) -> &K {
        self.keys[index]
            .as_ref()
            .expect("present index has a key slot")
    }

    /// Takes the key out of a present index's slot.
    fn take_key(&mut self, index: usize) -> K {
        self.keys[index]
            .take()
            .expect("present index has a key slot")
    }

    /// Heap position of a present index.
    fn position_of(&self, index: usize) -> usize {
        self.pos[index].expect("present index has a heap position")
    }

    /// True if the key at heap position `a` orders strictly after the key
    /// at heap position `b`.
    fn greater(&self, a: usize, b: usize) -> bool {
        self.cmp
            .compare(self.key(self.heap[a]), self.key(self.heap[b]))
            == Ordering::Greater
    }

    /// Swaps two heap positions, keeping `pos` the exact inverse of `heap`.
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = Some(a);
        self.pos[self.heap[b]] = Some(b);
    }

    /// Swims the element at `position` toward the root while it orders
    /// before its parent.
    fn sift_up(&mut self, mut position: usize) {
        while position > 1 && self.greater(position / 2, position) {
            self.exchange(position, position / 2);
            position /= 2;
        }
    }

    /// Sinks the element at `position` toward the leaves while a child
    /// orders before it. The left child is kept on ties.
    fn sift_down(&mut self, mut position: usize) {
        while 2 * position <= self.len {
            let mut child = 2 * position;
            if child < self.len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(position, child) {
                break;
            }
            self.exchange(position, child);
            position = child;
        }
    }
}
