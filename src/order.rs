//! Ordering strategies for the queue.
//!
//! The queue never compares keys directly; it asks the [`Compare`] strategy
//! it was constructed with. One engine code path serves both the natural
//! order and caller-supplied orderings.

use std::cmp::Ordering;

/// A total order over `K`, fixed at queue construction.
///
/// Implementations must be consistent: `compare(a, b)` reversed equals
/// `compare(b, a)`, and the order must be transitive. The queue's heap
/// invariant is only meaningful under a total order.
pub trait Compare<K> {
    /// Three-way comparison of two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The key type's own [`Ord`] ordering. Zero-sized; the default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Compare<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparison closure into a [`Compare`] strategy.
///
/// A wrapper struct rather than a blanket impl for `Fn` types, so that
/// `NaturalOrder` and closure-backed strategies can coexist coherently.
///
/// # Examples
///
/// ```
/// use ipq::{IndexedPriorityQueue, OrderBy};
///
/// // Order f64 keys by their absolute value.
/// let mut queue = IndexedPriorityQueue::with_comparator(
///     4,
///     OrderBy(|a: &f64, b: &f64| a.abs().total_cmp(&b.abs())),
/// );
/// queue.insert(0, -1.5).unwrap();
/// queue.insert(1, 0.5).unwrap();
/// assert_eq!(queue.min_index().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<F>(
    /// The comparison closure.
    pub F,
);

impl<K, F> Compare<K> for OrderBy<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn order_by_applies_closure() {
        let reversed = OrderBy(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.compare(&2, &1), Ordering::Less);
    }
}
