//! A binary min-heap over a growable array with an injected ordering.
//!
//! The heap is laid out 0-based: the parent of `i` is `(i - 1) / 2`, its
//! children are `2i + 1` and `2i + 2`. Backing storage doubles when full
//! and halves once utilization drops to a quarter, so both insert and
//! extract stay amortized O(log n).
//!
//! The ordering is a [`Comparator`] chosen at construction. "Min" means
//! "least according to the comparator"; wrapping it in [`Reversed`] turns
//! the same engine into a max-heap.

use std::cmp::Ordering;

use crate::error::HeapError;

/// Smallest capacity the heap shrinks down to.
const MIN_CAPACITY: usize = 4;

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Total order used by an [`IndexedMinHeap`].
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their own `Ord` impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by an extracted key.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Orders elements with an arbitrary comparison function.
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> Comparator<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Inverts another comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

// ---------------------------------------------------------------------------
// IndexedMinHeap
// ---------------------------------------------------------------------------

/// Array-backed binary min-heap with membership testing.
///
/// Unlike [`std::collections::BinaryHeap`], the heap can answer "is this
/// element already queued?" via [`contains`](Self::contains). The test is
/// a linear scan using `PartialEq`, not the comparator, so two elements
/// with equal keys are still told apart.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> IndexedMinHeap<T, NaturalOrder> {
    /// An empty heap ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for IndexedMinHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, F> IndexedMinHeap<T, ByKey<F>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// An empty heap ordered by the key `f` extracts, ascending.
    pub fn by_key(f: F) -> Self {
        Self::with_comparator(ByKey(f))
    }
}

impl<T, F> IndexedMinHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// An empty heap ordered by the comparison function `f`.
    pub fn by(f: F) -> Self {
        Self::with_comparator(FnOrder(f))
    }
}

impl<T, C: Comparator<T>> IndexedMinHeap<T, C> {
    /// An empty heap using `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(MIN_CAPACITY, cmp)
    }

    /// An empty heap using `cmp` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(MIN_CAPACITY)),
            cmp,
        }
    }

    /// Build a heap from arbitrary values in O(n) by sinking every
    /// internal node, last one first.
    pub fn from_vec(values: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: values, cmp };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current size of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The comparator in use.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Drop every element. Capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate over queued elements in heap (not sorted) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Add `item`, growing the backing storage if it is full.
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            // Capacity doubles on overflow.
            let extra = self.data.capacity().max(MIN_CAPACITY);
            self.data.reserve_exact(extra);
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// The least element, without removing it.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    /// Remove and return the least element.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        self.maybe_shrink();
        Ok(min)
    }

    /// Drain the heap into a vector sorted from least to greatest.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_min() {
            out.push(item);
        }
        out
    }

    fn maybe_shrink(&mut self) {
        let cap = self.data.capacity();
        if cap > MIN_CAPACITY && self.data.len() <= cap / 4 {
            self.data.shrink_to((cap / 2).max(MIN_CAPACITY));
        }
    }

    /// `data[i] < data[j]` under the comparator.
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.data[i], &self.data[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.less(right, left) {
                child = right;
            }
            if !self.less(child, i) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }
}

impl<T: PartialEq, C> IndexedMinHeap<T, C> {
    /// Whether an element equal to `item` is queued. O(n).
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Slot of the first queued element equal to `item`. O(n).
    pub fn position(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|x| x == item)
    }
}
