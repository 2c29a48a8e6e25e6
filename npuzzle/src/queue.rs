use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority queue used to store the search frontier.
pub trait MinPriorityQueue<T> {
    /// Adds `item` to the queue.
    fn insert(&mut self, item: T);

    /// Removes and returns the item with the minimal key, or `None` if the queue is empty.
    fn del_min(&mut self) -> Option<T>;

    /// Returns number of items in the queue.
    fn len(&self) -> usize;

    /// Returns `true` if the queue contains no items.
    #[inline] fn is_empty(&self) -> bool { self.len() == 0 }
}

struct Entry<T, K> {
    key: K,
    /// Insertion number, breaks ties between equal keys.
    seq: u64,
    item: T
}

impl<T, K: Ord> PartialEq for Entry<T, K> {
    #[inline] fn eq(&self, other: &Self) -> bool { self.key == other.key && self.seq == other.seq }
}

impl<T, K: Ord> Eq for Entry<T, K> {}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    #[inline] fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Reversed, so the max-heap pops the smallest key, and the earliest inserted among equal keys.
impl<T, K: Ord> Ord for Entry<T, K> {
    #[inline] fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary heap ordered by keys given by an explicit function of items.
///
/// Items with equal keys are removed in the order of insertion.
pub struct BinaryMinQueue<T, K, F> {
    heap: BinaryHeap<Entry<T, K>>,
    key: F,
    next_seq: u64
}

impl<T, K: Ord, F: Fn(&T) -> K> BinaryMinQueue<T, K, F> {
    /// Constructs an empty queue which orders items by `key`.
    pub fn new(key: F) -> Self {
        Self { heap: BinaryHeap::new(), key, next_seq: 0 }
    }

    pub fn with_capacity(capacity: usize, key: F) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity), key, next_seq: 0 }
    }

    /// Returns the item with the minimal key without removing it.
    #[inline] pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|e| &e.item)
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> MinPriorityQueue<T> for BinaryMinQueue<T, K, F> {
    fn insert(&mut self, item: T) {
        let key = (self.key)(&item);
        self.heap.push(Entry { key, seq: self.next_seq, item });
        self.next_seq += 1;
    }

    #[inline] fn del_min(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    #[inline] fn len(&self) -> usize { self.heap.len() }
}
