use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is kept, which keeps iteration (and traces) reproducible
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;


/// Entry stored in the PriorityQueue
#[derive(Clone, Debug, PartialEq)]
pub struct QueueEntry<T, P> {
    pub item: T,
    pub priority: P,
}


/// Binary min-heap keyed on priority
/// - array backed, root at index 0, children of i at 2i+1 and 2i+2
/// - no decrease-key: pushing an item already in the queue adds a second entry,
///   callers are expected to discard the stale one when it surfaces
/// - ties are left in heap order, there is no secondary comparator
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
    heap: Vec<QueueEntry<T, P>>,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd + Copy,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity) }
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Smallest entry without removing it
    pub fn peek(&self) -> Option<&QueueEntry<T, P>> {
        self.heap.first()
    }

    /// Append the entry then sift it up to its place
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(QueueEntry { item, priority });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest entry, None when empty
    pub fn pop(&mut self) -> Option<QueueEntry<T, P>> {
        if self.heap.is_empty() {
            return None;
        }

        // Move the last leaf to the root, then restore the heap from the top
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        min
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            // Only move while strictly smaller than the parent
            if self.heap[index].priority < self.heap[parent].priority {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let n = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < n && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            // right only wins over left when strictly smaller
            if right < n && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
