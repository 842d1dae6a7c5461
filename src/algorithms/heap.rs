use crate::error::{Collection, Error, Result};

/// Binary min-heap stored in a `Vec`.
///
/// The parent of index `i` is `(i - 1) / 2` and its children are `2i + 1` and
/// `2i + 2`. Every parent compares less than or equal to its children.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> MinHeap<T> {
        MinHeap { heap: Vec::new() }
    }

    pub fn insert(&mut self, val: T) {
        self.heap.push(val);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyCollection(Collection::Heap));
        }

        let min = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx] >= self.heap[parent] {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == idx {
                return;
            }

            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}
