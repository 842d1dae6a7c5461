use tracing::trace;

use crate::error::{Collection, Error, Result};
use crate::seq_list::LinkedList;

/// First-in-first-out queue over a singly linked list.
///
/// Values enter at the tail and leave from the head, so `dequeue` always
/// returns the value that has been resident longest.
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub fn enqueue(&mut self, val: T) {
        self.list.append_tail(val);
    }

    /// Removes and returns the oldest value.
    ///
    /// Fails with [`Error::EmptyCollection`] when nothing is queued; the queue
    /// is left untouched in that case.
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_head().map_err(|_| {
            trace!("dequeue on empty queue");
            Error::EmptyCollection(Collection::Queue)
        })
    }

    pub fn peek(&self) -> Result<&T> {
        self.list
            .peek_head()
            .map_err(|_| Error::EmptyCollection(Collection::Queue))
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}
