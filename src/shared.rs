use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::Result;
use crate::queue::Queue;
use crate::stack::Stack;

// One lock per instance. The list's head/tail updates are not independently
// safe for concurrent mutators, so every operation takes the whole collection.
fn lock<C>(inner: &Mutex<C>) -> MutexGuard<'_, C> {
    inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        // Operations never leave a half-applied mutation behind, so the data
        // behind a poisoned lock is still consistent.
        debug!("recovering poisoned collection lock");
        poisoned.into_inner()
    })
}

/// A [`Queue`] behind a single mutex, usable through `&self` from many threads.
pub struct SharedQueue<T> {
    queue: Mutex<Queue<T>>,
}

impl<T> SharedQueue<T> {
    pub fn new() -> SharedQueue<T> {
        SharedQueue {
            queue: Mutex::new(Queue::new()),
        }
    }

    pub fn enqueue(&self, val: T) {
        lock(&self.queue).enqueue(val);
    }

    pub fn dequeue(&self) -> Result<T> {
        lock(&self.queue).dequeue()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.queue).is_empty()
    }

    pub fn len(&self) -> usize {
        lock(&self.queue).len()
    }

    pub fn into_inner(self) -> Queue<T> {
        self.queue
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SharedQueue<T> {
    /// The oldest value, cloned out so the lock is not held by the caller.
    pub fn peek(&self) -> Result<T> {
        lock(&self.queue).peek().cloned()
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        SharedQueue::new()
    }
}

/// A [`Stack`] behind a single mutex.
pub struct SharedStack<T> {
    stack: Mutex<Stack<T>>,
}

impl<T> SharedStack<T> {
    pub fn new() -> SharedStack<T> {
        SharedStack {
            stack: Mutex::new(Stack::new()),
        }
    }

    pub fn push(&self, val: T) {
        lock(&self.stack).push(val);
    }

    pub fn pop(&self) -> Result<T> {
        lock(&self.stack).pop()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.stack).is_empty()
    }

    pub fn len(&self) -> usize {
        lock(&self.stack).len()
    }

    pub fn into_inner(self) -> Stack<T> {
        self.stack
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SharedStack<T> {
    pub fn peek(&self) -> Result<T> {
        lock(&self.stack).peek().cloned()
    }
}

impl<T> Default for SharedStack<T> {
    fn default() -> Self {
        SharedStack::new()
    }
}

#[cfg(test)]
mod test {
    use super::{SharedQueue, SharedStack};
    use crate::error::{Collection, Error};
    use crossbeam_utils::thread;
    use std::sync::Arc;

    #[test]
    fn shared_queue_single_thread() {
        let queue = SharedQueue::new();
        assert_eq!(queue.peek(), Err(Error::EmptyCollection(Collection::Queue)));
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.peek(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.len(), 1);

        let mut inner = queue.into_inner();
        assert_eq!(inner.dequeue(), Ok(2));
        assert!(inner.is_empty());
    }

    #[test]
    fn shared_stack_single_thread() {
        let stack = SharedStack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.peek(), Ok("b"));
        assert_eq!(stack.pop(), Ok("b"));
        assert_eq!(stack.pop(), Ok("a"));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(Error::EmptyCollection(Collection::Stack)));
    }

    #[test]
    fn shared_stack_par_push() {
        let stack = SharedStack::new();

        thread::scope(|s| {
            let shared_stack = Arc::new(&stack);
            for i in 0..4 {
                let cloned_shared_stack = Arc::clone(&shared_stack);
                s.spawn(move |_| {
                    for elem in (i * 100)..((i + 1) * 100) {
                        cloned_shared_stack.push(elem);
                    }
                });
            }
        })
        .unwrap();

        let mut popped = Vec::new();
        while let Ok(elem) = stack.pop() {
            popped.push(elem);
        }
        popped.sort_unstable();
        assert_eq!(popped, (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn recovers_from_poison() {
        let queue = SharedQueue::new();
        queue.enqueue(1);

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = queue.queue.lock().unwrap();
            panic!("poison the lock");
        }));

        assert!(queue.queue.is_poisoned());
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
    }
}
