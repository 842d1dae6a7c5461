use crossbeam_utils::thread;
use std::sync::Arc;

pub mod algorithms;
pub mod error;
mod queue;
mod seq_list;
mod shared;
mod stack;

pub use error::{Collection, Error, Result};
pub use queue::Queue;
pub use seq_list::LinkedList;
pub use shared::{SharedQueue, SharedStack};
pub use stack::Stack;

#[cfg(test)]
static SOME_ELEMS: i32 = 10;
static MANY_ELEMS: i32 = 100_000;
static NUM_THREADS: i32 = 4;
static ELEMS_PER_THREAD: i32 = MANY_ELEMS / NUM_THREADS;

/// Fills one `SharedQueue` from `NUM_THREADS` producers, then drains it.
/// Returns the number of elements drained.
pub fn shared_fill() -> usize {
    let queue = SharedQueue::new();

    let spawned = thread::scope(|s| {
        let shared_queue = Arc::new(&queue);
        for i in 0..NUM_THREADS {
            let cloned_shared_queue = Arc::clone(&shared_queue);
            s.spawn(move |_| {
                for elem in (i * ELEMS_PER_THREAD)..((i + 1) * ELEMS_PER_THREAD) {
                    cloned_shared_queue.enqueue(elem);
                }
            });
        }
    });
    if spawned.is_err() {
        tracing::warn!("a producer thread panicked during shared_fill");
    }

    let mut drained = 0;
    while queue.dequeue().is_ok() {
        drained += 1;
    }
    drained
}
