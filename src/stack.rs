use tracing::trace;

use crate::error::{Collection, Error, Result};
use crate::seq_list::LinkedList;

/// Last-in-first-out stack. Push and pop both work at the list head.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub fn push(&mut self, val: T) {
        self.list.append_head(val);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_head().map_err(|_| {
            trace!("pop on empty stack");
            Error::EmptyCollection(Collection::Stack)
        })
    }

    pub fn peek(&self) -> Result<&T> {
        self.list
            .peek_head()
            .map_err(|_| Error::EmptyCollection(Collection::Stack))
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}
