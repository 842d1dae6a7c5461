use std::ptr::NonNull;

use crate::error::{Collection, Error, Result};

// Sequential singly linked list shared by `Queue` and `Stack`. Both push at one
// end and pop from the head, so the list only has to support O(1) append at
// either end and O(1) removal at the head.
pub struct LinkedList<T> {
    head: Link<T>,
    // Points into the chain owned by `head`; never owns. `None` iff `head` is.
    tail: Option<NonNull<Node<T>>>,
    length: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Node<T>> {
        Box::new(Node { value, next: None })
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` after the current tail.
    pub fn append_tail(&mut self, value: T) {
        let mut new_node = Node::new(value);
        let raw_tail = NonNull::from(&mut *new_node);

        match self.tail {
            None => self.head = Some(new_node),
            Some(mut tail) => {
                // SAFETY: `tail` points at the last node of the chain owned by
                // `self.head`. Boxed nodes never move, the node is alive for as
                // long as it is in the chain, and `&mut self` guarantees no other
                // reference into the chain exists.
                unsafe { tail.as_mut().next = Some(new_node) };
            }
        }

        self.tail = Some(raw_tail);
        self.length += 1;
    }

    /// Places `value` in front of the current head.
    pub fn append_head(&mut self, value: T) {
        let mut new_node = Box::new(Node {
            value,
            next: self.head.take(),
        });

        if self.tail.is_none() {
            self.tail = Some(NonNull::from(&mut *new_node));
        }

        self.head = Some(new_node);
        self.length += 1;
    }

    pub fn remove_head(&mut self) -> Result<T> {
        let node = self
            .head
            .take()
            .ok_or(Error::EmptyCollection(Collection::List))?;
        let Node { value, next } = *node;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.length -= 1;

        Ok(value)
    }

    pub fn peek_head(&self) -> Result<&T> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(Error::EmptyCollection(Collection::List))
    }

    #[cfg(test)]
    fn peek_tail(&self) -> Option<&T> {
        // SAFETY: see `append_tail`; the shared borrow of `self` keeps the chain
        // alive and unmodified for the lifetime of the returned reference.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // Unlink node by node so long chains don't recurse through `Box` drops.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = None;
    }
}

// SAFETY: `tail` only aliases memory already owned through `head`, so the list
// is exactly as thread-safe as a `Box` chain of `T`.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
