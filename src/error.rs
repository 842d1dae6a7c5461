use std::fmt;

/// The structure an operation was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    List,
    Queue,
    Stack,
    Heap,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::List => "List",
            Collection::Queue => "Queue",
            Collection::Stack => "Stack",
            Collection::Heap => "Heap",
        };
        f.write_str(name)
    }
}

/// Errors raised by the collections in this crate.
///
/// Removing or peeking from a structure with no elements is the only failure.
/// Callers are expected to guard with `is_empty()`; nothing here is retried.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is empty")]
    EmptyCollection(Collection),
}

pub type Result<T> = std::result::Result<T, Error>;
