//! Standalone interview-prep utilities. None of these depend on the linked
//! collections; each is a plain value-in/value-out call.

pub mod binary_search;
pub mod dedup;
pub mod fibonacci;
pub mod frequency;
pub mod heap;
pub mod quicksort;
pub mod trie;
