use std::collections::HashMap;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIB_INPUT: u32 = 93;

/// `fib(0) = 0`, `fib(1) = 1`. Linear time, constant space.
///
/// `None` once the result no longer fits in a `u64` (`n > MAX_FIB_INPUT`).
pub fn fib_iterative(n: u32) -> Option<u64> {
    if n <= 1 {
        return Some(u64::from(n));
    }

    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 2..=n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// Textbook exponential recursion. Only usable for small `n`.
pub fn fib_recursive(n: u32) -> Option<u64> {
    if n > MAX_FIB_INPUT {
        return None;
    }
    if n <= 1 {
        return Some(u64::from(n));
    }
    fib_recursive(n - 1)?.checked_add(fib_recursive(n - 2)?)
}

/// Memoized Fibonacci with a cache owned by the caller.
///
/// Each `FibMemo` is one computation session; nothing is shared between
/// instances. Inputs are range-checked before recursing, so depth never
/// exceeds `MAX_FIB_INPUT`.
#[derive(Debug, Default)]
pub struct FibMemo {
    cache: HashMap<u32, u64>,
}

impl FibMemo {
    pub fn new() -> FibMemo {
        FibMemo {
            cache: HashMap::new(),
        }
    }

    pub fn fib(&mut self, n: u32) -> Option<u64> {
        if n > MAX_FIB_INPUT {
            return None;
        }
        if n <= 1 {
            return Some(u64::from(n));
        }
        if let Some(&hit) = self.cache.get(&n) {
            return Some(hit);
        }

        let val = self.fib(n - 1)?.checked_add(self.fib(n - 2)?)?;
        self.cache.insert(n, val);
        Some(val)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fib_iterative(0), Some(0));
        assert_eq!(fib_iterative(1), Some(1));
        assert_eq!(fib_recursive(0), Some(0));
        assert_eq!(fib_recursive(1), Some(1));
    }

    #[test]
    fn known_values() {
        assert_eq!(fib_iterative(10), Some(55));
        assert_eq!(fib_iterative(20), Some(6765));
        assert_eq!(fib_recursive(20), Some(6765));
        assert_eq!(
            fib_iterative(MAX_FIB_INPUT),
            Some(12_200_160_415_121_876_738)
        );
    }

    #[test]
    fn past_u64_range() {
        assert_eq!(fib_iterative(MAX_FIB_INPUT + 1), None);
        assert_eq!(fib_iterative(u32::MAX), None);
        assert_eq!(fib_recursive(MAX_FIB_INPUT + 1), None);

        let mut memo = FibMemo::new();
        assert_eq!(memo.fib(MAX_FIB_INPUT + 1), None);
        assert_eq!(memo.fib(1_000_000), None);
        assert!(memo.is_empty());
    }

    #[test]
    fn memo_agrees_with_iterative() {
        let mut memo = FibMemo::new();
        for n in 0..=MAX_FIB_INPUT {
            assert_eq!(memo.fib(n), fib_iterative(n));
        }
    }

    #[test]
    fn memo_sessions_are_independent() {
        let mut first = FibMemo::new();
        assert_eq!(first.fib(30), Some(832_040));
        assert_eq!(first.len(), 29);

        let second = FibMemo::new();
        assert!(second.is_empty());
    }
}
