use std::collections::HashMap;

/// The most frequent character in `text` and how often it occurs.
///
/// Returns `None` for empty input. On a tie the character whose first
/// occurrence comes latest in `text` wins.
pub fn most_common(text: &str) -> Option<(char, usize)> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut first_seen: Vec<char> = Vec::new();
    for c in text.chars() {
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            first_seen.push(c);
        }
        *count += 1;
    }

    let mut best: Option<(char, usize)> = None;
    for c in first_seen {
        let count = counts[&c];
        match best {
            Some((_, top)) if top > count => {}
            _ => best = Some((c, count)),
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::most_common;

    #[test]
    fn picks_highest_count() {
        assert_eq!(most_common("hello world"), Some(('l', 3)));
        assert_eq!(most_common("aab"), Some(('a', 2)));
        assert_eq!(most_common("abb"), Some(('b', 2)));
    }

    #[test]
    fn tie_goes_to_last_first_seen() {
        assert_eq!(most_common("abab"), Some(('b', 2)));
        assert_eq!(most_common("baab"), Some(('a', 2)));
        assert_eq!(most_common("abc"), Some(('c', 1)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(most_common(""), None);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(most_common("ééa"), Some(('é', 2)));
    }
}
