//! Immutable, ordered tagline list.

use std::sync::Arc;

use super::error::CyclerError;

/// Built-in taglines, shown when the config does not provide its own.
pub const DEFAULT_TAGLINES: &[&str] = &[
    "From running codes to writing code.",
    "From fractures to refactors.",
    "From AKIs to APIs.",
    "From admissions to permissions.",
    "From SOAP to CRUD.",
    "I learned some systems. Then I learned some more.",
    "The system is broken. I'm putting the heart back in healthcare.",
    "Medicine deserves its heart back — I'm here to return it.",
    "Integrating systems with systems.",
    "I learned their systems. Then I built my own.",
    "I didn't switch EMRs. I built one.",
    "If you can't beat the system… rewrite it.",
];

/// A non-empty sequence of taglines in cycling order.
///
/// Cloning is cheap: the strings are shared behind an `Arc` and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaglineList {
    items: Arc<[String]>,
}

impl TaglineList {
    pub fn new<I, S>(items: I) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Arc<[String]> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(CyclerError::EmptyTaglines);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The tagline at `position`, wrapping around the end of the list.
    pub fn get(&self, position: usize) -> &str {
        &self.items[position % self.items.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Position following `position` in cycling order.
    pub fn next_position(&self, position: usize) -> usize {
        (position + 1) % self.items.len()
    }
}

impl Default for TaglineList {
    fn default() -> Self {
        Self {
            items: DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(TaglineList::new(empty), Err(CyclerError::EmptyTaglines));
    }

    #[test]
    fn test_default_list() {
        let list = TaglineList::default();
        assert_eq!(list.len(), 12);
        assert_eq!(list.get(0), "From running codes to writing code.");
        assert_eq!(list.get(11), "If you can't beat the system… rewrite it.");
    }

    #[test]
    fn test_advances_cover_every_index_once() {
        for n in 1..=13 {
            let list = TaglineList::new((0..n).map(|i| format!("t{}", i))).unwrap();
            for start in 0..n {
                let mut seen = vec![false; n];
                let mut pos = start;
                for _ in 0..n {
                    assert!(!seen[pos], "index {} visited twice (n={})", pos, n);
                    seen[pos] = true;
                    pos = list.next_position(pos);
                }
                assert_eq!(pos, start);
                assert!(seen.iter().all(|&s| s));
            }
        }
    }

    #[test]
    fn test_single_item_stays_put() {
        let list = TaglineList::new(["only"]).unwrap();
        assert_eq!(list.next_position(0), 0);
        assert_eq!(list.get(5), "only");
    }
}
