//! Collision-free identifier allocation for one transformation run.

use std::collections::HashMap;

/// Allocates readable, collision-free QML identifiers.
///
/// Each base id owns its own counter: the Nth allocation (1-indexed) of a
/// base returns `base(N-1)`. Counters are scoped to the lifetime of one
/// run and are deliberately *not* reset between documents, so identifiers
/// stay unique across every file the run emits.
#[derive(Debug, Default)]
pub struct IdAllocator {
    buckets: HashMap<String, u32>,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier for `base`.
    ///
    /// The base is normalized by lower-casing its first character only;
    /// the rest is kept as-is so `myButton` and `MyButton` share a bucket.
    pub fn allocate(&mut self, base: &str) -> String {
        let base = lower_first(base);
        let count = self.buckets.entry(base.clone()).or_insert(0);
        let id = format!("{base}{count}");
        *count += 1;
        id
    }
}

/// Lower-case the first character of `s`, leaving the rest unchanged.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_base_counts_up() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate("rectangle"), "rectangle0");
        assert_eq!(ids.allocate("rectangle"), "rectangle1");
        assert_eq!(ids.allocate("rectangle"), "rectangle2");
    }

    #[test]
    fn different_bases_are_independent() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate("text"), "text0");
        assert_eq!(ids.allocate("image"), "image0");
        assert_eq!(ids.allocate("text"), "text1");
        assert_eq!(ids.allocate("image"), "image1");
    }

    #[test]
    fn first_character_is_lowered() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate("MyButton"), "myButton0");
        // Same bucket as the already-lowered spelling.
        assert_eq!(ids.allocate("myButton"), "myButton1");
    }

    #[test]
    fn empty_base_still_allocates() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(""), "0");
        assert_eq!(ids.allocate(""), "1");
    }
}
