//! Searching without allocation.
//!
//! Every lookup works on the content only, never on the spare capacity.
//! Empty needles and positions at or past the end never match.

use crate::core::ByteString;

impl ByteString {
    /// Content from `start` on, or `None` when `start` is past the last character.
    fn tail(&self, start: usize) -> Option<&[u8]> {
        self.as_bytes().get(start..).filter(|tail| !tail.is_empty())
    }

    /// Content of the inclusive window `[start, end]`.
    fn window(&self, start: usize, end: usize) -> Option<&[u8]> {
        if start > end {
            return None;
        }
        self.as_bytes().get(start..=end)
    }

    /// Index of the first occurrence of `needle` at or after `start`.
    ///
    /// ```
    /// # use bytestr::ByteString;
    /// let s = ByteString::new("Hello, World!", 0).unwrap();
    /// assert_eq!(s.find("World", 0), Some(7));
    /// assert_eq!(s.find("World", 8), None);
    /// ```
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>, start: usize) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return None;
        }
        self.tail(start)?
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|i| i + start)
    }

    /// Index of the last occurrence of `needle` that starts at or after `start`.
    #[must_use]
    pub fn rfind(&self, needle: impl AsRef<[u8]>, start: usize) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return None;
        }
        self.tail(start)?
            .windows(needle.len())
            .rposition(|w| w == needle)
            .map(|i| i + start)
    }

    /// First index at or after `pos` whose byte is in `set`.
    #[must_use]
    pub fn find_first_of(&self, set: impl AsRef<[u8]>, pos: usize) -> Option<usize> {
        let set = set.as_ref();
        self.tail(pos)?
            .iter()
            .position(|b| set.contains(b))
            .map(|i| i + pos)
    }

    /// Last index at or after `pos` whose byte is in `set`.
    #[must_use]
    pub fn find_last_of(&self, set: impl AsRef<[u8]>, pos: usize) -> Option<usize> {
        let set = set.as_ref();
        self.tail(pos)?
            .iter()
            .rposition(|b| set.contains(b))
            .map(|i| i + pos)
    }

    /// First index at or after `pos` whose byte is not in `set`.
    #[must_use]
    pub fn find_first_not_of(&self, set: impl AsRef<[u8]>, pos: usize) -> Option<usize> {
        let set = set.as_ref();
        if set.is_empty() {
            return None;
        }
        self.tail(pos)?
            .iter()
            .position(|b| !set.contains(b))
            .map(|i| i + pos)
    }

    /// Last index at or after `pos` whose byte is not in `set`.
    #[must_use]
    pub fn find_last_not_of(&self, set: impl AsRef<[u8]>, pos: usize) -> Option<usize> {
        let set = set.as_ref();
        if set.is_empty() {
            return None;
        }
        self.tail(pos)?
            .iter()
            .rposition(|b| !set.contains(b))
            .map(|i| i + pos)
    }

    /// Non-overlapping occurrences of `needle` inside the inclusive window `[start, end]`.
    ///
    /// ```
    /// # use bytestr::ByteString;
    /// let s = ByteString::new("aaaa", 0).unwrap();
    /// assert_eq!(s.count("aa", 0, 3), 2);
    /// assert_eq!(s.count("aa", 1, 3), 1);
    /// ```
    #[must_use]
    pub fn count(&self, needle: impl AsRef<[u8]>, start: usize, end: usize) -> usize {
        let needle = needle.as_ref();
        let Some(mut haystack) = self.window(start, end) else {
            return 0;
        };
        if needle.is_empty() {
            return 0;
        }

        let mut found = 0;
        while let Some(i) = haystack.windows(needle.len()).position(|w| w == needle) {
            found += 1;
            haystack = haystack.get(i + needle.len()..).unwrap_or_default();
        }
        found
    }

    /// Whether the content at `start` begins with `prefix`.
    #[must_use]
    pub fn start_with(&self, prefix: impl AsRef<[u8]>, start: usize) -> bool {
        let prefix = prefix.as_ref();
        !prefix.is_empty() && self.tail(start).is_some_and(|t| t.starts_with(prefix))
    }

    /// Whether the inclusive window `[start, end]` ends with `suffix`.
    #[must_use]
    pub fn end_with(&self, suffix: impl AsRef<[u8]>, start: usize, end: usize) -> bool {
        let suffix = suffix.as_ref();
        !suffix.is_empty()
            && self
                .window(start, end)
                .is_some_and(|w| w.ends_with(suffix))
    }

    #[must_use]
    pub fn includes(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find(needle, 0).is_some()
    }
}
