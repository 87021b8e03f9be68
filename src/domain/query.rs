//! Search query gating rules.
//!
//! On every keystroke the application has to decide whether the current query
//! is worth sending to the catalog at all. The gate trims surrounding
//! whitespace and requires a minimum effective length; queries below it never
//! cause a network call and render as an ordinary empty result set.

/// Decides whether a raw, user-typed query should trigger a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryGate {
    min_len: usize,
}

impl QueryGate {
    /// Creates a gate with the given minimum effective length.
    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Returns the effective form of a raw query: surrounding whitespace
    /// stripped, content untouched.
    #[must_use]
    pub fn effective<'a>(&self, raw: &'a str) -> &'a str {
        raw.trim()
    }

    /// Applies the length gate, returning the effective query when it is
    /// long enough to search for and `None` otherwise.
    ///
    /// Length is measured in characters, not bytes, so multi-byte titles
    /// gate the same way ASCII ones do.
    #[must_use]
    pub fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let effective = self.effective(raw);
        if effective.chars().count() < self.min_len {
            None
        } else {
            Some(effective)
        }
    }
}

impl Default for QueryGate {
    /// Returns the standard gate requiring three effective characters.
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_rejected() {
        let gate = QueryGate::default();
        assert_eq!(gate.accept(""), None);
        assert_eq!(gate.accept("ab"), None);
        assert_eq!(gate.accept("abc"), Some("abc"));
    }

    #[test]
    fn whitespace_does_not_count_toward_length() {
        let gate = QueryGate::default();
        assert_eq!(gate.accept("  ab  "), None);
        assert_eq!(gate.accept("  abc  "), Some("abc"));
    }

    #[test]
    fn length_is_measured_in_characters() {
        let gate = QueryGate::default();
        assert_eq!(gate.accept("日本語"), Some("日本語"));
        assert_eq!(gate.accept("日本"), None);
    }
}
