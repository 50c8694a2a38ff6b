//! Exception policy: identifier names exempt from the length rule.

use std::collections::BTreeSet;

/// Names exempt from the length rule, applied uniformly to every
/// binding-site variant.
pub const DEFAULT_EXCEPTIONS: [&str; 5] = ["ok", "i", "_", "tx", "wg"];

/// The fixed set of identifier names excluded from the length rule.
///
/// Membership is exact, case-sensitive string equality. No prefix or
/// pattern matching.
#[derive(Debug, Clone)]
pub struct ExceptionSet {
    names: BTreeSet<&'static str>,
}

impl Default for ExceptionSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_EXCEPTIONS.into_iter().collect(),
        }
    }
}

impl ExceptionSet {
    /// Creates the default exception set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is exempt from the length rule.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_members_are_exempt() {
        let set = ExceptionSet::new();
        for name in DEFAULT_EXCEPTIONS {
            assert!(set.contains(name), "{name} should be exempt");
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        let set = ExceptionSet::new();
        assert!(set.contains("ok"));
        assert!(!set.contains("OK"));
        assert!(!set.contains("Ok"));
        assert!(!set.contains("I"));
    }

    #[test]
    fn membership_is_exact_match_only() {
        let set = ExceptionSet::new();
        assert!(!set.contains("tx2"));
        assert!(!set.contains("okk"));
        assert!(!set.contains(""));
    }
}
