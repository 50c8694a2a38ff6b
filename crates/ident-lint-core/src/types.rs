//! Core types for naming diagnostics and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The binding-introducing construct an identifier appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    /// Loop pattern iterating a collection (`for (k, v) in map`).
    RangeLoop,
    /// Loop pattern iterating a range literal (`for i in 0..n`).
    LoopInit,
    /// Untyped `let` binding (`let x = ...` or `let x;`).
    ShortDecl,
    /// Type-ascribed `let`, `const`, or `static` declaration.
    ValueSpec,
}

impl BindingKind {
    /// Returns the context phrase used in the diagnostic message, if any.
    ///
    /// Short declarations and value specifications are reported without a
    /// qualifier.
    #[must_use]
    pub fn context_phrase(self) -> Option<&'static str> {
        match self {
            Self::RangeLoop => Some("in range loop"),
            Self::LoopInit => Some("in for-loop initialization"),
            Self::ShortDecl | Self::ValueSpec => None,
        }
    }
}

impl std::fmt::Display for BindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RangeLoop => write!(f, "range-loop"),
            Self::LoopInit => write!(f, "loop-init"),
            Self::ShortDecl => write!(f, "short-decl"),
            Self::ValueSpec => write!(f, "value-spec"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the checked file.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }
}

/// A single naming finding: identifier, construct, and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The offending identifier text.
    pub name: String,
    /// The construct the identifier was bound in.
    pub kind: BindingKind,
    /// Where the identifier appears.
    pub location: Location,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: BindingKind, location: Location) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.context_phrase() {
            Some(phrase) => write!(
                f,
                "Variable '{}' {} is too short at position {}",
                self.name, phrase, self.location.line
            ),
            None => write!(
                f,
                "Variable '{}' is too short at position {}",
                self.name, self.location.line
            ),
        }
    }
}

/// Result of checking one source file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics, in depth-first source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one diagnostic was emitted.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(kind: BindingKind) -> Diagnostic {
        Diagnostic::new("db", kind, Location::new(PathBuf::from("src/lib.rs"), 7, 9))
    }

    #[test]
    fn range_loop_display_has_phrase() {
        let d = make_diagnostic(BindingKind::RangeLoop);
        assert_eq!(
            d.to_string(),
            "Variable 'db' in range loop is too short at position 7"
        );
    }

    #[test]
    fn loop_init_display_has_phrase() {
        let d = make_diagnostic(BindingKind::LoopInit);
        assert_eq!(
            d.to_string(),
            "Variable 'db' in for-loop initialization is too short at position 7"
        );
    }

    #[test]
    fn short_decl_display_has_no_phrase() {
        let d = make_diagnostic(BindingKind::ShortDecl);
        assert_eq!(d.to_string(), "Variable 'db' is too short at position 7");
    }

    #[test]
    fn value_spec_display_has_no_phrase() {
        let d = make_diagnostic(BindingKind::ValueSpec);
        assert_eq!(d.to_string(), "Variable 'db' is too short at position 7");
    }

    #[test]
    fn empty_result_has_no_violations() {
        assert!(!LintResult::new().has_violations());
    }

    #[test]
    fn nonempty_result_has_violations() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(BindingKind::ShortDecl));
        assert!(result.has_violations());
    }
}
