//! # ident-lint-core
//!
//! Naming checker for short, low-information variable names in Rust source,
//! based on `syn` AST analysis.
//!
//! The checker walks a parsed file once, classifies each
//! binding-introducing construct, applies the exception/length rule, and
//! collects diagnostics with source positions. It includes:
//!
//! - [`NameChecker`] for the depth-first traversal and rule dispatch
//! - [`ExceptionSet`] for the fixed exemption policy
//! - [`Diagnostic`] and [`LintResult`] for representing findings
//! - [`check_file`] / [`check_source`] entry points
//!
//! ## Example
//!
//! ```ignore
//! use ident_lint_core::check_file;
//!
//! let result = check_file(Path::new("src/main.rs"))?;
//! for diagnostic in &result.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod exceptions;
mod types;

pub use checker::{check_file, check_source, CheckError, NameChecker, MAX_FLAGGED_LEN};
pub use exceptions::{ExceptionSet, DEFAULT_EXCEPTIONS};
pub use types::{BindingKind, Diagnostic, LintResult, Location};
