//! Naming checker: single depth-first walk over a parsed file.

use crate::exceptions::ExceptionSet;
use crate::types::{BindingKind, Diagnostic, LintResult, Location};

use std::path::{Path, PathBuf};
use syn::visit::Visit;
use syn::{Expr, ExprForLoop, ImplItemConst, ItemConst, ItemStatic, Local, Pat};
use thiserror::Error;
use tracing::debug;

/// Maximum identifier length the rule flags. Names longer than this are
/// never reported.
pub const MAX_FLAGGED_LEN: usize = 2;

/// Errors that can occur before traversal begins.
///
/// The traversal itself is total over any parseable file and cannot fail.
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Checks binding-introducing constructs for short, low-information names.
///
/// A plain identifier is flagged iff it is not in the [`ExceptionSet`] and
/// its name has length at most [`MAX_FLAGGED_LEN`]. The exception set is
/// applied uniformly to every binding-site variant.
#[derive(Debug, Clone, Default)]
pub struct NameChecker {
    exceptions: ExceptionSet,
}

impl NameChecker {
    /// Creates a checker with the default exception set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the syntax tree once and returns diagnostics in depth-first
    /// source order.
    #[must_use]
    pub fn check(&self, file: &Path, ast: &syn::File) -> Vec<Diagnostic> {
        let mut visitor = NameVisitor {
            checker: self,
            file,
            diagnostics: Vec::new(),
        };
        visitor.visit_file(ast);

        debug!(
            "checked {}: {} diagnostic(s)",
            file.display(),
            visitor.diagnostics.len()
        );
        visitor.diagnostics
    }

    fn is_too_short(&self, name: &str) -> bool {
        !self.exceptions.contains(name) && name.len() <= MAX_FLAGGED_LEN
    }
}

struct NameVisitor<'a> {
    checker: &'a NameChecker,
    file: &'a Path,
    diagnostics: Vec<Diagnostic>,
}

impl NameVisitor<'_> {
    /// Checks every identifier bound by `pat`. Each identifier is tested
    /// independently; an exempt sibling never suppresses the others.
    fn check_pat(&mut self, pat: &Pat, kind: BindingKind) {
        let mut idents = Vec::new();
        collect_pat_idents(pat, &mut idents);

        for ident in idents {
            self.check_ident(ident, kind);
        }
    }

    fn check_ident(&mut self, ident: &syn::Ident, kind: BindingKind) {
        let name = ident.to_string();
        if self.checker.is_too_short(&name) {
            let location = Location::from_span(self.file.to_path_buf(), ident.span());
            self.diagnostics.push(Diagnostic::new(name, kind, location));
        }
    }
}

impl<'ast> Visit<'ast> for NameVisitor<'_> {
    fn visit_expr_for_loop(&mut self, node: &'ast ExprForLoop) {
        // A range-literal iteratee is the counting-loop form; anything else
        // iterates a collection.
        let kind = if is_range_literal(&node.expr) {
            BindingKind::LoopInit
        } else {
            BindingKind::RangeLoop
        };
        self.check_pat(&node.pat, kind);

        // The loop body is still walked normally.
        syn::visit::visit_expr_for_loop(self, node);
    }

    fn visit_local(&mut self, node: &'ast Local) {
        // Type ascription makes this an explicit value specification;
        // otherwise it is a short declaration. Plain reassignment is an
        // `Expr::Assign`, not a `Local`, and is never checked.
        let kind = if matches!(node.pat, Pat::Type(_)) {
            BindingKind::ValueSpec
        } else {
            BindingKind::ShortDecl
        };
        self.check_pat(&node.pat, kind);

        syn::visit::visit_local(self, node);
    }

    fn visit_item_const(&mut self, node: &'ast ItemConst) {
        self.check_ident(&node.ident, BindingKind::ValueSpec);
        syn::visit::visit_item_const(self, node);
    }

    fn visit_item_static(&mut self, node: &'ast ItemStatic) {
        self.check_ident(&node.ident, BindingKind::ValueSpec);
        syn::visit::visit_item_static(self, node);
    }

    fn visit_impl_item_const(&mut self, node: &'ast ImplItemConst) {
        self.check_ident(&node.ident, BindingKind::ValueSpec);
        syn::visit::visit_impl_item_const(self, node);
    }
}

/// Returns true if `expr` is a range literal, looking through parentheses
/// and invisible groups (`for n in (0..10)` counts the same as
/// `for n in 0..10`).
fn is_range_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Range(_) => true,
        Expr::Paren(e) => is_range_literal(&e.expr),
        Expr::Group(e) => is_range_literal(&e.expr),
        _ => false,
    }
}

/// Collects the identifiers bound by a pattern, in source order.
///
/// Wildcards bind nothing; function and closure parameters are handled by
/// the callers that never reach here.
fn collect_pat_idents<'p>(pat: &'p Pat, idents: &mut Vec<&'p syn::Ident>) {
    match pat {
        Pat::Ident(p) => {
            idents.push(&p.ident);
            if let Some((_, subpat)) = &p.subpat {
                collect_pat_idents(subpat, idents);
            }
        }
        Pat::Type(p) => collect_pat_idents(&p.pat, idents),
        Pat::Reference(p) => collect_pat_idents(&p.pat, idents),
        Pat::Paren(p) => collect_pat_idents(&p.pat, idents),
        Pat::Tuple(p) => {
            for elem in &p.elems {
                collect_pat_idents(elem, idents);
            }
        }
        Pat::TupleStruct(p) => {
            for elem in &p.elems {
                collect_pat_idents(elem, idents);
            }
        }
        Pat::Slice(p) => {
            for elem in &p.elems {
                collect_pat_idents(elem, idents);
            }
        }
        Pat::Struct(p) => {
            for field in &p.fields {
                collect_pat_idents(&field.pat, idents);
            }
        }
        Pat::Or(p) => {
            for case in &p.cases {
                collect_pat_idents(case, idents);
            }
        }
        _ => {}
    }
}

/// Parses `content` and runs the default checker over it.
///
/// # Errors
///
/// Returns [`CheckError::Parse`] if `content` is not valid Rust source.
pub fn check_source(path: &Path, content: &str) -> Result<LintResult, CheckError> {
    let ast = syn::parse_file(content).map_err(|e| CheckError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let checker = NameChecker::new();
    Ok(LintResult {
        diagnostics: checker.check(path, &ast),
    })
}

/// Reads, parses, and checks a single file.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the file cannot be read, or
/// [`CheckError::Parse`] if it is not valid Rust source.
pub fn check_file(path: &Path) -> Result<LintResult, CheckError> {
    debug!("checking: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    check_source(path, &content)
}
