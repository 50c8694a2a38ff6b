//! Output formatting for lint results.

use anyhow::Result;
use ident_lint_core::LintResult;

use crate::OutputFormat;

/// Prints a lint result to stdout in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result)?,
        OutputFormat::Compact => render_compact(result),
    };
    print!("{rendered}");
    Ok(())
}

fn render_text(result: &LintResult) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for diagnostic in &result.diagnostics {
        let _ = writeln!(out, "{diagnostic}");
    }
    out
}

fn render_json(result: &LintResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(result: &LintResult) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for diagnostic in &result.diagnostics {
        let _ = writeln!(
            out,
            "{}:{}:{}: Variable '{}' is too short [{}]",
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.name,
            diagnostic.kind,
        );
    }
    out
}
