//! Error rendering using ariadne
//!
//! Evaluation errors carry the raw string they were raised for, so they are
//! rendered as a report pointing into that string. Declaration errors name
//! the file instead and are written as a single line.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<interpolation>";

/// Render an error to stderr
///
/// # Example
/// ```no_run
/// use tfeval::{Engine, VariableTable, render_error};
///
/// let engine = Engine::new(VariableTable::default());
/// if let Err(e) = engine.eval("${lookup(var.roles, count.index)}") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs and UIs)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diagnostic = error.to_diagnostic();
    match error.src() {
        Some(src) => render_diagnostic(src, &diagnostic, writer, use_color),
        None => {
            write!(writer, "{}", diagnostic.severity)?;
            if let Some(code) = &diagnostic.code {
                write!(writer, "[{}]", code)?;
            }
            writeln!(writer, ": {}", diagnostic.message)
        }
    }
}

fn render_diagnostic(
    src: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };
    let range = diag.span.as_ref().map_or(0..src.len(), |span| span.0.clone());

    let mut report = Report::build(kind, (SOURCE_ID, range.clone()))
        .with_message(&diag.message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(ariadne::IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, range))
            .with_message(&diag.message)
            .with_color(color),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report.finish().write((SOURCE_ID, Source::from(src)), &mut *writer)
}
