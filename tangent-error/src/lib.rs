//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Builds a single-label report, the shape shared by every error kind in this workspace.
///
/// The label is attached to the first span. An empty `help` string omits the help section.
pub fn simple_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    label: impl ToString,
    help: &str,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span = spans.first().cloned().unwrap_or(0..0);
    let mut builder = Report::build(ReportKind::Error, src_id, span.start)
        .with_message(message)
        .with_label(
            Label::new((src_id, span))
                .with_message(label.to_string())
                .with_color(EXPR),
        );

    if !help.is_empty() {
        builder.set_help(help);
    }

    builder.finish()
}
