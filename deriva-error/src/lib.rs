//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, along with the [`Category`] taxonomy that groups them.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
///
/// Each class maps to a stable numeric code, usable as a process exit code. The `Overflow` and
/// `ZeroDivision` classes are reserved: no evaluation path currently produces them, because
/// arithmetic follows IEEE-754 semantics and propagates infinity / NaN silently instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Malformed source text, reported by the tokenizer or parser.
    Syntax,

    /// Reserved: numeric overflow.
    Overflow,

    /// Reserved: division by zero.
    ZeroDivision,

    /// A name lookup failed during evaluation.
    Lookup,

    /// A function call was evaluated with the wrong number of arguments.
    Arity,

    /// A function without a derivative rule was differentiated.
    Derivative,
}

impl Category {
    /// The stable numeric code for this class of error.
    pub fn code(self) -> i32 {
        match self {
            Category::Syntax => 1,
            Category::Overflow => 2,
            Category::ZeroDivision => 3,
            Category::Lookup => 4,
            Category::Arity => 5,
            Category::Derivative => 6,
        }
    }
}

/// Represents any kind of error that can occur during some operation.
///
/// Implementors provide the [`message`](ErrorKind::message), [`labels`](ErrorKind::labels), and
/// [`help`](ErrorKind::help) pieces; the provided [`build_report`](ErrorKind::build_report)
/// assembles them into an [`ariadne`] report. Labels are paired with the error's spans in order;
/// a kind with no spans still produces a report from its message and help text alone.
pub trait ErrorKind: Debug + Send {
    /// The class this error belongs to.
    fn category(&self) -> Category;

    /// The message displayed at the top of the report.
    fn message(&self) -> String;

    /// The text of the labels that point at the error's spans, in span order. An empty string
    /// produces a label with no message.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional help text describing how to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map(|span| span.start).unwrap_or(0);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(
                self.labels()
                    .into_iter()
                    .zip(spans.iter())
                    .map(|(text, span)| {
                        let mut label = Label::new((src_id, span.clone())).with_color(EXPR);
                        if !text.is_empty() {
                            label = label.with_message(text);
                        }
                        label
                    })
                    .collect::<Vec<_>>(),
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }

        builder.finish()
    }
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

    /// Creates a new error with no associated source regions.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Builds the report for this error and prints it to stderr.
    pub fn report_to_stderr(&self, src_id: &str, src: &str) {
        let _ = self
            .build_report(src_id)
            .eprint((src_id, Source::from(src)));
    }
}
