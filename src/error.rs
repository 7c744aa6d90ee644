use std::collections::TryReserveError;

use regex_automata::meta::BuildError;
use thiserror::Error;

use crate::span::Span;

/// An error that occurred while compiling a pattern or rewriting a subject.
///
/// A failed match attempt is not an error: searches report it as `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern text could not be compiled under the requested flags.
    #[error("failed to compile pattern: {0}")]
    Compile(#[from] BuildError),
    /// The pattern text has mismatched parentheses, so the number of groups
    /// a template must reference is unknown.
    #[error("unbalanced parentheses in pattern")]
    Unbalanced,
    /// The template has no `\n` token for group `n`.
    #[error("template has no backreference for group {0}")]
    MissingBackreference(usize),
    /// A match was applied to a subject its span does not fit.
    #[error("match span {}..{} does not fit a subject of {len} bytes", .span.start, .span.end)]
    SpanOutOfRange { span: Span, len: usize },
    /// A working buffer could not be allocated.
    #[error("could not allocate working memory")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
