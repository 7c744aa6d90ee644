//! The surface a scripting host binds to.
//!
//! Every operation here reports through its return value only: a result,
//! or `None` for "no result", whatever went wrong. Offsets follow the
//! host's convention of 1-based, inclusive positions.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use log::debug;

use crate::constants::{FLAGS, VERSION_NUMBER, VERSION_STRING};
use crate::error::Result;
use crate::flags::Flags;
use crate::pattern::Pattern;
use crate::span::MatchRecord;

/// The two shapes a host may pass a pattern in.
#[derive(Clone, Copy, Debug)]
pub enum PatternSource<'a> {
    /// A pattern the host compiled earlier and still owns.
    Handle(&'a Pattern),
    /// Pattern text to compile for the duration of one call.
    Inline(&'a str, Flags),
}

impl<'a> PatternSource<'a> {
    /// Inline text with the default flags.
    pub fn inline(text: &'a str) -> Self {
        PatternSource::Inline(text, Flags::default())
    }

    fn resolve(self) -> Result<Resolved<'a>> {
        match self {
            PatternSource::Handle(pattern) => Ok(Resolved::Borrowed(pattern)),
            PatternSource::Inline(text, flags) => {
                Pattern::with_flags(text, flags).map(Resolved::Owned)
            }
        }
    }
}

impl<'a> From<&'a Pattern> for PatternSource<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        PatternSource::Handle(pattern)
    }
}

impl<'a> From<&'a str> for PatternSource<'a> {
    fn from(text: &'a str) -> Self {
        PatternSource::inline(text)
    }
}

/// A pattern for the length of one call. An inline pattern is released
/// when this goes out of scope, on every path out of the call.
enum Resolved<'a> {
    Borrowed(&'a Pattern),
    Owned(Pattern),
}

impl Deref for Resolved<'_> {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        match self {
            Resolved::Borrowed(pattern) => pattern,
            Resolved::Owned(pattern) => pattern,
        }
    }
}

/// One match as a host sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchInfo {
    /// 1-based position of the first matched byte.
    pub from: usize,
    /// 1-based position of the last matched byte.
    pub to: usize,
    pub matched: String,
}

impl From<&MatchRecord<'_>> for MatchInfo {
    fn from(m: &MatchRecord<'_>) -> Self {
        MatchInfo { from: m.from(), to: m.to(), matched: m.as_str().to_owned() }
    }
}

/// Compiles `text`. `flags` defaults to `EXTENDED` when absent.
pub fn compile(text: &str, flags: Option<i64>) -> Option<Pattern> {
    let flags = match flags {
        None => Flags::default(),
        Some(value) => match Flags::from_host(value) {
            Some(flags) => flags,
            None => {
                debug!("compile: flag value {} out of range", value);
                return None;
            }
        },
    };
    settle("compile", Pattern::with_flags(text, flags).map(Some))
}

/// Finds the first match of `source` in `subject`.
pub fn find<'a>(subject: &str, source: impl Into<PatternSource<'a>>) -> Option<MatchInfo> {
    settle(
        "find",
        source
            .into()
            .resolve()
            .map(|pattern| pattern.find(subject).as_ref().map(MatchInfo::from)),
    )
}

/// Finds every non-overlapping match, keyed by 1-based sequence number.
///
/// No match gives an empty map; only a pattern that fails to compile gives
/// no result.
pub fn find_all<'a>(
    subject: &str,
    source: impl Into<PatternSource<'a>>,
) -> Option<BTreeMap<usize, MatchInfo>> {
    settle(
        "find_all",
        source.into().resolve().map(|pattern| {
            let all = pattern
                .find_iter(subject)
                .enumerate()
                .map(|(i, m)| (i + 1, MatchInfo::from(&m)))
                .collect();
            Some(all)
        }),
    )
}

/// Rewrites the first match of `source` in `subject` with `template`.
pub fn replace<'a>(
    subject: &str,
    source: impl Into<PatternSource<'a>>,
    template: &str,
) -> Option<String> {
    replace_n(subject, source, template, 1)
}

/// Rewrites every match of `source` in `subject` with `template`.
pub fn replace_all<'a>(
    subject: &str,
    source: impl Into<PatternSource<'a>>,
    template: &str,
) -> Option<String> {
    replace_n(subject, source, template, 0)
}

/// Rewrites the first `n` matches; `0` rewrites all of them.
pub fn replace_n<'a>(
    subject: &str,
    source: impl Into<PatternSource<'a>>,
    template: &str,
    n: usize,
) -> Option<String> {
    settle(
        "replace",
        source
            .into()
            .resolve()
            .and_then(|pattern| pattern.replacen(subject, template, n)),
    )
}

/// The flag constants to export, as `(name, value)` pairs.
pub fn flag_constants() -> impl Iterator<Item = (&'static str, u32)> {
    FLAGS.iter().map(|&(name, flags)| (name, flags.bits()))
}

/// `(version_number, version_string)`
pub fn version() -> (u32, &'static str) {
    (VERSION_NUMBER, VERSION_STRING)
}

fn settle<T>(op: &str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|err| {
        debug!("{}: {}", op, err);
        None
    })
}

impl fmt::Display for MatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {:?}", self.from, self.to, self.matched)
    }
}
