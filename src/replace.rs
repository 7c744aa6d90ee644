//! Backreference templates and the rewrite operations built on them.
//!
//! A template is plain text in which `\n` stands for the text captured by
//! group `n`. Every group a pattern declares must be referenced; the first
//! `\n` token for each group is substituted and everything else, including
//! a second token for the same group, is copied literally.

use std::ops::Range;

use log::trace;

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::span::MatchRecord;

/// A template checked against a number of groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'t> {
    text: &'t str,
    /// `(token range, group)`, ordered by position in `text`.
    tokens: Vec<(Range<usize>, usize)>,
}

impl<'t> Template<'t> {
    /// Locates the backreference for each of groups `1..=groups`.
    ///
    /// Groups are looked up in ascending order and the first one without a
    /// token is reported as [`Error::MissingBackreference`].
    pub fn parse(text: &'t str, groups: usize) -> Result<Template<'t>> {
        let mut tokens = Vec::with_capacity(groups);
        for n in 1..=groups {
            let range = find_token(text, n).ok_or(Error::MissingBackreference(n))?;
            tokens.push((range, n));
        }
        tokens.sort_unstable_by_key(|(range, _)| range.start);
        Ok(Template { text, tokens })
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Appends the template to `dst` with each token replaced by what its
    /// group captured in `m`. A group that did not take part contributes
    /// nothing.
    pub fn expand(&self, m: &MatchRecord<'_>, dst: &mut String) -> Result<()> {
        dst.try_reserve(self.expanded_len(m))?;
        let mut last = 0;
        for (range, n) in &self.tokens {
            dst.push_str(&self.text[last..range.start]);
            dst.push_str(m.group_str(*n).unwrap_or(""));
            last = range.end;
        }
        dst.push_str(&self.text[last..]);
        Ok(())
    }

    fn expanded_len(&self, m: &MatchRecord<'_>) -> usize {
        self.tokens.iter().fold(self.text.len(), |len, (range, n)| {
            len - range.len() + m.group(*n).map_or(0, |span| span.len())
        })
    }
}

/// Finds the first `\n` in `text` that is not followed by another digit.
fn find_token(text: &str, n: usize) -> Option<Range<usize>> {
    let needle = format!("\\{}", n);
    let bytes = text.as_bytes();
    let found = occurrences(text, &needle)
        .map(|at| at..at + needle.len())
        .find(|range| !bytes.get(range.end).map_or(false, u8::is_ascii_digit));
    found
}

#[cfg(feature = "perf-literal")]
fn occurrences<'a>(text: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    memchr::memmem::find_iter(text.as_bytes(), needle.as_bytes())
}

#[cfg(not(feature = "perf-literal"))]
fn occurrences<'a>(text: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(needle).map(|(at, _)| at)
}

/// Rewrites `subject` by replacing the region of `m` with `template`,
/// whose backreferences are resolved against the groups of `m`.
///
/// Fails without producing any output if the template lacks a token for
/// one of the `groups` groups, or if the span of `m` does not fit
/// `subject`.
pub fn substitute_one(
    subject: &str,
    m: &MatchRecord<'_>,
    template: &str,
    groups: usize,
) -> Result<String> {
    let (Some(head), Some(tail)) = (subject.get(..m.start()), subject.get(m.end()..)) else {
        return Err(Error::SpanOutOfRange { span: m.span(), len: subject.len() });
    };
    let template = Template::parse(template, groups)?;
    let mut out = String::new();
    out.try_reserve(head.len() + tail.len())?;
    out.push_str(head);
    template.expand(m, &mut out)?;
    out.push_str(tail);
    Ok(out)
}

/// Rewriting methods.
impl Pattern {
    /// Replaces the leftmost match in `subject` with `template`.
    ///
    /// Returns `Ok(None)` when there is no match. The template is checked
    /// before searching, so a template that cannot satisfy this pattern is
    /// an error even when nothing would match.
    pub fn replace(&self, subject: &str, template: &str) -> Result<Option<String>> {
        self.replacen(subject, template, 1)
    }

    /// Replaces every non-overlapping match in `subject` with `template`.
    pub fn replace_all(&self, subject: &str, template: &str) -> Result<Option<String>> {
        self.replacen(subject, template, 0)
    }

    /// Replaces at most `limit` non-overlapping matches, left to right.
    /// A `limit` of `0` replaces all of them.
    ///
    /// Returns `Ok(None)` when nothing matched.
    pub fn replacen(
        &self,
        subject: &str,
        template: &str,
        limit: usize,
    ) -> Result<Option<String>> {
        let groups = self.group_count().get().ok_or(Error::Unbalanced)?;
        let template = Template::parse(template, groups)?;

        let mut it = self.find_iter(subject).enumerate().peekable();
        if it.peek().is_none() {
            return Ok(None);
        }
        let mut new = String::new();
        new.try_reserve(subject.len())?;
        let mut last_match = 0;
        for (i, m) in it {
            trace!("replacing {}..{} of {:?}", m.start(), m.end(), subject);
            new.push_str(&subject[last_match..m.start()]);
            template.expand(&m, &mut new)?;
            last_match = m.end();
            if limit > 0 && i >= limit - 1 {
                break;
            }
        }
        new.push_str(&subject[last_match..]);
        Ok(Some(new))
    }
}
