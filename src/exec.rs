use regex_automata::meta::{self, BuildError, Regex};
use regex_automata::util::captures::Captures;
use regex_automata::util::syntax::Config as SyntaxConfig;
use regex_automata::Input;

use crate::flags::Flags;
use crate::options::Options;
use crate::span::Span;
use crate::syntax;

/// Placed around a subject to keep `^` and `$` from matching at its ends.
const BORDER: char = '\0';

/// `Exec` owns the compiled form of a pattern and runs single match
/// attempts against a prepared haystack.
///
/// This is the only place that talks to the matching engine. Everything
/// above it sees the engine as "compile a pattern, then execute it at an
/// offset and get back up to `n` spans relative to that offset".
#[derive(Debug)]
pub struct Exec {
    re: Regex,
    flags: Flags,
}

/// A subject ready to be searched, possibly with borders added for
/// `NOTBOL` and `NOTEOL`.
#[derive(Debug)]
pub struct Haystack<'s> {
    subject: &'s str,
    bordered: Option<String>,
    lead: usize,
}

impl<'s> Haystack<'s> {
    pub fn subject(&self) -> &'s str {
        self.subject
    }

    fn text(&self) -> &str {
        self.bordered.as_deref().unwrap_or(self.subject)
    }
}

impl Exec {
    pub fn new(options: &Options) -> Result<Exec, BuildError> {
        let flags = options.flags;
        let newline = flags.contains(Flags::NEWLINE);
        let pattern = syntax::translate(&options.pattern, flags.contains(Flags::EXTENDED));
        let re = Regex::builder()
            .syntax(
                SyntaxConfig::new()
                    .case_insensitive(flags.contains(Flags::ICASE))
                    .multi_line(newline)
                    .dot_matches_new_line(!newline)
                    .nest_limit(options.nest_limit),
            )
            .configure(meta::Config::new().nfa_size_limit(Some(options.size_limit)))
            .build(&pattern)?;
        Ok(Exec { re, flags })
    }

    /// Scratch space for `execute`. One is enough for any number of
    /// sequential attempts.
    pub fn create_captures(&self) -> Captures {
        self.re.create_captures()
    }

    pub fn haystack<'s>(&self, subject: &'s str) -> Haystack<'s> {
        let notbol = self.flags.contains(Flags::NOTBOL);
        let noteol = self.flags.contains(Flags::NOTEOL);
        if !notbol && !noteol {
            return Haystack { subject, bordered: None, lead: 0 };
        }
        let mut text = String::with_capacity(subject.len() + 2);
        if notbol {
            text.push(BORDER);
        }
        text.push_str(subject);
        if noteol {
            text.push(BORDER);
        }
        let lead = if notbol { BORDER.len_utf8() } else { 0 };
        Haystack { subject, bordered: Some(text), lead }
    }

    /// Runs one match attempt over `haystack.subject()[offset..]`.
    ///
    /// On a match, returns exactly `max_groups` entries: the overall span
    /// first, then one per group, `None` where a group did not take part
    /// (or does not exist, or `NOSUB` is set). All spans are relative to
    /// `offset`. Text before `offset` is still visible to look-around such
    /// as `^` and `\b`.
    pub fn execute(
        &self,
        haystack: &Haystack<'_>,
        caps: &mut Captures,
        offset: usize,
        max_groups: usize,
    ) -> Option<Vec<Option<Span>>> {
        let base = haystack.lead + offset;
        let end = haystack.lead + haystack.subject.len();
        if base > end {
            return None;
        }
        let input = Input::new(haystack.text()).range(base..end);
        self.re.search_captures(&input, caps);
        if !caps.is_match() {
            return None;
        }
        let reported = if self.flags.contains(Flags::NOSUB) { 1 } else { max_groups };
        let spans = (0..max_groups.max(1))
            .map(|i| {
                if i >= reported {
                    return None;
                }
                caps.get_group(i).map(|s| Span::new(s.start - base, s.end - base))
            })
            .collect();
        Some(spans)
    }
}
