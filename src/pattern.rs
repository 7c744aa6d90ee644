use std::fmt;

use log::{debug, trace};
use regex_automata::util::captures::Captures;

use crate::error::Result;
use crate::exec::{Exec, Haystack};
use crate::flags::Flags;
use crate::group::GroupCount;
use crate::options::Options;
use crate::scan::Matches;
use crate::span::MatchRecord;

/// A compiled pattern together with the text it was compiled from.
///
/// A `Pattern` has a single owner and is never mutated after it is built,
/// so its compiled form, its text and its group count always agree.
/// Dropping it (or calling [`Pattern::release`]) frees the compiled form.
pub struct Pattern {
    exec: Exec,
    source: String,
    flags: Flags,
    groups: GroupCount,
}

impl Pattern {
    /// Compiles `text` with the default flags (`EXTENDED`).
    pub fn new(text: &str) -> Result<Pattern> {
        Options::new(text).build()
    }

    /// Compiles `text` with the given flags.
    pub fn with_flags(text: &str, flags: Flags) -> Result<Pattern> {
        Options::new(text).flags(flags).build()
    }

    pub(crate) fn from_options(options: Options) -> Result<Pattern> {
        let exec = Exec::new(&options).map_err(|err| {
            debug!("failed to compile {:?} with {:?}: {}", options.pattern, options.flags, err);
            err
        })?;
        let groups = GroupCount::of(&options.pattern);
        debug!("compiled {:?} with {:?}, {:?}", options.pattern, options.flags, groups);
        Ok(Pattern { exec, source: options.pattern, flags: options.flags, groups })
    }

    /// Returns the text this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns how many backreferences a substitution template must carry.
    pub fn group_count(&self) -> GroupCount {
        self.groups
    }

    /// Frees the compiled form. Equivalent to dropping the pattern.
    pub fn release(self) {}

    /// Returns true if and only if the pattern matches somewhere in
    /// `subject`.
    pub fn is_match(&self, subject: &str) -> bool {
        self.find(subject).is_some()
    }

    /// Returns the leftmost match in `subject`, if any.
    pub fn find<'s>(&self, subject: &'s str) -> Option<MatchRecord<'s>> {
        self.find_at(subject, 0)
    }

    /// Returns the leftmost match in `subject` that starts at or after
    /// `offset`.
    ///
    /// The text before `offset` is still taken into account by anchors and
    /// word boundaries. Offsets in the returned record are relative to the
    /// whole subject.
    pub fn find_at<'s>(&self, subject: &'s str, offset: usize) -> Option<MatchRecord<'s>> {
        let haystack = self.exec.haystack(subject);
        let mut caps = self.exec.create_captures();
        self.resolve(&haystack, &mut caps, offset)
    }

    /// Returns an iterator over every non-overlapping match in `subject`,
    /// left to right.
    pub fn find_iter<'p, 's>(&'p self, subject: &'s str) -> Matches<'p, 's> {
        Matches::new(self, subject)
    }

    /// Collects every non-overlapping match in `subject`.
    pub fn match_all<'s>(&self, subject: &'s str) -> Vec<MatchRecord<'s>> {
        self.find_iter(subject).collect()
    }

    pub(crate) fn haystack<'s>(&self, subject: &'s str) -> Haystack<'s> {
        self.exec.haystack(subject)
    }

    pub(crate) fn create_captures(&self) -> Captures {
        self.exec.create_captures()
    }

    /// Runs one match attempt at `offset` and moves the window-relative
    /// spans the engine reports onto the subject.
    pub(crate) fn resolve<'s>(
        &self,
        haystack: &Haystack<'s>,
        caps: &mut Captures,
        offset: usize,
    ) -> Option<MatchRecord<'s>> {
        let wanted = self.groups.get().unwrap_or(0) + 1;
        let mut spans = self.exec.execute(haystack, caps, offset, wanted)?;
        let overall = spans[0]?.shift(offset);
        let groups = spans
            .drain(1..)
            .map(|span| span.map(|s| s.shift(offset)))
            .collect();
        let record = MatchRecord::new(haystack.subject(), overall, groups);
        trace!("{:?} matched {}..{} from offset {}", self.source, record.start(), record.end(), offset);
        Some(record)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .field("groups", &self.groups)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        debug!("released {:?}", self.source);
    }
}
