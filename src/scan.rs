use std::iter::FusedIterator;

use regex_automata::util::captures::Captures;

use crate::exec::Haystack;
use crate::pattern::Pattern;
use crate::span::MatchRecord;

/// An iterator over all non-overlapping matches of a pattern in a subject.
///
/// Each call to [`Pattern::find_iter`] scans from the start of the subject.
/// `'p` is the lifetime of the pattern and `'s` the lifetime of the
/// subject.
#[derive(Debug)]
pub struct Matches<'p, 's> {
    pattern: &'p Pattern,
    haystack: Haystack<'s>,
    caps: Captures,
    last_end: usize,
    last_match: Option<usize>,
}

impl<'p, 's> Matches<'p, 's> {
    pub(crate) fn new(pattern: &'p Pattern, subject: &'s str) -> Self {
        Matches {
            pattern,
            haystack: pattern.haystack(subject),
            caps: pattern.create_captures(),
            last_end: 0,
            last_match: None,
        }
    }

    /// Return the text being searched.
    pub fn subject(&self) -> &'s str {
        self.haystack.subject()
    }

    /// Return the underlying pattern.
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }
}

impl<'p, 's> Iterator for Matches<'p, 's> {
    type Item = MatchRecord<'s>;

    fn next(&mut self) -> Option<MatchRecord<'s>> {
        let subject = self.haystack.subject();
        loop {
            if self.last_end > subject.len() {
                return None;
            }
            let m = match self.pattern.resolve(&self.haystack, &mut self.caps, self.last_end) {
                Some(m) => m,
                None => {
                    self.last_end = subject.len() + 1;
                    return None;
                }
            };
            let (s, e) = (m.start(), m.end());
            if s == e {
                // An empty match. Start the next search at the next
                // character so the scan always makes progress.
                self.last_end = next_char(subject, e);
                // Don't accept empty matches immediately following a match.
                if Some(e) == self.last_match {
                    continue;
                }
            } else {
                self.last_end = e;
            }
            self.last_match = Some(e);
            return Some(m);
        }
    }
}

impl<'p, 's> FusedIterator for Matches<'p, 's> {}

/// The offset just past the character starting at `at`, or `at + 1` at the
/// end of the text.
fn next_char(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(at + 1, |c| at + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::next_char;

    #[test]
    fn steps_whole_characters() {
        assert_eq!(next_char("abc", 0), 1);
        assert_eq!(next_char("aé", 1), 3);
        assert_eq!(next_char("ab", 2), 3);
        assert_eq!(next_char("", 0), 1);
    }
}
