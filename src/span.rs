use std::ops::Range;

/// A half-open byte range `[start, end)` into a subject.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Span {
        debug_assert!(start <= end, "span {}..{} is reversed", start, end);
        Span { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Moves the span `by` bytes to the right.
    #[inline]
    pub fn shift(self, by: usize) -> Span {
        Span::new(self.start + by, self.end + by)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

/// A single match of a pattern in a subject.
///
/// Every span in a record is relative to the whole subject, whatever
/// offset the search started from. The lifetime `'s` is the lifetime of
/// the subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord<'s> {
    subject: &'s str,
    overall: Span,
    groups: Vec<Option<Span>>,
}

impl<'s> MatchRecord<'s> {
    pub(crate) fn new(subject: &'s str, overall: Span, groups: Vec<Option<Span>>) -> Self {
        debug_assert!(overall.end <= subject.len());
        MatchRecord { subject, overall, groups }
    }

    /// Returns the starting byte offset of the match in the subject.
    #[inline]
    pub fn start(&self) -> usize {
        self.overall.start
    }

    /// Returns the ending byte offset of the match in the subject.
    #[inline]
    pub fn end(&self) -> usize {
        self.overall.end
    }

    /// The first matched byte, counting from 1.
    ///
    /// For an empty match this is one past `to()`.
    #[inline]
    pub fn from(&self) -> usize {
        self.overall.start + 1
    }

    /// The last matched byte, counting from 1.
    #[inline]
    pub fn to(&self) -> usize {
        self.overall.end
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.overall
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.overall.range()
    }

    /// Returns the matched text.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        &self.subject[self.range()]
    }

    /// Returns the subject this match was found in.
    #[inline]
    pub fn subject(&self) -> &'s str {
        self.subject
    }

    /// Group spans in declaration order, starting with group 1.
    pub fn groups(&self) -> &[Option<Span>] {
        &self.groups
    }

    /// Returns the span of group `n`, where group 0 is the whole match.
    ///
    /// `None` when the group did not take part in the match or was not
    /// requested.
    pub fn group(&self, n: usize) -> Option<Span> {
        match n {
            0 => Some(self.overall),
            n => self.groups.get(n - 1).copied().flatten(),
        }
    }

    /// Returns the text captured by group `n`.
    pub fn group_str(&self, n: usize) -> Option<&'s str> {
        self.group(n).map(|span| &self.subject[span.range()])
    }
}
