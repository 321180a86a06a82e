/*!
This module contains the small value types shared by every matching method:
the [`Input`] that drives a search, and the [`Match`] and [`Captures`] it
produces.
*/

use std::ops::Range;

/// Defines the input parameter to most matching methods on a [`crate::Regex`].
/// Since all values other than subject have a default value it's always
/// sufficient to only provide the subject string to all matching methods,
/// but for cases where we need more control (searching a sub-range, or
/// anchoring the match) this type comes handy.
#[derive(Clone, Debug)]
pub struct Input<'s> {
    /// The subject string against which the regex is matched
    pub subject: &'s str,
    /// Perform the match within that span. Text before `span.from` is still
    /// visible to look-behind assertions, text after `span.to` is not.
    /// Default: 0..subject.len()
    pub span: Span,
    /// Whenever the match should be anchored at the start of span.
    /// Default: false
    pub anchored: bool,
    /// Whenever the search may stop at the first match state it sees instead
    /// of resolving the preferred one. Only `is_match` honors it; searches
    /// that report bounds always return the preferred match.
    /// Default: false
    pub first_match: bool,
}

impl<'s> Input<'s> {
    pub fn new(subject: &'s str) -> Self {
        Self {
            subject,
            span: (0..subject.len()).into(),
            anchored: false,
            first_match: false,
        }
    }

    pub fn span(mut self, span: impl Into<Span>) -> Self {
        self.span = span.into();
        self
    }

    pub fn anchored(mut self, value: bool) -> Self {
        self.anchored = value;
        self
    }

    pub fn first_match(mut self, value: bool) -> Self {
        self.first_match = value;
        self
    }

    /// A span is searchable when it is ordered, inside the subject and on
    /// character boundaries.
    pub fn valid(&self) -> bool {
        self.span.valid()
            && self.subject.is_char_boundary(self.span.from)
            && self.subject.is_char_boundary(self.span.to)
    }

    /// The subject as the engine sees it: everything past `span.to` is cut.
    pub(crate) fn haystack(&self) -> &'s str {
        &self.subject[..self.span.to]
    }
}

impl<'s> From<&'s str> for Input<'s> {
    fn from(subject: &'s str) -> Self {
        Self::new(subject)
    }
}

impl<'s> From<&'s String> for Input<'s> {
    fn from(subject: &'s String) -> Self {
        Self::new(subject.as_str())
    }
}

/// A span in a &str. Similar to [`std::ops::Range`], but implements Copy.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn empty(&self) -> bool {
        self.from == self.to
    }

    pub fn valid(&self) -> bool {
        self.from <= self.to
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Self {
            from: value.start,
            to: value.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(val: Span) -> Self {
        val.from..val.to
    }
}

impl From<regex_automata::Span> for Span {
    fn from(value: regex_automata::Span) -> Self {
        Self {
            from: value.start,
            to: value.end,
        }
    }
}

/// Successful non-capturing match. Contains only the bounds of the
/// overall match.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Match<'s> {
    pub subject: &'s str,
    pub span: Span,
}

impl<'s> Match<'s> {
    pub fn new(subject: &'s str, span: impl Into<Span>) -> Self {
        let span = span.into();
        Self { subject, span }
    }

    /// The matched substring.
    pub fn as_str(&self) -> &'s str {
        &self.subject[self.span.from..self.span.to]
    }

    pub fn start(&self) -> usize {
        self.span.from
    }

    pub fn end(&self) -> usize {
        self.span.to
    }

    pub fn range(&self) -> Range<usize> {
        self.span.into()
    }

    pub fn is_empty(&self) -> bool {
        self.span.empty()
    }

    /// Returns the byte-index where the next non-overlapping
    /// match could start. This take into account empty match.
    pub fn next_match_start(&self) -> usize {
        if self.span.empty() {
            // Must advance to next codepoint otherwise we would always return
            // the same empty match forever. Past the end, step out of bounds.
            self.subject[self.span.to..]
                .chars()
                .next()
                .map_or(self.span.to + 1, |c| self.span.to + c.len_utf8())
        } else {
            self.span.to
        }
    }
}

/// Successful capturing match. Contains the bounds (if any) of all capture groups
/// defined in the pattern. In particular this include the implicit capture-group
/// 0.
#[derive(Debug, Clone)]
pub struct Captures<'s> {
    subject: &'s str,
    spans: Box<[Option<Span>]>,
}

impl<'s> Captures<'s> {
    pub fn new(subject: &'s str, spans: Box<[Option<Span>]>) -> Self {
        Self { subject, spans }
    }

    pub fn get(&self, group_index: usize) -> Option<Match<'s>> {
        let span = (*self.spans.get(group_index)?)?;
        Some(Match {
            subject: self.subject,
            span,
        })
    }

    pub fn group0(&self) -> Match<'s> {
        let span = self.spans.first().copied().flatten();
        // Captures are only built from a successful search, which always
        // sets group 0.
        Match {
            subject: self.subject,
            span: span.unwrap_or(Span { from: 0, to: 0 }),
        }
    }

    /// Number of groups, including group 0, whether or not they matched.
    pub fn group_len(&self) -> usize {
        self.spans.len()
    }

    /// Iterates over every group in order, `None` for groups that did not
    /// participate in the match.
    pub fn iter(&self) -> impl Iterator<Item = Option<Match<'s>>> + '_ {
        (0..self.spans.len()).map(|i| self.get(i))
    }
}
