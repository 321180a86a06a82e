//! Types and API for Regex matching
//!
//! This module defines the [`Regex`] struct, a compiled pattern that can be
//! searched against any number of subjects, and the iterators it hands out.
//! Matching itself is delegated to the `regex-automata` meta engine; this
//! module owns the scan rules (how to move past a match, how to split).

use std::fmt;
use std::sync::Arc;

use regex_automata::{Anchored, meta};
use regex_syntax::hir::{Hir, Look};
use tracing::debug;

use crate::PatternSyntaxError;
use crate::util::{Captures, Input, Match, Span};

/// A compiled regular expression.
///
/// A `Regex` is immutable once built. It is cheap to clone and can be shared
/// between threads; every search draws its scratch space from the engine's
/// own pool, so concurrent searches never observe each other.
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    /// Unanchored searcher, used by everything except `full_match`.
    search: meta::Regex,
    /// The same pattern followed by `\z`, always run anchored.
    full: meta::Regex,
}

impl Regex {
    /// Compiles `pattern` with the default [`Config`].
    pub fn new(pattern: &str) -> Result<Self, PatternSyntaxError> {
        Builder::new(pattern).build()
    }

    pub fn builder(pattern: &str) -> Builder<'_> {
        Builder::new(pattern)
    }

    /// The pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of capture groups, including the implicit group 0.
    pub fn captures_len(&self) -> usize {
        self.search.captures_len()
    }

    /// Returns true whenever the input matches the regex or not, without
    /// returning the bounds of the match. This returns true iff find returns
    /// Some(...), but it may be faster in some cases.
    pub fn is_match<'s>(&self, input: impl Into<Input<'s>>) -> bool {
        exec(&self.search, &input.into().first_match(true), &mut [])
    }

    /// Match the regex against the input and returns the bounds of the
    /// leftmost match or None.
    pub fn find<'s>(&self, input: impl Into<Input<'s>>) -> Option<Match<'s>> {
        let input = input.into();
        let mut result = [None];
        if !exec(&self.search, &input, &mut result) {
            return None;
        }
        result[0].map(|span| Match::new(input.subject, span))
    }

    /// Like [`Regex::find`], but the match must start at the beginning of
    /// the input span.
    pub fn match_at<'s>(&self, input: impl Into<Input<'s>>) -> Option<Match<'s>> {
        self.find(input.into().anchored(true))
    }

    /// Returns a match only if the regex can cover the whole input span.
    /// Unlike checking the bounds of [`Regex::match_at`], this explores every
    /// alternative, so `a|ab` fully matches `ab`.
    pub fn full_match<'s>(&self, input: impl Into<Input<'s>>) -> Option<Match<'s>> {
        let input = input.into().anchored(true);
        let mut result = [None];
        if !exec(&self.full, &input, &mut result) {
            return None;
        }
        result[0].map(|span| Match::new(input.subject, span))
    }

    /// Returns an iterator over all non-overlapping match in the input.
    pub fn find_all<'r, 's>(&'r self, input: impl Into<Input<'s>>) -> AllMatch<'r, 's> {
        AllMatch {
            regex: self,
            input: input.into(),
            spans: [None],
        }
    }

    /// Collects the matched substrings of [`Regex::find_all`].
    pub fn find_all_str<'s>(&self, input: impl Into<Input<'s>>) -> Vec<&'s str> {
        self.find_all(input).map(|m| m.as_str()).collect()
    }

    /// Match the regex against the input and returns a match with all its
    /// capture groups bounds or None. If only the overall match is needed, you
    /// should prefer the use of `find` since it can be faster.
    pub fn find_captures<'s>(&self, input: impl Into<Input<'s>>) -> Option<Captures<'s>> {
        let input = input.into();
        let mut spans = vec![None; self.captures_len()].into_boxed_slice();
        if !exec(&self.search, &input, &mut spans) {
            return None;
        }
        Some(Captures::new(input.subject, spans))
    }

    /// Returns an iterator over all non-overlapping match in the input, with
    /// their capture group bounds. If only the overall match is needed, you
    /// should prefer the use of `find_all` since it can be faster.
    pub fn find_all_captures<'r, 's>(&'r self, input: impl Into<Input<'s>>) -> AllCaptures<'r, 's> {
        AllCaptures {
            regex: self,
            input: input.into(),
        }
    }

    /// Returns an iterator over the pieces of the input between matches.
    ///
    /// A match at the start or the end of the input produces an empty piece
    /// there, and so do two adjacent matches. An input without any match is
    /// returned whole.
    pub fn split<'r, 's>(&'r self, input: impl Into<Input<'s>>) -> Split<'r, 's> {
        let input = input.into();
        let last = input.valid().then_some(input.span.from);
        Split {
            finder: self.find_all(input),
            last,
        }
    }

    /// Collects the pieces of [`Regex::split`].
    pub fn split_str<'s>(&self, input: impl Into<Input<'s>>) -> Vec<&'s str> {
        self.split(input).collect()
    }

    /// Like [`Regex::split`], but yields at most `limit` pieces. The last
    /// piece holds the rest of the input, unsplit.
    pub fn splitn<'r, 's>(&'r self, input: impl Into<Input<'s>>, limit: usize) -> SplitN<'r, 's> {
        SplitN {
            splits: self.split(input),
            limit,
        }
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one search and fills the provided capture group array.
/// If the given array is of size n, then only the n-first capture groups are
/// written. An empty array turns the search into a plain yes/no test, the
/// only kind of search where `first_match` applies.
/// Returns false for an input whose span cannot be searched.
fn exec(engine: &meta::Regex, input: &Input<'_>, spans: &mut [Option<Span>]) -> bool {
    if !input.valid() {
        return false;
    }
    let anchored = if input.anchored {
        Anchored::Yes
    } else {
        Anchored::No
    };
    let search = regex_automata::Input::new(input.haystack())
        .range(input.span.from..input.span.to)
        .anchored(anchored)
        .earliest(input.first_match && spans.is_empty());
    match spans.len() {
        0 => engine.is_match(search),
        1 => match engine.search(&search) {
            Some(m) => {
                spans[0] = Some(m.span().into());
                true
            }
            None => false,
        },
        _ => {
            let mut caps = engine.create_captures();
            engine.search_captures(&search, &mut caps);
            if !caps.is_match() {
                return false;
            }
            for (i, slot) in spans.iter_mut().enumerate() {
                *slot = caps.get_group(i).map(Span::from);
            }
            true
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub unicode: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    /// Upper bound, in bytes, on the compiled program. `None` keeps the
    /// engine's default.
    pub size_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unicode: true,
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            size_limit: None,
        }
    }
}

impl From<Config> for regex_syntax::Parser {
    fn from(value: Config) -> Self {
        regex_syntax::ParserBuilder::new()
            .unicode(value.unicode)
            .case_insensitive(value.case_insensitive)
            .multi_line(value.multi_line)
            .dot_matches_new_line(value.dot_matches_new_line)
            .ignore_whitespace(value.ignore_whitespace)
            .build()
    }
}

impl From<&Config> for meta::Config {
    fn from(value: &Config) -> Self {
        let config = meta::Config::new();
        match value.size_limit {
            Some(limit) => config.nfa_size_limit(Some(limit)),
            None => config,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Builder<'s> {
    pattern: &'s str,
    config: Config,
}

impl<'s> Builder<'s> {
    pub fn new(pattern: &'s str) -> Self {
        Self {
            pattern,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn unicode(mut self, value: bool) -> Self {
        self.config.unicode = value;
        self
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.config.case_insensitive = value;
        self
    }

    pub fn multi_line(mut self, value: bool) -> Self {
        self.config.multi_line = value;
        self
    }

    pub fn dot_matches_new_line(mut self, value: bool) -> Self {
        self.config.dot_matches_new_line = value;
        self
    }

    pub fn ignore_whitespace(mut self, value: bool) -> Self {
        self.config.ignore_whitespace = value;
        self
    }

    pub fn size_limit(mut self, value: Option<usize>) -> Self {
        self.config.size_limit = value;
        self
    }

    /// Parses and compiles the pattern. Every syntax problem is reported
    /// here; a built [`Regex`] never fails afterwards.
    pub fn build(self) -> Result<Regex, PatternSyntaxError> {
        let pattern = self.pattern;
        let hir = regex_syntax::Parser::from(self.config.clone())
            .parse(pattern)
            .map_err(|e| {
                let err = PatternSyntaxError::from_syntax(pattern, &e);
                debug!(pattern, error = %err, "regex parse failed");
                err
            })?;
        let full_hir = Hir::concat(vec![hir.clone(), Hir::look(Look::End)]);

        let mut builder = meta::Regex::builder();
        builder.configure(meta::Config::from(&self.config));
        let build = |hir: &Hir| {
            builder.build_from_hir(hir).map_err(|e| {
                let err = PatternSyntaxError::from_build(pattern, &e);
                debug!(pattern, error = %err, "regex build failed");
                err
            })
        };
        let search = build(&hir)?;
        let full = build(&full_hir)?;

        debug!(
            pattern,
            captures = search.captures_len(),
            "compiled regex"
        );
        Ok(Regex {
            pattern: pattern.into(),
            search,
            full,
        })
    }
}

/// Iterator over all match in a regex.
#[derive(Debug)]
pub struct AllMatch<'r, 's> {
    regex: &'r Regex,
    input: Input<'s>,
    spans: [Option<Span>; 1],
}

impl<'r, 's> Iterator for AllMatch<'r, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.input.span.valid() {
            return None;
        }
        if !exec(&self.regex.search, &self.input, &mut self.spans) {
            return None;
        }
        let result = Match::new(self.input.subject, self.spans[0]?);
        self.input.span.from = result.next_match_start();
        Some(result)
    }
}

/// Iterator over all match and their capture groups.
#[derive(Debug)]
pub struct AllCaptures<'r, 's> {
    regex: &'r Regex,
    input: Input<'s>,
}

impl<'r, 's> Iterator for AllCaptures<'r, 's> {
    type Item = Captures<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.input.span.valid() {
            return None;
        }
        let result = self.regex.find_captures(self.input.clone())?;
        self.input.span.from = result.group0().next_match_start();
        Some(result)
    }
}

/// Iterator over the pieces of an input between matches.
#[derive(Debug)]
pub struct Split<'r, 's> {
    finder: AllMatch<'r, 's>,
    /// Start of the next piece, `None` once the final piece was returned.
    last: Option<usize>,
}

impl<'r, 's> Split<'r, 's> {
    /// Returns everything from the current position to the end of the input
    /// and ends the iteration.
    fn remainder(&mut self) -> Option<&'s str> {
        let start = self.last.take()?;
        let input = &self.finder.input;
        Some(&input.subject[start..input.span.to])
    }
}

impl<'r, 's> Iterator for Split<'r, 's> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.last?;
        match self.finder.next() {
            Some(m) => {
                self.last = Some(m.end());
                Some(&m.subject[start..m.start()])
            }
            None => self.remainder(),
        }
    }
}

/// Iterator over at most `limit` pieces of an input between matches.
#[derive(Debug)]
pub struct SplitN<'r, 's> {
    splits: Split<'r, 's>,
    limit: usize,
}

impl<'r, 's> Iterator for SplitN<'r, 's> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit == 0 {
            return None;
        }
        self.limit -= 1;
        if self.limit > 0 {
            return self.splits.next();
        }
        self.splits.remainder()
    }
}
