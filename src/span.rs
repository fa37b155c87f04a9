// span.rs - Half-open spans and merged span sets.
//
// A SpanSet is the value recorded under one capture name: every span the
// capture matched, kept merged so that overlapping or touching spans
// collapse into a single one.

use std::ops::Range;

use smallvec::{smallvec, SmallVec};

// ===========================================================================
// Span
// ===========================================================================

/// A half-open range `[start, end)` over an input sequence.
///
/// `Span` itself performs no validation; inverted bounds are rejected at
/// the [`SpanSet`] boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Offset of the first covered element.
    pub start: usize,
    /// Offset one past the last covered element.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span is zero-width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a standard range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Span {
        Span::new(range.start, range.end)
    }
}

// ===========================================================================
// SpanSet
// ===========================================================================

/// The set of spans recorded under one capture name.
///
/// Spans are kept pairwise disjoint and non-adjacent: inserting a span
/// that overlaps or touches an existing one merges them into a single
/// span covering both. A `SpanSet` always holds at least one span.
///
/// # Examples
///
/// ```
/// use patina::span::{Span, SpanSet};
///
/// let mut set = SpanSet::new(Span::new(1, 2));
/// set.insert(Span::new(3, 4));
/// assert_eq!(set.spans().len(), 2);
///
/// // A span touching both bridges them into one.
/// set.insert(Span::new(2, 3));
/// assert_eq!(set.spans(), &[Span::new(1, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSet {
    spans: SmallVec<[Span; 2]>,
}

impl SpanSet {
    /// Create a set holding `span`. A zero-width span is stored as-is.
    ///
    /// # Panics
    ///
    /// Panics if `span.end < span.start`.
    pub fn new(span: Span) -> SpanSet {
        if span.end < span.start {
            panic!("invalid span: {}..{}", span.start, span.end);
        }
        SpanSet {
            spans: smallvec![span],
        }
    }

    /// Insert a span, merging it with every stored span it overlaps or
    /// touches. The merged span moves to the front; untouched spans keep
    /// their relative order behind it.
    ///
    /// Inserting a zero-width span is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `span.end < span.start`.
    pub fn insert(&mut self, span: Span) {
        if span.start == span.end {
            return;
        }
        if span.end < span.start {
            panic!("invalid span: {}..{}", span.start, span.end);
        }
        let mut merged = span;
        let mut rest: SmallVec<[Span; 2]> = SmallVec::new();
        for &existing in &self.spans {
            if merged.end.min(existing.end) < merged.start.max(existing.start) {
                rest.push(existing);
            } else {
                merged.start = merged.start.min(existing.start);
                merged.end = merged.end.max(existing.end);
            }
        }
        self.spans.clear();
        self.spans.push(merged);
        self.spans.extend(rest);
    }

    /// Smallest `start` over all stored spans.
    pub fn start(&self) -> usize {
        self.spans.iter().fold(usize::MAX, |low, s| low.min(s.start))
    }

    /// Largest `end` over all stored spans.
    pub fn end(&self) -> usize {
        self.spans.iter().fold(0, |high, s| high.max(s.end))
    }

    /// Index of the last covered element: `end() - 1`, or `None` when
    /// `end()` is 0.
    pub fn last(&self) -> Option<usize> {
        self.end().checked_sub(1)
    }

    /// Width of the outer span, `end() - start()`.
    ///
    /// Gaps between disjoint spans are not subtracted: a set holding
    /// `1..2` and `3..4` has length 3, not 2.
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Returns `true` if the outer span is zero-width.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` falls within any stored span.
    ///
    /// The upper bound is inclusive: a set holding `1..3` contains 3,
    /// unlike the half-open spans used everywhere else.
    pub fn contains(&self, index: usize) -> bool {
        self.spans.iter().any(|s| index >= s.start && index <= s.end)
    }

    /// The stored spans, most recently merged first.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SpanSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.spans.serialize(serializer)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
