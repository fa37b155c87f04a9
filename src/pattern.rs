// pattern.rs - The matching contract: Haystack, Match, and Pattern.

use std::ops::Range;
use std::sync::Arc;

use crate::captures::Captures;

// ===========================================================================
// Haystack
// ===========================================================================

/// A read-only, zero-indexed sequence of elements.
///
/// The engine only ever reads through this trait, so any indexable
/// collection can be matched against. Slices, vectors and arrays are
/// covered out of the box; strings are matched by collecting to
/// `Vec<char>` first.
pub trait Haystack<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// The element at `index`. Callers keep `index` below
    /// [`len`](Haystack::len).
    fn at(&self, index: usize) -> &T;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Haystack<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Haystack<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Haystack<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

// ===========================================================================
// Match
// ===========================================================================

/// One candidate match: a half-open span plus the capture snapshot in
/// effect when the candidate was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match {
    start: usize,
    end: usize,
    captures: Captures,
}

impl Match {
    /// Create a match covering `[start, end)` with `captures`.
    pub fn new(start: usize, end: usize, captures: Captures) -> Match {
        Match {
            start,
            end,
            captures,
        }
    }

    /// Offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched element.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched span as a standard range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of elements matched.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the match is zero-width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The captures recorded by this candidate.
    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Consume the match, keeping only its captures.
    pub fn into_captures(self) -> Captures {
        self.captures
    }
}

// ===========================================================================
// Pattern
// ===========================================================================

/// A lazily pulled stream of match candidates, best candidate first.
pub type Matches<'m> = Box<dyn Iterator<Item = Match> + 'm>;

/// A composable matcher over sequences of `T`.
///
/// `try_match` enumerates every way the pattern can match at `start`
/// within the window `[start, end)`, in priority order: the candidate the
/// pattern most prefers comes first, and a consumer that stops pulling
/// stops the exploration with it. Candidates never reach outside the
/// window, and implementations treat both the haystack and the incoming
/// capture snapshot as read-only, so enumerations are repeatable.
///
/// Implement this trait directly to plug domain-specific leaves into the
/// combinators:
///
/// ```
/// use patina::prelude::*;
///
/// /// Matches any two consecutive elements.
/// struct AnyTwo;
///
/// impl Pattern<u8> for AnyTwo {
///     fn try_match<'m>(
///         &'m self,
///         caps: Captures,
///         hay: &'m dyn Haystack<u8>,
///         start: usize,
///         end: usize,
///     ) -> Matches<'m> {
///         let fits = start + 2 <= end;
///         Box::new(fits.then(|| Match::new(start, start + 2, caps)).into_iter())
///     }
/// }
///
/// let hay = vec![1u8, 2, 3];
/// assert_eq!(AnyTwo.match_anchored(&hay).map(|m| m.range()), Some(0..2));
/// ```
pub trait Pattern<T> {
    /// Enumerate candidates starting at `start` within `[start, end)`.
    ///
    /// `caps` is the snapshot candidates build on; returning no candidate
    /// at all is how a pattern reports "no match here".
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m>;
}

impl<T, P: Pattern<T> + ?Sized> Pattern<T> for &P {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        (**self).try_match(caps, hay, start, end)
    }
}

impl<T, P: Pattern<T> + ?Sized> Pattern<T> for Box<P> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        (**self).try_match(caps, hay, start, end)
    }
}

impl<T, P: Pattern<T> + ?Sized> Pattern<T> for Arc<P> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        (**self).try_match(caps, hay, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::One;

    #[test]
    fn haystack_slice_and_vec_agree() {
        let items = vec![10, 20, 30];
        let as_vec: &dyn Haystack<i32> = &items;
        let as_slice: &[i32] = &items[..];
        assert_eq!(as_vec.len(), 3);
        assert_eq!(as_slice.len(), 3);
        assert_eq!(as_vec.at(1), as_slice.at(1));
        assert!(!as_vec.is_empty());
    }

    #[test]
    fn haystack_array_reports_const_len() {
        let items = ['x', 'y'];
        let hay: &dyn Haystack<char> = &items;
        assert_eq!(hay.len(), 2);
        assert_eq!(*hay.at(0), 'x');
    }

    #[test]
    fn match_accessors() {
        let m = Match::new(2, 5, Captures::new());
        assert_eq!(m.start(), 2);
        assert_eq!(m.end(), 5);
        assert_eq!(m.range(), 2..5);
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert!(m.captures().is_empty());
    }

    #[test]
    fn shared_and_boxed_patterns_delegate() {
        let hay = vec!['a'];
        let plain = One::eq('a');
        let shared: Arc<dyn Pattern<char>> = Arc::new(One::eq('a'));
        let boxed: Box<dyn Pattern<char>> = Box::new(One::eq('a'));

        let direct: Vec<Match> = plain
            .try_match(Captures::new(), &hay, 0, 1)
            .collect();
        let via_arc: Vec<Match> = shared
            .try_match(Captures::new(), &hay, 0, 1)
            .collect();
        let via_box: Vec<Match> = boxed
            .try_match(Captures::new(), &hay, 0, 1)
            .collect();
        let via_ref: Vec<Match> = (&plain)
            .try_match(Captures::new(), &hay, 0, 1)
            .collect();

        assert_eq!(direct, via_arc);
        assert_eq!(direct, via_box);
        assert_eq!(direct, via_ref);
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].range(), 0..1);
    }
}
