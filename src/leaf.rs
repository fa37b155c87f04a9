// leaf.rs - Leaf patterns: single-element predicates and subsequences.

use std::fmt;

use crate::captures::Captures;
use crate::pattern::{Haystack, Match, Matches, Pattern};

// ===========================================================================
// One
// ===========================================================================

/// Matches exactly one element satisfying a predicate.
///
/// The single candidate covers `[start, start + 1)`; an empty window
/// never matches, so `One` cannot produce a zero-width candidate.
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "abc".chars().collect();
/// assert!(One::eq('a').match_anchored(&hay).is_some());
/// assert!(One::new(|c: &char| c.is_ascii_digit()).match_anchored(&hay).is_none());
/// ```
pub struct One<T> {
    pred: Box<dyn Fn(&T) -> bool>,
}

impl<T> One<T> {
    /// Match any element for which `pred` returns `true`.
    pub fn new(pred: impl Fn(&T) -> bool + 'static) -> One<T> {
        One {
            pred: Box::new(pred),
        }
    }

    /// Match any element at all.
    pub fn any() -> One<T> {
        One {
            pred: Box::new(|_| true),
        }
    }
}

impl<T: PartialEq + 'static> One<T> {
    /// Match elements equal to `value`.
    pub fn eq(value: T) -> One<T> {
        One {
            pred: Box::new(move |element| *element == value),
        }
    }
}

impl<T> Pattern<T> for One<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        let hit = start != end && (self.pred)(hay.at(start));
        let candidate = hit.then(|| Match::new(start, start + 1, caps));
        Box::new(candidate.into_iter())
    }
}

impl<T> fmt::Debug for One<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("One").finish_non_exhaustive()
    }
}

// ===========================================================================
// Literal
// ===========================================================================

/// Matches a fixed run of elements at the current position.
///
/// The single candidate covers the whole run. An empty run matches
/// everywhere with a zero-width candidate, including at the end of the
/// haystack.
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "abcd".chars().collect();
/// let m = Literal::new(['a', 'b']).match_anchored(&hay).unwrap();
/// assert_eq!(m.range(), 0..2);
/// ```
pub struct Literal<T> {
    needle: Vec<T>,
    eq: Box<dyn Fn(&T, &T) -> bool>,
}

impl<T: PartialEq + 'static> Literal<T> {
    /// Match `needle` element-for-element using `==`.
    pub fn new(needle: impl Into<Vec<T>>) -> Literal<T> {
        Literal::with_comparator(needle, |a, b| a == b)
    }
}

impl<T> Literal<T> {
    /// Match `needle` using a custom comparator.
    ///
    /// The comparator receives the needle element first and the haystack
    /// element second.
    ///
    /// ```
    /// use patina::prelude::*;
    ///
    /// let hay: Vec<char> = "AbC".chars().collect();
    /// let relaxed = Literal::with_comparator(['a', 'b', 'c'], |a: &char, b: &char| {
    ///     a.eq_ignore_ascii_case(b)
    /// });
    /// assert!(relaxed.match_anchored(&hay).is_some());
    /// ```
    pub fn with_comparator(
        needle: impl Into<Vec<T>>,
        eq: impl Fn(&T, &T) -> bool + 'static,
    ) -> Literal<T> {
        Literal {
            needle: needle.into(),
            eq: Box::new(eq),
        }
    }

    /// Number of elements the literal requires.
    pub fn len(&self) -> usize {
        self.needle.len()
    }

    /// Returns `true` if the literal matches the empty run.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl<T> Pattern<T> for Literal<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        let n = self.needle.len();
        let hit = n == 0
            || (end - start >= n
                && self
                    .needle
                    .iter()
                    .enumerate()
                    .all(|(i, element)| (self.eq)(element, hay.at(start + i))));
        let candidate = hit.then(|| Match::new(start, start + n, caps));
        Box::new(candidate.into_iter())
    }
}

impl<T> fmt::Debug for Literal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Literal")
            .field("len", &self.needle.len())
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
