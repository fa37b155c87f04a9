// combinators.rs - Sequencing, alternation and named captures.

use std::fmt;
use std::sync::Arc;

use crate::captures::Captures;
use crate::pattern::{Haystack, Match, Matches, Pattern};
use crate::span::Span;

// ===========================================================================
// Sequence
// ===========================================================================

/// Matches stages one after another, each starting where the previous
/// candidate ended.
///
/// Backtracking works across stages: when a later stage runs out of
/// candidates, the previous stage advances to its next candidate and the
/// tail is retried from there. The final stage contributes at most one
/// candidate per prefix combination; with no stages at all, the sequence
/// matches the empty span.
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "ab".chars().collect();
/// let both = Sequence::new().then(One::eq('a')).then(One::eq('b'));
/// assert_eq!(both.match_anchored(&hay).unwrap().range(), 0..2);
/// ```
pub struct Sequence<T> {
    children: Vec<Arc<dyn Pattern<T>>>,
}

impl<T> Sequence<T> {
    /// An empty sequence; matches the empty span until stages are added.
    pub fn new() -> Sequence<T> {
        Sequence {
            children: Vec::new(),
        }
    }

    /// Append a stage.
    pub fn then(mut self, pattern: impl Pattern<T> + 'static) -> Sequence<T> {
        self.children.push(Arc::new(pattern));
        self
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Sequence<T> {
        Sequence::new()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Sequence<T> {
        Sequence {
            children: self.children.clone(),
        }
    }
}

impl<T> Pattern<T> for Sequence<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        if self.children.is_empty() {
            return Box::new(Some(Match::new(start, start, caps)).into_iter());
        }
        let first = self.children[0].try_match(caps, hay, start, end);
        Box::new(SequenceMatches {
            children: &self.children,
            hay,
            start,
            end,
            stack: vec![first],
        })
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("stages", &self.children.len())
            .finish_non_exhaustive()
    }
}

/// Depth-first walk over the stage candidates. `stack[i]` enumerates
/// stage `i` at the position where stage `i - 1` currently ends.
struct SequenceMatches<'m, T> {
    children: &'m [Arc<dyn Pattern<T>>],
    hay: &'m dyn Haystack<T>,
    start: usize,
    end: usize,
    stack: Vec<Matches<'m>>,
}

impl<T> Iterator for SequenceMatches<'_, T> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let children = self.children;
        let hay = self.hay;
        loop {
            let depth = self.stack.len();
            if depth == 0 {
                return None;
            }
            let Some(candidate) = self.stack[depth - 1].next() else {
                self.stack.pop();
                continue;
            };
            if depth == children.len() {
                // Last stage: one candidate per prefix, then hand control
                // back to the stage before it.
                self.stack.pop();
                return Some(Match::new(
                    self.start,
                    candidate.end(),
                    candidate.into_captures(),
                ));
            }
            let (cursor, caps) = (candidate.end(), candidate.into_captures());
            self.stack
                .push(children[depth].try_match(caps, hay, cursor, self.end));
        }
    }
}

// ===========================================================================
// Alt
// ===========================================================================

/// Matches the first of several alternatives, trying them in the order
/// they were added.
///
/// The full candidate stream is the concatenation of every branch's
/// stream, so an earlier branch's candidates always outrank a later
/// branch's.
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "cab".chars().collect();
/// let pet = Alt::new()
///     .or(Literal::new(['c', 'a', 't']))
///     .or(Literal::new(['c', 'a', 'b']));
/// assert_eq!(pet.match_anchored(&hay).unwrap().range(), 0..3);
/// ```
pub struct Alt<T> {
    children: Vec<Arc<dyn Pattern<T>>>,
}

impl<T> Alt<T> {
    /// An empty alternation; matches nothing until branches are added.
    pub fn new() -> Alt<T> {
        Alt {
            children: Vec::new(),
        }
    }

    /// Append a branch.
    pub fn or(mut self, pattern: impl Pattern<T> + 'static) -> Alt<T> {
        self.children.push(Arc::new(pattern));
        self
    }
}

impl<T> Default for Alt<T> {
    fn default() -> Alt<T> {
        Alt::new()
    }
}

impl<T> Clone for Alt<T> {
    fn clone(&self) -> Alt<T> {
        Alt {
            children: self.children.clone(),
        }
    }
}

impl<T> Pattern<T> for Alt<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        Box::new(AltMatches {
            children: &self.children,
            hay,
            caps,
            start,
            end,
            index: 0,
            current: None,
        })
    }
}

impl<T> fmt::Debug for Alt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alt")
            .field("branches", &self.children.len())
            .finish_non_exhaustive()
    }
}

struct AltMatches<'m, T> {
    children: &'m [Arc<dyn Pattern<T>>],
    hay: &'m dyn Haystack<T>,
    caps: Captures,
    start: usize,
    end: usize,
    index: usize,
    current: Option<Matches<'m>>,
}

impl<T> Iterator for AltMatches<'_, T> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let children = self.children;
        let hay = self.hay;
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(candidate) = current.next() {
                    return Some(candidate);
                }
                self.current = None;
            }
            let branch = children.get(self.index)?;
            self.index += 1;
            self.current = Some(branch.try_match(self.caps.clone(), hay, self.start, self.end));
        }
    }
}

// ===========================================================================
// Capture
// ===========================================================================

/// Records the span of every candidate of the wrapped pattern under a
/// name.
///
/// Each candidate's snapshot is built from the snapshot the capture
/// itself received, so names recorded inside the wrapped pattern do not
/// survive the wrapper; a repeated capture accumulates spans through the
/// repetition instead, merging adjacent ones.
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "aaab".chars().collect();
/// let word = Capture::new("run", Repeat::plus(One::eq('a')));
/// let m = word.match_anchored(&hay).unwrap();
/// let run = m.captures().get("run").unwrap();
/// assert_eq!((run.start(), run.end()), (0, 3));
/// ```
pub struct Capture<T> {
    name: String,
    inner: Arc<dyn Pattern<T>>,
}

impl<T> Capture<T> {
    /// Record `pattern`'s candidates under `name`.
    pub fn new(name: impl Into<String>, pattern: impl Pattern<T> + 'static) -> Capture<T> {
        Capture {
            name: name.into(),
            inner: Arc::new(pattern),
        }
    }

    /// The capture name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Capture<T> {
        Capture {
            name: self.name.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T> Pattern<T> for Capture<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        let inner = self.inner.try_match(caps.clone(), hay, start, end);
        Box::new(inner.map(move |candidate| {
            let recorded = caps.capture(&self.name, Span::new(candidate.start(), candidate.end()));
            Match::new(candidate.start(), candidate.end(), recorded)
        }))
    }
}

impl<T> fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capture")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
