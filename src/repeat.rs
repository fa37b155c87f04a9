// repeat.rs - Bounded repetition with independent greedy/lazy axes.
//
// Candidates are enumerated in two nested layers. The outer layer walks
// candidate end boundaries across the window, longest first when greedy
// and shortest first when lazy. The inner layer tiles repetitions of the
// wrapped pattern up to the current boundary, tracking how many
// repetitions each partial tiling has completed. Tilings that fill the
// window exactly, partial tilings whose count is in range, and the
// zero-repetition empty candidate all surface as candidates, ordered by
// the two laziness flags.

use std::iter::Rev;
use std::mem;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::{fmt, iter};

use crate::captures::Captures;
use crate::pattern::{Haystack, Match, Matches, Pattern};

/// Repeats a pattern between `min` and `max` times.
///
/// Enumeration order is controlled on two independent axes:
///
/// * the **range** axis picks the order candidate end boundaries are
///   offered (greedy: longest first; lazy: shortest first);
/// * the **quantity** axis picks, within one boundary, whether a tiling
///   with fewer repetitions is offered before attempting one more
///   repetition (lazy) or after (greedy).
///
/// [`star`], [`plus`] and [`optional`] are plain configurations of this
/// struct, not separate implementations. Every constructor starts out
/// greedy; [`lazy`] flips both axes at once.
///
/// The same overall span can surface several times when different
/// boundaries produce it; consumers that stop at the first candidate
/// never notice, and full enumeration preserves the priority order.
///
/// A wrapped pattern that can match zero elements makes no progress
/// inside an unbounded repetition and can tile the same position
/// forever. There is no loop guard; keep zero-width-capable patterns
/// out of unbounded repetition.
///
/// [`star`]: Repeat::star
/// [`plus`]: Repeat::plus
/// [`optional`]: Repeat::optional
/// [`lazy`]: Repeat::lazy
///
/// # Examples
///
/// ```
/// use patina::prelude::*;
///
/// let hay: Vec<char> = "aaaa".chars().collect();
///
/// // Greedy takes as much as it can.
/// let m = Repeat::plus(One::eq('a')).match_anchored(&hay).unwrap();
/// assert_eq!(m.range(), 0..4);
///
/// // Lazy takes as little as allowed.
/// let m = Repeat::plus(One::eq('a')).lazy(true).match_anchored(&hay).unwrap();
/// assert_eq!(m.range(), 0..1);
/// ```
pub struct Repeat<T> {
    inner: Arc<dyn Pattern<T>>,
    min: usize,
    max: Option<usize>,
    lazy_range: bool,
    lazy_quantity: bool,
}

impl<T> Repeat<T> {
    /// Repeat `pattern` between `min` and `max` times, inclusive.
    pub fn between(pattern: impl Pattern<T> + 'static, min: usize, max: usize) -> Repeat<T> {
        Repeat {
            inner: Arc::new(pattern),
            min,
            max: Some(max),
            lazy_range: false,
            lazy_quantity: false,
        }
    }

    /// Repeat `pattern` at least `min` times, with no upper bound.
    pub fn at_least(pattern: impl Pattern<T> + 'static, min: usize) -> Repeat<T> {
        Repeat {
            inner: Arc::new(pattern),
            min,
            max: None,
            lazy_range: false,
            lazy_quantity: false,
        }
    }

    /// Repeat `pattern` exactly `count` times.
    pub fn times(pattern: impl Pattern<T> + 'static, count: usize) -> Repeat<T> {
        Repeat::between(pattern, count, count)
    }

    /// Zero or more repetitions, the `*` quantifier.
    pub fn star(pattern: impl Pattern<T> + 'static) -> Repeat<T> {
        Repeat::at_least(pattern, 0)
    }

    /// One or more repetitions, the `+` quantifier.
    pub fn plus(pattern: impl Pattern<T> + 'static) -> Repeat<T> {
        Repeat::at_least(pattern, 1)
    }

    /// Zero or one repetition, the `?` quantifier.
    pub fn optional(pattern: impl Pattern<T> + 'static) -> Repeat<T> {
        Repeat::between(pattern, 0, 1)
    }

    /// Set both laziness axes at once.
    pub fn lazy(self, yes: bool) -> Repeat<T> {
        self.lazy_range(yes).lazy_quantity(yes)
    }

    /// Set only the boundary-order axis.
    pub fn lazy_range(mut self, yes: bool) -> Repeat<T> {
        self.lazy_range = yes;
        self
    }

    /// Set only the repetition-count axis.
    pub fn lazy_quantity(mut self, yes: bool) -> Repeat<T> {
        self.lazy_quantity = yes;
        self
    }

    fn quantity_ok(&self, quantity: usize) -> bool {
        quantity >= self.min && self.max.map_or(true, |max| quantity <= max)
    }
}

impl<T> Clone for Repeat<T> {
    fn clone(&self) -> Repeat<T> {
        Repeat {
            inner: self.inner.clone(),
            min: self.min,
            max: self.max,
            lazy_range: self.lazy_range,
            lazy_quantity: self.lazy_quantity,
        }
    }
}

impl<T> Pattern<T> for Repeat<T> {
    fn try_match<'m>(
        &'m self,
        caps: Captures,
        hay: &'m dyn Haystack<T>,
        start: usize,
        end: usize,
    ) -> Matches<'m> {
        if self.max == Some(0) {
            return Box::new(iter::once(Match::new(start, start, caps)));
        }
        let bounds = if self.lazy_range {
            Boundaries::Ascending(start..=end)
        } else {
            Boundaries::Descending((start..=end).rev())
        };
        Box::new(RepeatMatches {
            repeat: self,
            hay,
            caps,
            start,
            bounds,
            boundary: start,
            frames: Vec::new(),
            finished: false,
        })
    }
}

impl<T> fmt::Debug for Repeat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeat")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("lazy_range", &self.lazy_range)
            .field("lazy_quantity", &self.lazy_quantity)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Candidate enumeration
// ===========================================================================

enum Boundaries {
    Ascending(RangeInclusive<usize>),
    Descending(Rev<RangeInclusive<usize>>),
}

impl Iterator for Boundaries {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Boundaries::Ascending(bounds) => bounds.next(),
            Boundaries::Descending(bounds) => bounds.next(),
        }
    }
}

/// One tiling position within the current boundary.
struct Frame<'m> {
    /// Where this repetition attempt starts.
    pos: usize,
    /// Repetitions completed before this position.
    count: usize,
    /// Candidates of the repeated pattern over `[pos, boundary)`.
    inner: Matches<'m>,
    step: Step,
}

/// What to do with a frame the next time it tops the stack.
enum Step {
    /// Fresh frame: when quantity-lazy, offer stopping here before
    /// pulling the first candidate.
    Enter { entry: Captures },
    /// Pull the next candidate of the repeated pattern.
    Pull,
    /// A deeper tiling is exhausted; offer the shorter candidate now.
    Resume { end: usize, caps: Captures },
}

struct RepeatMatches<'m, T> {
    repeat: &'m Repeat<T>,
    hay: &'m dyn Haystack<T>,
    caps: Captures,
    start: usize,
    bounds: Boundaries,
    boundary: usize,
    frames: Vec<Frame<'m>>,
    finished: bool,
}

impl<T> Iterator for RepeatMatches<'_, T> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let repeat = self.repeat;
        let hay = self.hay;
        loop {
            if self.finished {
                return None;
            }
            if self.frames.is_empty() {
                let Some(boundary) = self.bounds.next() else {
                    // All boundaries exhausted; the zero-repetition
                    // candidate comes last.
                    self.finished = true;
                    if repeat.min == 0 {
                        return Some(Match::new(self.start, self.start, self.caps.clone()));
                    }
                    return None;
                };
                self.boundary = boundary;
                self.frames.push(Frame {
                    pos: self.start,
                    count: 0,
                    inner: repeat
                        .inner
                        .try_match(self.caps.clone(), hay, self.start, boundary),
                    step: Step::Enter {
                        entry: self.caps.clone(),
                    },
                });
                continue;
            }
            let top = self.frames.len() - 1;
            match mem::replace(&mut self.frames[top].step, Step::Pull) {
                Step::Enter { entry } => {
                    if repeat.lazy_quantity && repeat.quantity_ok(self.frames[top].count) {
                        return Some(Match::new(self.start, self.frames[top].pos, entry));
                    }
                }
                Step::Pull => {
                    let Some(candidate) = self.frames[top].inner.next() else {
                        self.frames.pop();
                        continue;
                    };
                    let done = self.frames[top].count + 1;
                    let (end, caps) = (candidate.end(), candidate.into_captures());
                    if end >= self.boundary {
                        // The first candidate reaching the boundary settles
                        // this position; no alternatives are tried here.
                        self.frames.pop();
                        if repeat.quantity_ok(done) {
                            return Some(Match::new(self.start, end, caps));
                        }
                    } else if repeat.lazy_quantity {
                        // Offer the shorter candidate before extending it
                        // with another repetition.
                        self.frames.push(Frame {
                            pos: end,
                            count: done,
                            inner: repeat.inner.try_match(caps.clone(), hay, end, self.boundary),
                            step: Step::Enter {
                                entry: caps.clone(),
                            },
                        });
                        if repeat.quantity_ok(done) {
                            return Some(Match::new(self.start, end, caps));
                        }
                    } else {
                        // Greedy: extend first, surface the shorter
                        // candidate once deeper tilings are exhausted.
                        self.frames[top].step = Step::Resume {
                            end,
                            caps: caps.clone(),
                        };
                        self.frames.push(Frame {
                            pos: end,
                            count: done,
                            inner: repeat.inner.try_match(caps.clone(), hay, end, self.boundary),
                            step: Step::Enter { entry: caps },
                        });
                    }
                }
                Step::Resume { end, caps } => {
                    if repeat.quantity_ok(self.frames[top].count + 1) {
                        return Some(Match::new(self.start, end, caps));
                    }
                }
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
