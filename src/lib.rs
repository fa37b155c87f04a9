//! # Patina
//!
//! Backtracking pattern matching over any indexable sequence -- byte
//! slices, char vectors, token streams, sensor readings. Patterns are
//! composed from typed building blocks instead of parsed from a string,
//! and elements are inspected through plain predicates, so the engine
//! never cares what the element type is.
//!
//! Matching is lazy: a pattern turns into an iterator of candidate
//! matches ordered by preference, and the driver takes the first one.
//! Greedy and lazy quantifiers, alternation and named captures all fall
//! out of that candidate ordering.
//!
//! ## Quick Start
//!
//! ```rust
//! use patina::prelude::*;
//!
//! // One or more 'a's, captured as "run", followed by a 'b'.
//! let pattern = Sequence::new()
//!     .then(Capture::new("run", Repeat::plus(One::eq('a'))))
//!     .then(One::eq('b'));
//!
//! let hay: Vec<char> = "aaab".chars().collect();
//! let m = pattern.match_anchored(&hay).unwrap();
//! assert_eq!(m.range(), 0..4);
//!
//! let run = m.captures().get("run").unwrap();
//! assert_eq!((run.start(), run.end()), (0, 3));
//! ```
//!
//! Elements do not have to be characters. Any predicate over `&T` works:
//!
//! ```rust
//! use patina::prelude::*;
//!
//! let readings = vec![12, 7, -3, 4];
//! let below_zero = One::new(|r: &i32| *r < 0);
//! let m = below_zero.search(&readings).unwrap();
//! assert_eq!(m.range(), 2..3);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pattern`] | The [`Pattern`](pattern::Pattern) trait, haystacks and match types |
//! | [`leaf`] | Single-element and literal-run patterns |
//! | [`combinators`] | Sequencing, alternation, named captures |
//! | [`repeat`] | Greedy and lazy quantifiers |
//! | [`api`] | Anchored match, scanning search, iteration |
//! | [`span`] | Half-open spans and merged span sets |
//! | [`captures`] | Immutable capture snapshots |
//!
//! ## Cost Model
//!
//! The engine backtracks; there is no compilation step and no linear-time
//! guarantee. Nested quantifiers can enumerate exponentially many
//! candidates before the driver settles on one, and a zero-width pattern
//! under an unbounded quantifier re-matches the same empty span at every
//! boundary. Keep quantified sub-patterns non-empty and bound them where
//! input sizes are adversarial.

pub mod api;
pub mod captures;
pub mod combinators;
pub mod leaf;
pub mod pattern;
pub mod prelude;
pub mod repeat;
pub mod span;
