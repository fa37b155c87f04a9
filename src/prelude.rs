// prelude.rs - Convenient re-exports for the whole public API.
//
//! # Prelude
//!
//! ```
//! use patina::prelude::*;
//!
//! let hay: Vec<char> = "abab".chars().collect();
//! let m = Repeat::star(Literal::new(['a', 'b']))
//!     .match_anchored(&hay)
//!     .unwrap();
//! assert_eq!(m.range(), 0..4);
//! ```

pub use crate::api::{FindIter, PatternExt};
pub use crate::captures::Captures;
pub use crate::combinators::{Alt, Capture, Sequence};
pub use crate::leaf::{Literal, One};
pub use crate::pattern::{Haystack, Match, Matches, Pattern};
pub use crate::repeat::Repeat;
pub use crate::span::{Span, SpanSet};
