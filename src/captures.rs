// captures.rs - Persistent name -> SpanSet snapshots.
//
// A match in progress never mutates a Captures value. Recording a capture
// copies the map into a fresh snapshot, so concurrent speculative branches
// can alias the same snapshot and an abandoned branch needs no undo.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::span::{Span, SpanSet};

/// An immutable snapshot of named captures.
///
/// Cloning is cheap (the underlying map is shared); [`capture`] pays for
/// the copy when a snapshot is actually extended.
///
/// [`capture`]: Captures::capture
///
/// # Examples
///
/// ```
/// use patina::captures::Captures;
/// use patina::span::Span;
///
/// let empty = Captures::new();
/// let one = empty.capture("word", Span::new(0, 5));
/// let two = one.capture("word", Span::new(5, 8));
///
/// assert!(empty.is_empty());
/// assert_eq!(one.get("word").unwrap().end(), 5);
/// // Touching spans under the same name merge.
/// assert_eq!(two.get("word").unwrap().spans().len(), 1);
/// assert_eq!(two.get("word").unwrap().end(), 8);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Captures {
    map: Arc<HashMap<String, SpanSet>>,
}

impl Captures {
    /// An empty snapshot.
    pub fn new() -> Captures {
        Captures::default()
    }

    /// Record `span` under `name`, returning the extended snapshot.
    ///
    /// The receiver is left untouched. A new name stores the span even
    /// when zero-width; an existing name merges per [`SpanSet::insert`],
    /// so a zero-width span leaves the existing set unchanged.
    pub fn capture(&self, name: &str, span: Span) -> Captures {
        let mut map = HashMap::clone(&self.map);
        match map.get_mut(name) {
            Some(set) => set.insert(span),
            None => {
                map.insert(name.to_string(), SpanSet::new(span));
            }
        }
        Captures { map: Arc::new(map) }
    }

    /// The spans recorded under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SpanSet> {
        self.map.get(name)
    }

    /// Returns `true` if `name` has been recorded.
    pub fn contains_name(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(name, spans)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpanSet)> {
        self.map.iter().map(|(name, set)| (name.as_str(), set))
    }
}

impl fmt::Debug for Captures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, set) in self.map.iter() {
            map.entry(name, set);
        }
        map.finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Captures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.map.iter())
    }
}
