// api.rs - Running patterns: anchored match, scanning search, iteration.

use crate::captures::Captures;
use crate::pattern::{Haystack, Match, Pattern};

/// Driver methods available on every [`Pattern`].
///
/// These wrap [`Pattern::try_match`] with the usual entry points: an
/// anchored match at the start of the haystack, a scan for the leftmost
/// match, and iteration over successive non-overlapping matches.
pub trait PatternExt<T>: Pattern<T> {
    /// Match anchored at offset 0.
    ///
    /// Takes the pattern's first candidate over the whole haystack and
    /// accepts it only if it starts at 0. Later candidates are never
    /// consulted.
    ///
    /// ```
    /// use patina::prelude::*;
    ///
    /// let hay: Vec<char> = "aab".chars().collect();
    /// let m = Repeat::plus(One::eq('a')).match_anchored(&hay).unwrap();
    /// assert_eq!(m.range(), 0..2);
    /// ```
    fn match_anchored(&self, hay: &dyn Haystack<T>) -> Option<Match> {
        self.try_match(Captures::new(), hay, 0, hay.len())
            .next()
            .filter(|m| m.start() == 0)
    }

    /// Find the leftmost match, scanning forward one offset at a time.
    ///
    /// Every offset from 0 through `len` is tried, so a pattern that
    /// matches the empty sequence can still match at the very end.
    ///
    /// ```
    /// use patina::prelude::*;
    ///
    /// let hay: Vec<char> = "xxab".chars().collect();
    /// let m = Literal::new(['a', 'b']).search(&hay).unwrap();
    /// assert_eq!(m.range(), 2..4);
    /// ```
    fn search(&self, hay: &dyn Haystack<T>) -> Option<Match> {
        self.search_from(hay, 0)
    }

    /// Find the leftmost match at or after `from`.
    fn search_from(&self, hay: &dyn Haystack<T>, from: usize) -> Option<Match> {
        for offset in from..=hay.len() {
            if let Some(m) = self
                .try_match(Captures::new(), hay, offset, hay.len())
                .next()
            {
                return Some(m);
            }
        }
        None
    }

    /// Returns `true` if the pattern matches anywhere.
    fn is_match(&self, hay: &dyn Haystack<T>) -> bool {
        self.search(hay).is_some()
    }

    /// Iterate over successive non-overlapping matches.
    ///
    /// Each scan resumes where the previous match ended. An empty match
    /// is reported once at its position; finding it again forces the
    /// scan one element forward so iteration always terminates.
    ///
    /// ```
    /// use patina::prelude::*;
    ///
    /// let hay: Vec<char> = "aa b aaa".chars().collect();
    /// let runs: Vec<_> = Repeat::plus(One::eq('a'))
    ///     .find_iter(&hay)
    ///     .map(|m| m.range())
    ///     .collect();
    /// assert_eq!(runs, vec![0..2, 5..8]);
    /// ```
    fn find_iter<'p, 'h>(&'p self, hay: &'h dyn Haystack<T>) -> FindIter<'p, 'h, T, Self> {
        FindIter {
            pattern: self,
            hay,
            last_end: 0,
            last_was_empty: false,
        }
    }
}

impl<T, P: Pattern<T> + ?Sized> PatternExt<T> for P {}

/// Iterator over successive non-overlapping matches, created by
/// [`PatternExt::find_iter`].
pub struct FindIter<'p, 'h, T, P: ?Sized> {
    pattern: &'p P,
    hay: &'h dyn Haystack<T>,
    last_end: usize,
    last_was_empty: bool,
}

impl<T, P: Pattern<T> + ?Sized> Iterator for FindIter<'_, '_, T, P> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        if self.last_end > self.hay.len() {
            return None;
        }
        let m = self.pattern.search_from(self.hay, self.last_end)?;
        if m.is_empty() {
            // Rescanning from the end of an empty match finds it again;
            // the second hit forces the scan forward one element.
            if self.last_was_empty {
                if self.last_end >= self.hay.len() {
                    return None;
                }
                self.last_end += 1;
                self.last_was_empty = false;
                return self.next();
            }
            self.last_was_empty = true;
        } else {
            self.last_was_empty = false;
        }
        self.last_end = m.end();
        Some(m)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{Literal, One};
    use crate::pattern::Matches;
    use crate::repeat::Repeat;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Misbehaving pattern whose candidates start one past the requested
    /// offset. Only useful for exercising the anchoring filter.
    struct OffsetByOne;

    impl Pattern<char> for OffsetByOne {
        fn try_match<'m>(
            &'m self,
            caps: Captures,
            _hay: &'m dyn Haystack<char>,
            start: usize,
            end: usize,
        ) -> Matches<'m> {
            let fits = start + 2 <= end;
            Box::new(
                fits.then(|| Match::new(start + 1, start + 2, caps))
                    .into_iter(),
            )
        }
    }

    /// Matches the empty sequence, but only at the end of the window.
    struct EndAnchor;

    impl Pattern<char> for EndAnchor {
        fn try_match<'m>(
            &'m self,
            caps: Captures,
            _hay: &'m dyn Haystack<char>,
            start: usize,
            end: usize,
        ) -> Matches<'m> {
            let hit = start == end;
            Box::new(hit.then(|| Match::new(start, start, caps)).into_iter())
        }
    }

    #[test]
    fn match_anchored_takes_first_candidate() {
        let hay = chars("aaa");
        let m = Repeat::star(One::eq('a')).match_anchored(&hay).unwrap();
        assert_eq!(m.range(), 0..3);
    }

    #[test]
    fn match_anchored_rejects_shifted_candidates() {
        let hay = chars("abc");
        assert!(OffsetByOne.match_anchored(&hay).is_none());
    }

    #[test]
    fn match_anchored_reports_no_candidates_as_none() {
        let hay = chars("baa");
        assert!(Repeat::plus(One::eq('a')).match_anchored(&hay).is_none());
    }

    #[test]
    fn search_scans_forward() {
        let hay = chars("bbaa");
        let m = Repeat::plus(One::eq('a')).search(&hay).unwrap();
        assert_eq!(m.range(), 2..4);
    }

    #[test]
    fn search_includes_end_offset() {
        let hay = chars("ab");
        let m = EndAnchor.search(&hay).unwrap();
        assert_eq!(m.range(), 2..2);
    }

    #[test]
    fn search_reports_no_match_as_none() {
        let hay = chars("bbb");
        assert!(One::eq('a').search(&hay).is_none());
    }

    #[test]
    fn search_from_skips_earlier_matches() {
        let hay = chars("abab");
        let m = Literal::new(['a', 'b']).search_from(&hay, 1).unwrap();
        assert_eq!(m.range(), 2..4);
    }

    #[test]
    fn search_from_past_end_finds_nothing() {
        let hay = chars("ab");
        assert!(One::any().search_from(&hay, 3).is_none());
    }

    #[test]
    fn is_match_mirrors_search() {
        let hay = chars("xya");
        assert!(One::eq('a').is_match(&hay));
        assert!(!One::eq('z').is_match(&hay));
    }

    #[test]
    fn find_iter_yields_non_overlapping_matches() {
        let hay = chars("aabaa");
        let found: Vec<_> = Repeat::plus(One::eq('a'))
            .find_iter(&hay)
            .map(|m| m.range())
            .collect();
        assert_eq!(found, vec![0..2, 3..5]);
    }

    #[test]
    fn find_iter_advances_over_empty_matches() {
        let hay = chars("ab");
        let empty = Literal::new(Vec::<char>::new());
        let found: Vec<_> = empty.find_iter(&hay).map(|m| m.range()).collect();
        assert_eq!(found, vec![0..0, 1..1, 2..2]);
    }

    #[test]
    fn find_iter_mixes_empty_and_real_matches() {
        let hay = chars("aab");
        let star = Repeat::star(One::eq('a'));
        let found: Vec<_> = star.find_iter(&hay).map(|m| m.range()).collect();
        assert_eq!(found, vec![0..2, 2..2, 3..3]);
    }

    #[test]
    fn find_iter_finds_nothing_when_pattern_never_matches() {
        let hay = chars("bbb");
        assert_eq!(One::eq('a').find_iter(&hay).count(), 0);
    }

    #[test]
    fn find_iter_on_empty_haystack_reports_single_empty_match() {
        let hay: Vec<char> = Vec::new();
        let empty = Literal::new(Vec::<char>::new());
        let found: Vec<_> = empty.find_iter(&hay).map(|m| m.range()).collect();
        assert_eq!(found, vec![0..0]);
    }
}
