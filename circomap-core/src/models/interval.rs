use std::fmt::{self, Display};

///
/// Interval struct, one feature range on a scaffold.
///
/// Coordinates are 0-based and `end` is the last covered base, so an
/// interval never has zero width. Invariant: `start <= end`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

///
/// How the merge scan classifies a sorted pair of intervals.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// `next` starts at or past the end of `current`; both survive.
    Disjoint,
    /// `next` reaches past the end of `current`; carries the combined interval.
    Extended(Interval),
    /// `next` lies entirely within `current`.
    Contained,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Interval { start, end }
    }

    ///
    /// Number of bases covered, `end` included.
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    ///
    /// Classify `next` against this interval for the merge scan.
    ///
    /// The pair must already be sorted so that `self.start <= next.start`;
    /// an unsorted pair is a programming error, not recoverable input.
    /// A pair sharing only the boundary base is classified [`MergeOutcome::Disjoint`].
    ///
    pub fn classify(&self, next: &Interval) -> MergeOutcome {
        assert!(
            self.start <= next.start,
            "intervals classified out of order: {} vs {}",
            self,
            next
        );

        if next.start >= self.end {
            MergeOutcome::Disjoint
        } else if next.end > self.end {
            MergeOutcome::Extended(Interval {
                start: self.start,
                end: next.end,
            })
        } else {
            MergeOutcome::Contained
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_width() {
        assert_eq!(Interval::new(10, 10).width(), 1);
        assert_eq!(Interval::new(0, 99).width(), 100);
    }

    #[rstest]
    fn test_classify_disjoint() {
        let a = Interval::new(10, 50);
        let b = Interval::new(60, 70);
        assert_eq!(a.classify(&b), MergeOutcome::Disjoint);
    }

    #[rstest]
    fn test_classify_boundary_base_is_disjoint() {
        // next starts on current's last base; kept separate, matching the
        // reference behavior
        let a = Interval::new(10, 50);
        let b = Interval::new(50, 70);
        assert_eq!(a.classify(&b), MergeOutcome::Disjoint);
    }

    #[rstest]
    fn test_classify_extended() {
        let a = Interval::new(10, 50);
        let b = Interval::new(40, 70);
        assert_eq!(a.classify(&b), MergeOutcome::Extended(Interval::new(10, 70)));
    }

    #[rstest]
    fn test_classify_contained() {
        let a = Interval::new(10, 50);
        let b = Interval::new(20, 30);
        assert_eq!(a.classify(&b), MergeOutcome::Contained);

        // identical end also counts as contained
        let c = Interval::new(20, 50);
        assert_eq!(a.classify(&c), MergeOutcome::Contained);
    }

    #[rstest]
    fn test_classify_equal_starts() {
        // classification is symmetric for equal starts: whichever is longer
        // ends up as the covering interval
        let a = Interval::new(10, 30);
        let b = Interval::new(10, 50);
        assert_eq!(a.classify(&b), MergeOutcome::Extended(Interval::new(10, 50)));
        assert_eq!(b.classify(&a), MergeOutcome::Contained);
    }

    #[rstest]
    #[should_panic]
    fn test_classify_unsorted_pair_panics() {
        let a = Interval::new(40, 70);
        let b = Interval::new(10, 50);
        a.classify(&b);
    }
}
