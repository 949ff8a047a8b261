use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Natural-log probability. Summed along a path, never renormalised.
pub type Weight = f64;

/// Half-open code-point interval `[start, end)` within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    #[inline(always)]
    pub fn new(start: usize, end: usize) -> Segment {
        debug_assert!(start < end);
        Segment { start, end }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn text(&self, sentence: &[char]) -> String {
        sentence[self.range()].iter().collect()
    }
}

/// A candidate segment produced by forward matching, consumed by the path solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedSegment {
    pub segment: Segment,
    pub weight: Weight,
}

impl WeightedSegment {
    #[inline(always)]
    pub fn new(start: usize, end: usize, weight: Weight) -> WeightedSegment {
        WeightedSegment {
            segment: Segment::new(start, end),
            weight,
        }
    }
}

/// Output granularity of paragraph segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plain segmentation.
    Search,
    /// Segmentation plus overlapping dictionary 2- and 3-grams of long tokens.
    Index,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Search
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Mode::Search),
            "index" => Ok(Mode::Index),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}
