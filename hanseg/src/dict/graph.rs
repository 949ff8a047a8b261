//! Optimal path over the dictionary matches of a run.
//!
//! Candidates are kept per start position; the best route from each position
//! to the end is computed back to front and stored in a flat array indexed by
//! position, which is then followed from position 0.
use super::DictTrie;
use crate::types::{Segment, Weight, WeightedSegment};

#[derive(Debug)]
pub struct SegmentGraph {
    candidates: Vec<Vec<WeightedSegment>>,
}

impl SegmentGraph {
    pub fn new(trie: &DictTrie, sentence: &[char]) -> SegmentGraph {
        let candidates = (0..sentence.len())
            .map(|from| trie.match_forward(from, &sentence[from..]))
            .collect();

        SegmentGraph { candidates }
    }

    pub(crate) fn from_candidates(candidates: Vec<Vec<WeightedSegment>>) -> SegmentGraph {
        SegmentGraph { candidates }
    }

    /// For every position, the first segment of the best route to the end,
    /// weighted with the total weight of that route. `None` where a position
    /// has no candidates.
    pub fn best_routes(&self) -> Vec<Option<WeightedSegment>> {
        let len = self.candidates.len();
        let mut best: Vec<Option<WeightedSegment>> = vec![None; len];

        for pos in (0..len).rev() {
            best[pos] = Self::choose(&self.candidates[pos], &best);
        }

        best
    }

    // Strict comparison: the first enumerated candidate wins a tie.
    fn choose(
        candidates: &[WeightedSegment],
        best: &[Option<WeightedSegment>],
    ) -> Option<WeightedSegment> {
        let first = candidates.first()?;
        let mut max_weight = Weight::NEG_INFINITY;
        let mut max_segment = first.segment;

        for candidate in candidates {
            let mut weight = candidate.weight;
            if let Some(next) = best.get(candidate.segment.end).and_then(Option::as_ref) {
                weight += next.weight;
            }

            if max_weight < weight {
                max_weight = weight;
                max_segment = candidate.segment;
            }
        }

        Some(WeightedSegment {
            segment: max_segment,
            weight: max_weight,
        })
    }

    pub fn solve(&self) -> Vec<Segment> {
        let best = self.best_routes();
        let mut path = vec![];
        let mut pos = 0;

        while let Some(Some(route)) = best.get(pos) {
            path.push(route.segment);
            pos = route.segment.end;
        }
        debug_assert_eq!(pos, best.len(), "route broken at position {}", pos);

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_keeps_first_candidate() {
        let graph = SegmentGraph::from_candidates(vec![
            vec![
                WeightedSegment::new(0, 1, -1.0),
                WeightedSegment::new(0, 2, -2.0),
            ],
            vec![WeightedSegment::new(1, 2, -1.0)],
        ]);
        assert_eq!(graph.solve(), vec![Segment::new(0, 1), Segment::new(1, 2)]);

        let graph = SegmentGraph::from_candidates(vec![
            vec![
                WeightedSegment::new(0, 2, -2.0),
                WeightedSegment::new(0, 1, -1.0),
            ],
            vec![WeightedSegment::new(1, 2, -1.0)],
        ]);
        assert_eq!(graph.solve(), vec![Segment::new(0, 2)]);
    }

    #[test]
    fn routes_carry_total_weight() {
        let graph = SegmentGraph::from_candidates(vec![
            vec![
                WeightedSegment::new(0, 1, -3.0),
                WeightedSegment::new(0, 3, -4.0),
            ],
            vec![
                WeightedSegment::new(1, 2, -2.0),
                WeightedSegment::new(1, 3, -0.5),
            ],
            vec![WeightedSegment::new(2, 3, -1.0)],
        ]);

        let best = graph.best_routes();
        assert_eq!(best[2], Some(WeightedSegment::new(2, 3, -1.0)));
        assert_eq!(best[1], Some(WeightedSegment::new(1, 3, -0.5)));
        assert_eq!(best[0], Some(WeightedSegment::new(0, 1, -3.5)));
        assert_eq!(graph.solve(), vec![Segment::new(0, 1), Segment::new(1, 3)]);
    }

    #[test]
    fn skipped_position_keeps_indices() {
        let graph = SegmentGraph::from_candidates(vec![
            vec![WeightedSegment::new(0, 2, -1.0)],
            vec![],
            vec![WeightedSegment::new(2, 3, -1.0)],
        ]);

        let best = graph.best_routes();
        assert_eq!(best.len(), 3);
        assert_eq!(best[1], None);
        assert_eq!(best[2], Some(WeightedSegment::new(2, 3, -1.0)));
        assert_eq!(graph.solve(), vec![Segment::new(0, 2), Segment::new(2, 3)]);
    }

    #[test]
    fn empty_graph() {
        let graph = SegmentGraph::from_candidates(vec![]);
        assert!(graph.best_routes().is_empty());
        assert!(graph.solve().is_empty());
    }
}
