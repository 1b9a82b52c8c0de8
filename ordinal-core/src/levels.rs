//! Whole-Graph Levels
//!
//! Computes the rank (or depth) of every ordinal in one pass when the graph
//! is acyclic. This is the memoized counterpart of
//! [`OrdinalGraph::level`]: linear in nodes plus edges instead of
//! exponential in the number of paths.
//!
//! # Algorithm
//!
//! Kahn's algorithm over the edge lists of one direction:
//!
//! 1. Count, for every ordinal, the edges it has in that direction
//! 2. Seed the queue with terminal ordinals at level 0
//! 3. Pop an ordinal, then for each ordinal pointing at it, raise its level
//!    to at least one more and decrement its count
//! 4. An ordinal whose count reaches zero has its final level; queue it
//!
//! Ordinals left with a non-zero count lie on a cycle or above one.
//!
//! Only the walked side is read. The converse lists may be stale.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{OrdinalError, Result};
use crate::graph::{Direction, OrdinalGraph, OrdinalId};

impl OrdinalGraph {
    /// Rank of every ordinal, terminal ordinals first.
    pub fn ranks(&self) -> Result<IndexMap<OrdinalId, usize>> {
        self.all_levels(Direction::Subordinates)
    }

    /// Depth of every ordinal, terminal ordinals first.
    pub fn depths(&self) -> Result<IndexMap<OrdinalId, usize>> {
        self.all_levels(Direction::Superiors)
    }

    /// Level of every ordinal along `direction`, or [`OrdinalError::Cyclic`]
    /// naming the ordinals that could not be ordered.
    pub fn all_levels(&self, direction: Direction) -> Result<IndexMap<OrdinalId, usize>> {
        let count = self.len();
        let mut pending = vec![0usize; count];
        let mut pointed_at_by: Vec<Vec<OrdinalId>> = vec![Vec::new(); count];
        let mut level = vec![0usize; count];
        let mut queue = VecDeque::new();

        for id in self.ids() {
            let edges = self.node(id).edges(direction);
            pending[id.index()] = edges.len();
            for &next in edges {
                pointed_at_by[next.index()].push(id);
            }
            if edges.is_empty() {
                queue.push_back(id);
            }
        }

        let mut result = IndexMap::with_capacity(count);

        while let Some(id) = queue.pop_front() {
            let current = level[id.index()];
            result.insert(id, current);

            for &above in &pointed_at_by[id.index()] {
                let slot = above.index();
                level[slot] = level[slot].max(current + 1);
                pending[slot] = pending[slot].saturating_sub(1);
                if pending[slot] == 0 {
                    queue.push_back(above);
                }
            }
        }

        if result.len() < count {
            let remaining: Vec<OrdinalId> = self
                .ids()
                .filter(|id| !result.contains_key(id))
                .collect();
            debug!(?direction, remaining = remaining.len(), "levels blocked by a cycle");
            return Err(OrdinalError::Cyclic { remaining });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_no_levels() {
        let graph = OrdinalGraph::new();
        assert!(graph.ranks().unwrap().is_empty());
    }

    #[test]
    fn levels_match_the_rank_engine() {
        let mut graph = OrdinalGraph::new();
        let bottom = graph.add_isolated().unwrap();
        let left = graph.add_ordinal([bottom], [], true).unwrap();
        let mid = graph.add_ordinal([bottom], [], true).unwrap();
        let right = graph.add_ordinal([mid], [], true).unwrap();
        let top = graph.add_ordinal([left, right], [], true).unwrap();

        let ranks = graph.ranks().unwrap();
        let depths = graph.depths().unwrap();

        for id in graph.ids() {
            assert_eq!(ranks[&id], graph.rank(id).unwrap().value());
            assert_eq!(depths[&id], graph.depth(id).unwrap().value());
        }
        assert_eq!(ranks[&top], 3);
        assert_eq!(depths[&bottom], 3);
    }

    #[test]
    fn terminal_ordinals_come_first() {
        let mut graph = OrdinalGraph::new();
        let low = graph.add_isolated().unwrap();
        let high = graph.add_ordinal([low], [], true).unwrap();

        let ranks = graph.ranks().unwrap();
        assert_eq!(ranks.keys().copied().collect::<Vec<_>>(), vec![low, high]);
    }

    #[test]
    fn duplicate_edges_are_counted_once_each() {
        let mut graph = OrdinalGraph::new();
        let low = graph.add_isolated().unwrap();
        let high = graph.add_isolated().unwrap();
        graph.add_subordinate(high, low, true).unwrap();
        graph.add_subordinate(high, low, true).unwrap();

        assert_eq!(graph.ranks().unwrap()[&high], 1);
    }

    #[test]
    fn cycle_reports_blocked_ordinals() {
        let mut graph = OrdinalGraph::new();
        let floor = graph.add_isolated().unwrap();
        let a = graph.add_ordinal([floor], [], true).unwrap();
        let b = graph.add_ordinal([a], [], true).unwrap();
        graph.add_subordinate(a, b, true).unwrap();
        let top = graph.add_ordinal([b], [], true).unwrap();

        let err = graph.ranks().unwrap_err();
        assert_eq!(
            err,
            OrdinalError::Cyclic {
                remaining: vec![a, b, top],
            }
        );
    }
}
