//! Frontier Discovery
//!
//! Collects the terminal ordinals reachable from a starting ordinal: roots
//! (nothing below them) through subordinates, peaks (nothing above them)
//! through superiors.
//!
//! The walk uses a worklist and a visited set, so cycles terminate and long
//! chains do not grow the call stack.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::error::Result;
use crate::graph::{Direction, OrdinalGraph, OrdinalId};

impl OrdinalGraph {
    /// Every root reachable from `id` through subordinates, in discovery
    /// order. `id` itself is never included.
    pub fn roots(&self, id: OrdinalId) -> Result<IndexSet<OrdinalId>> {
        self.frontier(id, Direction::Subordinates)
    }

    /// Every peak reachable from `id` through superiors, in discovery order.
    /// `id` itself is never included.
    pub fn peaks(&self, id: OrdinalId) -> Result<IndexSet<OrdinalId>> {
        self.frontier(id, Direction::Superiors)
    }

    /// Terminal ordinals reachable from `id` along `direction`.
    pub fn frontier(&self, id: OrdinalId, direction: Direction) -> Result<IndexSet<OrdinalId>> {
        self.check(id)?;

        let mut visited = HashSet::from([id]);
        let mut worklist = vec![id];
        let mut found = IndexSet::new();

        while let Some(current) = worklist.pop() {
            for &next in self.node(current).edges(direction) {
                if !visited.insert(next) {
                    continue;
                }
                if self.node(next).is_terminal(direction) {
                    found.insert(next);
                } else {
                    worklist.push(next);
                }
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ordinal_has_empty_frontier() {
        let mut graph = OrdinalGraph::new();
        let a = graph.add_isolated().unwrap();

        assert!(graph.roots(a).unwrap().is_empty());
        assert!(graph.peaks(a).unwrap().is_empty());
    }

    #[test]
    fn roots_skip_intermediate_ordinals() {
        let mut graph = OrdinalGraph::new();
        let left = graph.add_isolated().unwrap();
        let right = graph.add_isolated().unwrap();
        let mid = graph.add_ordinal([right], [], true).unwrap();
        let top = graph.add_ordinal([left, mid], [], true).unwrap();

        let roots = graph.roots(top).unwrap();
        assert_eq!(roots.iter().copied().collect::<Vec<_>>(), vec![left, right]);

        assert_eq!(graph.peaks(right).unwrap().len(), 1);
        assert!(graph.peaks(right).unwrap().contains(&top));
    }

    #[test]
    fn diamond_root_is_found_once() {
        let mut graph = OrdinalGraph::new();
        let bottom = graph.add_isolated().unwrap();
        let left = graph.add_ordinal([bottom], [], true).unwrap();
        let right = graph.add_ordinal([bottom], [], true).unwrap();
        let top = graph.add_ordinal([left, right], [], true).unwrap();

        assert_eq!(graph.roots(top).unwrap().len(), 1);
        assert_eq!(graph.peaks(bottom).unwrap().len(), 1);
        assert!(graph.peaks(bottom).unwrap().contains(&top));
    }

    #[test]
    fn cycle_without_exit_has_no_roots() {
        let mut graph = OrdinalGraph::new();
        let a = graph.add_isolated().unwrap();
        let b = graph.add_isolated().unwrap();
        graph.add_subordinate(a, b, true).unwrap();
        graph.add_subordinate(b, a, true).unwrap();

        assert!(graph.roots(a).unwrap().is_empty());
    }

    #[test]
    fn cycle_with_exit_reports_the_exit() {
        let mut graph = OrdinalGraph::new();
        let floor = graph.add_isolated().unwrap();
        let a = graph.add_isolated().unwrap();
        let b = graph.add_ordinal([a, floor], [], true).unwrap();
        graph.add_subordinate(a, b, true).unwrap();

        let roots = graph.roots(a).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots.contains(&floor));
    }

    #[test]
    fn long_chain_frontier_does_not_exhaust_the_stack() {
        let mut graph = OrdinalGraph::new();
        let bottom = graph.add_isolated().unwrap();
        let mut top = bottom;
        for _ in 1..20_000 {
            top = graph.add_ordinal([top], [], true).unwrap();
        }

        let roots = graph.roots(top).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots.contains(&bottom));

        let peaks = graph.peaks(bottom).unwrap();
        assert_eq!(peaks.len(), 1);
        assert!(peaks.contains(&top));
    }
}
