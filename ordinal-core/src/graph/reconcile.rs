//! Edge Reconciliation
//!
//! Repairs the converse side of edges that were written on one side only,
//! typically by constructing an ordinal without `reconcile_on_init`.
//!
//! The transitive variants walk the reachable subgraph with an explicit
//! worklist and a visited set, so they terminate on cyclic graphs and do not
//! grow the call stack on deep chains.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::arena::OrdinalGraph;
use super::node::{Direction, OrdinalId};
use crate::error::Result;

impl OrdinalGraph {
    /// Make every direct subordinate of `id` list `id` among its superiors.
    pub fn reconcile_subordinates(&mut self, id: OrdinalId) -> Result<()> {
        self.check(id)?;
        self.reconcile_one(id, Direction::Subordinates);
        Ok(())
    }

    /// Make every direct superior of `id` list `id` among its subordinates.
    pub fn reconcile_superiors(&mut self, id: OrdinalId) -> Result<()> {
        self.check(id)?;
        self.reconcile_one(id, Direction::Superiors);
        Ok(())
    }

    /// Reconcile subordinates for `id` and everything below it.
    ///
    /// Returns the number of ordinals reconciled.
    pub fn reconcile_all_subordinates(&mut self, id: OrdinalId) -> Result<usize> {
        self.reconcile_reachable(id, Direction::Subordinates)
    }

    /// Reconcile superiors for `id` and everything above it.
    ///
    /// Returns the number of ordinals reconciled.
    pub fn reconcile_all_superiors(&mut self, id: OrdinalId) -> Result<usize> {
        self.reconcile_reachable(id, Direction::Superiors)
    }

    /// Returns how many converse edges were added.
    fn reconcile_one(&mut self, id: OrdinalId, direction: Direction) -> usize {
        let neighbours = self.node(id).edges(direction).to_vec();
        let mut added = 0;

        for neighbour in neighbours {
            let converse = self.node_mut(neighbour).edges_mut(direction.opposite());
            if !converse.contains(&id) {
                converse.push(id);
                added += 1;
            }
        }

        if added > 0 {
            trace!(ordinal = %id, ?direction, added, "converse edges added");
        }
        added
    }

    fn reconcile_reachable(&mut self, id: OrdinalId, direction: Direction) -> Result<usize> {
        self.check(id)?;

        let mut visited = HashSet::new();
        let mut worklist = vec![id];
        let mut added = 0;

        while let Some(current) = worklist.pop() {
            if !visited.insert(current) {
                continue;
            }
            added += self.reconcile_one(current, direction);

            for &next in self.node(current).edges(direction) {
                if !visited.contains(&next) {
                    worklist.push(next);
                }
            }
        }

        debug!(
            ordinal = %id,
            ?direction,
            visited = visited.len(),
            added,
            "reachable edges reconciled"
        );
        Ok(visited.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build `top > mid > low` with each ordinal knowing only its
    /// subordinates.
    fn one_sided_chain(graph: &mut OrdinalGraph) -> (OrdinalId, OrdinalId, OrdinalId) {
        let low = graph.add_isolated().unwrap();
        let mid = graph.add_ordinal([low], [], false).unwrap();
        let top = graph.add_ordinal([mid], [], false).unwrap();
        (top, mid, low)
    }

    #[test]
    fn reconcile_subordinates_is_one_level() {
        let mut graph = OrdinalGraph::new();
        let (top, mid, low) = one_sided_chain(&mut graph);

        graph.reconcile_subordinates(top).unwrap();

        assert_eq!(graph.superiors(mid).unwrap(), &[top]);
        assert!(graph.is_peak(low).unwrap());
    }

    #[test]
    fn reconcile_subordinates_is_idempotent() {
        let mut graph = OrdinalGraph::new();
        let (top, mid, _) = one_sided_chain(&mut graph);

        graph.reconcile_subordinates(top).unwrap();
        graph.reconcile_subordinates(top).unwrap();

        assert_eq!(graph.superiors(mid).unwrap(), &[top]);
    }

    #[test]
    fn reconcile_superiors_checks_the_subordinate_side() {
        let mut graph = OrdinalGraph::new();
        let high = graph.add_isolated().unwrap();
        let low = graph.add_ordinal([], [high], false).unwrap();

        graph.reconcile_superiors(low).unwrap();
        graph.reconcile_superiors(low).unwrap();

        assert_eq!(graph.subordinates(high).unwrap(), &[low]);
    }

    #[test]
    fn reconcile_all_subordinates_reaches_the_bottom() {
        let mut graph = OrdinalGraph::new();
        let (top, mid, low) = one_sided_chain(&mut graph);

        let visited = graph.reconcile_all_subordinates(top).unwrap();

        assert_eq!(visited, 3);
        assert_eq!(graph.superiors(mid).unwrap(), &[top]);
        assert_eq!(graph.superiors(low).unwrap(), &[mid]);
    }

    #[test]
    fn reconcile_all_superiors_reaches_the_top() {
        let mut graph = OrdinalGraph::new();
        let high = graph.add_isolated().unwrap();
        let mid = graph.add_ordinal([], [high], false).unwrap();
        let low = graph.add_ordinal([], [mid], false).unwrap();

        let visited = graph.reconcile_all_superiors(low).unwrap();

        assert_eq!(visited, 3);
        assert_eq!(graph.subordinates(mid).unwrap(), &[low]);
        assert_eq!(graph.subordinates(high).unwrap(), &[mid]);
    }

    #[test]
    fn reconcile_all_terminates_on_a_cycle() {
        let mut graph = OrdinalGraph::new();
        let a = graph.add_isolated().unwrap();
        let b = graph.add_isolated().unwrap();
        let c = graph.add_isolated().unwrap();
        graph.add_subordinate(a, b, false).unwrap();
        graph.add_subordinate(b, c, false).unwrap();
        graph.add_subordinate(c, a, false).unwrap();

        let visited = graph.reconcile_all_subordinates(a).unwrap();

        assert_eq!(visited, 3);
        assert_eq!(graph.superiors(a).unwrap(), &[c]);
        assert_eq!(graph.superiors(b).unwrap(), &[a]);
        assert_eq!(graph.superiors(c).unwrap(), &[b]);
    }

    #[test]
    fn reconcile_self_loop() {
        let mut graph = OrdinalGraph::new();
        let a = graph.add_isolated().unwrap();
        graph.add_subordinate(a, a, false).unwrap();

        assert_eq!(graph.reconcile_all_subordinates(a).unwrap(), 1);
        assert_eq!(graph.superiors(a).unwrap(), &[a]);
    }
}
