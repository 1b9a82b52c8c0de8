//! Ordinal Arena
//!
//! [`OrdinalGraph`] owns every ordinal and hands out [`OrdinalId`] handles.
//! Edges are stored as handles, so cyclic relations carry no ownership
//! hazard: the whole graph is freed when the arena is dropped.

use tracing::debug;

use super::node::{Direction, Edges, Ordinal, OrdinalId};
use crate::error::{OrdinalError, Result};

/// The arena of ordinals and the relationship-maintenance operations.
#[derive(Debug, Clone, Default)]
pub struct OrdinalGraph {
    /// All ordinals, indexed by `OrdinalId`.
    ordinals: Vec<Ordinal>,
}

impl OrdinalGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            ordinals: Vec::new(),
        }
    }

    /// Add an ordinal with no edges.
    pub fn add_isolated(&mut self) -> Result<OrdinalId> {
        self.push(Ordinal::default())
    }

    /// Add an ordinal with initial subordinates and superiors.
    ///
    /// Either side may be a single handle (`[id]`, `Some(id)`) or any
    /// sequence. The lists are stored as given; when `reconcile_on_init` is
    /// set, each neighbour is then told about the new ordinal so both
    /// directions agree.
    pub fn add_ordinal<S, P>(
        &mut self,
        subordinates: S,
        superiors: P,
        reconcile_on_init: bool,
    ) -> Result<OrdinalId>
    where
        S: IntoIterator<Item = OrdinalId>,
        P: IntoIterator<Item = OrdinalId>,
    {
        let subordinates: Edges = subordinates.into_iter().collect();
        let superiors: Edges = superiors.into_iter().collect();

        for &neighbour in subordinates.iter().chain(superiors.iter()) {
            self.check(neighbour)?;
        }

        let id = self.push(Ordinal::new(subordinates, superiors))?;
        debug!(ordinal = %id, reconcile_on_init, "ordinal created");

        if reconcile_on_init {
            self.reconcile_subordinates(id)?;
            self.reconcile_superiors(id)?;
        }

        Ok(id)
    }

    fn push(&mut self, ordinal: Ordinal) -> Result<OrdinalId> {
        let id = OrdinalId::try_from_index(self.ordinals.len())?;
        self.ordinals.push(ordinal);
        Ok(id)
    }

    /// Get the number of ordinals in the graph.
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// True if the graph holds no ordinals.
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// Iterate over every handle in the graph, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = OrdinalId> + '_ {
        (0..self.ordinals.len()).map(OrdinalId::from_index)
    }

    /// Get a reference to an ordinal.
    pub fn get(&self, id: OrdinalId) -> Option<&Ordinal> {
        self.ordinals.get(id.index())
    }

    /// Fail with `UnknownOrdinal` unless `id` belongs to this graph.
    pub fn check(&self, id: OrdinalId) -> Result<()> {
        if id.index() < self.ordinals.len() {
            Ok(())
        } else {
            Err(OrdinalError::UnknownOrdinal(id))
        }
    }

    /// Look up a handle that is already known to be valid.
    ///
    /// Every handle stored in an edge list was checked on the way in, so
    /// traversals use this after checking their entry point.
    pub(crate) fn node(&self, id: OrdinalId) -> &Ordinal {
        &self.ordinals[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: OrdinalId) -> &mut Ordinal {
        &mut self.ordinals[id.index()]
    }

    /// Get the direct subordinates of an ordinal.
    pub fn subordinates(&self, id: OrdinalId) -> Result<&[OrdinalId]> {
        self.edges(id, Direction::Subordinates)
    }

    /// Get the direct superiors of an ordinal.
    pub fn superiors(&self, id: OrdinalId) -> Result<&[OrdinalId]> {
        self.edges(id, Direction::Superiors)
    }

    /// Get the edge list of an ordinal on one side.
    pub fn edges(&self, id: OrdinalId, direction: Direction) -> Result<&[OrdinalId]> {
        self.check(id)?;
        Ok(self.node(id).edges(direction))
    }

    /// Declare `sub` smaller than `id`.
    ///
    /// Appends `sub` to the subordinates of `id`. With `mirror` set, `id` is
    /// also appended to the superiors of `sub` unless it is already there.
    /// Repeated calls append duplicate subordinates.
    pub fn add_subordinate(&mut self, id: OrdinalId, sub: OrdinalId, mirror: bool) -> Result<()> {
        self.add_edge(id, Direction::Subordinates, sub, mirror)
    }

    /// Declare `sup` larger than `id`. Mirror image of [`add_subordinate`].
    ///
    /// [`add_subordinate`]: Self::add_subordinate
    pub fn add_superior(&mut self, id: OrdinalId, sup: OrdinalId, mirror: bool) -> Result<()> {
        self.add_edge(id, Direction::Superiors, sup, mirror)
    }

    fn add_edge(
        &mut self,
        id: OrdinalId,
        direction: Direction,
        other: OrdinalId,
        mirror: bool,
    ) -> Result<()> {
        self.check(id)?;
        self.check(other)?;

        if mirror {
            let converse = self.node_mut(other).edges_mut(direction.opposite());
            if !converse.contains(&id) {
                converse.push(id);
            }
        }
        self.node_mut(id).edges_mut(direction).push(other);
        Ok(())
    }

    /// True if nothing is declared smaller than `id`.
    pub fn is_root(&self, id: OrdinalId) -> Result<bool> {
        self.check(id)?;
        Ok(self.node(id).is_root())
    }

    /// True if nothing is declared larger than `id`.
    pub fn is_peak(&self, id: OrdinalId) -> Result<bool> {
        self.check(id)?;
        Ok(self.node(id).is_peak())
    }

    /// `a >= b`: `b` is a direct subordinate of `a`.
    ///
    /// This is a one-hop check. `a >= b >= c` does not make `a >= c`.
    pub fn ge(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.node(a).has_subordinate(b))
    }

    /// `a <= b`: `a` is a direct subordinate of `b`.
    pub fn le(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        self.ge(b, a)
    }

    /// Each of `a` and `b` lists the other as a direct subordinate.
    ///
    /// Narrower than comparing everything the two are greater than.
    pub fn equals(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        Ok(self.ge(a, b)? && self.ge(b, a)?)
    }
}
