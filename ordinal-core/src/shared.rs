//! Shared Graph Handle
//!
//! The graph itself does no synchronization. [`SharedOrdinalGraph`] puts one
//! reader-writer lock around a whole graph: relationship changes take the
//! write lock, and queries take the read lock, so any number of rank or
//! frontier queries run together while mutation is exclusive.
//!
//! Locking is per call. A caller that needs several operations to see the
//! same graph should hold one guard from [`read`] or [`write`] across them.
//!
//! [`read`]: SharedOrdinalGraph::read
//! [`write`]: SharedOrdinalGraph::write

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::graph::{OrdinalGraph, OrdinalId};
use crate::rank::Rank;

/// Cloneable, thread-safe handle to one ordinal graph.
#[derive(Debug, Clone, Default)]
pub struct SharedOrdinalGraph {
    inner: Arc<RwLock<OrdinalGraph>>,
}

impl SharedOrdinalGraph {
    /// Create a handle to a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing graph.
    pub fn from_graph(graph: OrdinalGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Hold the read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, OrdinalGraph> {
        self.inner.read()
    }

    /// Hold the write lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, OrdinalGraph> {
        self.inner.write()
    }

    /// Copy the current state of the graph.
    pub fn snapshot(&self) -> OrdinalGraph {
        self.inner.read().clone()
    }

    pub fn add_isolated(&self) -> Result<OrdinalId> {
        self.inner.write().add_isolated()
    }

    pub fn add_ordinal<S, P>(
        &self,
        subordinates: S,
        superiors: P,
        reconcile_on_init: bool,
    ) -> Result<OrdinalId>
    where
        S: IntoIterator<Item = OrdinalId>,
        P: IntoIterator<Item = OrdinalId>,
    {
        self.inner
            .write()
            .add_ordinal(subordinates, superiors, reconcile_on_init)
    }

    pub fn add_subordinate(&self, id: OrdinalId, sub: OrdinalId, mirror: bool) -> Result<()> {
        self.inner.write().add_subordinate(id, sub, mirror)
    }

    pub fn add_superior(&self, id: OrdinalId, sup: OrdinalId, mirror: bool) -> Result<()> {
        self.inner.write().add_superior(id, sup, mirror)
    }

    pub fn reconcile_subordinates(&self, id: OrdinalId) -> Result<()> {
        self.inner.write().reconcile_subordinates(id)
    }

    pub fn reconcile_superiors(&self, id: OrdinalId) -> Result<()> {
        self.inner.write().reconcile_superiors(id)
    }

    pub fn reconcile_all_subordinates(&self, id: OrdinalId) -> Result<usize> {
        self.inner.write().reconcile_all_subordinates(id)
    }

    pub fn reconcile_all_superiors(&self, id: OrdinalId) -> Result<usize> {
        self.inner.write().reconcile_all_superiors(id)
    }

    pub fn is_root(&self, id: OrdinalId) -> Result<bool> {
        self.inner.read().is_root(id)
    }

    pub fn is_peak(&self, id: OrdinalId) -> Result<bool> {
        self.inner.read().is_peak(id)
    }

    pub fn ge(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        self.inner.read().ge(a, b)
    }

    pub fn le(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        self.inner.read().le(a, b)
    }

    pub fn equals(&self, a: OrdinalId, b: OrdinalId) -> Result<bool> {
        self.inner.read().equals(a, b)
    }

    pub fn rank(&self, id: OrdinalId) -> Result<Rank> {
        self.inner.read().rank(id)
    }

    pub fn depth(&self, id: OrdinalId) -> Result<Rank> {
        self.inner.read().depth(id)
    }

    pub fn roots(&self, id: OrdinalId) -> Result<IndexSet<OrdinalId>> {
        self.inner.read().roots(id)
    }

    pub fn peaks(&self, id: OrdinalId) -> Result<IndexSet<OrdinalId>> {
        self.inner.read().peaks(id)
    }
}

impl From<OrdinalGraph> for SharedOrdinalGraph {
    fn from(graph: OrdinalGraph) -> Self {
        Self::from_graph(graph)
    }
}
