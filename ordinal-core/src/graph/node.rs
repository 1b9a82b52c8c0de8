//! Graph Nodes
//!
//! This module defines the ordinal node and the handle used to address it
//! inside an [`OrdinalGraph`](super::OrdinalGraph).

use std::fmt;

use smallvec::SmallVec;

use crate::error::{OrdinalError, Result};

/// Edge list for one side of an ordinal. Most ordinals have only a handful
/// of neighbours, so the first few live inline.
pub type Edges = SmallVec<[OrdinalId; 4]>;

/// Handle of an ordinal in its arena.
///
/// Two handles are equal iff they address the same ordinal, which is the
/// only notion of identity an ordinal has.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrdinalId(u32);

impl OrdinalId {
    /// Handle for arena slot `index`, or `CapacityExceeded` once the arena
    /// has outgrown the `u32` handle space.
    pub(crate) fn try_from_index(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| OrdinalError::CapacityExceeded(index))
    }

    /// Handle for a slot that already exists, so `index` is in range.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    /// Get the raw index value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for OrdinalId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OrdinalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of the two edge sets an operation walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller ordinals. Rank and roots are computed this way.
    Subordinates,

    /// Towards larger ordinals. Depth and peaks are computed this way.
    Superiors,
}

impl Direction {
    /// The converse direction. An edge stored under `self` on one node is
    /// mirrored under `self.opposite()` on the other.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Subordinates => Direction::Superiors,
            Direction::Superiors => Direction::Subordinates,
        }
    }
}

/// An ordinal: the set of things it is greater than, and the set of things
/// it is less than.
#[derive(Debug, Clone, Default)]
pub struct Ordinal {
    /// Ordinals this one is declared greater than.
    subordinates: Edges,

    /// Ordinals this one is declared less than.
    superiors: Edges,
}

impl Ordinal {
    /// Create an ordinal with the given edge lists, stored as given.
    pub fn new(subordinates: Edges, superiors: Edges) -> Self {
        Self {
            subordinates,
            superiors,
        }
    }

    /// Get the direct subordinates.
    pub fn subordinates(&self) -> &[OrdinalId] {
        &self.subordinates
    }

    /// Get the direct superiors.
    pub fn superiors(&self) -> &[OrdinalId] {
        &self.superiors
    }

    /// Get the edge list on one side.
    pub fn edges(&self, direction: Direction) -> &[OrdinalId] {
        match direction {
            Direction::Subordinates => &self.subordinates,
            Direction::Superiors => &self.superiors,
        }
    }

    pub(crate) fn edges_mut(&mut self, direction: Direction) -> &mut Edges {
        match direction {
            Direction::Subordinates => &mut self.subordinates,
            Direction::Superiors => &mut self.superiors,
        }
    }

    /// True if nothing is declared smaller than this ordinal.
    pub fn is_root(&self) -> bool {
        self.subordinates.is_empty()
    }

    /// True if nothing is declared larger than this ordinal.
    pub fn is_peak(&self) -> bool {
        self.superiors.is_empty()
    }

    /// True if the edge list on `direction` is empty.
    pub fn is_terminal(&self, direction: Direction) -> bool {
        self.edges(direction).is_empty()
    }

    /// Direct membership test, no transitive closure.
    pub fn has_subordinate(&self, id: OrdinalId) -> bool {
        self.subordinates.contains(&id)
    }
}
