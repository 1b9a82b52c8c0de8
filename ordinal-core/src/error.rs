//! Error types for ordinal graph operations.

use thiserror::Error;

use crate::graph::OrdinalId;

/// Errors returned by [`OrdinalGraph`](crate::graph::OrdinalGraph) operations.
///
/// Cyclic input is not an error for rank and depth: those queries report a
/// [`Rank::Confused`](crate::rank::Rank::Confused) result instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrdinalError {
    /// The handle does not belong to this arena.
    #[error("unknown ordinal: {0}")]
    UnknownOrdinal(OrdinalId),

    /// The arena already holds one ordinal per `u32` handle.
    #[error("ordinal arena is full: slot {0} has no handle")]
    CapacityExceeded(usize),

    /// A whole-graph level pass met a cycle and could not order these nodes.
    #[error("graph contains a cycle through {} ordinal(s)", .remaining.len())]
    Cyclic { remaining: Vec<OrdinalId> },
}

pub type Result<T> = std::result::Result<T, OrdinalError>;
