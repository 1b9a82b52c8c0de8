//! Ordinal Core
//!
//! This crate models a directed, possibly cyclic graph of ordinals. Each
//! ordinal knows what it is greater than (its subordinates) and what it is
//! less than (its superiors). From that it derives:
//!
//! - Rank: distance from the deepest subordinate chain
//! - Depth: distance from the highest superior chain
//! - Roots and peaks: the terminal ordinals reachable in either direction
//!
//! Cycles are expected input. A rank or depth query that runs into one
//! reports a [`Rank::Confused`] result instead of looping forever.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: the ordinal arena and relationship maintenance
//! - `rank`: the cycle-aware rank/depth engine
//! - `frontier`: root and peak discovery
//! - `levels`: memoized levels for acyclic graphs
//! - `shared`: a lock-guarded handle for use across threads
//!
//! # Example
//!
//! ```rust
//! use ordinal_core::{OrdinalGraph, Rank};
//!
//! let mut graph = OrdinalGraph::new();
//! let zero = graph.add_isolated()?;
//! let one = graph.add_ordinal([zero], [], true)?;
//! let two = graph.add_ordinal([one], [], true)?;
//!
//! assert_eq!(graph.rank(two)?, Rank::Resolved(2));
//! assert_eq!(graph.depth(zero)?, Rank::Resolved(2));
//! assert!(graph.ge(two, one)?);
//! assert!(!graph.ge(two, zero)?);
//!
//! // Close a cycle: now zero >= two as well.
//! graph.add_subordinate(zero, two, true)?;
//! assert!(graph.rank(two)?.is_confused());
//! # Ok::<(), ordinal_core::OrdinalError>(())
//! ```

pub mod error;
pub mod frontier;
pub mod graph;
pub mod levels;
pub mod rank;
pub mod shared;

pub use error::{OrdinalError, Result};
pub use graph::{Direction, Ordinal, OrdinalGraph, OrdinalId};
pub use rank::Rank;
pub use shared::SharedOrdinalGraph;
