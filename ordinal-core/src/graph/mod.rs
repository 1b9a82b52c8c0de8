//! Ordinal Graph
//!
//! This module implements the graph of ordinals and the operations that keep
//! its two edge sets consistent.
//!
//! # Overview
//!
//! The ordinal graph is a directed graph, possibly cyclic, where:
//!
//! - Nodes are ordinals
//! - Each ordinal keeps its subordinates (what it is greater than) and its
//!   superiors (what it is less than)
//!
//! Whenever `b` is a subordinate of `a`, `a` should be a superior of `b`.
//! The relationship operations (`add_subordinate`, `add_superior` and the
//! `reconcile_*` family) establish this. Writing one side only, e.g. by
//! constructing without `reconcile_on_init`, leaves it to a later reconcile.
//!
//! # Design Decisions
//!
//! 1. Ordinals live in an arena and refer to each other by `OrdinalId`, so a
//!    cycle in the relation is just a cycle of indices.
//!
//! 2. Every operation that exists on both sides is written once over a
//!    `Direction`, so the subordinate and superior variants cannot drift.
//!
//! 3. Edge lists keep insertion order and allow duplicates. Nothing is
//!    deduplicated behind the caller's back.

mod arena;
mod node;
mod reconcile;

pub use arena::OrdinalGraph;
pub use node::{Direction, Edges, Ordinal, OrdinalId};
