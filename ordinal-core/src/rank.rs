//! Rank and Depth
//!
//! The rank of an ordinal is one more than the largest rank among its
//! subordinates, and 0 if it has none. Depth is the same quantity over
//! superiors.
//!
//! # Cycles
//!
//! The relation may be cyclic, so "one more than the largest subordinate"
//! has no fixed point along a cycle. The engine carries the chain of
//! ordinals currently asking (the walk's path) and treats an edge back into
//! that chain as confusion rather than descending into it:
//!
//! 1. The ordinal that finds the back-edge records itself and the ordinal it
//!    points at as rank-equivalent, and answers `Confused`.
//!
//! 2. An ordinal that receives a `Confused` answer folds the provisional rank
//!    in as usual and merges the equivalence set. If the set names one of its
//!    own askers, the cycle is still open above it: it joins the set and
//!    answers `Confused` too.
//!
//! 3. Once the answer reaches the ordinal where the cycle started, the cycle
//!    is closed there and that ordinal answers with a plain rank.
//!
//! The ordinal the query started from never has askers. It answers
//! `Confused` when it lies on a cycle itself, carrying every ordinal found
//! equivalent to it.
//!
//! # Cost
//!
//! Nothing is memoized: each query walks every path from scratch, which is
//! exponential on stacked diamonds. [`OrdinalGraph::all_levels`] computes
//! every rank in linear time when the graph is acyclic.
//!
//! The walk keeps its own stack of frames instead of recursing, so chain
//! length is bounded by memory, not by the thread's stack.

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::{Direction, OrdinalGraph, OrdinalId};

/// Answer of a rank or depth query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rank {
    /// No cycle got in the way.
    Resolved(usize),

    /// A cycle was found. `rank` is provisional, and `equivalents` are the
    /// ordinals that the cycle makes indistinguishable by rank.
    Confused {
        rank: usize,
        equivalents: IndexSet<OrdinalId>,
    },
}

/// One ordinal on the path from the queried ordinal to the current one.
struct Frame {
    id: OrdinalId,
    /// Next edge to follow.
    cursor: usize,
    result: usize,
    confused: bool,
    /// Allocated on the first cycle seen below this frame.
    equivalents: Option<IndexSet<OrdinalId>>,
}

impl Frame {
    fn new(id: OrdinalId) -> Self {
        Self {
            id,
            cursor: 0,
            result: 0,
            confused: false,
            equivalents: None,
        }
    }

    fn back_edge(&mut self, target: OrdinalId) {
        self.confused = true;
        let equivalents = self.equivalents.get_or_insert_with(IndexSet::new);
        equivalents.insert(target);
        equivalents.insert(self.id);
    }

    /// Fold a finished child's answer in. `askers[i]` counts the frames
    /// above this one that hold ordinal `i`.
    fn fold(&mut self, answer: Rank, askers: &[u32]) {
        match answer {
            Rank::Resolved(rank) => self.result = self.result.max(rank + 1),
            Rank::Confused {
                rank,
                equivalents: theirs,
            } => {
                self.result = self.result.max(rank + 1);
                if theirs.iter().any(|member| askers[member.index()] > 0) {
                    self.confused = true;
                }
                self.equivalents
                    .get_or_insert_with(IndexSet::new)
                    .extend(theirs);
            }
        }
    }

    fn finish(self, is_origin: bool) -> Rank {
        match self.equivalents {
            // Every open cycle has closed by the time the answer gets here.
            Some(equivalents) if is_origin => Rank::Confused {
                rank: self.result,
                equivalents,
            },
            Some(mut equivalents) if self.confused => {
                equivalents.insert(self.id);
                Rank::Confused {
                    rank: self.result,
                    equivalents,
                }
            }
            _ => Rank::Resolved(self.result),
        }
    }
}

impl Rank {
    /// The rank, provisional if confused.
    pub fn value(&self) -> usize {
        match self {
            Rank::Resolved(rank) | Rank::Confused { rank, .. } => *rank,
        }
    }

    /// True if a cycle was found.
    pub fn is_confused(&self) -> bool {
        matches!(self, Rank::Confused { .. })
    }

    /// The equivalence set, if confused.
    pub fn equivalents(&self) -> Option<&IndexSet<OrdinalId>> {
        match self {
            Rank::Resolved(_) => None,
            Rank::Confused { equivalents, .. } => Some(equivalents),
        }
    }
}

impl OrdinalGraph {
    /// Rank of `id`, computed over its subordinates.
    pub fn rank(&self, id: OrdinalId) -> Result<Rank> {
        self.level(id, Direction::Subordinates)
    }

    /// Depth of `id`, computed over its superiors.
    pub fn depth(&self, id: OrdinalId) -> Result<Rank> {
        self.level(id, Direction::Superiors)
    }

    /// Rank (`Subordinates`) or depth (`Superiors`) of `id`.
    pub fn level(&self, id: OrdinalId, direction: Direction) -> Result<Rank> {
        self.check(id)?;

        let answer = self.ask(id, direction);

        if let Rank::Confused { rank, equivalents } = &answer {
            debug!(
                ordinal = %id,
                ?direction,
                rank,
                equivalents = equivalents.len(),
                "level confused by a cycle"
            );
        }
        Ok(answer)
    }

    /// Post-order walk over `direction`. The frame stack is the asking
    /// chain: every frame below the top is asking the top for its answer.
    fn ask(&self, id: OrdinalId, direction: Direction) -> Rank {
        let mut askers = vec![0u32; self.len()];
        let mut stack = vec![Frame::new(id)];
        let mut answer: Option<Rank> = None;

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = answer.take() {
                frame.fold(child, &askers);
            }

            if let Some(&next) = self.node(frame.id).edges(direction).get(frame.cursor) {
                frame.cursor += 1;
                if askers[next.index()] > 0 {
                    trace!(ordinal = %frame.id, back_to = %next, ?direction, "back-edge");
                    frame.back_edge(next);
                } else {
                    askers[frame.id.index()] += 1;
                    stack.push(Frame::new(next));
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last() {
                Some(parent) => {
                    askers[parent.id.index()] -= 1;
                    answer = Some(done.finish(false));
                }
                None => return done.finish(true),
            }
        }

        Rank::Resolved(0)
    }
}
