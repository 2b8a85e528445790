//! # Rule Sequences
//!
//! A [`RuleSequence`] is one element kind's state machine in one
//! direction: an ordered list of sealed [`Edge`]s from the direction's
//! origin status to its terminal status.
//!
//! ```text
//! Column, add:
//!   ABSENT ──[PreCommit]──▶ DELETE_ONLY ──[PostCommit]──▶ WRITE_ONLY ──[PostCommit]──▶ PUBLIC
//! ```
//!
//! Sequences are only constructed by the builder, which enforces:
//!
//! - destinations are pairwise distinct and never the origin status,
//! - the final destination is the direction's terminal status,
//! - an add sequence never passes through TXN_DROPPED or DROPPED,
//! - phases never decrease along the sequence,
//! - no revertible edge follows a non-revertible one.
//!
//! The registry additionally requires an element's add and drop sequences
//! to visit their shared statuses in opposite orders.
//!
//! A walk from any status in the sequence therefore reaches the terminal
//! without revisiting a status.

use std::sync::Arc;

use scx_core::{Direction, Phase, Status};
use scx_element::{Element, ElementKind};
use scx_op::Op;

use crate::emit::Emission;
use crate::error::{EmitError, WalkError};

/// Type-erased emission function. Returns `None` when applied to an
/// element of another kind.
pub(crate) type ErasedEmitFn = Arc<dyn Fn(&Element) -> Option<Emission> + Send + Sync>;

/// One sealed transition step.
#[derive(Clone)]
pub struct Edge {
    pub(crate) kind: ElementKind,
    pub(crate) direction: Direction,
    pub(crate) index: usize,
    pub(crate) to: Status,
    pub(crate) min_phase: Phase,
    pub(crate) revertible: bool,
    pub(crate) emit_fn: ErasedEmitFn,
}

impl Edge {
    /// The element kind this edge belongs to.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The direction of the sequence containing this edge.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Position of this edge in its sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Destination status.
    pub fn to(&self) -> Status {
        self.to
    }

    /// Earliest phase in which this edge's operation may run.
    pub fn min_phase(&self) -> Phase {
        self.min_phase
    }

    /// Whether the schema change can still be rolled back after this edge.
    pub fn revertible(&self) -> bool {
        self.revertible
    }

    /// Produce this edge's operation for `element`.
    pub fn emit(&self, element: &Element) -> Result<Op, EmitError> {
        crate::emit::emit(element, self)
    }

    pub(crate) fn apply(&self, element: &Element) -> Option<Emission> {
        (self.emit_fn)(element)
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("kind", &self.kind)
            .field("direction", &self.direction)
            .field("index", &self.index)
            .field("to", &self.to)
            .field("min_phase", &self.min_phase)
            .field("revertible", &self.revertible)
            .finish_non_exhaustive()
    }
}

/// The validated edge sequence of one element kind in one direction.
#[derive(Debug, Clone)]
pub struct RuleSequence {
    pub(crate) kind: ElementKind,
    pub(crate) direction: Direction,
    pub(crate) edges: Vec<Edge>,
}

impl RuleSequence {
    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The edges, in order. Never empty.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The status a walk of this sequence starts from.
    pub fn origin(&self) -> Status {
        self.direction.origin()
    }

    /// The status every walk of this sequence ends at.
    pub fn terminal(&self) -> Status {
        self.direction.terminal()
    }

    /// Every status the state machine can be in: the origin followed by
    /// each edge's destination.
    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        std::iter::once(self.origin()).chain(self.edges.iter().map(|e| e.to))
    }

    /// Whether `status` is a state of this sequence.
    pub fn contains(&self, status: Status) -> bool {
        self.statuses().any(|s| s == status)
    }

    /// The edges to traverse from `current` to the terminal status.
    ///
    /// Empty when `current` is already terminal.
    ///
    /// # Errors
    ///
    /// [`WalkError::StatusNotInSequence`] if `current` is neither the origin
    /// nor the destination of any edge.
    pub fn path_from(&self, current: Status) -> Result<&[Edge], WalkError> {
        if current == self.origin() {
            return Ok(&self.edges);
        }
        match self.edges.iter().position(|e| e.to == current) {
            Some(pos) => Ok(&self.edges[pos + 1..]),
            None => Err(WalkError::StatusNotInSequence {
                kind: self.kind,
                direction: self.direction,
                status: current,
            }),
        }
    }

    /// Whether any edge is non-revertible.
    pub fn has_point_of_no_return(&self) -> bool {
        self.edges.iter().any(|e| !e.revertible)
    }
}
