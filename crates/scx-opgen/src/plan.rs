//! # Element Transitions
//!
//! Walks an element's rule sequence from its current status to its
//! target status and emits every operation along the way, annotated with
//! the edge's phase and revertibility.
//!
//! This is the per-element half of planning. Ordering operations across
//! elements by dependency belongs to the graph planner; [`Plan`] only
//! merges per-element transitions and orders them by phase.
//!
//! ## All-or-nothing
//!
//! If any edge on the walk fails to emit, the whole transition fails. A
//! caller never receives a prefix of a transition.

use serde::{Deserialize, Serialize};

use scx_core::{Direction, Phase, Status};
use scx_element::{ElementKind, ElementState};
use scx_op::Op;

use crate::error::{OpGenError, WalkError};
use crate::registry::OpRegistry;

/// Which part of the DDL transaction a plan is being built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanParams {
    /// The phase being planned.
    pub phase: Phase,
}

impl PlanParams {
    /// Parameters for planning `phase`.
    pub fn for_phase(phase: Phase) -> Self {
        Self { phase }
    }
}

/// One emitted operation with the constraints of the edge that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedOp {
    pub kind: ElementKind,
    pub from: Status,
    pub to: Status,
    pub min_phase: Phase,
    pub revertible: bool,
    pub op: Op,
}

impl PlannedOp {
    /// Whether this operation may run in the phase `params` describes.
    ///
    /// The statement phase only runs revertible operations.
    pub fn runnable_in(&self, params: &PlanParams) -> bool {
        self.min_phase <= params.phase && (params.phase != Phase::Statement || self.revertible)
    }
}

/// The operations moving one element from its current to its target status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: ElementKind,
    pub direction: Direction,
    pub from: Status,
    pub to: Status,
    pub ops: Vec<PlannedOp>,
}

impl Transition {
    /// Whether the element is already at its target.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The leading operations runnable in the phase `params` describes.
    ///
    /// Stops at the first operation that must wait, so later edges never
    /// run ahead of earlier ones.
    pub fn runnable_in(&self, params: &PlanParams) -> &[PlannedOp] {
        let end = self
            .ops
            .iter()
            .position(|op| !op.runnable_in(params))
            .unwrap_or(self.ops.len());
        &self.ops[..end]
    }

    /// Whether every operation can still be rolled back.
    pub fn is_revertible(&self) -> bool {
        self.ops.iter().all(|op| op.revertible)
    }
}

/// Operations for a set of elements, ordered by minimum phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub ops: Vec<PlannedOp>,
}

impl Plan {
    /// Operations whose minimum phase is exactly `phase`.
    pub fn ops_in(&self, phase: Phase) -> impl Iterator<Item = &PlannedOp> {
        self.ops.iter().filter(move |op| op.min_phase == phase)
    }

    /// Whether there is nothing to do.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

impl OpRegistry {
    /// Emit every operation moving `state.element` from `state.current`
    /// to `state.target`.
    ///
    /// An element already at its target yields an empty transition without
    /// consulting the rules.
    ///
    /// # Errors
    ///
    /// - [`WalkError::UnsupportedTarget`] if the target is not PUBLIC or ABSENT.
    /// - [`crate::LookupError::NotRegistered`] if no rule covers the direction.
    /// - [`WalkError::StatusNotInSequence`] if the current status is off the path.
    /// - [`crate::EmitError`] if any edge fails to emit.
    pub fn transition(&self, state: &ElementState) -> Result<Transition, OpGenError> {
        let kind = state.kind();
        let direction = Direction::for_target(state.target).ok_or(WalkError::UnsupportedTarget {
            kind,
            target: state.target,
        })?;
        if state.is_settled() {
            return Ok(Transition {
                kind,
                direction,
                from: state.current,
                to: state.target,
                ops: Vec::new(),
            });
        }
        let sequence = self.lookup(kind, direction)?;
        let path = sequence.path_from(state.current)?;

        let mut from = state.current;
        let mut ops = Vec::with_capacity(path.len());
        for edge in path {
            let op = edge.emit(&state.element)?;
            ops.push(PlannedOp {
                kind,
                from,
                to: edge.to(),
                min_phase: edge.min_phase(),
                revertible: edge.revertible(),
                op,
            });
            from = edge.to();
        }

        tracing::debug!(
            element = %kind,
            direction = %direction,
            from = %state.current,
            to = %state.target,
            ops = ops.len(),
            "planned element transition"
        );
        Ok(Transition {
            kind,
            direction,
            from: state.current,
            to: state.target,
            ops,
        })
    }

    /// Transitions for every element, merged and stably ordered by
    /// minimum phase.
    ///
    /// # Errors
    ///
    /// The first element's error; no partial plan is returned.
    pub fn plan(&self, states: &[ElementState]) -> Result<Plan, OpGenError> {
        let mut ops = Vec::new();
        for state in states {
            ops.extend(self.transition(state)?.ops);
        }
        ops.sort_by_key(|op| op.min_phase);
        Ok(Plan { ops })
    }
}
