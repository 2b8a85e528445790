//! # Transition Rule Builder
//!
//! A small value-based DSL for declaring an element kind's edges:
//!
//! ```
//! use scx_core::{Phase, Status};
//! use scx_element::ForeignKey;
//! use scx_op::DropForeignKeyRef;
//! use scx_opgen::builder::{add, drop, to};
//! use scx_opgen::not_implemented;
//!
//! let add_seq = add([to(Status::Public).emit(|this: &ForeignKey| not_implemented(this))]);
//! let drop_seq = drop([to(Status::Absent)
//!     .min_phase(Phase::PreCommit)
//!     .revertible(false)
//!     .emit(|this: &ForeignKey| DropForeignKeyRef {
//!         table_id: this.origin_id,
//!         name: this.name.clone(),
//!         outbound: true,
//!     })]);
//! assert!(add_seq.build().is_ok());
//! assert!(drop_seq.build().is_ok());
//! ```
//!
//! Modifiers are plain setters on an [`EdgeSpec`]. Nothing is validated
//! until [`SequenceSpec::build`] seals the edges into a
//! [`RuleSequence`]; the registry calls it during registration.
//!
//! ## Defaults
//!
//! - `min_phase` omitted: the predecessor's effective phase, or
//!   `StatementPhase` on the first edge.
//! - `revertible` omitted: the predecessor's effective revertibility, or
//!   `true` on the first edge. Stating `revertible(true)` after a
//!   non-revertible edge is an error.

use std::collections::HashSet;
use std::sync::Arc;

use scx_core::{Direction, Phase, Status};
use scx_element::{Element, ElementType};

use crate::emit::Emission;
use crate::error::RegistrationError;
use crate::sequence::{Edge, ErasedEmitFn, RuleSequence};

type TypedEmitFn<E> = Arc<dyn Fn(&E) -> Emission + Send + Sync>;

/// An unsealed edge targeting one status.
pub struct EdgeSpec<E> {
    to: Status,
    min_phase: Option<Phase>,
    revertible: Option<bool>,
    emitters: Vec<TypedEmitFn<E>>,
}

/// Start an edge targeting `status`.
pub fn to<E: ElementType>(status: Status) -> EdgeSpec<E> {
    EdgeSpec {
        to: status,
        min_phase: None,
        revertible: None,
        emitters: Vec::new(),
    }
}

impl<E: ElementType> EdgeSpec<E> {
    /// Earliest phase in which this edge's operation may run.
    pub fn min_phase(mut self, phase: Phase) -> Self {
        self.min_phase = Some(phase);
        self
    }

    /// Whether the schema change can still be aborted after this edge.
    pub fn revertible(mut self, revertible: bool) -> Self {
        self.revertible = Some(revertible);
        self
    }

    /// The function producing this edge's operation. Exactly one per edge.
    pub fn emit<R, F>(mut self, f: F) -> Self
    where
        F: Fn(&E) -> R + Send + Sync + 'static,
        R: Into<Emission>,
    {
        self.emitters
            .push(Arc::new(move |this: &E| -> Emission { f(this).into() }));
        self
    }
}

impl<E> std::fmt::Debug for EdgeSpec<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeSpec")
            .field("to", &self.to)
            .field("min_phase", &self.min_phase)
            .field("revertible", &self.revertible)
            .field("emitters", &self.emitters.len())
            .finish()
    }
}

/// An unsealed edge sequence for one direction.
#[derive(Debug)]
pub struct SequenceSpec<E> {
    direction: Direction,
    edges: Vec<EdgeSpec<E>>,
}

/// Declare the `add` sequence: edges from ABSENT toward PUBLIC.
pub fn add<E: ElementType>(edges: impl IntoIterator<Item = EdgeSpec<E>>) -> SequenceSpec<E> {
    SequenceSpec {
        direction: Direction::Add,
        edges: edges.into_iter().collect(),
    }
}

/// Declare the `drop` sequence: edges from PUBLIC toward ABSENT.
pub fn drop<E: ElementType>(edges: impl IntoIterator<Item = EdgeSpec<E>>) -> SequenceSpec<E> {
    SequenceSpec {
        direction: Direction::Drop,
        edges: edges.into_iter().collect(),
    }
}

impl<E: ElementType> SequenceSpec<E> {
    /// The declared direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Validate and seal the edges.
    ///
    /// # Errors
    ///
    /// A [`RegistrationError`] naming the first offending edge.
    pub fn build(self) -> Result<RuleSequence, RegistrationError> {
        let kind = E::KIND;
        let direction = self.direction;
        if self.edges.is_empty() {
            return Err(RegistrationError::EmptySequence { kind, direction });
        }

        let mut seen = HashSet::new();
        let mut previous_phase = Phase::EARLIEST;
        let mut previous_revertible = true;
        let mut edges = Vec::with_capacity(self.edges.len());

        for (index, spec) in self.edges.into_iter().enumerate() {
            let to = spec.to;
            if to == direction.origin() {
                return Err(RegistrationError::OriginAsDestination {
                    kind,
                    direction,
                    index,
                    status: to,
                });
            }
            if direction == Direction::Add && to.is_drop_only() {
                return Err(RegistrationError::DropOnlyStatusInAdd {
                    kind,
                    index,
                    status: to,
                });
            }
            if !seen.insert(to) {
                return Err(RegistrationError::RevisitedStatus {
                    kind,
                    direction,
                    index,
                    status: to,
                });
            }

            let min_phase = match spec.min_phase {
                Some(phase) if phase < previous_phase => {
                    return Err(RegistrationError::DecreasingPhase {
                        kind,
                        direction,
                        index,
                        to,
                        phase,
                        previous: previous_phase,
                    });
                }
                Some(phase) => phase,
                None => previous_phase,
            };

            let revertible = match spec.revertible {
                Some(true) if !previous_revertible => {
                    return Err(RegistrationError::RevertibleAfterNonRevertible {
                        kind,
                        direction,
                        index,
                        to,
                    });
                }
                Some(revertible) => revertible,
                None => previous_revertible,
            };

            let mut emitters = spec.emitters;
            if emitters.len() > 1 {
                return Err(RegistrationError::DuplicateEmit {
                    kind,
                    direction,
                    index,
                    to,
                    count: emitters.len(),
                });
            }
            let Some(emitter) = emitters.pop() else {
                return Err(RegistrationError::MissingEmit {
                    kind,
                    direction,
                    index,
                    to,
                });
            };
            let emit_fn: ErasedEmitFn =
                Arc::new(move |element: &Element| E::from_element(element).map(|this| emitter(this)));

            edges.push(Edge {
                kind,
                direction,
                index,
                to,
                min_phase,
                revertible,
                emit_fn,
            });
            previous_phase = min_phase;
            previous_revertible = revertible;
        }

        let terminal = direction.terminal();
        if let Some(last) = edges.last() {
            if last.to != terminal {
                return Err(RegistrationError::WrongTerminal {
                    kind,
                    direction,
                    expected: terminal,
                    found: last.to,
                });
            }
        }

        Ok(RuleSequence {
            kind,
            direction,
            edges,
        })
    }
}
