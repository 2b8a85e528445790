//! # Error Types
//!
//! Three failure classes with different owners:
//!
//! - [`RegistrationError`]: a malformed rule or duplicate registration.
//!   A programming defect; fatal at startup.
//! - [`LookupError`]: no rule for an element kind and direction. The
//!   issuing statement fails with "not supported".
//! - [`EmitError`]: an edge whose operation is a placeholder, or an edge
//!   applied to the wrong element kind. The issuing statement fails.
//!
//! [`WalkError`] covers statuses a rule sequence cannot reach from.
//! [`OpGenError`] unifies the planning-time errors for callers that want
//! a single type. None of these are retryable: the same element kind and
//! statuses always produce the same error.

use thiserror::Error;

use scx_core::{Direction, Phase, Status};
use scx_element::ElementKind;

/// A rule sequence or registration violates a structural invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The element kind already has registered rules.
    #[error("element {kind} is already registered")]
    DuplicateElement {
        /// The element kind.
        kind: ElementKind,
    },

    /// One registration declared the same direction twice.
    #[error("element {kind} declares its {direction} sequence more than once")]
    DuplicateDirection {
        /// The element kind.
        kind: ElementKind,
        /// The repeated direction.
        direction: Direction,
    },

    /// A registration supplied no sequences at all.
    #[error("element {kind} registered without any transition sequence")]
    NoSequences {
        /// The element kind.
        kind: ElementKind,
    },

    /// A sequence has no edges.
    #[error("element {kind} declares an empty {direction} sequence")]
    EmptySequence {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
    },

    /// The final edge does not reach the direction's terminal status.
    #[error("element {kind} {direction} sequence ends at {found}, expected {expected}")]
    WrongTerminal {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// The direction's terminal status.
        expected: Status,
        /// The final edge's destination.
        found: Status,
    },

    /// An edge leads back to the direction's origin status.
    #[error("element {kind} {direction} edge {index} targets the origin status {status}")]
    OriginAsDestination {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The origin status.
        status: Status,
    },

    /// An edge targets a status an earlier edge already reached.
    #[error("element {kind} {direction} edge {index} revisits status {status}")]
    RevisitedStatus {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The repeated status.
        status: Status,
    },

    /// An add sequence passes through a status that only a drop can reach.
    #[error("element {kind} add edge {index} targets drop-only status {status}")]
    DropOnlyStatusInAdd {
        /// The element kind.
        kind: ElementKind,
        /// Position of the offending edge.
        index: usize,
        /// The drop-only status.
        status: Status,
    },

    /// The add and drop sequences visit two shared statuses in the same
    /// order instead of opposite orders.
    #[error(
        "element {kind} visits {first} before {second} in both its add and drop sequences"
    )]
    InconsistentProgression {
        /// The element kind.
        kind: ElementKind,
        /// The status the add sequence reaches first.
        first: Status,
        /// The status the add sequence reaches second.
        second: Status,
    },

    /// A revertible edge follows a non-revertible one.
    #[error(
        "element {kind} {direction} edge {index} to {to} is revertible after a non-revertible edge"
    )]
    RevertibleAfterNonRevertible {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The offending edge's destination.
        to: Status,
    },

    /// An edge requires an earlier phase than its predecessor.
    #[error(
        "element {kind} {direction} edge {index} to {to} requires {phase}, earlier than preceding {previous}"
    )]
    DecreasingPhase {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The offending edge's destination.
        to: Status,
        /// The phase the edge declared.
        phase: Phase,
        /// The effective phase of the preceding edge.
        previous: Phase,
    },

    /// An edge has no emission function.
    #[error("element {kind} {direction} edge {index} to {to} has no emit function")]
    MissingEmit {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The offending edge's destination.
        to: Status,
    },

    /// An edge has more than one emission function.
    #[error("element {kind} {direction} edge {index} to {to} has {count} emit functions, expected 1")]
    DuplicateEmit {
        /// The element kind.
        kind: ElementKind,
        /// The direction of the sequence.
        direction: Direction,
        /// Position of the offending edge.
        index: usize,
        /// The offending edge's destination.
        to: Status,
        /// How many emit functions were supplied.
        count: usize,
    },
}

/// No rule is registered for an element kind and direction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The element kind has no sequence in the requested direction.
    #[error("schema change not supported for element {kind}: no {direction} rule registered")]
    NotRegistered {
        /// The element kind.
        kind: ElementKind,
        /// The requested direction.
        direction: Direction,
    },
}

/// An edge could not produce an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// The edge is declared but its operation is a placeholder.
    #[error("operation unsupported: {direction} of element {kind} to {to} is not implemented")]
    NotImplemented {
        /// The element kind.
        kind: ElementKind,
        /// The edge's direction.
        direction: Direction,
        /// The edge's destination.
        to: Status,
    },

    /// The edge belongs to a different element kind.
    #[error("edge for element {expected} applied to element {found}")]
    ElementMismatch {
        /// The kind the edge was registered for.
        expected: ElementKind,
        /// The kind of the element supplied.
        found: ElementKind,
    },
}

/// A walk through a rule sequence cannot start where requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The current status is neither the origin nor a destination of the sequence.
    #[error("element {kind} cannot {direction} from status {status}: status not in sequence")]
    StatusNotInSequence {
        /// The element kind.
        kind: ElementKind,
        /// The direction walked.
        direction: Direction,
        /// The current status.
        status: Status,
    },

    /// The target status is not the terminal status of any direction.
    #[error("element {kind} cannot target intermediate status {target}")]
    UnsupportedTarget {
        /// The element kind.
        kind: ElementKind,
        /// The requested target.
        target: Status,
    },
}

/// Planning-time failure of operation generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpGenError {
    /// No rule for the element kind and direction.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The walk could not start from the element's current status.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// An edge could not produce its operation.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl OpGenError {
    /// Whether the failure is a placeholder edge rather than a missing rule
    /// or an unreachable status.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::Emit(EmitError::NotImplemented { .. }))
    }
}
