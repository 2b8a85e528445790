//! # Status Graph Primitives
//!
//! Defines the closed set of element statuses, the two directions of
//! travel through them, and the ordered transaction phases in which
//! operations may run.
//!
//! ## Directions
//!
//! ```text
//! add:   ABSENT ──▶ ... ──▶ PUBLIC
//! drop:  PUBLIC ──▶ ... ──▶ ABSENT
//! ```
//!
//! There is no universal total order over statuses. Each element type
//! declares its own path in each direction; the only fixed points are the
//! origin and terminal status of each direction.
//!
//! ## Phases
//!
//! `StatementPhase < PreCommitPhase < PostCommitPhase`. A phase constraint
//! on an edge is the *earliest* phase in which its operation may run.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ─── Status ──────────────────────────────────────────────────────────

/// Lifecycle stage of a schema element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The element does not exist.
    Absent,
    /// Visible to deletes only; writes do not maintain it.
    DeleteOnly,
    /// Maintained by writes and deletes but not readable.
    WriteOnly,
    /// Existing data has been backfilled.
    Backfilled,
    /// Backfilled data has been validated.
    Validated,
    /// Dropped within the issuing transaction only.
    TxnDropped,
    /// Dropped and committed; awaiting garbage collection.
    Dropped,
    /// Fully present and visible.
    Public,
}

impl Status {
    /// Every status, in declaration order.
    pub fn all() -> &'static [Status] {
        &[
            Self::Absent,
            Self::DeleteOnly,
            Self::WriteOnly,
            Self::Backfilled,
            Self::Validated,
            Self::TxnDropped,
            Self::Dropped,
            Self::Public,
        ]
    }

    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "ABSENT",
            Self::DeleteOnly => "DELETE_ONLY",
            Self::WriteOnly => "WRITE_ONLY",
            Self::Backfilled => "BACKFILLED",
            Self::Validated => "VALIDATED",
            Self::TxnDropped => "TXN_DROPPED",
            Self::Dropped => "DROPPED",
            Self::Public => "PUBLIC",
        }
    }

    /// Whether this status only exists on the way out of the schema.
    pub fn is_drop_only(&self) -> bool {
        matches!(self, Self::TxnDropped | Self::Dropped)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// ─── Direction ───────────────────────────────────────────────────────

/// Logical direction of travel through an element's statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward presence, terminating at PUBLIC.
    Add,
    /// Toward absence, terminating at ABSENT.
    Drop,
}

impl Direction {
    /// Both directions, add first.
    pub fn all() -> &'static [Direction] {
        &[Self::Add, Self::Drop]
    }

    /// The canonical terminal status of this direction.
    pub fn terminal(&self) -> Status {
        target_status_for(*self)
    }

    /// The status an element starts from when travelling this direction
    /// from scratch. Never a valid edge destination.
    pub fn origin(&self) -> Status {
        match self {
            Self::Add => Status::Absent,
            Self::Drop => Status::Public,
        }
    }

    /// The direction whose terminal status is `target`, if any.
    pub fn for_target(target: Status) -> Option<Direction> {
        match target {
            Status::Public => Some(Self::Add),
            Status::Absent => Some(Self::Drop),
            _ => None,
        }
    }

    /// The canonical string name of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Drop => "drop",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "drop" => Ok(Self::Drop),
            other => Err(CoreError::UnknownDirection(other.to_string())),
        }
    }
}

/// The canonical terminal status for `direction`: PUBLIC for add,
/// ABSENT for drop.
pub fn target_status_for(direction: Direction) -> Status {
    match direction {
        Direction::Add => Status::Public,
        Direction::Drop => Status::Absent,
    }
}

// ─── Phase ───────────────────────────────────────────────────────────

/// A stage of the enclosing DDL transaction.
///
/// Ordered: an edge requiring `PreCommit` may run in `PreCommit` or
/// `PostCommit`, never in `Statement`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Phase {
    /// While the issuing statement executes.
    #[default]
    #[serde(rename = "StatementPhase")]
    Statement,
    /// After all statements, before the user transaction commits.
    #[serde(rename = "PreCommitPhase")]
    PreCommit,
    /// In background jobs after the user transaction commits.
    #[serde(rename = "PostCommitPhase")]
    PostCommit,
}

impl Phase {
    /// Every phase, earliest first.
    pub fn all() -> &'static [Phase] {
        &[Self::Statement, Self::PreCommit, Self::PostCommit]
    }

    /// The earliest phase; the default constraint of an unconstrained edge.
    pub const EARLIEST: Phase = Phase::Statement;

    /// The canonical string name of this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statement => "StatementPhase",
            Self::PreCommit => "PreCommitPhase",
            Self::PostCommit => "PostCommitPhase",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPhase(s.to_string()))
    }
}
