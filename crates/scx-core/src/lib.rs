//! # scx-core: Foundational Types for the Declarative Schema Changer
//!
//! Leaf crate of the workspace. Defines the vocabulary every other crate
//! speaks: element statuses, transition directions, transaction phases,
//! and descriptor identifiers.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations.** `Status`, `Direction`, and `Phase` are
//!    exhaustive enums; adding a variant forces every `match` to handle it.
//!
//! 2. **Newtype identifiers.** `DescId`, `ColumnId`, `IndexId`, `FamilyId`,
//!    `ConstraintId` are distinct types over `u32`.
//!
//! 3. **Canonical names.** Statuses serialize as `SCREAMING_SNAKE_CASE`
//!    (`WRITE_ONLY`), phases as `StatementPhase` / `PreCommitPhase` /
//!    `PostCommitPhase`, directions as `add` / `drop`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `scx-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod status;

pub use error::CoreError;
pub use identity::{ColumnId, ConstraintId, DescId, FamilyId, IndexId};
pub use status::{target_status_for, Direction, Phase, Status};
