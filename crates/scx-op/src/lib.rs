//! # scx-op: Schema-Change Operations
//!
//! Operation descriptors produced by element rules and consumed by the
//! executor. This crate only describes operations; it never runs them.

pub mod column;
pub mod constraint;
pub mod dependency;
pub mod descriptor;
pub mod index;
pub mod op;

pub use column::{
    MakeAddedColumnDeleteOnly, MakeAddedColumnWriteOnly, MakeColumnAbsent, MakeColumnPublic,
    MakeDroppedColumnDeleteOnly, MakeDroppedColumnWriteOnly, RemoveColumnDefaultExpression,
};
pub use constraint::{DropForeignKeyRef, RemoveCheckConstraint};
pub use dependency::{RemoveRelationDependedOnBy, RemoveSequenceOwnedBy, RemoveTypeBackRef};
pub use descriptor::{DrainDescriptorName, MarkDescriptorAsDropped, MarkDescriptorAsDroppedSynthetically};
pub use index::{
    BackfillIndex, MakeAddedIndexDeleteOnly, MakeAddedIndexWriteOnly, MakeAddedPrimaryIndexPublic,
    MakeAddedSecondaryIndexPublic, MakeDroppedIndexDeleteOnly, MakeDroppedNonPrimaryIndexWriteOnly,
    MakeDroppedPrimaryIndexWriteOnly, MakeIndexAbsent, ValidateUniqueIndex,
};
pub use op::{Op, OpType};
