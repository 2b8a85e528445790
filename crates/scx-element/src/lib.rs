//! # scx-element: Schema Elements
//!
//! The typed units of schema a declarative schema change moves between
//! statuses: descriptors, columns, indexes, constraints, and references
//! between descriptors.
//!
//! Elements carry identity only (owning descriptor ids and names). Their
//! status is tracked alongside them in [`ElementState`], owned by the
//! schema-change job.

pub mod column;
pub mod constraint;
pub mod dependency;
pub mod descriptor;
pub mod element;
pub mod index;

pub use column::{Column, DefaultExpression};
pub use constraint::{CheckConstraint, ForeignKey, ForeignKeyBackReference};
pub use dependency::{RelationDependedOnBy, SequenceOwnedBy, TypeReference};
pub use descriptor::{Sequence, Table, Type, View};
pub use element::{Element, ElementKind, ElementState, ElementType};
pub use index::{PrimaryIndex, SecondaryIndex};
