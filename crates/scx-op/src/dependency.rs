//! Cleanup of references between descriptors.

use serde::{Deserialize, Serialize};

use scx_core::DescId;

/// Clear the `OWNED BY` link of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveSequenceOwnedBy {
    pub sequence_id: DescId,
}

/// Remove a descriptor from a type's back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTypeBackRef {
    pub type_id: DescId,
    pub desc_id: DescId,
}

/// Remove a dependent relation from a relation's depended-on-by list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRelationDependedOnBy {
    pub table_id: DescId,
    pub dependent_id: DescId,
}
