//! Cross-descriptor references. These elements exist only to be cleaned
//! up when one side of the reference is dropped.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, DescId};

/// A sequence owned by a table column (`OWNED BY t.c`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceOwnedBy {
    pub sequence_id: DescId,
    pub owner_table_id: DescId,
    pub owner_column_id: ColumnId,
}

/// A descriptor's use of a user-defined type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeReference {
    /// The descriptor that uses the type.
    pub descriptor_id: DescId,
    pub type_id: DescId,
}

/// A relation that another relation (typically a view) depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationDependedOnBy {
    /// The relation being depended on.
    pub table_id: DescId,
    /// The dependent relation.
    pub dependent_id: DescId,
}
