//! Index elements.
//!
//! Primary and secondary indexes share a shape but follow different
//! rules: a primary index swap makes the new index the table's primary
//! key, while a secondary index only becomes readable.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, DescId, IndexId};

/// The primary index of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimaryIndex {
    pub table_id: DescId,
    pub index_id: IndexId,
    pub name: String,
    pub key_column_ids: Vec<ColumnId>,
    pub storing_column_ids: Vec<ColumnId>,
}

/// A secondary index of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecondaryIndex {
    pub table_id: DescId,
    pub index_id: IndexId,
    pub name: String,
    pub unique: bool,
    pub key_column_ids: Vec<ColumnId>,
    pub storing_column_ids: Vec<ColumnId>,
}
