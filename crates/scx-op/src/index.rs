//! Index mutations, backfill, and validation.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, DescId, IndexId};

/// Add a new index to its table in the DELETE_ONLY state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedIndexDeleteOnly {
    pub table_id: DescId,
    pub index_id: IndexId,
    pub index_name: String,
    pub unique: bool,
    pub primary: bool,
    pub key_column_ids: Vec<ColumnId>,
    pub storing_column_ids: Vec<ColumnId>,
}

/// Promote an added index to WRITE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedIndexWriteOnly {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Populate an index from existing table data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillIndex {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Check a backfilled unique index for duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateUniqueIndex {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Make an added index the table's primary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedPrimaryIndexPublic {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Make an added secondary index readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedSecondaryIndexPublic {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Demote the table's current primary index to WRITE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDroppedPrimaryIndexWriteOnly {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Demote a secondary index to WRITE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDroppedNonPrimaryIndexWriteOnly {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Demote a dropped index to DELETE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDroppedIndexDeleteOnly {
    pub table_id: DescId,
    pub index_id: IndexId,
}

/// Remove a dropped index from its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeIndexAbsent {
    pub table_id: DescId,
    pub index_id: IndexId,
}
