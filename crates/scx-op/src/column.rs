//! Column mutations.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, DescId, FamilyId};

/// Add a new column to its table in the DELETE_ONLY state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedColumnDeleteOnly {
    pub table_id: DescId,
    pub column_id: ColumnId,
    pub column_name: String,
    pub type_name: String,
    pub nullable: bool,
    pub family_id: FamilyId,
    pub family_name: String,
}

/// Promote an added column to WRITE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeAddedColumnWriteOnly {
    pub table_id: DescId,
    pub column_id: ColumnId,
}

/// Make an added column readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeColumnPublic {
    pub table_id: DescId,
    pub column_id: ColumnId,
}

/// Demote a dropped column to WRITE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDroppedColumnWriteOnly {
    pub table_id: DescId,
    pub column_id: ColumnId,
}

/// Demote a dropped column to DELETE_ONLY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDroppedColumnDeleteOnly {
    pub table_id: DescId,
    pub column_id: ColumnId,
}

/// Remove a dropped column from its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeColumnAbsent {
    pub table_id: DescId,
    pub column_id: ColumnId,
}

/// Remove the `DEFAULT` expression of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveColumnDefaultExpression {
    pub table_id: DescId,
    pub column_id: ColumnId,
}
