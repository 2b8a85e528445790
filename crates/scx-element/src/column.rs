//! Column-level elements.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, DescId, FamilyId};

/// A column of a table, together with the family that stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub table_id: DescId,
    pub column_id: ColumnId,
    pub name: String,
    /// SQL type name, e.g. `INT8` or `STRING`.
    pub type_name: String,
    pub nullable: bool,
    pub family_id: FamilyId,
    pub family_name: String,
}

/// The `DEFAULT` expression attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultExpression {
    pub table_id: DescId,
    pub column_id: ColumnId,
    pub expr: String,
    /// Sequences referenced by the expression, e.g. via `nextval()`.
    pub uses_sequence_ids: Vec<DescId>,
}
