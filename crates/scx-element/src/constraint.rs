//! Constraint elements.
//!
//! A foreign key is tracked twice: the outbound reference on the
//! referencing (origin) table and the back-reference on the referenced
//! table. Each half is dropped by its own operation.

use serde::{Deserialize, Serialize};

use scx_core::{ColumnId, ConstraintId, DescId};

/// The outbound half of a foreign key, owned by the referencing table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKey {
    /// The referencing table.
    pub origin_id: DescId,
    pub origin_columns: Vec<ColumnId>,
    /// The referenced table.
    pub reference_id: DescId,
    pub reference_columns: Vec<ColumnId>,
    pub name: String,
}

/// The inbound half of a foreign key, owned by the referenced table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKeyBackReference {
    /// The referenced table, which stores the back-reference.
    pub origin_id: DescId,
    pub origin_columns: Vec<ColumnId>,
    /// The referencing table.
    pub reference_id: DescId,
    pub reference_columns: Vec<ColumnId>,
    pub name: String,
}

/// A `CHECK` constraint on a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckConstraint {
    pub table_id: DescId,
    pub constraint_id: ConstraintId,
    pub name: String,
    pub expr: String,
    pub column_ids: Vec<ColumnId>,
}
