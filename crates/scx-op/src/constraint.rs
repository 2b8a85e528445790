//! Constraint mutations.

use serde::{Deserialize, Serialize};

use scx_core::{ConstraintId, DescId};

/// Drop one half of a foreign key from a table.
///
/// `outbound` selects the referencing half; otherwise the back-reference
/// stored on the referenced table is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropForeignKeyRef {
    pub table_id: DescId,
    pub name: String,
    pub outbound: bool,
}

/// Remove a `CHECK` constraint from its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCheckConstraint {
    pub table_id: DescId,
    pub constraint_id: ConstraintId,
    pub name: String,
}
