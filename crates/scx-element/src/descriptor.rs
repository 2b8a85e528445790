//! Whole-descriptor elements: tables, views, sequences, and user-defined
//! types.

use serde::{Deserialize, Serialize};

use scx_core::DescId;

/// A table descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    pub table_id: DescId,
    pub name: String,
}

/// A view descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct View {
    pub view_id: DescId,
    pub name: String,
    /// Whether the view is materialized.
    pub materialized: bool,
}

/// A sequence descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub sequence_id: DescId,
    pub name: String,
}

/// A user-defined type descriptor (enum types and their array types).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub type_id: DescId,
    pub name: String,
}
