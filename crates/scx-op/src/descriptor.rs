//! Operations on whole descriptors.

use serde::{Deserialize, Serialize};

use scx_core::DescId;

/// Mark a descriptor dropped in the issuing transaction's view only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDescriptorAsDroppedSynthetically {
    pub desc_id: DescId,
}

/// Persist the dropped state of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDescriptorAsDropped {
    pub desc_id: DescId,
}

/// Remove a dropped descriptor's namespace entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainDescriptorName {
    pub desc_id: DescId,
}
