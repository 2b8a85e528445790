//! # Descriptor Identity Newtypes
//!
//! Newtype wrappers for the numeric identifiers that locate a schema
//! element. A `ColumnId` cannot be passed where an `IndexId` is expected,
//! even though both are `u32` on the wire.

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw identifier.
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of a descriptor (table, view, sequence, type, schema, database).
    DescId,
    "desc"
);

id_newtype!(
    /// Identifier of a column, unique within its table.
    ColumnId,
    "column"
);

id_newtype!(
    /// Identifier of an index, unique within its table.
    IndexId,
    "index"
);

id_newtype!(
    /// Identifier of a column family, unique within its table.
    FamilyId,
    "family"
);

id_newtype!(
    /// Identifier of a constraint, unique within its table.
    ConstraintId,
    "constraint"
);
