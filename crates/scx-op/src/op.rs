//! # Operation Union
//!
//! `Op` is the closed set of operations an element rule may emit. Each
//! variant wraps a descriptor struct carrying every parameter the executor
//! needs; nothing is resolved later.
//!
//! Operations are classified by [`OpType`] so the executor can batch
//! descriptor mutations separately from backfills and validations.

use serde::{Deserialize, Serialize};

use crate::column::{
    MakeAddedColumnDeleteOnly, MakeAddedColumnWriteOnly, MakeColumnAbsent, MakeColumnPublic,
    MakeDroppedColumnDeleteOnly, MakeDroppedColumnWriteOnly, RemoveColumnDefaultExpression,
};
use crate::constraint::{DropForeignKeyRef, RemoveCheckConstraint};
use crate::dependency::{RemoveRelationDependedOnBy, RemoveSequenceOwnedBy, RemoveTypeBackRef};
use crate::descriptor::{DrainDescriptorName, MarkDescriptorAsDropped, MarkDescriptorAsDroppedSynthetically};
use crate::index::{
    BackfillIndex, MakeAddedIndexDeleteOnly, MakeAddedIndexWriteOnly, MakeAddedPrimaryIndexPublic,
    MakeAddedSecondaryIndexPublic, MakeDroppedIndexDeleteOnly, MakeDroppedNonPrimaryIndexWriteOnly,
    MakeDroppedPrimaryIndexWriteOnly, MakeIndexAbsent, ValidateUniqueIndex,
};

/// How the executor runs an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpType {
    /// A descriptor change applied in a transaction.
    Mutation,
    /// A bulk data pass over existing rows.
    Backfill,
    /// A read-only check over existing rows.
    Validation,
}

impl OpType {
    /// The canonical string name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Backfill => "backfill",
            Self::Validation => "validation",
        }
    }
}

impl std::fmt::Display for OpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! ops {
    ($($variant:ident => $op_type:ident;)+) => {
        /// An executable, fully-parameterized schema-change operation.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(tag = "op")]
        pub enum Op {
            $($variant($variant),)+
        }

        impl Op {
            /// The operation's name, e.g. `DropForeignKeyRef`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }

            /// How the executor runs this operation.
            pub fn op_type(&self) -> OpType {
                match self {
                    $(Self::$variant(_) => OpType::$op_type,)+
                }
            }
        }

        $(
            impl From<$variant> for Op {
                fn from(op: $variant) -> Self {
                    Op::$variant(op)
                }
            }
        )+
    };
}

ops! {
    MarkDescriptorAsDroppedSynthetically => Mutation;
    MarkDescriptorAsDropped => Mutation;
    DrainDescriptorName => Mutation;
    MakeAddedColumnDeleteOnly => Mutation;
    MakeAddedColumnWriteOnly => Mutation;
    MakeColumnPublic => Mutation;
    MakeDroppedColumnWriteOnly => Mutation;
    MakeDroppedColumnDeleteOnly => Mutation;
    MakeColumnAbsent => Mutation;
    RemoveColumnDefaultExpression => Mutation;
    MakeAddedIndexDeleteOnly => Mutation;
    MakeAddedIndexWriteOnly => Mutation;
    BackfillIndex => Backfill;
    ValidateUniqueIndex => Validation;
    MakeAddedPrimaryIndexPublic => Mutation;
    MakeAddedSecondaryIndexPublic => Mutation;
    MakeDroppedPrimaryIndexWriteOnly => Mutation;
    MakeDroppedNonPrimaryIndexWriteOnly => Mutation;
    MakeDroppedIndexDeleteOnly => Mutation;
    MakeIndexAbsent => Mutation;
    DropForeignKeyRef => Mutation;
    RemoveCheckConstraint => Mutation;
    RemoveSequenceOwnedBy => Mutation;
    RemoveTypeBackRef => Mutation;
    RemoveRelationDependedOnBy => Mutation;
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scx_core::{DescId, IndexId};

    #[test]
    fn test_op_name_and_type() {
        let op: Op = DropForeignKeyRef {
            table_id: DescId::new(7),
            name: "fk1".to_string(),
            outbound: true,
        }
        .into();
        assert_eq!(op.name(), "DropForeignKeyRef");
        assert_eq!(op.op_type(), OpType::Mutation);
        assert_eq!(op.to_string(), "DropForeignKeyRef");
    }

    #[test]
    fn test_backfill_and_validation_are_classified() {
        let backfill: Op = BackfillIndex {
            table_id: DescId::new(1),
            index_id: IndexId::new(2),
        }
        .into();
        let validate: Op = ValidateUniqueIndex {
            table_id: DescId::new(1),
            index_id: IndexId::new(2),
        }
        .into();
        assert_eq!(backfill.op_type(), OpType::Backfill);
        assert_eq!(validate.op_type(), OpType::Validation);
    }

    #[test]
    fn test_op_serialization_is_tagged() {
        let op: Op = DropForeignKeyRef {
            table_id: DescId::new(7),
            name: "fk1".to_string(),
            outbound: true,
        }
        .into();
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "op": "DropForeignKeyRef",
                "table_id": 7,
                "name": "fk1",
                "outbound": true,
            })
        );
        let parsed: Op = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, op);
    }
}
