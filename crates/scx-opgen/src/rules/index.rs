//! Index rules. Both index kinds are added through the same backfill
//! pipeline and differ only in the operation that makes them public and
//! the one that first demotes them on drop.
//!
//! ```text
//! add:  ABSENT ─▶ DELETE_ONLY ─▶ WRITE_ONLY ─▶ BACKFILLED ─▶ VALIDATED ─▶ PUBLIC
//! drop: PUBLIC ─▶ WRITE_ONLY ─▶ DELETE_ONLY ─▶ ABSENT
//! ```

use scx_core::{Phase, Status};
use scx_element::{PrimaryIndex, SecondaryIndex};
use scx_op::{
    BackfillIndex, MakeAddedIndexDeleteOnly, MakeAddedIndexWriteOnly, MakeAddedPrimaryIndexPublic,
    MakeAddedSecondaryIndexPublic, MakeDroppedIndexDeleteOnly, MakeDroppedNonPrimaryIndexWriteOnly,
    MakeDroppedPrimaryIndexWriteOnly, MakeIndexAbsent, ValidateUniqueIndex,
};

use crate::builder::{add, drop, to};
use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

pub(super) fn register(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    builder.register::<PrimaryIndex>([
        add([
            to(Status::DeleteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &PrimaryIndex| MakeAddedIndexDeleteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                    index_name: this.name.clone(),
                    unique: true,
                    primary: true,
                    key_column_ids: this.key_column_ids.clone(),
                    storing_column_ids: this.storing_column_ids.clone(),
                }),
            to(Status::WriteOnly)
                .min_phase(Phase::PostCommit)
                .emit(|this: &PrimaryIndex| MakeAddedIndexWriteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::Backfilled).emit(|this: &PrimaryIndex| BackfillIndex {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
            to(Status::Validated).emit(|this: &PrimaryIndex| ValidateUniqueIndex {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
            to(Status::Public).emit(|this: &PrimaryIndex| MakeAddedPrimaryIndexPublic {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
        ]),
        drop([
            to(Status::WriteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &PrimaryIndex| MakeDroppedPrimaryIndexWriteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::DeleteOnly)
                .min_phase(Phase::PostCommit)
                .revertible(false)
                .emit(|this: &PrimaryIndex| MakeDroppedIndexDeleteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::Absent).emit(|this: &PrimaryIndex| MakeIndexAbsent {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
        ]),
    ])?;

    builder.register::<SecondaryIndex>([
        add([
            to(Status::DeleteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &SecondaryIndex| MakeAddedIndexDeleteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                    index_name: this.name.clone(),
                    unique: this.unique,
                    primary: false,
                    key_column_ids: this.key_column_ids.clone(),
                    storing_column_ids: this.storing_column_ids.clone(),
                }),
            to(Status::WriteOnly)
                .min_phase(Phase::PostCommit)
                .emit(|this: &SecondaryIndex| MakeAddedIndexWriteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::Backfilled).emit(|this: &SecondaryIndex| BackfillIndex {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
            // Non-unique indexes pass validation trivially; the executor
            // skips the scan for them.
            to(Status::Validated).emit(|this: &SecondaryIndex| ValidateUniqueIndex {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
            to(Status::Public).emit(|this: &SecondaryIndex| MakeAddedSecondaryIndexPublic {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
        ]),
        drop([
            to(Status::WriteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &SecondaryIndex| MakeDroppedNonPrimaryIndexWriteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::DeleteOnly)
                .min_phase(Phase::PostCommit)
                .revertible(false)
                .emit(|this: &SecondaryIndex| MakeDroppedIndexDeleteOnly {
                    table_id: this.table_id,
                    index_id: this.index_id,
                }),
            to(Status::Absent).emit(|this: &SecondaryIndex| MakeIndexAbsent {
                table_id: this.table_id,
                index_id: this.index_id,
            }),
        ]),
    ])
}
