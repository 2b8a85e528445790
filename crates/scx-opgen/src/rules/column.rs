use scx_core::{Phase, Status};
use scx_element::{Column, DefaultExpression};
use scx_op::{
    MakeAddedColumnDeleteOnly, MakeAddedColumnWriteOnly, MakeColumnAbsent, MakeColumnPublic,
    MakeDroppedColumnDeleteOnly, MakeDroppedColumnWriteOnly, RemoveColumnDefaultExpression,
};

use crate::builder::{add, drop, to};
use crate::emit::not_implemented;
use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

pub(super) fn register(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    builder.register::<Column>([
        add([
            to(Status::DeleteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &Column| MakeAddedColumnDeleteOnly {
                    table_id: this.table_id,
                    column_id: this.column_id,
                    column_name: this.name.clone(),
                    type_name: this.type_name.clone(),
                    nullable: this.nullable,
                    family_id: this.family_id,
                    family_name: this.family_name.clone(),
                }),
            to(Status::WriteOnly)
                .min_phase(Phase::PostCommit)
                .emit(|this: &Column| MakeAddedColumnWriteOnly {
                    table_id: this.table_id,
                    column_id: this.column_id,
                }),
            to(Status::Public).emit(|this: &Column| MakeColumnPublic {
                table_id: this.table_id,
                column_id: this.column_id,
            }),
        ]),
        drop([
            to(Status::WriteOnly)
                .min_phase(Phase::PreCommit)
                .emit(|this: &Column| MakeDroppedColumnWriteOnly {
                    table_id: this.table_id,
                    column_id: this.column_id,
                }),
            // Once deletes stop maintaining the column its data is gone.
            to(Status::DeleteOnly)
                .min_phase(Phase::PostCommit)
                .revertible(false)
                .emit(|this: &Column| MakeDroppedColumnDeleteOnly {
                    table_id: this.table_id,
                    column_id: this.column_id,
                }),
            to(Status::Absent).emit(|this: &Column| MakeColumnAbsent {
                table_id: this.table_id,
                column_id: this.column_id,
            }),
        ]),
    ])?;

    builder.register::<DefaultExpression>([
        add([to(Status::Public).emit(|this: &DefaultExpression| not_implemented(this))]),
        drop([to(Status::Absent).emit(|this: &DefaultExpression| {
            RemoveColumnDefaultExpression {
                table_id: this.table_id,
                column_id: this.column_id,
            }
        })]),
    ])
}
