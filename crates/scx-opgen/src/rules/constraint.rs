//! Constraint rules. Dropping a foreign key removes the reference from
//! both tables: the outbound half lives on the origin table, the inbound
//! half on the referenced one. Each half is its own element so either
//! table can be dropped on its own.

use scx_core::{Phase, Status};
use scx_element::{CheckConstraint, ForeignKey, ForeignKeyBackReference};
use scx_op::{DropForeignKeyRef, RemoveCheckConstraint};

use crate::builder::{add, drop, to};
use crate::emit::not_implemented;
use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

pub(super) fn register(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    builder.register::<ForeignKey>([
        add([to(Status::Public).emit(|this: &ForeignKey| not_implemented(this))]),
        drop([to(Status::Absent)
            .min_phase(Phase::PreCommit)
            .revertible(false)
            .emit(|this: &ForeignKey| DropForeignKeyRef {
                table_id: this.origin_id,
                name: this.name.clone(),
                outbound: true,
            })]),
    ])?;

    builder.register::<ForeignKeyBackReference>([
        add([to(Status::Public).emit(|this: &ForeignKeyBackReference| not_implemented(this))]),
        drop([to(Status::Absent)
            .min_phase(Phase::PreCommit)
            .revertible(false)
            .emit(|this: &ForeignKeyBackReference| DropForeignKeyRef {
                table_id: this.origin_id,
                name: this.name.clone(),
                outbound: false,
            })]),
    ])?;

    builder.register::<CheckConstraint>([
        add([to(Status::Public).emit(|this: &CheckConstraint| not_implemented(this))]),
        drop([to(Status::Absent)
            .min_phase(Phase::PreCommit)
            .emit(|this: &CheckConstraint| RemoveCheckConstraint {
                table_id: this.table_id,
                constraint_id: this.constraint_id,
                name: this.name.clone(),
            })]),
    ])
}
