//! Back-references between descriptors. None of these can be created
//! directly; they appear as a side effect of creating the elements that
//! own them, and are removed in a single statement-phase step.

use scx_core::Status;
use scx_element::{RelationDependedOnBy, SequenceOwnedBy, TypeReference};
use scx_op::{RemoveRelationDependedOnBy, RemoveSequenceOwnedBy, RemoveTypeBackRef};

use crate::builder::{add, drop, to};
use crate::emit::not_implemented;
use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

pub(super) fn register(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    builder.register::<SequenceOwnedBy>([
        add([to(Status::Public).emit(|this: &SequenceOwnedBy| not_implemented(this))]),
        drop([
            to(Status::Absent).emit(|this: &SequenceOwnedBy| RemoveSequenceOwnedBy {
                sequence_id: this.sequence_id,
            }),
        ]),
    ])?;

    builder.register::<TypeReference>([
        add([to(Status::Public).emit(|this: &TypeReference| not_implemented(this))]),
        drop([to(Status::Absent).emit(|this: &TypeReference| RemoveTypeBackRef {
            type_id: this.type_id,
            desc_id: this.descriptor_id,
        })]),
    ])?;

    builder.register::<RelationDependedOnBy>([
        add([to(Status::Public).emit(|this: &RelationDependedOnBy| not_implemented(this))]),
        drop([
            to(Status::Absent).emit(|this: &RelationDependedOnBy| RemoveRelationDependedOnBy {
                table_id: this.table_id,
                dependent_id: this.dependent_id,
            }),
        ]),
    ])
}
