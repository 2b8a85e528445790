//! Tables, views, sequences, and types share one drop shape:
//!
//! ```text
//! PUBLIC ──[Statement]──▶ TXN_DROPPED ──[PreCommit, no return]──▶ DROPPED ──[PostCommit]──▶ ABSENT
//! ```
//!
//! Creating descriptors is not supported yet.

use scx_core::{DescId, Phase, Status};
use scx_element::{ElementType, Sequence, Table, Type, View};
use scx_op::{DrainDescriptorName, MarkDescriptorAsDropped, MarkDescriptorAsDroppedSynthetically};

use crate::builder::{add, drop, to, SequenceSpec};
use crate::emit::not_implemented;
use crate::error::RegistrationError;
use crate::registry::OpRegistryBuilder;

pub(super) fn register(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
    register_descriptor::<Table>(builder, |this| this.table_id)?;
    register_descriptor::<View>(builder, |this| this.view_id)?;
    register_descriptor::<Sequence>(builder, |this| this.sequence_id)?;
    register_descriptor::<Type>(builder, |this| this.type_id)?;
    Ok(())
}

fn register_descriptor<E: ElementType>(
    builder: &mut OpRegistryBuilder,
    id: fn(&E) -> DescId,
) -> Result<(), RegistrationError> {
    builder.register::<E>([
        add([to(Status::Public).emit(|this: &E| not_implemented(this))]),
        drop_descriptor(id),
    ])
}

fn drop_descriptor<E: ElementType>(id: fn(&E) -> DescId) -> SequenceSpec<E> {
    drop([
        to(Status::TxnDropped).emit(move |this: &E| MarkDescriptorAsDroppedSynthetically {
            desc_id: id(this),
        }),
        to(Status::Dropped)
            .min_phase(Phase::PreCommit)
            .revertible(false)
            .emit(move |this: &E| MarkDescriptorAsDropped { desc_id: id(this) }),
        to(Status::Absent)
            .min_phase(Phase::PostCommit)
            .emit(move |this: &E| DrainDescriptorName { desc_id: id(this) }),
    ])
}
