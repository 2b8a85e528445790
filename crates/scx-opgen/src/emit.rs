//! # Operation Emission
//!
//! Applies an edge's emission function to an element. Emission is pure:
//! it reads the element's fields and builds an operation descriptor.
//!
//! A rule author returns either an operation or [`not_implemented`]. The
//! placeholder never reaches the executor: [`emit`] turns it into
//! [`EmitError::NotImplemented`] so the whole schema change fails instead
//! of running a partial transition.

use scx_element::{Element, ElementKind, ElementType};
use scx_op::Op;

use crate::error::EmitError;
use crate::sequence::Edge;

/// What an edge's emission function produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// A concrete operation.
    Op(Op),
    /// The edge is declared but not backed by real logic yet.
    NotImplemented {
        /// The element kind the placeholder was emitted for.
        kind: ElementKind,
    },
}

impl Emission {
    /// Whether this is the placeholder result.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

impl From<Op> for Emission {
    fn from(op: Op) -> Self {
        Emission::Op(op)
    }
}

// Rules return bare descriptors. A blanket `impl<T: Into<Op>>` would
// overlap the reflexive `From<Emission> for Emission`.
macro_rules! emission_from_ops {
    ($($op:ident),+ $(,)?) => {
        $(
            impl From<scx_op::$op> for Emission {
                fn from(op: scx_op::$op) -> Self {
                    Emission::Op(op.into())
                }
            }
        )+
    };
}

emission_from_ops!(
    MarkDescriptorAsDroppedSynthetically,
    MarkDescriptorAsDropped,
    DrainDescriptorName,
    MakeAddedColumnDeleteOnly,
    MakeAddedColumnWriteOnly,
    MakeColumnPublic,
    MakeDroppedColumnWriteOnly,
    MakeDroppedColumnDeleteOnly,
    MakeColumnAbsent,
    RemoveColumnDefaultExpression,
    MakeAddedIndexDeleteOnly,
    MakeAddedIndexWriteOnly,
    BackfillIndex,
    ValidateUniqueIndex,
    MakeAddedPrimaryIndexPublic,
    MakeAddedSecondaryIndexPublic,
    MakeDroppedPrimaryIndexWriteOnly,
    MakeDroppedNonPrimaryIndexWriteOnly,
    MakeDroppedIndexDeleteOnly,
    MakeIndexAbsent,
    DropForeignKeyRef,
    RemoveCheckConstraint,
    RemoveSequenceOwnedBy,
    RemoveTypeBackRef,
    RemoveRelationDependedOnBy,
);

/// Placeholder emission for an edge whose operation does not exist yet.
pub fn not_implemented<E: ElementType>(_this: &E) -> Emission {
    Emission::NotImplemented { kind: E::KIND }
}

/// Produce the operation for `edge` applied to `element`.
///
/// # Errors
///
/// - [`EmitError::NotImplemented`] if the edge's emission is a placeholder.
/// - [`EmitError::ElementMismatch`] if `element` is not of the kind the
///   edge was registered for.
pub fn emit(element: &Element, edge: &Edge) -> Result<Op, EmitError> {
    match edge.apply(element) {
        Some(Emission::Op(op)) => Ok(op),
        Some(Emission::NotImplemented { kind }) => {
            tracing::warn!(
                element = %kind,
                direction = %edge.direction(),
                to = %edge.to(),
                "emission reached a placeholder edge"
            );
            Err(EmitError::NotImplemented {
                kind,
                direction: edge.direction(),
                to: edge.to(),
            })
        }
        None => Err(EmitError::ElementMismatch {
            expected: edge.kind(),
            found: element.kind(),
        }),
    }
}
