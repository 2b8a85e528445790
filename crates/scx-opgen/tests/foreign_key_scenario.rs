//! # Foreign Key Scenarios
//!
//! End-to-end behavior of the foreign key rules through the global
//! registry: dropping emits a single pre-commit, non-revertible removal of
//! the outbound reference; adding is declared but not implemented.

mod common;

use scx_core::{DescId, Direction, Phase, Status};
use scx_element::{ElementKind, ElementState};
use scx_op::{DropForeignKeyRef, Op};
use scx_opgen::{registry, EmitError, OpGenError, PlanParams};

#[test]
fn test_drop_foreign_key_emits_outbound_ref_removal() {
    common::init_tracing();
    let seq = registry()
        .lookup(ElementKind::ForeignKey, Direction::Drop)
        .unwrap();
    assert_eq!(seq.edges().len(), 1);

    let edge = &seq.edges()[0];
    assert_eq!(edge.to(), Status::Absent);
    assert_eq!(edge.min_phase(), Phase::PreCommit);
    assert!(!edge.revertible());

    let op = edge.emit(&common::foreign_key(7, "fk1").into()).unwrap();
    assert_eq!(
        op,
        Op::DropForeignKeyRef(DropForeignKeyRef {
            table_id: DescId::new(7),
            name: "fk1".to_string(),
            outbound: true,
        })
    );
}

#[test]
fn test_drop_back_reference_emits_inbound_ref_removal() {
    let state = ElementState::dropping(common::sample(ElementKind::ForeignKeyBackReference));
    let transition = registry().transition(&state).unwrap();
    assert_eq!(transition.ops.len(), 1);
    match &transition.ops[0].op {
        Op::DropForeignKeyRef(op) => {
            assert_eq!(op.table_id, common::OTHER_TABLE_ID);
            assert!(!op.outbound);
        }
        other => panic!("unexpected op {other}"),
    }
}

#[test]
fn test_add_foreign_key_is_not_implemented() {
    let seq = registry()
        .lookup(ElementKind::ForeignKey, Direction::Add)
        .unwrap();
    assert_eq!(seq.edges().len(), 1);
    assert_eq!(seq.edges()[0].to(), Status::Public);

    let err = seq.edges()[0]
        .emit(&common::foreign_key(7, "fk1").into())
        .unwrap_err();
    assert_eq!(
        err,
        EmitError::NotImplemented {
            kind: ElementKind::ForeignKey,
            direction: Direction::Add,
            to: Status::Public,
        }
    );
    assert!(err.to_string().contains("not implemented"));
}

#[test]
fn test_add_foreign_key_transition_fails_as_a_whole() {
    let err = registry()
        .transition(&ElementState::adding(common::foreign_key(7, "fk1")))
        .unwrap_err();
    assert!(err.is_not_implemented());
    assert!(matches!(err, OpGenError::Emit(EmitError::NotImplemented { .. })));
}

#[test]
fn test_drop_foreign_key_waits_for_pre_commit() {
    let transition = registry()
        .transition(&ElementState::dropping(common::foreign_key(7, "fk1")))
        .unwrap();
    assert!(!transition.is_revertible());
    assert!(transition
        .runnable_in(&PlanParams::for_phase(Phase::Statement))
        .is_empty());
    assert_eq!(
        transition
            .runnable_in(&PlanParams::for_phase(Phase::PreCommit))
            .len(),
        1
    );
}

#[test]
fn test_dropping_table_with_foreign_key_plans_both_halves() {
    let plan = registry()
        .plan(&[
            ElementState::dropping(common::sample(ElementKind::Table)),
            ElementState::dropping(common::sample(ElementKind::ForeignKey)),
            ElementState::dropping(common::sample(ElementKind::ForeignKeyBackReference)),
        ])
        .unwrap();
    assert_eq!(plan.len(), 5);
    let pre_commit: Vec<_> = plan.ops_in(Phase::PreCommit).map(|op| op.op.name()).collect();
    assert_eq!(
        pre_commit,
        vec!["MarkDescriptorAsDropped", "DropForeignKeyRef", "DropForeignKeyRef"]
    );
}
