//! Sample elements shared by the integration tests.

#![allow(dead_code)]

use scx_core::{ColumnId, ConstraintId, DescId, FamilyId, IndexId};
use scx_element::{
    CheckConstraint, Column, DefaultExpression, Element, ElementKind, ForeignKey,
    ForeignKeyBackReference, PrimaryIndex, RelationDependedOnBy, SecondaryIndex, Sequence,
    SequenceOwnedBy, Table, Type, TypeReference, View,
};

pub const TABLE_ID: DescId = DescId::new(104);
pub const OTHER_TABLE_ID: DescId = DescId::new(105);
pub const SEQUENCE_ID: DescId = DescId::new(106);
pub const TYPE_ID: DescId = DescId::new(107);

/// Install a test subscriber so `RUST_LOG=debug` shows registry events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn foreign_key(origin: u32, name: &str) -> ForeignKey {
    ForeignKey {
        origin_id: DescId::new(origin),
        origin_columns: vec![ColumnId::new(2)],
        reference_id: OTHER_TABLE_ID,
        reference_columns: vec![ColumnId::new(1)],
        name: name.to_string(),
    }
}

/// One representative element of `kind`.
pub fn sample(kind: ElementKind) -> Element {
    match kind {
        ElementKind::Table => Table {
            table_id: TABLE_ID,
            name: "orders".to_string(),
        }
        .into(),
        ElementKind::View => View {
            view_id: DescId::new(108),
            name: "recent_orders".to_string(),
            materialized: false,
        }
        .into(),
        ElementKind::Sequence => Sequence {
            sequence_id: SEQUENCE_ID,
            name: "orders_id_seq".to_string(),
        }
        .into(),
        ElementKind::Type => Type {
            type_id: TYPE_ID,
            name: "order_status".to_string(),
        }
        .into(),
        ElementKind::Column => Column {
            table_id: TABLE_ID,
            column_id: ColumnId::new(3),
            name: "placed_at".to_string(),
            type_name: "TIMESTAMPTZ".to_string(),
            nullable: true,
            family_id: FamilyId::new(0),
            family_name: "primary".to_string(),
        }
        .into(),
        ElementKind::PrimaryIndex => PrimaryIndex {
            table_id: TABLE_ID,
            index_id: IndexId::new(1),
            name: "orders_pkey".to_string(),
            key_column_ids: vec![ColumnId::new(1)],
            storing_column_ids: vec![ColumnId::new(2), ColumnId::new(3)],
        }
        .into(),
        ElementKind::SecondaryIndex => SecondaryIndex {
            table_id: TABLE_ID,
            index_id: IndexId::new(2),
            name: "orders_placed_at_idx".to_string(),
            unique: false,
            key_column_ids: vec![ColumnId::new(3)],
            storing_column_ids: vec![],
        }
        .into(),
        ElementKind::ForeignKey => foreign_key(TABLE_ID.get(), "orders_customer_fk").into(),
        ElementKind::ForeignKeyBackReference => ForeignKeyBackReference {
            origin_id: OTHER_TABLE_ID,
            origin_columns: vec![ColumnId::new(1)],
            reference_id: TABLE_ID,
            reference_columns: vec![ColumnId::new(2)],
            name: "orders_customer_fk".to_string(),
        }
        .into(),
        ElementKind::CheckConstraint => CheckConstraint {
            table_id: TABLE_ID,
            constraint_id: ConstraintId::new(1),
            name: "check_qty".to_string(),
            expr: "qty > 0".to_string(),
            column_ids: vec![ColumnId::new(4)],
        }
        .into(),
        ElementKind::DefaultExpression => DefaultExpression {
            table_id: TABLE_ID,
            column_id: ColumnId::new(1),
            expr: "nextval(106)".to_string(),
            uses_sequence_ids: vec![SEQUENCE_ID],
        }
        .into(),
        ElementKind::SequenceOwnedBy => SequenceOwnedBy {
            sequence_id: SEQUENCE_ID,
            owner_table_id: TABLE_ID,
            owner_column_id: ColumnId::new(1),
        }
        .into(),
        ElementKind::TypeReference => TypeReference {
            descriptor_id: TABLE_ID,
            type_id: TYPE_ID,
        }
        .into(),
        ElementKind::RelationDependedOnBy => RelationDependedOnBy {
            table_id: TABLE_ID,
            dependent_id: DescId::new(108),
        }
        .into(),
    }
}
