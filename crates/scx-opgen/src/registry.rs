//! # Rule Registry
//!
//! Maps each element kind to its `add` and `drop` rule sequences.
//!
//! ## Lifecycle
//!
//! 1. **Build.** An [`OpRegistryBuilder`] accepts one [`register`] call per
//!    element kind, sequentially, validating every sequence as it goes.
//! 2. **Freeze.** [`OpRegistryBuilder::build`] yields an immutable
//!    [`OpRegistry`]. No method mutates it afterwards, so it can be read
//!    from any number of planning threads without locking.
//!
//! The process-wide instance is [`registry()`], built on first access from
//! [`crate::rules::register_all`]. A registration error there is a
//! programming defect and aborts with a `BUG:` panic.
//!
//! [`register`]: OpRegistryBuilder::register

use std::collections::BTreeMap;
use std::sync::OnceLock;

use scx_core::{Direction, Status};
use scx_element::{ElementKind, ElementType};

use crate::builder::SequenceSpec;
use crate::error::{LookupError, RegistrationError};
use crate::sequence::RuleSequence;

/// The registered sequences of one element kind.
#[derive(Debug, Clone)]
pub struct ElementRules {
    kind: ElementKind,
    add: Option<RuleSequence>,
    drop: Option<RuleSequence>,
}

impl ElementRules {
    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The sequence for `direction`, if declared.
    pub fn sequence(&self, direction: Direction) -> Option<&RuleSequence> {
        match direction {
            Direction::Add => self.add.as_ref(),
            Direction::Drop => self.drop.as_ref(),
        }
    }

    /// Every declared sequence, add first.
    pub fn sequences(&self) -> impl Iterator<Item = &RuleSequence> {
        self.add.iter().chain(self.drop.iter())
    }
}

/// Collects registrations before the registry is frozen.
#[derive(Debug, Default)]
pub struct OpRegistryBuilder {
    rules: BTreeMap<ElementKind, ElementRules>,
    order: Vec<ElementKind>,
}

impl OpRegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule sequences of element type `E`.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::DuplicateElement`] if `E` is already registered.
    /// - [`RegistrationError::NoSequences`] if no sequence is supplied.
    /// - [`RegistrationError::DuplicateDirection`] if a direction repeats.
    /// - Any structural error raised while sealing a sequence.
    ///
    /// Nothing is recorded when an error is returned.
    pub fn register<E: ElementType>(
        &mut self,
        sequences: impl IntoIterator<Item = SequenceSpec<E>>,
    ) -> Result<(), RegistrationError> {
        let kind = E::KIND;
        if self.rules.contains_key(&kind) {
            return Err(RegistrationError::DuplicateElement { kind });
        }

        let mut rules = ElementRules {
            kind,
            add: None,
            drop: None,
        };
        for spec in sequences {
            let direction = spec.direction();
            let slot = match direction {
                Direction::Add => &mut rules.add,
                Direction::Drop => &mut rules.drop,
            };
            if slot.is_some() {
                return Err(RegistrationError::DuplicateDirection { kind, direction });
            }
            let sequence = spec.build()?;
            tracing::debug!(
                element = %kind,
                direction = %direction,
                edges = sequence.edges().len(),
                "registered rule sequence"
            );
            *slot = Some(sequence);
        }
        if rules.add.is_none() && rules.drop.is_none() {
            return Err(RegistrationError::NoSequences { kind });
        }
        if let (Some(add), Some(drop)) = (&rules.add, &rules.drop) {
            check_opposite_progression(kind, add, drop)?;
        }

        self.rules.insert(kind, rules);
        self.order.push(kind);
        Ok(())
    }

    /// Freeze the registrations.
    pub fn build(self) -> OpRegistry {
        OpRegistry {
            rules: self.rules,
            order: self.order,
        }
    }
}

/// Statuses shared by the add and drop sequences must be visited in
/// opposite orders, so dropping a half-added element retraces its steps.
fn check_opposite_progression(
    kind: ElementKind,
    add: &RuleSequence,
    drop: &RuleSequence,
) -> Result<(), RegistrationError> {
    let drop_position = |status: Status| drop.edges().iter().position(|e| e.to() == status);
    let shared: Vec<(Status, usize)> = add
        .edges()
        .iter()
        .map(|e| e.to())
        .filter(|status| *status != add.terminal())
        .filter_map(|status| drop_position(status).map(|pos| (status, pos)))
        .collect();

    for (i, &(first, first_pos)) in shared.iter().enumerate() {
        for &(second, second_pos) in &shared[i + 1..] {
            if first_pos < second_pos {
                return Err(RegistrationError::InconsistentProgression {
                    kind,
                    first,
                    second,
                });
            }
        }
    }
    Ok(())
}

/// Immutable table of element rules.
#[derive(Debug, Clone)]
pub struct OpRegistry {
    rules: BTreeMap<ElementKind, ElementRules>,
    order: Vec<ElementKind>,
}

impl OpRegistry {
    /// Start an empty registry.
    pub fn builder() -> OpRegistryBuilder {
        OpRegistryBuilder::new()
    }

    /// A registry holding the built-in rules of every element kind.
    ///
    /// # Errors
    ///
    /// The first [`RegistrationError`] raised by a built-in rule.
    pub fn standard() -> Result<Self, RegistrationError> {
        let mut builder = Self::builder();
        crate::rules::register_all(&mut builder)?;
        let registry = builder.build();
        tracing::info!(
            elements = registry.len(),
            sequences = registry.sequences().count(),
            "built element rule registry"
        );
        Ok(registry)
    }

    /// The rule sequence of `kind` in `direction`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotRegistered`] if the kind has no sequence in that
    /// direction. Never returns an empty sequence.
    pub fn lookup(
        &self,
        kind: ElementKind,
        direction: Direction,
    ) -> Result<&RuleSequence, LookupError> {
        self.rules
            .get(&kind)
            .and_then(|rules| rules.sequence(direction))
            .ok_or(LookupError::NotRegistered { kind, direction })
    }

    /// The registered rules of `kind`, if any.
    pub fn rules(&self, kind: ElementKind) -> Option<&ElementRules> {
        self.rules.get(&kind)
    }

    /// Registered element kinds, in registration order.
    pub fn kinds(&self) -> &[ElementKind] {
        &self.order
    }

    /// Every registered sequence, in registration order.
    pub fn sequences(&self) -> impl Iterator<Item = &RuleSequence> {
        self.order
            .iter()
            .filter_map(|kind| self.rules.get(kind))
            .flat_map(ElementRules::sequences)
    }

    /// Number of registered element kinds.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

static REGISTRY: OnceLock<OpRegistry> = OnceLock::new();

/// The process-wide registry of built-in rules.
///
/// Built once, on first access; read-only afterwards.
///
/// # Panics
///
/// If a built-in rule is malformed. That is a defect in this crate, caught
/// by its tests, never a runtime condition.
pub fn registry() -> &'static OpRegistry {
    REGISTRY.get_or_init(|| match OpRegistry::standard() {
        Ok(registry) => registry,
        Err(err) => panic!("BUG: built-in element rule registration failed: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{add, drop, to};
    use crate::emit::not_implemented;
    use scx_core::{DescId, Phase, Status};
    use scx_element::{ForeignKey, Table};
    use scx_op::DropForeignKeyRef;

    fn fk_rules(builder: &mut OpRegistryBuilder) -> Result<(), RegistrationError> {
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
        ])
    }

    #[test]
    fn test_register_and_lookup() {
        let mut builder = OpRegistry::builder();
        fk_rules(&mut builder).unwrap();
        let registry = builder.build();

        let seq = registry.lookup(ElementKind::ForeignKey, Direction::Drop).unwrap();
        assert_eq!(seq.edges().len(), 1);
        assert_eq!(seq.edges()[0].min_phase(), Phase::PreCommit);
        assert!(!seq.edges()[0].revertible());
        assert_eq!(registry.kinds(), &[ElementKind::ForeignKey]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut builder = OpRegistry::builder();
        fk_rules(&mut builder).unwrap();
        let err = fk_rules(&mut builder).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateElement {
                kind: ElementKind::ForeignKey
            }
        );
    }

    #[test]
    fn test_duplicate_direction_rejected() {
        let mut builder = OpRegistry::builder();
        let err = builder
            .register::<Table>([
                drop([to(Status::Absent).emit(|this: &Table| not_implemented(this))]),
                drop([to(Status::Absent).emit(|this: &Table| not_implemented(this))]),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateDirection {
                kind: ElementKind::Table,
                direction: Direction::Drop,
            }
        );
        // A failed registration leaves no trace.
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_registration_without_sequences_rejected() {
        let mut builder = OpRegistry::builder();
        let err = builder
            .register::<Table>(Vec::<SequenceSpec<Table>>::new())
            .unwrap_err();
        assert_eq!(err, RegistrationError::NoSequences { kind: ElementKind::Table });
    }

    #[test]
    fn test_malformed_sequence_fails_registration() {
        let mut builder = OpRegistry::builder();
        let err = builder
            .register::<Table>([drop([to(Status::Dropped).emit(|this: &Table| {
                scx_op::MarkDescriptorAsDropped {
                    desc_id: this.table_id,
                }
            })])])
            .unwrap_err();
        assert!(matches!(err, RegistrationError::WrongTerminal { .. }));
        assert!(builder.build().rules(ElementKind::Table).is_none());
    }

    // ── Progression order ────────────────────────────────────────────

    #[test]
    fn test_drop_retracing_add_is_accepted() {
        let mut builder = OpRegistry::builder();
        builder
            .register::<Table>([
                add([
                    to(Status::DeleteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::WriteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::Public).emit(|this: &Table| not_implemented(this)),
                ]),
                drop([
                    to(Status::WriteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::DeleteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::Absent).emit(|this: &Table| not_implemented(this)),
                ]),
            ])
            .unwrap();
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn test_drop_in_add_order_rejected() {
        let mut builder = OpRegistry::builder();
        let err = builder
            .register::<Table>([
                add([
                    to(Status::DeleteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::WriteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::Public).emit(|this: &Table| not_implemented(this)),
                ]),
                drop([
                    to(Status::DeleteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::WriteOnly).emit(|this: &Table| not_implemented(this)),
                    to(Status::Absent).emit(|this: &Table| not_implemented(this)),
                ]),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::InconsistentProgression {
                kind: ElementKind::Table,
                first: Status::DeleteOnly,
                second: Status::WriteOnly,
            }
        );
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_lookup_unregistered_kind() {
        let registry = OpRegistry::builder().build();
        let err = registry
            .lookup(ElementKind::Column, Direction::Add)
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::NotRegistered {
                kind: ElementKind::Column,
                direction: Direction::Add,
            }
        );
    }

    #[test]
    fn test_lookup_unregistered_direction() {
        let mut builder = OpRegistry::builder();
        builder
            .register::<Table>([drop([to(Status::Absent).emit(|this: &Table| {
                scx_op::DrainDescriptorName {
                    desc_id: this.table_id,
                }
            })])])
            .unwrap();
        let registry = builder.build();
        assert!(registry.lookup(ElementKind::Table, Direction::Drop).is_ok());
        assert!(matches!(
            registry.lookup(ElementKind::Table, Direction::Add),
            Err(LookupError::NotRegistered { .. })
        ));
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = registry();
        let b = registry();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_registry_is_readable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let fk = ForeignKey {
                        origin_id: DescId::new(i),
                        origin_columns: vec![],
                        reference_id: DescId::new(100),
                        reference_columns: vec![],
                        name: format!("fk{i}"),
                    };
                    let seq = registry()
                        .lookup(ElementKind::ForeignKey, Direction::Drop)
                        .unwrap();
                    seq.edges()[0].emit(&fk.into()).unwrap()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let op = handle.join().unwrap();
            assert_eq!(
                op,
                scx_op::Op::DropForeignKeyRef(DropForeignKeyRef {
                    table_id: DescId::new(i as u32),
                    name: format!("fk{i}"),
                    outbound: true,
                })
            );
        }
    }
}
