//! # scx-opgen: Operation Generation
//!
//! Declares, for every schema element kind, the state machine its status
//! follows when the element is added or dropped, and turns a walk along
//! that state machine into executable operations.
//!
//! ## Pieces
//!
//! - [`builder`]: the `add([...])` / `drop([...])` / `to(status)` DSL rule
//!   authors write.
//! - [`RuleSequence`] / [`Edge`]: sealed, validated state machines.
//! - [`OpRegistry`]: element kind to sequences, frozen after construction.
//!   [`registry()`] is the process-wide instance holding the built-in
//!   rules from [`rules`].
//! - [`emit()`]: applies an edge to an element.
//! - [`OpRegistry::transition`] / [`OpRegistry::plan`]: walk elements from
//!   their current to their target status.
//!
//! ## Crate Policy
//!
//! - Registration errors are programming defects. The built-in registry
//!   panics with a `BUG:` message if its rules are malformed; custom
//!   registries get the [`RegistrationError`] back.
//! - Emission is pure. A placeholder edge surfaces as
//!   [`EmitError::NotImplemented`] and fails the whole transition.
//! - Element dispatch is typed. Rule closures receive the concrete element
//!   struct; a mismatch is an error, never a panic.

pub mod builder;
pub mod emit;
pub mod error;
pub mod plan;
pub mod registry;
pub mod rules;
pub mod sequence;

pub use builder::{add, drop, to, EdgeSpec, SequenceSpec};
pub use emit::{emit, not_implemented, Emission};
pub use error::{EmitError, LookupError, OpGenError, RegistrationError, WalkError};
pub use plan::{Plan, PlanParams, PlannedOp, Transition};
pub use registry::{registry, ElementRules, OpRegistry, OpRegistryBuilder};
pub use rules::register_all;
pub use sequence::{Edge, RuleSequence};
