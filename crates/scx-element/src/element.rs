//! # Element Variants and Element State
//!
//! `Element` is the closed, tagged union of every schema element type.
//! `ElementKind` is its fieldless discriminant, used as the registry key.
//!
//! ## Typed Dispatch
//!
//! Each concrete element type implements the sealed [`ElementType`] trait,
//! which ties it to exactly one `ElementKind` and projects it back out of
//! an `Element` by pattern matching. Rules written against `&ForeignKey`
//! are therefore checked by the compiler, and the registry never inspects
//! types at runtime beyond a `match` on the variant.

use serde::{Deserialize, Serialize};

use scx_core::Status;

use crate::column::{Column, DefaultExpression};
use crate::constraint::{CheckConstraint, ForeignKey, ForeignKeyBackReference};
use crate::dependency::{RelationDependedOnBy, SequenceOwnedBy, TypeReference};
use crate::descriptor::{Sequence, Table, Type, View};
use crate::index::{PrimaryIndex, SecondaryIndex};

mod private {
    pub trait Sealed {}
}

/// A concrete schema element type.
///
/// Sealed: only the types listed in [`Element`] implement it.
pub trait ElementType: private::Sealed + std::fmt::Debug + Send + Sync + 'static {
    /// The discriminant this type is registered under.
    const KIND: ElementKind;

    /// Project this type out of an `Element`, if the variant matches.
    fn from_element(element: &Element) -> Option<&Self>;

    /// Wrap this value into an `Element`.
    fn into_element(self) -> Element;
}

macro_rules! elements {
    ($($variant:ident => $ty:ty, $name:literal;)+) => {
        /// A typed unit of schema.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Element {
            $($variant($ty),)+
        }

        /// Discriminant of [`Element`].
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum ElementKind {
            $($variant,)+
        }

        impl Element {
            /// The kind of this element.
            pub fn kind(&self) -> ElementKind {
                match self {
                    $(Self::$variant(_) => ElementKind::$variant,)+
                }
            }
        }

        impl ElementKind {
            /// Every element kind, in declaration order.
            pub fn all() -> &'static [ElementKind] {
                &[$(Self::$variant,)+]
            }

            /// The canonical name of this kind.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        $(
            impl private::Sealed for $ty {}

            impl ElementType for $ty {
                const KIND: ElementKind = ElementKind::$variant;

                fn from_element(element: &Element) -> Option<&Self> {
                    match element {
                        Element::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn into_element(self) -> Element {
                    Element::$variant(self)
                }
            }

            impl From<$ty> for Element {
                fn from(inner: $ty) -> Self {
                    Element::$variant(inner)
                }
            }
        )+
    };
}

elements! {
    Table => Table, "Table";
    View => View, "View";
    Sequence => Sequence, "Sequence";
    Type => Type, "Type";
    Column => Column, "Column";
    PrimaryIndex => PrimaryIndex, "PrimaryIndex";
    SecondaryIndex => SecondaryIndex, "SecondaryIndex";
    ForeignKey => ForeignKey, "ForeignKey";
    ForeignKeyBackReference => ForeignKeyBackReference, "ForeignKeyBackReference";
    CheckConstraint => CheckConstraint, "CheckConstraint";
    DefaultExpression => DefaultExpression, "DefaultExpression";
    SequenceOwnedBy => SequenceOwnedBy, "SequenceOwnedBy";
    TypeReference => TypeReference, "TypeReference";
    RelationDependedOnBy => RelationDependedOnBy, "RelationDependedOnBy";
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Element State ───────────────────────────────────────────────────

/// An element together with where it is and where the schema change
/// wants it to be.
///
/// Owned by the surrounding schema-change job; operation generation only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementState {
    pub element: Element,
    pub current: Status,
    pub target: Status,
}

impl ElementState {
    /// An element in `current` status heading for `target`.
    pub fn new(element: impl Into<Element>, current: Status, target: Status) -> Self {
        Self {
            element: element.into(),
            current,
            target,
        }
    }

    /// An absent element being added.
    pub fn adding(element: impl Into<Element>) -> Self {
        Self::new(element, Status::Absent, Status::Public)
    }

    /// A public element being dropped.
    pub fn dropping(element: impl Into<Element>) -> Self {
        Self::new(element, Status::Public, Status::Absent)
    }

    /// The kind of the tracked element.
    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    /// Whether the element already sits at its target.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
