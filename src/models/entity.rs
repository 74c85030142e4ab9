//! Shared plumbing for entities decoded from positional records.

use super::layout::{EntityKind, Slots};
use serde::Serialize;

/// An entity that can be read out of a positional record through its layout.
///
/// `Default` is the "no data" entity: every attribute null.
pub trait FromPositional: Default + Sized {
    const KIND: EntityKind;

    /// Build the entity. The record has already passed the arity check.
    fn from_slots(slots: Slots<'_>) -> Self;
}

/// Outcome of decoding one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "entity", rename_all = "snake_case")]
pub enum Decoded<T> {
    Decoded(T),
    /// Record absent or of the wrong arity.
    Empty,
}

impl<T> Decoded<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Decoded::Empty)
    }
}

impl<T: Default> Decoded<T> {
    /// Collapse to the entity, an all-null one for [`Decoded::Empty`].
    pub fn into_entity(self) -> T {
        match self {
            Decoded::Decoded(e) => e,
            Decoded::Empty => T::default(),
        }
    }
}

/// Declares an entity whose attributes are all optional text, read by name
/// through the kind's layout.
macro_rules! text_entity {
    (
        $(#[$meta:meta])*
        $name:ident : $kind:expr => { $($field:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
        pub struct $name {
            $(pub $field: Option<String>,)+
        }

        impl $name {
            /// Attribute by its storage name; `None` when null or unknown.
            pub fn attribute(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => self.$field.as_deref(),)+
                    _ => None,
                }
            }

            /// All attributes in slot order.
            pub fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
                vec![$((stringify!($field), self.$field.as_deref()),)+]
            }

            /// True when every attribute is null.
            pub fn is_blank(&self) -> bool {
                $(self.$field.is_none())&&+
            }
        }

        impl $crate::models::entity::FromPositional for $name {
            const KIND: $crate::models::layout::EntityKind = $kind;

            fn from_slots(slots: $crate::models::layout::Slots<'_>) -> Self {
                Self {
                    $($field: slots.text(stringify!($field)),)+
                }
            }
        }
    };
}

pub(crate) use text_entity;
