//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `ZoneId` and `GateId` index the
//! configured zone/gate vectors directly; `AgentId`, `AlertId` and
//! `SuggestionId` are monotonic counters that are never reused while the
//! referent is alive.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the type's maximum value.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a simulated person.  Assigned monotonically at spawn and
    /// never reused while the agent is alive.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a zone in the venue configuration.  Zones are fixed at
    /// configuration time, so the index doubles as the identity.
    pub struct ZoneId(u16);
}

typed_id! {
    /// Index of a gate in the venue configuration.
    pub struct GateId(u16);
}

typed_id! {
    /// Identity of an alert.  Monotonic; alerts are append-only.
    pub struct AlertId(u64);
}

typed_id! {
    /// Identity of a redirection suggestion.  Monotonic across ticks even
    /// though the suggestion set itself is replaced wholesale every tick.
    pub struct SuggestionId(u64);
}
