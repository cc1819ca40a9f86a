//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Visitor and stand ids are dense
//! indices starting at 0.  Cup ids are minted by the model's counter and
//! start at 1; `fc_agent::CupStore` maps them back to slots.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
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
    /// Index of a visitor in the model's visitor list.
    pub struct VisitorId(u32);
}

typed_id! {
    /// Index of a stand, in the order the stands were configured.
    pub struct StandId(u32);
}

typed_id! {
    /// Globally unique, monotonically increasing cup identity.
    pub struct CupId(u32);
}

/// A reference to any scheduled entity.
///
/// Grid cells hold `AgentRef`s and the scheduler shuffles them; the model
/// dispatches each one to the matching entity store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentRef {
    Visitor(VisitorId),
    Stand(StandId),
    Cup(CupId),
}

impl AgentRef {
    #[inline]
    pub fn is_cup(self) -> bool {
        matches!(self, AgentRef::Cup(_))
    }

    /// The cup id, if this reference points at a cup.
    #[inline]
    pub fn as_cup(self) -> Option<CupId> {
        match self {
            AgentRef::Cup(id) => Some(id),
            _ => None,
        }
    }
}

impl From<VisitorId> for AgentRef {
    fn from(id: VisitorId) -> Self {
        AgentRef::Visitor(id)
    }
}

impl From<StandId> for AgentRef {
    fn from(id: StandId) -> Self {
        AgentRef::Stand(id)
    }
}

impl From<CupId> for AgentRef {
    fn from(id: CupId) -> Self {
        AgentRef::Cup(id)
    }
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Visitor(id) => id.fmt(f),
            AgentRef::Stand(id)   => id.fmt(f),
            AgentRef::Cup(id)     => id.fmt(f),
        }
    }
}
