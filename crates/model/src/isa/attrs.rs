//! Instruction attribute flags.
//!
//! Attributes record which optional modifiers an operation accepts on a given
//! platform, plus two classification bits used by consumers of the table.

use std::fmt;

use crate::common::bitset::{BitIndex, BitSet};

/// One capability or classification bit of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Attr {
    /// The operation is a pure bitwise operation (`and`, `shl`, ...).
    IsBitwise = 0,
    /// The operation selects between sources (`sel`).
    IsSelect = 1,
    /// A predicate may guard the instruction.
    Predication = 2,
    /// A condition modifier may update a flag register.
    FlagModifier = 3,
    /// The destination may be saturated.
    Saturation = 4,
    /// Source operands may carry negate/absolute-value modifiers.
    SrcMods = 5,
    /// The branch-control bit may be set.
    BranchControl = 6,
}

impl Attr {
    /// Every attribute, in bit order.
    pub const ALL: [Self; 7] = [
        Self::IsBitwise,
        Self::IsSelect,
        Self::Predication,
        Self::FlagModifier,
        Self::Saturation,
        Self::SrcMods,
        Self::BranchControl,
    ];

    /// Upper-case table name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsBitwise => "IS_BITWISE",
            Self::IsSelect => "IS_SELECT",
            Self::Predication => "SUPPORTS_PREDICATION",
            Self::FlagModifier => "SUPPORTS_FLAGMODIFIER",
            Self::Saturation => "SUPPORTS_SATURATION",
            Self::SrcMods => "SUPPORTS_SRCMODS",
            Self::BranchControl => "SUPPORTS_BRCTL",
        }
    }

    const fn mask(self) -> u16 {
        1 << self as u16
    }
}

impl BitIndex for Attr {
    const MEMBERS: &'static [Self] = &Self::ALL;

    fn bit(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of attributes carried by one table entry.
pub type AttributeSet = BitSet<Attr>;

impl AttributeSet {
    /// No attributes.
    pub const NONE: Self = Self::EMPTY;

    /// Builds a set from a list of attributes; usable in `const` tables.
    pub const fn of(attrs: &[Attr]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < attrs.len() {
            bits |= attrs[i].mask();
            i += 1;
        }
        Self::from_bits(bits)
    }
}
