//! Operand data types and the sets and pairs built from them.
//!
//! A legal pair constrains the destination with one [`TypeSet`] and every
//! typed source operand, uniformly, with another.

use std::fmt;

use crate::common::bitset::{BitIndex, BitSet};

/// Operand data type.
///
/// The discriminant is the member's bit position inside a [`TypeSet`]; it is
/// not the hardware type code (see `isa::layout` for those).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DataType {
    /// Unsigned byte.
    Ub = 0,
    /// Signed byte.
    B = 1,
    /// Unsigned word (16-bit).
    Uw = 2,
    /// Signed word (16-bit).
    W = 3,
    /// Unsigned doubleword (32-bit).
    Ud = 4,
    /// Signed doubleword (32-bit).
    D = 5,
    /// Unsigned quadword (64-bit).
    Uq = 6,
    /// Signed quadword (64-bit).
    Q = 7,
    /// Half-precision float.
    Hf = 8,
    /// Single-precision float.
    F = 9,
    /// Double-precision float.
    Df = 10,
}

impl DataType {
    /// Every data type, in bit order.
    pub const ALL: [Self; 11] = [
        Self::Ub,
        Self::B,
        Self::Uw,
        Self::W,
        Self::Ud,
        Self::D,
        Self::Uq,
        Self::Q,
        Self::Hf,
        Self::F,
        Self::Df,
    ];

    /// Width of one element in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Ub | Self::B => 8,
            Self::Uw | Self::W | Self::Hf => 16,
            Self::Ud | Self::D | Self::F => 32,
            Self::Uq | Self::Q | Self::Df => 64,
        }
    }

    /// Width of one element in bytes.
    pub const fn size_bytes(self) -> u32 {
        self.bits() / 8
    }

    /// Returns `true` for the floating-point types.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Hf | Self::F | Self::Df)
    }

    /// Returns `true` for the signed integer types.
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::B | Self::W | Self::D | Self::Q)
    }

    /// Assembly suffix, e.g. `ud` in `r10.0:ud`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ub => "ub",
            Self::B => "b",
            Self::Uw => "uw",
            Self::W => "w",
            Self::Ud => "ud",
            Self::D => "d",
            Self::Uq => "uq",
            Self::Q => "q",
            Self::Hf => "hf",
            Self::F => "f",
            Self::Df => "df",
        }
    }

    /// Mask with only this type's bit set.
    const fn mask(self) -> u16 {
        1 << self as u16
    }
}

impl BitIndex for DataType {
    const MEMBERS: &'static [Self] = &Self::ALL;

    fn bit(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of operand data types.
pub type TypeSet = BitSet<DataType>;

impl TypeSet {
    /// Every data type.
    pub const ANY: Self = Self::of(&DataType::ALL);

    /// Builds a set from a list of types; usable in `const` tables.
    pub const fn of(types: &[DataType]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < types.len() {
            bits |= types[i].mask();
            i += 1;
        }
        Self::from_bits(bits)
    }
}

/// One legal (destination, source) type combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypePair {
    /// Types the destination may take. Empty for operations without one.
    pub dst: TypeSet,
    /// Types every typed source may take. Empty for operations without any.
    pub src: TypeSet,
}

impl TypePair {
    /// Pair used by operations whose operands are not type-checked.
    pub const UNCONSTRAINED: Self = Self::new(TypeSet::ANY, TypeSet::ANY);

    /// Creates a pair.
    pub const fn new(dst: TypeSet, src: TypeSet) -> Self {
        Self { dst, src }
    }

    /// Returns `true` if this pair accepts the given operand types.
    ///
    /// An absent destination places no constraint on `dst`; the format
    /// contract decides whether a destination may be absent.
    pub fn accepts(&self, dst: Option<DataType>, srcs: &[DataType]) -> bool {
        dst.is_none_or(|t| self.dst.contains(t)) && srcs.iter().all(|t| self.src.contains(*t))
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.dst, self.src)
    }
}
