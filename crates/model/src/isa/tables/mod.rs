//! Per-platform operation tables.
//!
//! Each table is a `static` array of [`OpSpec`](crate::isa::opspec::OpSpec)
//! of length [`TABLE_LEN`](crate::isa::op::TABLE_LEN), indexed by
//! [`Op`](crate::isa::op::Op) ordinal. The shared type sets, pair lists and
//! attribute sets below keep the per-generation files readable.

use crate::isa::types::{DataType, TypePair, TypeSet};

/// Gen8 table.
pub mod gen8;

/// Gen9 table, derived from Gen8.
pub mod gen9;

/// Type sets that recur across the tables.
pub(crate) mod sets {
    use crate::isa::types::DataType::{self, B, Df, Hf, Q, Ub, Ud, Uq, Uw, W};
    use crate::isa::types::TypeSet;

    /// No operand of this role.
    pub const NONE: TypeSet = TypeSet::EMPTY;
    /// Byte, word and dword integers.
    pub const INT: TypeSet = TypeSet::of(&[Ub, B, Uw, W, Ud, DataType::D]);
    /// Word and dword integers.
    pub const WORDS: TypeSet = TypeSet::of(&[Uw, W, Ud, DataType::D]);
    /// Quadword integers.
    pub const QWORDS: TypeSet = TypeSet::of(&[Uq, Q]);
    /// Unsigned dword.
    pub const UD: TypeSet = TypeSet::of(&[Ud]);
    /// Signed dword.
    pub const D: TypeSet = TypeSet::of(&[DataType::D]);
    /// Either dword.
    pub const D_UD: TypeSet = TypeSet::of(&[DataType::D, Ud]);
    /// Single precision.
    pub const F: TypeSet = TypeSet::of(&[DataType::F]);
    /// Half precision.
    pub const HF: TypeSet = TypeSet::of(&[Hf]);
    /// Double precision.
    pub const DF: TypeSet = TypeSet::of(&[Df]);
    /// Mixed half and single precision.
    pub const HF_F: TypeSet = TypeSet::of(&[Hf, DataType::F]);
}

/// Shorthand for [`TypePair::new`].
pub(crate) const fn pair(dst: TypeSet, src: TypeSet) -> TypePair {
    TypePair::new(dst, src)
}

/// Operations whose operands are not type-checked.
pub(crate) const UNTYPED: &[TypePair] = &[TypePair::UNCONSTRAINED];

/// Single-precision only.
pub(crate) const FLOAT_ONLY: &[TypePair] = &[pair(sets::F, sets::F)];

/// Unsigned dword only.
pub(crate) const UD_ONLY: &[TypePair] = &[pair(sets::UD, sets::UD)];

/// Unsigned or signed dword, without mixing.
pub(crate) const DWORD_SPLIT: &[TypePair] = &[pair(sets::UD, sets::UD), pair(sets::D, sets::D)];

/// Integer, float and mixed-precision arithmetic (`add`, `cmp`).
pub(crate) const ARITH: &[TypePair] = &[
    pair(sets::INT, sets::INT),
    pair(sets::F, sets::INT),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::HF, sets::HF),
    pair(sets::HF, sets::INT),
    pair(sets::WORDS, sets::WORDS),
    pair(sets::QWORDS, sets::WORDS),
    pair(sets::WORDS, sets::QWORDS),
    pair(sets::QWORDS, sets::QWORDS),
    pair(sets::HF_F, sets::HF_F),
];

/// Integer-only logic and shifts, including quadword forms.
pub(crate) const LOGIC: &[TypePair] = &[
    pair(sets::INT, sets::INT),
    pair(sets::WORDS, sets::WORDS),
    pair(sets::QWORDS, sets::WORDS),
    pair(sets::WORDS, sets::QWORDS),
    pair(sets::QWORDS, sets::QWORDS),
];

/// Attribute sets that recur across the tables.
pub(crate) mod attrs {
    use crate::isa::attrs::Attr::{
        BranchControl, FlagModifier, IsBitwise, IsSelect, Predication, Saturation, SrcMods,
    };
    use crate::isa::attrs::AttributeSet;

    pub const NONE: AttributeSet = AttributeSet::NONE;
    pub const PRED: AttributeSet = AttributeSet::of(&[Predication]);
    pub const BRCTL: AttributeSet = AttributeSet::of(&[BranchControl]);
    pub const PRED_BRCTL: AttributeSet = AttributeSet::of(&[BranchControl, Predication]);
    pub const PRED_FLAG: AttributeSet = AttributeSet::of(&[Predication, FlagModifier]);
    /// Predication, flag modifier and source modifiers.
    pub const PRED_FLAG_MODS: AttributeSet =
        AttributeSet::of(&[Predication, FlagModifier, SrcMods]);
    pub const PRED_FLAG_SAT: AttributeSet =
        AttributeSet::of(&[Predication, FlagModifier, Saturation]);
    pub const PRED_SAT_MODS: AttributeSet = AttributeSet::of(&[Predication, Saturation, SrcMods]);
    /// Every modifier except branch control.
    pub const FULL: AttributeSet =
        AttributeSet::of(&[Predication, FlagModifier, Saturation, SrcMods]);
    pub const BITWISE: AttributeSet =
        AttributeSet::of(&[IsBitwise, Predication, FlagModifier, SrcMods]);
    pub const BITWISE_SAT: AttributeSet =
        AttributeSet::of(&[IsBitwise, Predication, FlagModifier, Saturation, SrcMods]);
    pub const SELECT: AttributeSet =
        AttributeSet::of(&[IsSelect, Predication, FlagModifier, Saturation, SrcMods]);
    /// `csel` has no predicate: the condition comes from the flag modifier.
    pub const CSEL: AttributeSet = AttributeSet::of(&[FlagModifier, Saturation, SrcMods]);
}

/// Type-set shorthand for entries with a one-off set.
pub(crate) const fn of(types: &[DataType]) -> TypeSet {
    TypeSet::of(types)
}
