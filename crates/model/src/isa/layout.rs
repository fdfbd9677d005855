//! Native instruction word layout.
//!
//! Every native instruction is one 128-bit little-endian word. This module
//! names each bit field and the numeric codes stored in them; the encoder and
//! decoder are the only consumers. Bit positions are inclusive, low to high.
//!
//! 1. **Header:** shared by every format (opcode, predicate, exec size, ...).
//! 2. **Basic operands:** two-source layout used by basic, math, sync, send
//!    and register-jump formats.
//! 3. **Control words:** jump targets and message descriptors in the upper
//!    dwords.
//! 4. **Three-source operands:** compact register/immediate slots.

use crate::common::error::IsaError;
use crate::isa::types::DataType;

/// A bit field of the instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Name used in range errors.
    pub name: &'static str,
    /// Lowest bit.
    pub lo: u32,
    /// Width in bits (at most 64).
    pub width: u32,
}

impl Field {
    const fn new(name: &'static str, lo: u32, width: u32) -> Self {
        Self { name, lo, width }
    }

    /// Largest value the field holds.
    pub const fn max(self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// The same field renamed, for per-operand error messages.
    pub const fn named(self, name: &'static str) -> Self {
        Self { name, ..self }
    }
}

/// A 128-bit instruction word under construction or inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word(pub u128);

impl Word {
    /// Reads a field.
    #[inline]
    pub const fn get(self, field: Field) -> u64 {
        ((self.0 >> field.lo) as u64) & field.max()
    }

    /// Reads a one-bit field.
    #[inline]
    pub const fn flag(self, field: Field) -> bool {
        self.get(field) != 0
    }

    /// Writes a field.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] if `value` does not fit.
    pub fn put(&mut self, field: Field, value: u64) -> Result<(), IsaError> {
        if value > field.max() {
            return Err(IsaError::OperandOutOfRange {
                field: field.name,
                value,
                bits: field.width,
            });
        }
        let mask = u128::from(field.max()) << field.lo;
        self.0 = (self.0 & !mask) | (u128::from(value) << field.lo);
        Ok(())
    }

    /// Writes a one-bit field.
    pub fn set_flag(&mut self, field: Field, on: bool) {
        let mask = 1u128 << field.lo;
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}

/// Rejects `value` unless it is at most `max`, reporting `bits` as the usable
/// range.
///
/// # Errors
///
/// [`IsaError::OperandOutOfRange`] when `value > max`.
pub fn check_max(field: &'static str, value: u64, max: u64, bits: u32) -> Result<u64, IsaError> {
    if value > max {
        Err(IsaError::OperandOutOfRange { field, value, bits })
    } else {
        Ok(value)
    }
}

// ── Header ───────────────────────────────────────────────────────────────────

/// Fields shared by every format.
pub mod header {
    use super::Field;

    /// Opcode `[6:0]`.
    pub const OPCODE: Field = Field::new("opcode", 0, 7);
    /// Predicate control `[19:16]`; 0 means unpredicated.
    pub const PRED_CTRL: Field = Field::new("predicate control", 16, 4);
    /// Predicate inverse `[20]`.
    pub const PRED_INV: Field = Field::new("predicate inverse", 20, 1);
    /// Execution size, log2 `[23:21]`.
    pub const EXEC_SIZE: Field = Field::new("execution size", 21, 3);
    /// Condition modifier, math function or SFID `[27:24]`.
    pub const COND_MOD: Field = Field::new("condition modifier", 24, 4);
    /// Branch control `[28]`.
    pub const BRANCH_CTRL: Field = Field::new("branch control", 28, 1);
    /// Compacted-form flag `[29]`; never set in the native form.
    pub const COMPACTED: Field = Field::new("compacted", 29, 1);
    /// Saturate `[31]`.
    pub const SATURATE: Field = Field::new("saturate", 31, 1);
    /// Flag sub-register `[32]`.
    pub const FLAG_SUBREG: Field = Field::new("flag sub-register", 32, 1);
    /// Flag register `[33]`.
    pub const FLAG_REG: Field = Field::new("flag register", 33, 1);
    /// No-mask `[34]`.
    pub const NO_MASK: Field = Field::new("no mask", 34, 1);
}

// ── Basic operands ───────────────────────────────────────────────────────────

/// Register-operand fields of one operand in the basic layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandFields {
    /// Operand name used in range errors.
    pub name: &'static str,
    /// Register file code.
    pub file: Field,
    /// Register or immediate type code.
    pub ty: Field,
    /// Byte sub-register.
    pub subreg: Field,
    /// Register number.
    pub reg: Field,
    /// Absolute-value modifier (sources only).
    pub abs: Option<Field>,
    /// Negate modifier (sources only).
    pub neg: Option<Field>,
}

/// Fields of the basic two-source layout.
pub mod basic {
    use super::{Field, OperandFields};

    /// Destination operand.
    pub const DST: OperandFields = OperandFields {
        name: "dst",
        file: Field::new("dst register file", 35, 2),
        ty: Field::new("dst type", 37, 4),
        subreg: Field::new("dst sub-register", 48, 5),
        reg: Field::new("dst register", 53, 8),
        abs: None,
        neg: None,
    };

    /// First source operand.
    pub const SRC0: OperandFields = OperandFields {
        name: "src0",
        file: Field::new("src0 register file", 41, 2),
        ty: Field::new("src0 type", 43, 4),
        subreg: Field::new("src0 sub-register", 64, 5),
        reg: Field::new("src0 register", 69, 8),
        abs: Some(Field::new("src0 abs", 77, 1)),
        neg: Some(Field::new("src0 neg", 78, 1)),
    };

    /// Second source operand.
    pub const SRC1: OperandFields = OperandFields {
        name: "src1",
        file: Field::new("src1 register file", 89, 2),
        ty: Field::new("src1 type", 91, 4),
        subreg: Field::new("src1 sub-register", 96, 5),
        reg: Field::new("src1 register", 101, 8),
        abs: Some(Field::new("src1 abs", 109, 1)),
        neg: Some(Field::new("src1 neg", 110, 1)),
    };

    /// 32-bit immediate `[127:96]`.
    pub const IMM32: Field = Field::new("immediate", 96, 32);
    /// 64-bit immediate `[127:64]` (unary src0 only).
    pub const IMM64: Field = Field::new("immediate", 64, 64);
}

// ── Control words ────────────────────────────────────────────────────────────

/// Jump-target fields.
pub mod jump {
    use super::Field;

    /// Low control dword `[95:64]`.
    pub const LOW: Field = Field::new("jip", 64, 32);
    /// High control dword `[127:96]`.
    pub const HIGH: Field = Field::new("jip", 96, 32);
}

/// Message fields of the send family.
pub mod send {
    use super::Field;

    /// Extended descriptor `[95:88]`.
    pub const EX_DESC: Field = Field::new("extended descriptor", 88, 8);
    /// Split-send second payload register `[87:80]`.
    pub const SRC1_REG: Field = Field::new("src1 register", 80, 8);
    /// Message descriptor `[127:96]`.
    pub const DESC: Field = Field::new("descriptor", 96, 32);
}

// ── Three-source operands ────────────────────────────────────────────────────

/// Fields of the three-source layout.
pub mod ternary {
    use super::Field;

    /// Src0 holds an immediate `[35]`.
    pub const SRC0_IMM: Field = Field::new("src0 immediate flag", 35, 1);
    /// Src2 holds an immediate `[36]`.
    pub const SRC2_IMM: Field = Field::new("src2 immediate flag", 36, 1);
    /// Source type codes, src0 `[39:37]`, src1 `[42:40]`, src2 `[45:43]`.
    pub const SRC_TYPE: [Field; 3] = [
        Field::new("src0 type", 37, 3),
        Field::new("src1 type", 40, 3),
        Field::new("src2 type", 43, 3),
    ];
    /// Destination type code `[48:46]`.
    pub const DST_TYPE: Field = Field::new("dst type", 46, 3);
    /// Source abs bits, `[49]`, `[51]`, `[53]`.
    pub const SRC_ABS: [Field; 3] = [
        Field::new("src0 abs", 49, 1),
        Field::new("src1 abs", 51, 1),
        Field::new("src2 abs", 53, 1),
    ];
    /// Source neg bits, `[50]`, `[52]`, `[54]`.
    pub const SRC_NEG: [Field; 3] = [
        Field::new("src0 neg", 50, 1),
        Field::new("src1 neg", 52, 1),
        Field::new("src2 neg", 54, 1),
    ];
    /// Destination sub-register `[60:56]`.
    pub const DST_SUBREG: Field = Field::new("dst sub-register", 56, 5);
    /// Destination register `[68:61]`.
    pub const DST_REG: Field = Field::new("dst register", 61, 8);
    /// 16-bit source slots `[84:69]`, `[100:85]`, `[116:101]`.
    pub const SRC_SLOT: [Field; 3] = [
        Field::new("src0", 69, 16),
        Field::new("src1", 85, 16),
        Field::new("src2", 101, 16),
    ];
    /// Sub-register bits inside a register slot.
    pub const SLOT_SUBREG: Field = Field::new("sub-register", 0, 5);
    /// Register bits inside a register slot.
    pub const SLOT_REG: Field = Field::new("register", 5, 8);
}

// ── Codes ────────────────────────────────────────────────────────────────────

/// Highest addressable GRF register.
pub const MAX_GRF: u64 = 127;

/// Register-file code: architecture register file.
pub const FILE_ARF: u64 = 0;
/// Register-file code: general register file.
pub const FILE_GRF: u64 = 1;
/// Register-file code: immediate operand.
pub const FILE_IMM: u64 = 3;

/// Type code of a register operand.
pub const fn reg_type_code(ty: DataType) -> u64 {
    match ty {
        DataType::Ud => 0,
        DataType::D => 1,
        DataType::Uw => 2,
        DataType::W => 3,
        DataType::Ub => 4,
        DataType::B => 5,
        DataType::Df => 6,
        DataType::F => 7,
        DataType::Uq => 8,
        DataType::Q => 9,
        DataType::Hf => 10,
    }
}

/// Inverse of [`reg_type_code`].
pub const fn reg_type_from_code(code: u64) -> Option<DataType> {
    match code {
        0 => Some(DataType::Ud),
        1 => Some(DataType::D),
        2 => Some(DataType::Uw),
        3 => Some(DataType::W),
        4 => Some(DataType::Ub),
        5 => Some(DataType::B),
        6 => Some(DataType::Df),
        7 => Some(DataType::F),
        8 => Some(DataType::Uq),
        9 => Some(DataType::Q),
        10 => Some(DataType::Hf),
        _ => None,
    }
}

/// Type code of an immediate operand; byte types have none.
pub const fn imm_type_code(ty: DataType) -> Option<u64> {
    match ty {
        DataType::Ud => Some(0),
        DataType::D => Some(1),
        DataType::Uw => Some(2),
        DataType::W => Some(3),
        DataType::F => Some(7),
        DataType::Uq => Some(8),
        DataType::Q => Some(9),
        DataType::Df => Some(10),
        DataType::Hf => Some(11),
        DataType::Ub | DataType::B => None,
    }
}

/// Inverse of [`imm_type_code`]. Codes 4 to 6 are packed-vector types,
/// which this model does not describe.
pub const fn imm_type_from_code(code: u64) -> Option<DataType> {
    match code {
        0 => Some(DataType::Ud),
        1 => Some(DataType::D),
        2 => Some(DataType::Uw),
        3 => Some(DataType::W),
        7 => Some(DataType::F),
        8 => Some(DataType::Uq),
        9 => Some(DataType::Q),
        10 => Some(DataType::Df),
        11 => Some(DataType::Hf),
        _ => None,
    }
}

/// Three-bit type code of a three-source operand.
pub const fn ternary_type_code(ty: DataType) -> Option<u64> {
    match ty {
        DataType::F => Some(0),
        DataType::D => Some(1),
        DataType::Ud => Some(2),
        DataType::Df => Some(3),
        DataType::Hf => Some(4),
        _ => None,
    }
}

/// Inverse of [`ternary_type_code`].
pub const fn ternary_type_from_code(code: u64) -> Option<DataType> {
    match code {
        0 => Some(DataType::F),
        1 => Some(DataType::D),
        2 => Some(DataType::Ud),
        3 => Some(DataType::Df),
        4 => Some(DataType::Hf),
        _ => None,
    }
}
