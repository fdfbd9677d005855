//! Gen8 operation table.
//!
//! One entry per [`Op`] ordinal. Slots for operations introduced on later
//! generations, and the retired ordinals, hold placeholders.

use crate::isa::attrs::AttributeSet;
use crate::isa::format::Format;
use crate::isa::format::Format::{
    BasicBinaryRegRegImm, BasicUnaryRegImm, JumpBinaryBrc, JumpBinaryImmImm, JumpUnaryCallRegImm,
    JumpUnaryImm, JumpUnaryReg, JumpUnaryRegImm, MathBinaryRegRegImm, Nullary, SendUnary,
    SyncUnary, TernaryRegImmRegRegImm,
};
use crate::isa::op::{Op, TABLE_LEN};
use crate::isa::opspec::OpSpec;
use crate::isa::platform::Platform;
use crate::isa::tables::{
    ARITH, DWORD_SPLIT, FLOAT_ONLY, LOGIC, UD_ONLY, UNTYPED, attrs, of, pair, sets,
};
use crate::isa::types::DataType::{B, D, Df, F, Q, Ub, Ud, Uq, Uw, W};
use crate::isa::types::TypePair;

const VOID: OpSpec = OpSpec::placeholder(Platform::Gen8);

const fn live(
    op: Op,
    opcode: u8,
    description: &'static str,
    format: Format,
    types: &'static [TypePair],
    attrs: AttributeSet,
) -> OpSpec {
    OpSpec::live(op, Platform::Gen8, opcode, description, format, types, attrs)
}

// ── Type pairs ───────────────────────────────────────────────────────────────

const AVG_TYPES: &[TypePair] = &[pair(sets::INT, sets::INT)];

const BRANCH_TARGET_TYPES: &[TypePair] = &[pair(sets::NONE, sets::D)];

const CALL_TYPES: &[TypePair] = &[pair(sets::D_UD, sets::NONE)];

const CBIT_TYPES: &[TypePair] = &[pair(sets::UD, of(&[Ub, Uw, Ud]))];

const CMPN_TYPES: &[TypePair] = &[
    pair(sets::INT, sets::INT),
    pair(sets::F, sets::INT),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::HF, sets::HF),
    pair(sets::HF_F, sets::HF_F),
];

const BIT_SCAN_TYPES: &[TypePair] = &[pair(sets::UD, sets::D_UD)];

const MAC_TYPES: &[TypePair] = &[
    pair(sets::INT, of(&[Ub, B, Uw, W])),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::HF, sets::HF),
    pair(sets::HF_F, sets::HF_F),
];

const MACH_TYPES: &[TypePair] = &[
    pair(sets::D, sets::D),
    pair(sets::UD, sets::UD),
];

const MAD_TYPES: &[TypePair] = &[
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::HF, sets::HF),
    pair(sets::HF_F, sets::HF_F),
];

const MADM_TYPES: &[TypePair] = &[
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
];

const MATH_TYPES: &[TypePair] = &[
    pair(sets::F, sets::F),
    pair(sets::D, sets::D),
    pair(sets::UD, sets::UD),
    pair(sets::HF_F, sets::HF_F),
];

const MOV_TYPES: &[TypePair] = &[
    pair(sets::INT, sets::INT),
    pair(sets::F, sets::INT),
    pair(sets::INT, sets::F),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::WORDS),
    pair(sets::DF, sets::F),
    pair(sets::WORDS, sets::DF),
    pair(sets::F, sets::DF),
    pair(sets::DF, sets::DF),
    pair(sets::WORDS, sets::WORDS),
    pair(sets::QWORDS, sets::WORDS),
    pair(sets::WORDS, sets::QWORDS),
    pair(sets::QWORDS, sets::QWORDS),
    pair(sets::QWORDS, sets::F),
    pair(sets::QWORDS, sets::DF),
    pair(sets::F, sets::QWORDS),
    pair(sets::DF, sets::QWORDS),
    pair(sets::HF, sets::INT),
    pair(sets::HF, sets::F),
    pair(sets::INT, sets::HF),
    pair(sets::F, sets::HF),
    pair(sets::HF, sets::HF),
];

const MOVI_TYPES: &[TypePair] = &[
    pair(of(&[B]), of(&[B])),
    pair(of(&[Ub]), of(&[Ub])),
    pair(of(&[W]), of(&[W])),
    pair(of(&[Uw]), of(&[Uw])),
    pair(sets::D, sets::D),
    pair(sets::UD, sets::UD),
    pair(sets::F, sets::F),
];

const MUL_TYPES: &[TypePair] = &[
    pair(of(&[Ub, B]), of(&[Ub, B])),
    pair(of(&[Uw, W]), of(&[Ub, B])),
    pair(of(&[Ud, D]), of(&[Ub, B])),
    pair(of(&[Uw, W]), of(&[Uw, W])),
    pair(of(&[Ud, D]), of(&[Uw, W])),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::HF, sets::HF),
    pair(sets::HF_F, sets::HF_F),
];

const RET_TYPES: &[TypePair] = &[pair(sets::NONE, sets::D_UD)];

const SAD_TYPES: &[TypePair] = &[pair(of(&[W, Uw]), of(&[B, Ub]))];

const SEL_TYPES: &[TypePair] = &[
    pair(sets::INT, sets::INT),
    pair(sets::F, sets::F),
    pair(sets::DF, sets::DF),
    pair(sets::WORDS, sets::WORDS),
    pair(sets::QWORDS, sets::WORDS),
    pair(sets::WORDS, sets::QWORDS),
    pair(sets::QWORDS, sets::QWORDS),
    pair(sets::HF, sets::HF),
    pair(sets::HF_F, sets::HF_F),
];

const SHR_TYPES: &[TypePair] = &[
    pair(of(&[Ub, Uw, Ud]), of(&[Ub, Uw, Ud])),
    pair(of(&[Uw, Ud]), of(&[Uw, Ud])),
    pair(of(&[Uq]), of(&[Uw, Ud])),
    pair(of(&[Uw, Ud]), of(&[Uq])),
    pair(of(&[Uq]), of(&[Uq])),
];

const SMOV_TYPES: &[TypePair] = &[
    pair(of(&[Uw, W, Ud, D, Uq, Q, F, Df]), of(&[Uw, W, Ud, D, Uq, Q, F, Df])),
];

// ── Table ────────────────────────────────────────────────────────────────────

/// The Gen8 table as a constant, so later generations can derive from it.
pub(crate) const TABLE: [OpSpec; TABLE_LEN] = [
    VOID, // 0: invalid
    live(Op::Add, 0x40, "Addition", BasicBinaryRegRegImm, ARITH, attrs::FULL),
    VOID, // 2: add3
    live(Op::Addc, 0x4e, "Addition with Carry", BasicBinaryRegRegImm, UD_ONLY, attrs::PRED_FLAG),
    live(Op::And, 0x05, "Logic And", BasicBinaryRegRegImm, LOGIC, attrs::BITWISE),
    live(Op::Asr, 0x0c, "Arithmetic Shift Right", BasicBinaryRegRegImm, LOGIC, attrs::BITWISE_SAT),
    live(Op::Avg, 0x42, "Average", BasicBinaryRegRegImm, AVG_TYPES, attrs::FULL),
    live(Op::Bfe, 0x18, "Bit Field Extract", TernaryRegImmRegRegImm, DWORD_SPLIT, attrs::PRED),
    live(Op::Bfi1, 0x19, "Bit Field Insert 1", BasicBinaryRegRegImm, DWORD_SPLIT, attrs::PRED),
    live(Op::Bfi2, 0x1a, "Bit Field Insert 2", TernaryRegImmRegRegImm, DWORD_SPLIT, attrs::PRED),
    VOID, // 10: bfn
    live(Op::Bfrev, 0x17, "Bit Field Reverse", BasicUnaryRegImm, UD_ONLY, attrs::PRED),
    live(Op::Brc, 0x23, "Branch Converging", JumpBinaryBrc, BRANCH_TARGET_TYPES, attrs::PRED),
    live(Op::Brd, 0x21, "Branch Diverging", JumpUnaryRegImm, BRANCH_TARGET_TYPES, attrs::PRED),
    live(Op::Break, 0x28, "Break", JumpBinaryImmImm, UNTYPED, attrs::PRED),
    live(Op::Call, 0x2c, "Call", JumpUnaryCallRegImm, CALL_TYPES, attrs::PRED),
    live(Op::Calla, 0x2b, "Call Absolute", JumpUnaryCallRegImm, CALL_TYPES, attrs::PRED),
    live(Op::Cbit, 0x4d, "Count Bits Set", BasicUnaryRegImm, CBIT_TYPES, attrs::PRED),
    live(Op::Cmp, 0x10, "Compare", BasicBinaryRegRegImm, ARITH, attrs::PRED_FLAG_MODS),
    live(Op::Cmpn, 0x11, "Compare NaN", BasicBinaryRegRegImm, CMPN_TYPES, attrs::PRED_FLAG_MODS),
    live(Op::Cont, 0x29, "Continue", JumpBinaryImmImm, UNTYPED, attrs::PRED),
    live(Op::Csel, 0x12, "Conditional Select", TernaryRegImmRegRegImm, FLOAT_ONLY, attrs::CSEL),
    VOID, // 22: dim
    live(Op::Dp2, 0x57, "Dot Product 2", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Dp3, 0x56, "Dot Product 3", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Dp4, 0x54, "Dot Product 4", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::FULL),
    VOID, // 26: dp4a
    VOID, // 27: dpas
    VOID, // 28: dpasw
    live(Op::Dph, 0x55, "Dot Product Homogeneous", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Else, 0x24, "Else", JumpBinaryImmImm, UNTYPED, attrs::BRCTL),
    live(Op::Endif, 0x25, "End If", JumpUnaryImm, UNTYPED, attrs::NONE),
    VOID, // 32: f16to32
    VOID, // 33: f32to16
    live(
        Op::Fbh,
        0x4b,
        "Find First Bit from MSB Side",
        BasicUnaryRegImm,
        BIT_SCAN_TYPES,
        attrs::PRED,
    ),
    live(Op::Fbl, 0x4c, "Find First Bit from LSB Side", BasicUnaryRegImm, UD_ONLY, attrs::PRED),
    live(Op::Frc, 0x43, "Fraction", BasicUnaryRegImm, FLOAT_ONLY, attrs::PRED_FLAG_MODS),
    live(Op::Goto, 0x2e, "Goto", JumpBinaryImmImm, UNTYPED, attrs::PRED_BRCTL),
    live(Op::Halt, 0x2a, "Halt", JumpBinaryImmImm, UNTYPED, attrs::PRED),
    live(Op::If, 0x22, "If", JumpBinaryImmImm, UNTYPED, attrs::PRED_BRCTL),
    live(Op::Illegal, 0x00, "Illegal", Nullary, UNTYPED, attrs::NONE),
    live(Op::Jmpi, 0x20, "Jump Indexed", JumpUnaryRegImm, BRANCH_TARGET_TYPES, attrs::PRED),
    live(Op::Join, 0x2f, "Join", JumpUnaryImm, UNTYPED, attrs::PRED),
    live(Op::Line, 0x59, "Line", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Lrp, 0x5c, "Linear Interpolation", TernaryRegImmRegRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Lzd, 0x4a, "Leading Zero Detection", BasicUnaryRegImm, BIT_SCAN_TYPES, attrs::FULL),
    live(Op::Mac, 0x48, "Multiply Accumulate", BasicBinaryRegRegImm, MAC_TYPES, attrs::FULL),
    live(
        Op::Mach,
        0x49,
        "Multiply Accumulate High",
        BasicBinaryRegRegImm,
        MACH_TYPES,
        attrs::PRED_SAT_MODS,
    ),
    VOID, // 48: macl
    live(Op::Mad, 0x5b, "Multiply Add", TernaryRegImmRegRegImm, MAD_TYPES, attrs::FULL),
    live(Op::Madm, 0x5d, "Multiply Add for Macro", TernaryRegImmRegRegImm, MADM_TYPES, attrs::FULL),
    live(
        Op::Math,
        0x38,
        "Extended Math Function",
        MathBinaryRegRegImm,
        MATH_TYPES,
        attrs::PRED_SAT_MODS,
    ),
    live(Op::Mov, 0x01, "Move", BasicUnaryRegImm, MOV_TYPES, attrs::FULL),
    live(Op::Movi, 0x03, "Move Indexed", BasicUnaryRegImm, MOVI_TYPES, attrs::PRED_SAT_MODS),
    live(Op::Mul, 0x41, "Multiply", BasicBinaryRegRegImm, MUL_TYPES, attrs::FULL),
    VOID, // 55: retired
    live(Op::Nop, 0x7e, "No Operation", Nullary, UNTYPED, attrs::NONE),
    live(Op::Not, 0x04, "Logic Not", BasicUnaryRegImm, LOGIC, attrs::BITWISE),
    live(Op::Or, 0x06, "Logic Or", BasicBinaryRegRegImm, LOGIC, attrs::BITWISE),
    live(Op::Pln, 0x5a, "Plane", BasicBinaryRegRegImm, FLOAT_ONLY, attrs::PRED_FLAG_SAT),
    live(Op::Ret, 0x2d, "Return", JumpUnaryReg, RET_TYPES, attrs::PRED),
    live(Op::Rndd, 0x45, "Round Down", BasicUnaryRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Rnde, 0x46, "Round to Nearest or Even", BasicUnaryRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Rndu, 0x44, "Round Up", BasicUnaryRegImm, FLOAT_ONLY, attrs::FULL),
    live(Op::Rndz, 0x47, "Round to Zero", BasicUnaryRegImm, FLOAT_ONLY, attrs::FULL),
    VOID, // 65: rol
    VOID, // 66: ror
    live(
        Op::Sad2,
        0x50,
        "Sum of Absolute Difference 2",
        BasicBinaryRegRegImm,
        SAD_TYPES,
        attrs::FULL,
    ),
    live(
        Op::Sada2,
        0x51,
        "Sum of Absolute Difference Accumulate 2",
        BasicBinaryRegRegImm,
        SAD_TYPES,
        attrs::FULL,
    ),
    VOID, // 69: retired
    live(Op::Sel, 0x02, "Select", BasicBinaryRegRegImm, SEL_TYPES, attrs::SELECT),
    live(Op::Send, 0x31, "Send Message", SendUnary, UNTYPED, attrs::PRED),
    live(Op::Sendc, 0x32, "Conditional Send Message", SendUnary, UNTYPED, attrs::PRED),
    VOID, // 73: retired
    VOID, // 74: retired
    VOID, // 75: sends
    VOID, // 76: sendsc
    live(Op::Shl, 0x09, "Shift Left", BasicBinaryRegRegImm, LOGIC, attrs::BITWISE_SAT),
    live(Op::Shr, 0x08, "Shift Right", BasicBinaryRegRegImm, SHR_TYPES, attrs::BITWISE_SAT),
    live(Op::Smov, 0x0a, "Scattered Move", BasicBinaryRegRegImm, SMOV_TYPES, attrs::PRED),
    VOID, // 80: srnd
    live(
        Op::Subb,
        0x4f,
        "Integer Subtraction with Borrow",
        BasicBinaryRegRegImm,
        UD_ONLY,
        attrs::PRED_FLAG_SAT,
    ),
    VOID, // 82: sync
    live(Op::Wait, 0x30, "Wait Notification", SyncUnary, UD_ONLY, attrs::NONE),
    live(Op::While, 0x27, "While", JumpUnaryImm, UNTYPED, attrs::PRED),
    live(Op::Xor, 0x07, "Logic Xor", BasicBinaryRegRegImm, LOGIC, attrs::BITWISE),
];

/// Gen8 operation table, indexed by [`Op`] ordinal.
pub static OPSPECS: [OpSpec; TABLE_LEN] = TABLE;
