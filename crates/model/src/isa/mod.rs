//! Instruction Set Architecture (ISA) model.
//!
//! Contains the per-generation operation tables, the legality rules layered
//! on them, and the native 128-bit codec.
//!
//! # Layers
//!
//! * `types`, `attrs`, `format`, `op`, `platform`: closed vocabularies.
//! * `opspec`, `tables`: one [`OpSpec`] per operation and platform.
//! * `resolver`: forward and reverse table lookup.
//! * `validate`: operand shape, type and modifier legality.
//! * `layout`, `encode`, `decode`: the native instruction word.
//! * `disasm`: assembly-style rendering.

/// Modifier and classification attributes.
pub mod attrs;

/// Native instruction decoding.
pub mod decode;

/// Assembly-style rendering of instructions.
pub mod disasm;

/// Native instruction encoding.
pub mod encode;

/// Binary layout classes and their operand contracts.
pub mod format;

/// Instruction, operand and modifier structures.
pub mod instruction;

/// Bit positions of the native instruction word.
pub mod layout;

/// Logical operation identifiers.
pub mod op;

/// Per-platform operation descriptor.
pub mod opspec;

/// Hardware generations.
pub mod platform;

/// Platform-to-table resolution and reverse opcode lookup.
pub mod resolver;

/// Static operation tables, one per generation.
pub mod tables;

/// Operand data types and legal type pairs.
pub mod types;

/// Instruction legality checks.
pub mod validate;

pub use attrs::{Attr, AttributeSet};
pub use decode::decode;
pub use disasm::{Disassembler, disassemble, format_instruction};
pub use encode::{Encoding, encode};
pub use format::Format;
pub use instruction::{
    DstOperand, ExecSize, FlagModifier, FlagReg, Instruction, MathFunction, Modifier, Operand,
    OperandKind, PredCtrl, Predicate, RegFile, RegRef, SendDescriptor, SharedFunction, SrcMods,
};
pub use op::Op;
pub use opspec::OpSpec;
pub use platform::Platform;
pub use types::{DataType, TypePair, TypeSet};
pub use validate::{is_legal, validate};
