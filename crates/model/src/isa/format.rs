//! Format catalog.
//!
//! A [`Format`] is the structural class of an instruction: how many operands
//! it has, which of them may be immediates, whether there is a destination,
//! and which control operands (jump targets, math function, message
//! descriptor) travel with it. The bit positions for each class live in
//! `isa::layout`; this module only states the contract.

use std::fmt;

/// Structural class of an instruction's binary layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    /// Placeholder slot; never encodable.
    Invalid,
    /// No operands (`nop`, `illegal`).
    Nullary,
    /// `dst = op src0`, src0 register or immediate.
    BasicUnaryRegImm,
    /// `dst = src0 op src1`, src0 register, src1 register or immediate.
    BasicBinaryRegRegImm,
    /// Extended math; one or two sources depending on the math function.
    MathBinaryRegRegImm,
    /// Three sources; src0 and src2 may be 16-bit immediates.
    TernaryRegImmRegRegImm,
    /// Jump with a single immediate target (`endif`, `join`, `while`).
    JumpUnaryImm,
    /// Jump through a register (`ret`).
    JumpUnaryReg,
    /// Jump through a register or immediate offset (`jmpi`, `brd`).
    JumpUnaryRegImm,
    /// Call: destination saves the return IP, immediate target.
    JumpUnaryCallRegImm,
    /// Converging branch: register or immediate target plus a UIP.
    JumpBinaryBrc,
    /// Structured control flow with JIP and UIP (`if`, `else`, `goto`, ...).
    JumpBinaryImmImm,
    /// Message send with one payload register.
    SendUnary,
    /// Split message send with two payload registers.
    SendBinary,
    /// Synchronisation on a notification register (`wait`).
    SyncUnary,
}

/// Whether an operand slot accepts immediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    /// Register only.
    Reg,
    /// Register or immediate.
    RegOrImm,
}

/// Control operand carried in the condition-modifier field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subfunction {
    /// The field holds the flag condition modifier.
    None,
    /// The field holds the extended math function.
    Math,
    /// The field holds the shared-function ID of a message.
    Send,
}

/// Structural contract implied by a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatShape {
    /// A destination register is present.
    pub has_dst: bool,
    /// Source slots, in operand order.
    pub srcs: &'static [OperandSlot],
    /// Fewest sources the format accepts (math functions may be unary).
    pub min_srcs: usize,
    /// A JIP immediate target is present.
    pub jip: bool,
    /// A UIP immediate target is present.
    pub uip: bool,
    /// Meaning of the condition-modifier field.
    pub subfunction: Subfunction,
}

impl FormatShape {
    const fn new(has_dst: bool, srcs: &'static [OperandSlot]) -> Self {
        Self {
            has_dst,
            srcs,
            min_srcs: srcs.len(),
            jip: false,
            uip: false,
            subfunction: Subfunction::None,
        }
    }

    const fn with_jip(mut self) -> Self {
        self.jip = true;
        self
    }

    const fn with_uip(mut self) -> Self {
        self.uip = true;
        self
    }

    const fn with_subfunction(mut self, subfunction: Subfunction) -> Self {
        self.subfunction = subfunction;
        self
    }

    const fn with_min_srcs(mut self, min_srcs: usize) -> Self {
        self.min_srcs = min_srcs;
        self
    }

    /// Most sources the format accepts.
    pub const fn max_srcs(&self) -> usize {
        self.srcs.len()
    }
}

use OperandSlot::{Reg, RegOrImm};

impl Format {
    /// Every format, placeholder included.
    pub const ALL: [Self; 15] = [
        Self::Invalid,
        Self::Nullary,
        Self::BasicUnaryRegImm,
        Self::BasicBinaryRegRegImm,
        Self::MathBinaryRegRegImm,
        Self::TernaryRegImmRegRegImm,
        Self::JumpUnaryImm,
        Self::JumpUnaryReg,
        Self::JumpUnaryRegImm,
        Self::JumpUnaryCallRegImm,
        Self::JumpBinaryBrc,
        Self::JumpBinaryImmImm,
        Self::SendUnary,
        Self::SendBinary,
        Self::SyncUnary,
    ];

    /// Structural contract of the format.
    pub const fn shape(self) -> FormatShape {
        match self {
            Self::Invalid | Self::Nullary => FormatShape::new(false, &[]),
            Self::BasicUnaryRegImm => FormatShape::new(true, &[RegOrImm]),
            Self::BasicBinaryRegRegImm => FormatShape::new(true, &[Reg, RegOrImm]),
            Self::MathBinaryRegRegImm => FormatShape::new(true, &[Reg, RegOrImm])
                .with_min_srcs(1)
                .with_subfunction(Subfunction::Math),
            Self::TernaryRegImmRegRegImm => FormatShape::new(true, &[RegOrImm, Reg, RegOrImm]),
            Self::JumpUnaryImm => FormatShape::new(false, &[]).with_jip(),
            Self::JumpUnaryReg => FormatShape::new(false, &[Reg]),
            Self::JumpUnaryRegImm => FormatShape::new(false, &[RegOrImm]),
            Self::JumpUnaryCallRegImm => FormatShape::new(true, &[]).with_jip(),
            Self::JumpBinaryBrc => FormatShape::new(false, &[RegOrImm]).with_uip(),
            Self::JumpBinaryImmImm => FormatShape::new(false, &[]).with_jip().with_uip(),
            Self::SendUnary => {
                FormatShape::new(true, &[Reg]).with_subfunction(Subfunction::Send)
            }
            Self::SendBinary => {
                FormatShape::new(true, &[Reg, Reg]).with_subfunction(Subfunction::Send)
            }
            Self::SyncUnary => FormatShape::new(true, &[Reg]),
        }
    }

    /// Width of the native encoding in bytes (0 for the placeholder).
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Invalid => 0,
            _ => 16,
        }
    }

    /// Returns `true` for the branch and call formats.
    pub const fn is_jump(self) -> bool {
        matches!(
            self,
            Self::JumpUnaryImm
                | Self::JumpUnaryReg
                | Self::JumpUnaryRegImm
                | Self::JumpUnaryCallRegImm
                | Self::JumpBinaryBrc
                | Self::JumpBinaryImmImm
        )
    }

    /// Returns `true` for the message formats.
    pub const fn is_send(self) -> bool {
        matches!(self, Self::SendUnary | Self::SendBinary)
    }

    /// Upper-case table name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Nullary => "NULLARY",
            Self::BasicUnaryRegImm => "BASIC_UNARY_REGIMM",
            Self::BasicBinaryRegRegImm => "BASIC_BINARY_REG_REGIMM",
            Self::MathBinaryRegRegImm => "MATH_BINARY_REG_REGIMM",
            Self::TernaryRegImmRegRegImm => "TERNARY_REGIMM_REG_REGIMM",
            Self::JumpUnaryImm => "JUMP_UNARY_IMM",
            Self::JumpUnaryReg => "JUMP_UNARY_REG",
            Self::JumpUnaryRegImm => "JUMP_UNARY_REGIMM",
            Self::JumpUnaryCallRegImm => "JUMP_UNARY_CALL_REGIMM",
            Self::JumpBinaryBrc => "JUMP_BINARY_BRC",
            Self::JumpBinaryImmImm => "JUMP_BINARY_IMM_IMM",
            Self::SendUnary => "SEND_UNARY",
            Self::SendBinary => "SEND_BINARY",
            Self::SyncUnary => "SYNC_UNARY",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
