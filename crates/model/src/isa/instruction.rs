//! Instruction model.
//!
//! An [`Instruction`] is the transient, generation-tagged description of one
//! machine instruction handed to the validator and encoder, and produced by
//! the decoder. It carries:
//! 1. **Header controls:** execution size, predicate, flag register, flag
//!    modifier, saturation, branch control and the no-mask bit.
//! 2. **Operands:** an optional destination register and up to three typed
//!    sources, each a register or an immediate.
//! 3. **Format controls:** math function, message descriptor and jump
//!    targets, present only for the formats that use them.

use std::fmt;

use crate::isa::attrs::Attr;
use crate::isa::op::Op;
use crate::isa::opspec::OpSpec;
use crate::isa::platform::Platform;
use crate::isa::resolver;
use crate::isa::types::DataType;

// ── Registers and operands ───────────────────────────────────────────────────

/// Register file an operand lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegFile {
    /// Architecture register file (`null`, `a0`, `acc0`, `f0`, `n0`, ...).
    Arf,
    /// General register file.
    Grf,
}

/// A register reference: file, register number and byte sub-register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegRef {
    /// Register file.
    pub file: RegFile,
    /// Register number. For the ARF the high nibble selects the register kind.
    pub num: u8,
    /// Byte offset inside the register.
    pub subreg: u8,
}

impl RegRef {
    /// The `null` architecture register.
    pub const NULL: Self = Self::arf(0x00, 0);

    /// GRF register `r{num}.{subreg}`.
    pub const fn grf(num: u8, subreg: u8) -> Self {
        Self {
            file: RegFile::Grf,
            num,
            subreg,
        }
    }

    /// Architecture register with raw number `num`.
    pub const fn arf(num: u8, subreg: u8) -> Self {
        Self {
            file: RegFile::Arf,
            num,
            subreg,
        }
    }

    /// Returns `true` for the `null` register.
    pub const fn is_null(self) -> bool {
        matches!(self.file, RegFile::Arf) && self.num == 0
    }
}

/// Negate and absolute-value source modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SrcMods {
    /// Arithmetic or logical negation.
    pub neg: bool,
    /// Absolute value.
    pub abs: bool,
}

impl SrcMods {
    /// No modifier.
    pub const NONE: Self = Self {
        neg: false,
        abs: false,
    };

    /// Returns `true` when either modifier is set.
    pub const fn any(self) -> bool {
        self.neg || self.abs
    }
}

/// Where a source operand's value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// A register region.
    Register(RegRef),
    /// An immediate, as raw bits in the width of the operand type
    /// (e.g. `-1:d` is `0xffff_ffff`).
    Immediate(u64),
}

/// A typed source operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operand {
    /// Operand data type.
    pub ty: DataType,
    /// Register or immediate value.
    pub kind: OperandKind,
    /// Source modifiers.
    pub mods: SrcMods,
}

impl Operand {
    /// Register source.
    pub const fn reg(ty: DataType, reg: RegRef) -> Self {
        Self {
            ty,
            kind: OperandKind::Register(reg),
            mods: SrcMods::NONE,
        }
    }

    /// GRF register source `r{num}.{subreg}`.
    pub const fn grf(ty: DataType, num: u8, subreg: u8) -> Self {
        Self::reg(ty, RegRef::grf(num, subreg))
    }

    /// Immediate source.
    pub const fn imm(ty: DataType, raw: u64) -> Self {
        Self {
            ty,
            kind: OperandKind::Immediate(raw),
            mods: SrcMods::NONE,
        }
    }

    /// Sets the negate modifier.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.mods.neg = true;
        self
    }

    /// Sets the absolute-value modifier.
    #[must_use]
    pub const fn absolute(mut self) -> Self {
        self.mods.abs = true;
        self
    }

    /// Returns `true` for immediates.
    pub const fn is_immediate(&self) -> bool {
        matches!(self.kind, OperandKind::Immediate(_))
    }

    /// Register reference, if the operand is a register.
    pub const fn register(&self) -> Option<RegRef> {
        match self.kind {
            OperandKind::Register(reg) => Some(reg),
            OperandKind::Immediate(_) => None,
        }
    }
}

/// A typed destination register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DstOperand {
    /// Destination data type.
    pub ty: DataType,
    /// Destination register.
    pub reg: RegRef,
}

impl DstOperand {
    /// Destination register.
    pub const fn new(ty: DataType, reg: RegRef) -> Self {
        Self { ty, reg }
    }

    /// GRF destination `r{num}.{subreg}`.
    pub const fn grf(ty: DataType, num: u8, subreg: u8) -> Self {
        Self::new(ty, RegRef::grf(num, subreg))
    }
}

// ── Header controls ──────────────────────────────────────────────────────────

/// Number of SIMD channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExecSize {
    /// One channel.
    #[default]
    Simd1,
    /// Two channels.
    Simd2,
    /// Four channels.
    Simd4,
    /// Eight channels.
    Simd8,
    /// Sixteen channels.
    Simd16,
    /// Thirty-two channels.
    Simd32,
}

impl ExecSize {
    /// Every execution size, narrowest first.
    pub const ALL: [Self; 6] = [
        Self::Simd1,
        Self::Simd2,
        Self::Simd4,
        Self::Simd8,
        Self::Simd16,
        Self::Simd32,
    ];

    /// Channel count.
    pub const fn lanes(self) -> u32 {
        1 << self.log2()
    }

    /// Base-two logarithm of the channel count (the encoded value).
    pub const fn log2(self) -> u32 {
        self as u32
    }

    /// Inverse of [`ExecSize::log2`].
    pub const fn from_log2(log2: u32) -> Option<Self> {
        match log2 {
            0 => Some(Self::Simd1),
            1 => Some(Self::Simd2),
            2 => Some(Self::Simd4),
            3 => Some(Self::Simd8),
            4 => Some(Self::Simd16),
            5 => Some(Self::Simd32),
            _ => None,
        }
    }

    /// Execution size for a channel count, if it is a supported power of two.
    pub const fn from_lanes(lanes: u32) -> Option<Self> {
        if lanes.is_power_of_two() {
            Self::from_log2(lanes.trailing_zeros())
        } else {
            None
        }
    }
}

/// Flag register `f{reg}.{subreg}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlagReg {
    /// Flag register number (0 or 1).
    pub reg: u8,
    /// Flag sub-register (0 or 1).
    pub subreg: u8,
}

impl FlagReg {
    /// `f0.0`
    pub const F0_0: Self = Self::new(0, 0);

    /// Flag register `f{reg}.{subreg}`.
    pub const fn new(reg: u8, subreg: u8) -> Self {
        Self { reg, subreg }
    }
}

impl fmt::Display for FlagReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}.{}", self.reg, self.subreg)
    }
}

/// How a predicate combines flag bits across channel groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredCtrl {
    /// One flag bit per channel.
    Normal,
    /// Any of each 2-channel group.
    Any2h,
    /// All of each 2-channel group.
    All2h,
    /// Any of each 4-channel group.
    Any4h,
    /// All of each 4-channel group.
    All4h,
    /// Any of each 8-channel group.
    Any8h,
    /// All of each 8-channel group.
    All8h,
    /// Any of each 16-channel group.
    Any16h,
    /// All of each 16-channel group.
    All16h,
    /// Any of each 32-channel group.
    Any32h,
    /// All of each 32-channel group.
    All32h,
}

impl PredCtrl {
    /// Every predicate control.
    pub const ALL: [Self; 11] = [
        Self::Normal,
        Self::Any2h,
        Self::All2h,
        Self::Any4h,
        Self::All4h,
        Self::Any8h,
        Self::All8h,
        Self::Any16h,
        Self::All16h,
        Self::Any32h,
        Self::All32h,
    ];

    /// Encoded value (0 means "no predicate").
    pub const fn code(self) -> u32 {
        self as u32 + 1
    }

    /// Inverse of [`PredCtrl::code`]; `None` for 0 and reserved values.
    pub const fn from_code(code: u32) -> Option<Self> {
        if code == 0 || code as usize > Self::ALL.len() {
            None
        } else {
            Some(Self::ALL[code as usize - 1])
        }
    }

    /// Assembly suffix (empty for [`PredCtrl::Normal`]).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Any2h => ".any2h",
            Self::All2h => ".all2h",
            Self::Any4h => ".any4h",
            Self::All4h => ".all4h",
            Self::Any8h => ".any8h",
            Self::All8h => ".all8h",
            Self::Any16h => ".any16h",
            Self::All16h => ".all16h",
            Self::Any32h => ".any32h",
            Self::All32h => ".all32h",
        }
    }
}

/// Instruction predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    /// Channel-group combination.
    pub ctrl: PredCtrl,
    /// Invert the predicate.
    pub inverse: bool,
}

impl Predicate {
    /// Plain per-channel predicate.
    pub const NORMAL: Self = Self {
        ctrl: PredCtrl::Normal,
        inverse: false,
    };
}

/// Condition modifier writing a flag register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlagModifier {
    /// Zero / equal.
    Eq,
    /// Not zero / not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Overflow.
    Ov,
    /// Unordered (NaN).
    Un,
}

impl FlagModifier {
    /// Every condition modifier.
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::Ov,
        Self::Un,
    ];

    /// Encoded value (0 means "no modifier"; 7 is reserved).
    pub const fn code(self) -> u32 {
        match self {
            Self::Eq => 1,
            Self::Ne => 2,
            Self::Gt => 3,
            Self::Ge => 4,
            Self::Lt => 5,
            Self::Le => 6,
            Self::Ov => 8,
            Self::Un => 9,
        }
    }

    /// Inverse of [`FlagModifier::code`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Eq),
            2 => Some(Self::Ne),
            3 => Some(Self::Gt),
            4 => Some(Self::Ge),
            5 => Some(Self::Lt),
            6 => Some(Self::Le),
            8 => Some(Self::Ov),
            9 => Some(Self::Un),
            _ => None,
        }
    }

    /// Assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "ze",
            Self::Ne => "nz",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Ov => "ov",
            Self::Un => "un",
        }
    }
}

// ── Format controls ──────────────────────────────────────────────────────────

/// Extended math function selected by `math`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathFunction {
    /// Reciprocal.
    Inv,
    /// Base-2 logarithm.
    Log,
    /// Base-2 exponent.
    Exp,
    /// Square root.
    Sqrt,
    /// Reciprocal square root.
    Rsqt,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Floating-point divide.
    Fdiv,
    /// Power.
    Pow,
    /// Integer divide (quotient and remainder).
    Idiv,
    /// Integer quotient.
    Iqot,
    /// Integer remainder.
    Irem,
    /// IEEE reciprocal macro step.
    Invm,
    /// IEEE reciprocal square root macro step.
    Rsqtm,
}

impl MathFunction {
    /// Every math function.
    pub const ALL: [Self; 14] = [
        Self::Inv,
        Self::Log,
        Self::Exp,
        Self::Sqrt,
        Self::Rsqt,
        Self::Sin,
        Self::Cos,
        Self::Fdiv,
        Self::Pow,
        Self::Idiv,
        Self::Iqot,
        Self::Irem,
        Self::Invm,
        Self::Rsqtm,
    ];

    /// Encoded function control (0 and 8 are reserved).
    pub const fn code(self) -> u32 {
        match self {
            Self::Inv => 1,
            Self::Log => 2,
            Self::Exp => 3,
            Self::Sqrt => 4,
            Self::Rsqt => 5,
            Self::Sin => 6,
            Self::Cos => 7,
            Self::Fdiv => 9,
            Self::Pow => 10,
            Self::Idiv => 11,
            Self::Iqot => 12,
            Self::Irem => 13,
            Self::Invm => 14,
            Self::Rsqtm => 15,
        }
    }

    /// Inverse of [`MathFunction::code`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Inv),
            2 => Some(Self::Log),
            3 => Some(Self::Exp),
            4 => Some(Self::Sqrt),
            5 => Some(Self::Rsqt),
            6 => Some(Self::Sin),
            7 => Some(Self::Cos),
            9 => Some(Self::Fdiv),
            10 => Some(Self::Pow),
            11 => Some(Self::Idiv),
            12 => Some(Self::Iqot),
            13 => Some(Self::Irem),
            14 => Some(Self::Invm),
            15 => Some(Self::Rsqtm),
            _ => None,
        }
    }

    /// Number of source operands the function reads.
    pub const fn arity(self) -> usize {
        match self {
            Self::Fdiv | Self::Pow | Self::Idiv | Self::Iqot | Self::Irem | Self::Invm => 2,
            _ => 1,
        }
    }

    /// Assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inv => "inv",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Rsqt => "rsqt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Fdiv => "fdiv",
            Self::Pow => "pow",
            Self::Idiv => "idiv",
            Self::Iqot => "iqot",
            Self::Irem => "irem",
            Self::Invm => "invm",
            Self::Rsqtm => "rsqtm",
        }
    }
}

/// Shared function unit a message is sent to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SharedFunction {
    /// Null function.
    Null,
    /// Sampler.
    Sampler,
    /// Message gateway.
    Gateway,
    /// Data cache, second port.
    Dc2,
    /// Render cache.
    Rc,
    /// Unified return buffer.
    Urb,
    /// Thread spawner.
    Spawner,
    /// Video motion estimation.
    Vme,
    /// Constant cache (data cache read-only).
    Dccro,
    /// Data cache, port 0.
    Dc0,
    /// Pixel interpolator.
    Pixi,
    /// Data cache, port 1.
    Dc1,
    /// Check and refinement engine.
    Cre,
}

impl SharedFunction {
    /// Every shared function.
    pub const ALL: [Self; 13] = [
        Self::Null,
        Self::Sampler,
        Self::Gateway,
        Self::Dc2,
        Self::Rc,
        Self::Urb,
        Self::Spawner,
        Self::Vme,
        Self::Dccro,
        Self::Dc0,
        Self::Pixi,
        Self::Dc1,
        Self::Cre,
    ];

    /// Encoded SFID (1, 14 and 15 are reserved).
    pub const fn code(self) -> u32 {
        match self {
            Self::Null => 0,
            Self::Sampler => 2,
            Self::Gateway => 3,
            Self::Dc2 => 4,
            Self::Rc => 5,
            Self::Urb => 6,
            Self::Spawner => 7,
            Self::Vme => 8,
            Self::Dccro => 9,
            Self::Dc0 => 10,
            Self::Pixi => 11,
            Self::Dc1 => 12,
            Self::Cre => 13,
        }
    }

    /// Inverse of [`SharedFunction::code`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Null),
            2 => Some(Self::Sampler),
            3 => Some(Self::Gateway),
            4 => Some(Self::Dc2),
            5 => Some(Self::Rc),
            6 => Some(Self::Urb),
            7 => Some(Self::Spawner),
            8 => Some(Self::Vme),
            9 => Some(Self::Dccro),
            10 => Some(Self::Dc0),
            11 => Some(Self::Pixi),
            12 => Some(Self::Dc1),
            13 => Some(Self::Cre),
            _ => None,
        }
    }

    /// Assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Sampler => "sampler",
            Self::Gateway => "gateway",
            Self::Dc2 => "dc2",
            Self::Rc => "rc",
            Self::Urb => "urb",
            Self::Spawner => "ts",
            Self::Vme => "vme",
            Self::Dccro => "dcro",
            Self::Dc0 => "dc0",
            Self::Pixi => "pixi",
            Self::Dc1 => "dc1",
            Self::Cre => "cre",
        }
    }
}

/// Message descriptor carried by `send`-family instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SendDescriptor {
    /// Target shared function.
    pub sfid: SharedFunction,
    /// Message descriptor immediate.
    pub desc: u32,
    /// Extended message descriptor (low byte).
    pub ex_desc: u8,
}

// ── Modifiers ────────────────────────────────────────────────────────────────

/// An optional instruction modifier gated by an [`Attr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// A predicate guards the instruction.
    Predicate,
    /// A condition modifier updates a flag register.
    FlagModifier,
    /// The destination is saturated.
    Saturate,
    /// A source carries a negate or absolute-value modifier.
    SourceModifier,
    /// The branch-control bit is set.
    BranchControl,
}

impl Modifier {
    /// The attribute an operation must carry to accept this modifier.
    pub const fn required_attr(self) -> Attr {
        match self {
            Self::Predicate => Attr::Predication,
            Self::FlagModifier => Attr::FlagModifier,
            Self::Saturate => Attr::Saturation,
            Self::SourceModifier => Attr::SrcMods,
            Self::BranchControl => Attr::BranchControl,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Predicate => "predication",
            Self::FlagModifier => "flag modifiers",
            Self::Saturate => "saturation",
            Self::SourceModifier => "source modifiers",
            Self::BranchControl => "branch control",
        })
    }
}

// ── Instruction ──────────────────────────────────────────────────────────────

/// One machine instruction, tagged with its target platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation.
    pub op: Op,
    /// Hardware generation the instruction targets.
    pub platform: Platform,
    /// SIMD width.
    pub exec_size: ExecSize,
    /// Execute on all channels regardless of the dispatch mask.
    pub no_mask: bool,
    /// Flag register read by the predicate and written by the modifier.
    pub flag_reg: FlagReg,
    /// Optional predicate.
    pub predicate: Option<Predicate>,
    /// Optional condition modifier.
    pub flag_modifier: Option<FlagModifier>,
    /// Saturate the destination.
    pub saturate: bool,
    /// Branch-control bit.
    pub branch_control: bool,
    /// Math function, for `math`.
    pub math_function: Option<MathFunction>,
    /// Message descriptor, for the `send` family.
    pub send: Option<SendDescriptor>,
    /// Destination register.
    pub dst: Option<DstOperand>,
    /// Source operands in operand order.
    pub srcs: Vec<Operand>,
    /// Jump target offset in bytes.
    pub jip: Option<i32>,
    /// Jump target of the enclosing construct, in bytes.
    pub uip: Option<i32>,
}

impl Instruction {
    /// An instruction with no operands and every control at its default.
    pub const fn new(platform: Platform, op: Op) -> Self {
        Self {
            op,
            platform,
            exec_size: ExecSize::Simd1,
            no_mask: false,
            flag_reg: FlagReg::F0_0,
            predicate: None,
            flag_modifier: None,
            saturate: false,
            branch_control: false,
            math_function: None,
            send: None,
            dst: None,
            srcs: Vec::new(),
            jip: None,
            uip: None,
        }
    }

    /// Sets the destination.
    #[must_use]
    pub const fn with_dst(mut self, dst: DstOperand) -> Self {
        self.dst = Some(dst);
        self
    }

    /// Appends a source operand.
    #[must_use]
    pub fn with_src(mut self, src: Operand) -> Self {
        self.srcs.push(src);
        self
    }

    /// Sets the execution size.
    #[must_use]
    pub const fn with_exec_size(mut self, exec_size: ExecSize) -> Self {
        self.exec_size = exec_size;
        self
    }

    /// Sets the predicate.
    #[must_use]
    pub const fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the condition modifier and the flag register it writes.
    #[must_use]
    pub const fn with_flag_modifier(mut self, modifier: FlagModifier, flag_reg: FlagReg) -> Self {
        self.flag_modifier = Some(modifier);
        self.flag_reg = flag_reg;
        self
    }

    /// Sets the flag register.
    #[must_use]
    pub const fn with_flag_reg(mut self, flag_reg: FlagReg) -> Self {
        self.flag_reg = flag_reg;
        self
    }

    /// Enables saturation.
    #[must_use]
    pub const fn saturated(mut self) -> Self {
        self.saturate = true;
        self
    }

    /// Sets the branch-control bit.
    #[must_use]
    pub const fn with_branch_control(mut self) -> Self {
        self.branch_control = true;
        self
    }

    /// Sets the no-mask bit.
    #[must_use]
    pub const fn with_no_mask(mut self) -> Self {
        self.no_mask = true;
        self
    }

    /// Sets the math function.
    #[must_use]
    pub const fn with_math_function(mut self, function: MathFunction) -> Self {
        self.math_function = Some(function);
        self
    }

    /// Sets the message descriptor.
    #[must_use]
    pub const fn with_send(mut self, send: SendDescriptor) -> Self {
        self.send = Some(send);
        self
    }

    /// Sets the jump target.
    #[must_use]
    pub const fn with_jip(mut self, jip: i32) -> Self {
        self.jip = Some(jip);
        self
    }

    /// Sets the enclosing-construct jump target.
    #[must_use]
    pub const fn with_uip(mut self, uip: i32) -> Self {
        self.uip = Some(uip);
        self
    }

    /// Live table entry for this instruction's operation and platform.
    pub fn spec(&self) -> Option<&'static OpSpec> {
        resolver::resolve(self.platform, self.op)
    }

    /// Destination type, if there is a destination.
    pub fn dst_type(&self) -> Option<DataType> {
        self.dst.map(|d| d.ty)
    }

    /// Source types in operand order.
    pub fn src_types(&self) -> Vec<DataType> {
        self.srcs.iter().map(|s| s.ty).collect()
    }

    /// Modifiers the instruction requests, in gating order.
    pub fn requested_modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        [
            (self.predicate.is_some(), Modifier::Predicate),
            (self.flag_modifier.is_some(), Modifier::FlagModifier),
            (self.saturate, Modifier::Saturate),
            (self.srcs.iter().any(|s| s.mods.any()), Modifier::SourceModifier),
            (self.branch_control, Modifier::BranchControl),
        ]
        .into_iter()
        .filter_map(|(requested, modifier)| requested.then_some(modifier))
    }
}
