//! Native instruction encoder.
//!
//! Encoding always validates first, so every word produced here is legal for
//! its platform. Packing then walks the format's layout:
//! 1. **Header:** opcode, predicate, exec size, function control, flags.
//! 2. **Operands:** destination and sources in the basic or three-source
//!    layout.
//! 3. **Control words:** jump targets or message descriptors.
//!
//! No value is ever truncated: anything that does not fit its field is an
//! [`IsaError::OperandOutOfRange`].

use std::fmt;

use tracing::trace;

use crate::common::error::IsaError;
use crate::isa::format::{Format, Subfunction};
use crate::isa::instruction::{DstOperand, Instruction, Operand, OperandKind, RegFile, RegRef};
use crate::isa::layout::{
    self, FILE_ARF, FILE_GRF, FILE_IMM, Field, MAX_GRF, OperandFields, Word, basic, header, jump,
    send, ternary,
};
use crate::isa::opspec::OpSpec;
use crate::isa::resolver;
use crate::isa::types::DataType;
use crate::isa::validate::validate;

/// One encoded native instruction: 16 little-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding {
    bytes: [u8; Self::LEN],
}

impl Encoding {
    /// Size of a native instruction in bytes.
    pub const LEN: usize = 16;

    /// Wraps a 128-bit word.
    pub const fn from_word(word: u128) -> Self {
        Self {
            bytes: word.to_le_bytes(),
        }
    }

    /// Copies the first [`Encoding::LEN`] bytes of `bytes`, if there are
    /// that many.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::LEN] = bytes.get(..Self::LEN)?.try_into().ok()?;
        Some(Self { bytes })
    }

    /// The instruction as a 128-bit word.
    pub const fn word(&self) -> u128 {
        u128::from_le_bytes(self.bytes)
    }

    /// The instruction bytes.
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Encoding {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoding({:#034x})", self.word())
    }
}

/// Space-separated hex bytes in memory order.
impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Validates and encodes `inst` in its platform's native form.
///
/// # Errors
///
/// Any error from [`validate`], plus [`IsaError::OperandOutOfRange`] when a
/// register, sub-register, flag register or immediate does not fit its
/// field, and [`IsaError::OperandShape`] when an operand type has no code in
/// the slot it occupies.
pub fn encode(inst: &Instruction) -> Result<Encoding, IsaError> {
    let _ = validate(inst)?;
    let spec = resolver::lookup(inst.platform, inst.op);
    let mut w = Word::default();
    encode_header(&mut w, spec, inst)?;
    let packer = Packer { spec, inst };
    packer.operands(&mut w)?;
    let encoding = Encoding::from_word(w.0);
    trace!(op = %inst.op, platform = %inst.platform, word = ?encoding, "encoded");
    Ok(encoding)
}

fn encode_header(w: &mut Word, spec: &OpSpec, inst: &Instruction) -> Result<(), IsaError> {
    w.put(header::OPCODE, u64::from(spec.opcode))?;
    if let Some(pred) = inst.predicate {
        w.put(header::PRED_CTRL, u64::from(pred.ctrl.code()))?;
        w.set_flag(header::PRED_INV, pred.inverse);
    }
    w.put(header::EXEC_SIZE, u64::from(inst.exec_size.log2()))?;
    let function = match spec.format.shape().subfunction {
        Subfunction::None => inst.flag_modifier.map_or(0, |m| m.code()),
        Subfunction::Math => inst.math_function.map_or(0, |m| m.code()),
        Subfunction::Send => inst.send.map_or(0, |s| s.sfid.code()),
    };
    w.put(header::COND_MOD, u64::from(function))?;
    w.set_flag(header::BRANCH_CTRL, inst.branch_control);
    w.set_flag(header::SATURATE, inst.saturate);
    w.put(header::FLAG_SUBREG, u64::from(inst.flag_reg.subreg))?;
    w.put(header::FLAG_REG, u64::from(inst.flag_reg.reg))?;
    w.set_flag(header::NO_MASK, inst.no_mask);
    Ok(())
}

/// Where a source immediate lands in the basic layout.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ImmSlot {
    /// `[127:96]`; 64-bit immediates do not fit.
    High32,
    /// `[127:64]` for 64-bit types, otherwise `[127:96]`.
    High64,
    /// `[95:64]`; 64-bit immediates do not fit.
    Low32,
}

struct Packer<'a> {
    spec: &'a OpSpec,
    inst: &'a Instruction,
}

impl Packer<'_> {
    fn shape_error(&self, reason: impl Into<String>) -> IsaError {
        IsaError::OperandShape {
            op: self.inst.op,
            platform: self.inst.platform,
            reason: reason.into(),
        }
    }

    fn src(&self, i: usize) -> Result<&Operand, IsaError> {
        self.inst
            .srcs
            .get(i)
            .ok_or_else(|| self.shape_error(format!("missing src{i}")))
    }

    fn dst(&self) -> Result<DstOperand, IsaError> {
        self.inst
            .dst
            .ok_or_else(|| self.shape_error("missing destination"))
    }

    fn operands(&self, w: &mut Word) -> Result<(), IsaError> {
        let inst = self.inst;
        match self.spec.format {
            Format::Invalid => Err(self.shape_error("placeholder slot")),
            Format::Nullary => Ok(()),
            Format::BasicUnaryRegImm => {
                put_dst(w, self.dst()?)?;
                self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::High64)
            }
            Format::BasicBinaryRegRegImm | Format::MathBinaryRegRegImm => {
                put_dst(w, self.dst()?)?;
                self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::High32)?;
                match inst.srcs.get(1) {
                    Some(src1) => self.put_src(w, &basic::SRC1, src1, ImmSlot::High32),
                    None => Ok(()),
                }
            }
            Format::SyncUnary => {
                put_dst(w, self.dst()?)?;
                self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::High32)
            }
            Format::JumpUnaryReg | Format::JumpUnaryRegImm => {
                self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::High64)
            }
            Format::JumpUnaryImm => self.put_target(w, jump::HIGH, inst.jip),
            Format::JumpUnaryCallRegImm => {
                put_dst(w, self.dst()?)?;
                self.put_target(w, jump::HIGH, inst.jip)
            }
            Format::JumpBinaryImmImm => {
                self.put_target(w, jump::LOW, inst.jip)?;
                self.put_target(w, jump::HIGH.named("uip"), inst.uip)
            }
            Format::JumpBinaryBrc => {
                self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::Low32)?;
                self.put_target(w, jump::HIGH.named("uip"), inst.uip)
            }
            Format::SendUnary | Format::SendBinary => self.put_send(w),
            Format::TernaryRegImmRegRegImm => self.put_ternary(w),
        }
    }

    fn put_src(
        &self,
        w: &mut Word,
        fields: &OperandFields,
        src: &Operand,
        slot: ImmSlot,
    ) -> Result<(), IsaError> {
        match src.kind {
            OperandKind::Register(reg) => {
                put_reg(w, fields, reg)?;
                w.put(fields.ty, layout::reg_type_code(src.ty))?;
                if let Some(abs) = fields.abs {
                    w.set_flag(abs, src.mods.abs);
                }
                if let Some(neg) = fields.neg {
                    w.set_flag(neg, src.mods.neg);
                }
                Ok(())
            }
            OperandKind::Immediate(raw) => {
                let code = layout::imm_type_code(src.ty).ok_or_else(|| {
                    self.shape_error(format!("{} immediates are not encodable", src.ty))
                })?;
                w.put(fields.file, FILE_IMM)?;
                w.put(fields.ty, code)?;
                put_immediate(w, fields.name, src.ty, raw, slot)
            }
        }
    }

    fn put_send(&self, w: &mut Word) -> Result<(), IsaError> {
        let inst = self.inst;
        let desc = inst
            .send
            .ok_or_else(|| self.shape_error("missing message descriptor"))?;
        put_dst(w, self.dst()?)?;
        self.put_src(w, &basic::SRC0, self.src(0)?, ImmSlot::High32)?;
        if self.spec.format == Format::SendBinary {
            let reg = self
                .src(1)?
                .register()
                .ok_or_else(|| self.shape_error("src1 must be a register"))?;
            let num = layout::check_max(send::SRC1_REG.name, u64::from(reg.num), MAX_GRF, 7)?;
            w.put(send::SRC1_REG, num)?;
        }
        w.put(send::EX_DESC, u64::from(desc.ex_desc))?;
        w.put(send::DESC, u64::from(desc.desc))
    }

    fn put_ternary(&self, w: &mut Word) -> Result<(), IsaError> {
        let dst = self.dst()?;
        let dst_code = self.ternary_type(dst.ty)?;
        w.put(ternary::DST_TYPE, dst_code)?;
        w.put(ternary::DST_SUBREG, u64::from(dst.reg.subreg))?;
        let num = layout::check_max(ternary::DST_REG.name, u64::from(dst.reg.num), MAX_GRF, 7)?;
        w.put(ternary::DST_REG, num)?;

        for (i, src) in self.inst.srcs.iter().enumerate().take(3) {
            w.put(ternary::SRC_TYPE[i], self.ternary_type(src.ty)?)?;
            w.set_flag(ternary::SRC_ABS[i], src.mods.abs);
            w.set_flag(ternary::SRC_NEG[i], src.mods.neg);
            let slot = ternary::SRC_SLOT[i];
            let bits = match src.kind {
                OperandKind::Register(reg) => {
                    let mut packed = Word::default();
                    packed.put(ternary::SLOT_SUBREG.named(slot.name), u64::from(reg.subreg))?;
                    let num = layout::check_max(slot.name, u64::from(reg.num), MAX_GRF, 7)?;
                    packed.put(ternary::SLOT_REG.named(slot.name), num)?;
                    packed.0 as u64
                }
                OperandKind::Immediate(raw) => {
                    match i {
                        0 => w.set_flag(ternary::SRC0_IMM, true),
                        2 => w.set_flag(ternary::SRC2_IMM, true),
                        _ => return Err(self.shape_error("src1 must be a register")),
                    }
                    ternary_immediate(slot.name, src.ty, raw)?
                }
            };
            w.put(slot, bits)?;
        }
        Ok(())
    }

    fn put_target(&self, w: &mut Word, field: Field, target: Option<i32>) -> Result<(), IsaError> {
        let target = target.ok_or_else(|| self.shape_error(format!("missing {}", field.name)))?;
        w.put(field, u64::from(target as u32))
    }

    fn ternary_type(&self, ty: DataType) -> Result<u64, IsaError> {
        layout::ternary_type_code(ty)
            .ok_or_else(|| self.shape_error(format!("type {ty} has no three-source encoding")))
    }
}

fn put_reg(w: &mut Word, fields: &OperandFields, reg: RegRef) -> Result<(), IsaError> {
    let (file, num) = match reg.file {
        RegFile::Arf => (FILE_ARF, u64::from(reg.num)),
        RegFile::Grf => (
            FILE_GRF,
            layout::check_max(fields.reg.name, u64::from(reg.num), MAX_GRF, 7)?,
        ),
    };
    w.put(fields.file, file)?;
    w.put(fields.subreg, u64::from(reg.subreg))?;
    w.put(fields.reg, num)
}

fn put_dst(w: &mut Word, dst: DstOperand) -> Result<(), IsaError> {
    put_reg(w, &basic::DST, dst.reg)?;
    w.put(basic::DST.ty, layout::reg_type_code(dst.ty))
}

/// Rejects immediates wider than their own type.
fn check_immediate(field: &'static str, ty: DataType, raw: u64) -> Result<u64, IsaError> {
    let max = if ty.bits() >= 64 {
        u64::MAX
    } else {
        (1 << ty.bits()) - 1
    };
    layout::check_max(field, raw, max, ty.bits())
}

fn put_immediate(
    w: &mut Word,
    field: &'static str,
    ty: DataType,
    raw: u64,
    slot: ImmSlot,
) -> Result<(), IsaError> {
    let raw = check_immediate(field, ty, raw)?;
    if ty.bits() == 64 {
        return match slot {
            ImmSlot::High64 => w.put(basic::IMM64, raw),
            ImmSlot::High32 | ImmSlot::Low32 => Err(IsaError::OperandOutOfRange {
                field,
                value: raw,
                bits: 32,
            }),
        };
    }
    // 16-bit immediates are replicated in both halves of the dword.
    let dword = if ty.bits() == 16 { raw | (raw << 16) } else { raw };
    match slot {
        ImmSlot::High32 | ImmSlot::High64 => w.put(basic::IMM32, dword),
        ImmSlot::Low32 => w.put(jump::LOW.named(field), dword),
    }
}

/// Packs a three-source immediate into its 16-bit slot.
fn ternary_immediate(field: &'static str, ty: DataType, raw: u64) -> Result<u64, IsaError> {
    let raw = check_immediate(field, ty, raw)?;
    match ty {
        DataType::D => {
            let value = raw as u32 as i32;
            if i16::try_from(value).is_ok() {
                Ok(u64::from(value as u16))
            } else {
                Err(IsaError::OperandOutOfRange {
                    field,
                    value: raw,
                    bits: 16,
                })
            }
        }
        DataType::Ud | DataType::Hf => layout::check_max(field, raw, u64::from(u16::MAX), 16),
        _ => Err(IsaError::OperandOutOfRange {
            field,
            value: raw,
            bits: 16,
        }),
    }
}
