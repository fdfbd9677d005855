//! Native instruction decoder.
//!
//! Decoding inverts [`encode`](crate::isa::encode::encode):
//! 1. **Framing:** at least [`Encoding::LEN`] bytes, native (uncompacted) form.
//! 2. **Opcode:** the opcode field must name exactly one live operation; its
//!    entry fixes the format.
//! 3. **Fields:** header, operands and control words are unpacked per format;
//!    unknown codes are malformed.
//! 4. **Legality:** the result is re-validated.
//! 5. **Canonical form:** re-encoding must reproduce the word bit for bit,
//!    which rejects set reserved bits and redundant encodings.

use tracing::trace;

use crate::common::error::IsaError;
use crate::isa::encode::{Encoding, encode};
use crate::isa::format::{Format, Subfunction};
use crate::isa::instruction::{
    DstOperand, ExecSize, FlagModifier, FlagReg, Instruction, MathFunction, Operand, OperandKind,
    PredCtrl, Predicate, RegRef, SendDescriptor, SharedFunction, SrcMods,
};
use crate::isa::layout::{
    self, FILE_ARF, FILE_GRF, FILE_IMM, OperandFields, Word, basic, header, jump, send, ternary,
};
use crate::isa::opspec::OpSpec;
use crate::isa::platform::Platform;
use crate::isa::resolver;
use crate::isa::types::DataType;
use crate::isa::validate::validate;

/// Decodes the native instruction at the start of `bytes`.
///
/// Only the first [`Encoding::LEN`] bytes are read.
///
/// # Errors
///
/// - [`IsaError::MalformedEncoding`] if `bytes` is too short, the word is in
///   compacted form, a field holds an unknown code, the decoded instruction
///   is illegal, or the word is not the canonical encoding of what it decodes
///   to.
/// - [`IsaError::UnknownOpcode`] if the opcode field names no live operation
///   on `platform`, or more than one.
pub fn decode(bytes: &[u8], platform: Platform) -> Result<Instruction, IsaError> {
    let encoding = Encoding::from_slice(bytes).ok_or_else(|| {
        IsaError::malformed(
            platform,
            format!("need {} bytes, got {}", Encoding::LEN, bytes.len()),
        )
    })?;
    let w = Word(encoding.word());
    if w.flag(header::COMPACTED) {
        return Err(IsaError::malformed(platform, "compacted form is not supported"));
    }

    let opcode = w.get(header::OPCODE) as u8;
    let op = match resolver::candidates(platform, opcode) {
        [op] => *op,
        _ => return Err(IsaError::UnknownOpcode { platform, opcode }),
    };
    let spec = resolver::lookup(platform, op);

    let unpacker = Unpacker { w, spec, platform };
    let mut inst = Instruction::new(platform, op);
    unpacker.header(&mut inst)?;
    unpacker.operands(&mut inst)?;

    let _ = validate(&inst).map_err(|e| IsaError::malformed(platform, format!("illegal: {e}")))?;
    let canonical = encode(&inst)
        .map_err(|e| IsaError::malformed(platform, format!("not re-encodable: {e}")))?;
    if canonical.word() != w.0 {
        return Err(IsaError::malformed(
            platform,
            format!(
                "non-canonical encoding (differs from {:#034x} in bits {:#034x})",
                canonical.word(),
                canonical.word() ^ w.0
            ),
        ));
    }
    trace!(%op, %platform, "decoded");
    Ok(inst)
}

struct Unpacker<'a> {
    w: Word,
    spec: &'a OpSpec,
    platform: Platform,
}

impl Unpacker<'_> {
    fn malformed(&self, reason: impl Into<String>) -> IsaError {
        IsaError::malformed(self.platform, reason)
    }

    fn header(&self, inst: &mut Instruction) -> Result<(), IsaError> {
        let w = self.w;
        let pred_code = w.get(header::PRED_CTRL) as u32;
        if pred_code != 0 {
            let ctrl = PredCtrl::from_code(pred_code)
                .ok_or_else(|| self.malformed(format!("predicate control {pred_code}")))?;
            inst.predicate = Some(Predicate {
                ctrl,
                inverse: w.flag(header::PRED_INV),
            });
        }
        let exec = w.get(header::EXEC_SIZE) as u32;
        inst.exec_size = ExecSize::from_log2(exec)
            .ok_or_else(|| self.malformed(format!("execution size code {exec}")))?;

        let function = w.get(header::COND_MOD) as u32;
        match self.spec.format.shape().subfunction {
            Subfunction::None if function != 0 => {
                inst.flag_modifier = Some(
                    FlagModifier::from_code(function)
                        .ok_or_else(|| self.malformed(format!("condition modifier {function}")))?,
                );
            }
            Subfunction::None => {}
            Subfunction::Math => {
                inst.math_function = Some(
                    MathFunction::from_code(function)
                        .ok_or_else(|| self.malformed(format!("math function {function}")))?,
                );
            }
            Subfunction::Send => {
                let sfid = SharedFunction::from_code(function)
                    .ok_or_else(|| self.malformed(format!("shared function id {function}")))?;
                inst.send = Some(SendDescriptor {
                    sfid,
                    desc: w.get(send::DESC) as u32,
                    ex_desc: w.get(send::EX_DESC) as u8,
                });
            }
        }

        inst.branch_control = w.flag(header::BRANCH_CTRL);
        inst.saturate = w.flag(header::SATURATE);
        inst.flag_reg = FlagReg::new(
            w.get(header::FLAG_REG) as u8,
            w.get(header::FLAG_SUBREG) as u8,
        );
        inst.no_mask = w.flag(header::NO_MASK);
        Ok(())
    }

    fn operands(&self, inst: &mut Instruction) -> Result<(), IsaError> {
        match self.spec.format {
            Format::Invalid => return Err(self.malformed("placeholder slot")),
            Format::Nullary => {}
            Format::BasicUnaryRegImm => {
                inst.dst = Some(self.dst()?);
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High64)?);
            }
            Format::BasicBinaryRegRegImm | Format::MathBinaryRegRegImm => {
                inst.dst = Some(self.dst()?);
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High32)?);
                let arity = inst.math_function.map_or(2, MathFunction::arity);
                if arity == 2 {
                    inst.srcs.push(self.src(&basic::SRC1, ImmPos::High32)?);
                }
            }
            Format::SyncUnary => {
                inst.dst = Some(self.dst()?);
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High32)?);
            }
            Format::JumpUnaryReg | Format::JumpUnaryRegImm => {
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High64)?);
            }
            Format::JumpUnaryImm => inst.jip = Some(self.target(jump::HIGH)),
            Format::JumpUnaryCallRegImm => {
                inst.dst = Some(self.dst()?);
                inst.jip = Some(self.target(jump::HIGH));
            }
            Format::JumpBinaryImmImm => {
                inst.jip = Some(self.target(jump::LOW));
                inst.uip = Some(self.target(jump::HIGH));
            }
            Format::JumpBinaryBrc => {
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::Low32)?);
                inst.uip = Some(self.target(jump::HIGH));
            }
            Format::SendUnary => {
                inst.dst = Some(self.dst()?);
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High32)?);
            }
            Format::SendBinary => {
                inst.dst = Some(self.dst()?);
                inst.srcs.push(self.src(&basic::SRC0, ImmPos::High32)?);
                let reg = self.w.get(send::SRC1_REG) as u8;
                inst.srcs.push(Operand::grf(DataType::Ud, reg, 0));
            }
            Format::TernaryRegImmRegRegImm => self.ternary(inst)?,
        }
        Ok(())
    }

    fn target(&self, field: layout::Field) -> i32 {
        self.w.get(field) as u32 as i32
    }

    fn reg(&self, fields: &OperandFields, file: u64) -> Result<RegRef, IsaError> {
        let num = self.w.get(fields.reg) as u8;
        let subreg = self.w.get(fields.subreg) as u8;
        match file {
            FILE_ARF => Ok(RegRef::arf(num, subreg)),
            FILE_GRF => Ok(RegRef::grf(num, subreg)),
            _ => Err(self.malformed(format!("{} file code {file}", fields.name))),
        }
    }

    fn dst(&self) -> Result<DstOperand, IsaError> {
        let fields = &basic::DST;
        let file = self.w.get(fields.file);
        let reg = self.reg(fields, file)?;
        let code = self.w.get(fields.ty);
        let ty = layout::reg_type_from_code(code)
            .ok_or_else(|| self.malformed(format!("dst type code {code}")))?;
        Ok(DstOperand::new(ty, reg))
    }

    fn src(&self, fields: &OperandFields, pos: ImmPos) -> Result<Operand, IsaError> {
        let w = self.w;
        let file = w.get(fields.file);
        let code = w.get(fields.ty);
        if file == FILE_IMM {
            let ty = layout::imm_type_from_code(code).ok_or_else(|| {
                self.malformed(format!("{} immediate type code {code}", fields.name))
            })?;
            let raw = match (pos, ty.bits()) {
                (ImmPos::High64, 64) => w.get(basic::IMM64),
                (ImmPos::Low32, _) => w.get(jump::LOW),
                _ => w.get(basic::IMM32),
            };
            return Ok(Operand::imm(ty, truncate(raw, ty)));
        }
        let reg = self.reg(fields, file)?;
        let ty = layout::reg_type_from_code(code)
            .ok_or_else(|| self.malformed(format!("{} type code {code}", fields.name)))?;
        let mods = SrcMods {
            abs: fields.abs.is_some_and(|f| w.flag(f)),
            neg: fields.neg.is_some_and(|f| w.flag(f)),
        };
        Ok(Operand {
            ty,
            kind: OperandKind::Register(reg),
            mods,
        })
    }

    fn ternary(&self, inst: &mut Instruction) -> Result<(), IsaError> {
        let w = self.w;
        let code = w.get(ternary::DST_TYPE);
        let dst_ty = layout::ternary_type_from_code(code)
            .ok_or_else(|| self.malformed(format!("three-source dst type code {code}")))?;
        inst.dst = Some(DstOperand::grf(
            dst_ty,
            w.get(ternary::DST_REG) as u8,
            w.get(ternary::DST_SUBREG) as u8,
        ));
        let imm_flags = [w.flag(ternary::SRC0_IMM), false, w.flag(ternary::SRC2_IMM)];
        for (i, is_imm) in imm_flags.into_iter().enumerate() {
            let code = w.get(ternary::SRC_TYPE[i]);
            let ty = layout::ternary_type_from_code(code).ok_or_else(|| {
                self.malformed(format!("three-source src{i} type code {code}"))
            })?;
            let slot = Word(u128::from(w.get(ternary::SRC_SLOT[i])));
            let kind = if is_imm {
                OperandKind::Immediate(widen_ternary_immediate(slot.0 as u64, ty))
            } else {
                OperandKind::Register(RegRef::grf(
                    slot.get(ternary::SLOT_REG) as u8,
                    slot.get(ternary::SLOT_SUBREG) as u8,
                ))
            };
            inst.srcs.push(Operand {
                ty,
                kind,
                mods: SrcMods {
                    abs: w.flag(ternary::SRC_ABS[i]),
                    neg: w.flag(ternary::SRC_NEG[i]),
                },
            });
        }
        Ok(())
    }
}

/// Where the decoder looks for a source immediate.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ImmPos {
    High32,
    High64,
    Low32,
}

/// Keeps the low `ty.bits()` bits; 16-bit immediates are stored twice and
/// the copy is checked by re-encoding.
const fn truncate(raw: u64, ty: DataType) -> u64 {
    if ty.bits() >= 64 {
        raw
    } else {
        raw & ((1 << ty.bits()) - 1)
    }
}

/// Three-source `d` immediates are sign-extended to 32 bits.
const fn widen_ternary_immediate(slot: u64, ty: DataType) -> u64 {
    match ty {
        DataType::D => slot as u16 as i16 as i32 as u32 as u64,
        _ => slot & 0xffff,
    }
}
