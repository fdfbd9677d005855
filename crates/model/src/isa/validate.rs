//! Operand legality.
//!
//! Validation runs in a fixed order and stops at the first failure:
//! 1. **Resolution:** the operation must be live on the platform.
//! 2. **Shape:** the operand list must fit the format's structural contract.
//! 3. **Types:** some legal pair, scanned in declaration order, must accept
//!    the destination and every source type.
//! 4. **Modifiers:** each requested modifier needs its attribute.

use crate::common::error::IsaError;
use crate::isa::format::{Format, OperandSlot, Subfunction};
use crate::isa::instruction::{Instruction, OperandKind, RegFile};
use crate::isa::layout;
use crate::isa::opspec::OpSpec;
use crate::isa::resolver;
use crate::isa::types::{DataType, TypePair};

/// Checks `inst` against its platform's table and returns the first legal
/// type pair that accepts it.
///
/// # Errors
///
/// - [`IsaError::UnsupportedOnPlatform`] if the operation has no live entry.
/// - [`IsaError::OperandShape`] if the operands do not fit the format.
/// - [`IsaError::TypeMismatch`] if no legal pair accepts the operand types.
/// - [`IsaError::UnsupportedModifier`] for the first modifier the operation
///   does not support.
pub fn validate(inst: &Instruction) -> Result<&'static TypePair, IsaError> {
    let spec = resolver::resolve(inst.platform, inst.op).ok_or(IsaError::UnsupportedOnPlatform {
        op: inst.op,
        platform: inst.platform,
    })?;
    check_shape(spec, inst)?;
    let pair = check_types(spec, inst)?;
    check_modifiers(spec, inst)?;
    Ok(pair)
}

/// Convenience wrapper returning only whether `inst` is legal.
pub fn is_legal(inst: &Instruction) -> bool {
    validate(inst).is_ok()
}

fn check_types(spec: &'static OpSpec, inst: &Instruction) -> Result<&'static TypePair, IsaError> {
    let dst = inst.dst_type();
    let srcs = inst.src_types();
    spec.types
        .iter()
        .find(|pair| pair.accepts(dst, &srcs))
        .ok_or_else(|| IsaError::TypeMismatch {
            op: inst.op,
            platform: inst.platform,
            dst,
            srcs,
        })
}

fn check_modifiers(spec: &OpSpec, inst: &Instruction) -> Result<(), IsaError> {
    match inst
        .requested_modifiers()
        .find(|m| !spec.supports(m.required_attr()))
    {
        Some(modifier) => Err(IsaError::UnsupportedModifier {
            op: inst.op,
            platform: inst.platform,
            modifier,
        }),
        None => Ok(()),
    }
}

fn check_shape(spec: &OpSpec, inst: &Instruction) -> Result<(), IsaError> {
    let shape = spec.format.shape();
    let fail = |reason: String| IsaError::OperandShape {
        op: inst.op,
        platform: inst.platform,
        reason,
    };

    match (shape.has_dst, inst.dst.is_some()) {
        (true, false) => return Err(fail("missing destination".into())),
        (false, true) => return Err(fail("format has no destination".into())),
        _ => {}
    }

    let expected_srcs = match (shape.subfunction, inst.math_function) {
        (Subfunction::Math, Some(function)) => function.arity(),
        (Subfunction::Math, None) => return Err(fail("missing math function".into())),
        (_, Some(_)) => return Err(fail("math function on a non-math format".into())),
        _ => shape.max_srcs(),
    };
    if inst.srcs.len() != expected_srcs {
        return Err(fail(format!(
            "expected {expected_srcs} source operand(s), found {}",
            inst.srcs.len()
        )));
    }
    for (i, (src, slot)) in inst.srcs.iter().zip(shape.srcs).enumerate() {
        if src.is_immediate() {
            if *slot == OperandSlot::Reg {
                return Err(fail(format!("src{i} must be a register")));
            }
            if src.mods.any() {
                return Err(fail(format!("src{i} immediate cannot take source modifiers")));
            }
            if let Some(reason) = immediate_type_error(spec.format, src.ty) {
                return Err(fail(reason));
            }
        }
    }

    match (shape.subfunction, inst.send) {
        (Subfunction::Send, None) => return Err(fail("missing message descriptor".into())),
        (Subfunction::Send, Some(_)) | (_, None) => {}
        (_, Some(_)) => return Err(fail("message descriptor on a non-send format".into())),
    }
    match (shape.jip, inst.jip) {
        (true, None) => return Err(fail("missing jip".into())),
        (false, Some(_)) => return Err(fail("format has no jip".into())),
        _ => {}
    }
    match (shape.uip, inst.uip) {
        (true, None) => return Err(fail("missing uip".into())),
        (false, Some(_)) => return Err(fail("format has no uip".into())),
        _ => {}
    }

    match spec.format {
        Format::TernaryRegImmRegRegImm => check_ternary_regs(inst).map_err(fail),
        Format::SendBinary => check_split_payload(inst).map_err(fail),
        _ => Ok(()),
    }
}

/// Why a `ty` immediate cannot be encoded in `format`, if it cannot.
fn immediate_type_error(format: Format, ty: DataType) -> Option<String> {
    if format == Format::TernaryRegImmRegRegImm {
        let fits = matches!(ty, DataType::D | DataType::Ud | DataType::Hf);
        (!fits).then(|| format!("{ty} immediates do not fit a three-source slot"))
    } else {
        let encodable = layout::imm_type_code(ty).is_some();
        (!encodable).then(|| format!("{ty} immediates are not encodable"))
    }
}

/// Three-source instructions address the GRF only.
fn check_ternary_regs(inst: &Instruction) -> Result<(), String> {
    if inst.dst.is_some_and(|d| d.reg.file != RegFile::Grf) {
        return Err("three-source destination must be a GRF register".into());
    }
    match inst.srcs.iter().position(|src| {
        matches!(src.kind, OperandKind::Register(reg) if reg.file != RegFile::Grf)
    }) {
        Some(i) => Err(format!("three-source src{i} must be a GRF register")),
        None => Ok(()),
    }
}

/// The second payload of a split send is a whole GRF register of dwords.
fn check_split_payload(inst: &Instruction) -> Result<(), String> {
    let Some(src1) = inst.srcs.get(1) else {
        return Ok(());
    };
    match src1.register() {
        Some(reg) if reg.file == RegFile::Grf && reg.subreg == 0 && src1.ty == DataType::Ud => {
            Ok(())
        }
        _ => Err("split-send src1 must be a GRF register of type ud at sub-register 0".into()),
    }
}
