//! # Round-Trip Tests
//!
//! `decode(encode(i)) == i` for one representative of every format, a sweep
//! over every live operation and type pair of each platform, and a generated
//! sweep over the basic two-source layout.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use xeisa_core::isa::format::{OperandSlot, Subfunction};
use xeisa_core::isa::{
    DataType, DstOperand, ExecSize, FlagModifier, FlagReg, Instruction, MathFunction, Op, OpSpec,
    Operand, Platform, PredCtrl, Predicate, RegRef, SendDescriptor, SharedFunction, decode,
    encode, is_legal, resolver,
};

use crate::common::{binary, dst, null_dst, src, unary};

fn roundtrip(inst: &Instruction) -> Instruction {
    let encoding = encode(inst).unwrap();
    decode(encoding.as_bytes(), inst.platform).unwrap()
}

fn send(op: Op, platform: Platform) -> Instruction {
    Instruction::new(platform, op)
        .with_exec_size(ExecSize::Simd16)
        .with_dst(dst(DataType::Ud, 10))
        .with_src(src(DataType::Ud, 2))
        .with_send(SendDescriptor {
            sfid: SharedFunction::Dc1,
            desc: 0x0214_0000,
            ex_desc: 0x0a,
        })
}

#[rstest]
#[case::nullary(Instruction::new(Platform::Gen8, Op::Nop))]
#[case::unary_saturated(
    unary(Op::Mov, DataType::F, 2, 3)
        .saturated()
        .with_predicate(Predicate { ctrl: PredCtrl::All8h, inverse: true })
        .with_flag_reg(FlagReg::new(1, 1))
)]
#[case::unary_word_immediate(
    Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::W, 2))
        .with_src(Operand::imm(DataType::W, 0xfffe))
)]
#[case::unary_double_immediate(
    Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::Df, 4))
        .with_src(Operand::imm(DataType::Df, 0x3ff0_0000_0000_0000))
)]
#[case::unary_float_immediate(
    Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::F, 4))
        .with_src(Operand::imm(DataType::F, u64::from(2.5f32.to_bits())))
)]
#[case::binary_flag_modifier(
    binary(Op::Cmp, DataType::F, 0, 5, 6)
        .with_flag_modifier(FlagModifier::Lt, FlagReg::new(1, 0))
)]
#[case::binary_null_dst(
    Instruction::new(Platform::Gen8, Op::Cmp)
        .with_dst(null_dst(DataType::D))
        .with_src(Operand::grf(DataType::D, 7, 4).absolute().negated())
        .with_src(Operand::imm(DataType::D, 0xffff_ffff))
        .with_flag_modifier(FlagModifier::Eq, FlagReg::F0_0)
)]
#[case::binary_accumulator(
    Instruction::new(Platform::Gen8, Op::Mac)
        .with_dst(dst(DataType::F, 9))
        .with_src(Operand::reg(DataType::F, RegRef::arf(0x20, 0)))
        .with_src(src(DataType::F, 3))
)]
#[case::select_no_mask(
    binary(Op::Sel, DataType::Ud, 1, 2, 3)
        .with_exec_size(ExecSize::Simd32)
        .with_predicate(Predicate { ctrl: PredCtrl::Any4h, inverse: false })
        .with_no_mask()
)]
#[case::math_unary(unary(Op::Math, DataType::F, 1, 2).with_math_function(MathFunction::Rsqt))]
#[case::math_binary(
    binary(Op::Math, DataType::D, 1, 2, 3).with_math_function(MathFunction::Irem)
)]
#[case::ternary_registers(
    Instruction::new(Platform::Gen8, Op::Mad)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(DstOperand::grf(DataType::F, 5, 4))
        .with_src(src(DataType::F, 6).negated())
        .with_src(Operand::grf(DataType::F, 7, 8).absolute())
        .with_src(src(DataType::F, 127))
)]
#[case::ternary_immediates(
    Instruction::new(Platform::Gen8, Op::Bfe)
        .with_dst(dst(DataType::D, 1))
        .with_src(Operand::imm(DataType::D, 0xffff_fffd))
        .with_src(src(DataType::D, 2))
        .with_src(Operand::imm(DataType::D, 0x7fff))
)]
#[case::ternary_unsigned_immediate(
    Instruction::new(Platform::Gen8, Op::Bfi2)
        .with_dst(dst(DataType::Ud, 1))
        .with_src(Operand::imm(DataType::Ud, 0xffff))
        .with_src(src(DataType::Ud, 2))
        .with_src(src(DataType::Ud, 3))
)]
#[case::jump_immediate(Instruction::new(Platform::Gen8, Op::Endif).with_jip(-32))]
#[case::jump_register(
    Instruction::new(Platform::Gen8, Op::Ret).with_src(src(DataType::Ud, 1))
)]
#[case::jump_indexed(
    Instruction::new(Platform::Gen8, Op::Jmpi)
        .with_src(Operand::imm(DataType::D, 0x40))
        .with_predicate(Predicate::NORMAL)
)]
#[case::call(
    Instruction::new(Platform::Gen8, Op::Call)
        .with_dst(dst(DataType::D, 120))
        .with_jip(-16)
)]
#[case::jump_binary(
    Instruction::new(Platform::Gen8, Op::If)
        .with_exec_size(ExecSize::Simd16)
        .with_predicate(Predicate { ctrl: PredCtrl::Normal, inverse: true })
        .with_branch_control()
        .with_jip(48)
        .with_uip(96)
)]
#[case::else_branch(
    Instruction::new(Platform::Gen8, Op::Else).with_branch_control().with_jip(16).with_uip(32)
)]
#[case::branch_converging(
    Instruction::new(Platform::Gen8, Op::Brc)
        .with_src(Operand::imm(DataType::D, u64::from((-8i32) as u32)))
        .with_uip(64)
)]
#[case::branch_converging_register(
    Instruction::new(Platform::Gen8, Op::Brc)
        .with_src(src(DataType::D, 4))
        .with_uip(64)
)]
#[case::wait(
    Instruction::new(Platform::Gen8, Op::Wait)
        .with_dst(DstOperand::new(DataType::Ud, RegRef::arf(0x90, 0)))
        .with_src(Operand::reg(DataType::Ud, RegRef::arf(0x90, 0)))
)]
#[case::send(send(Op::Send, Platform::Gen8))]
#[case::sendc_gen9(send(Op::Sendc, Platform::Gen9))]
#[case::split_send(send(Op::Sends, Platform::Gen9).with_src(src(DataType::Ud, 4)))]
#[case::split_send_conditional(
    send(Op::Sendsc, Platform::Gen9)
        .with_src(src(DataType::Ud, 127))
        .with_predicate(Predicate::NORMAL)
)]
fn test_roundtrip(#[case] inst: Instruction) {
    assert_eq!(roundtrip(&inst), inst);
}

#[test]
fn test_every_live_opcode_decodes_to_its_op() {
    // The smallest instruction the decoder accepts for a given opcode is not
    // always legal, so only the opcode resolution is checked here.
    for platform in Platform::ALL {
        for spec in resolver::table_for(platform).live() {
            match decode(&u128::from(spec.opcode).to_le_bytes(), platform) {
                Ok(inst) => assert_eq!(inst.op, spec.op),
                Err(err) => assert!(
                    matches!(err, xeisa_core::IsaError::MalformedEncoding { .. }),
                    "{}: {err}",
                    spec.op
                ),
            }
        }
    }
}

/// Register-operand instance of `spec` with the format's full shape.
fn shaped(spec: &OpSpec, dst_ty: DataType, src_ty: DataType) -> Instruction {
    let shape = spec.format.shape();
    let mut inst = Instruction::new(spec.platform, spec.op);
    if shape.has_dst {
        inst = inst.with_dst(dst(dst_ty, 1));
    }
    for i in 0..shape.max_srcs() {
        inst = inst.with_src(src(src_ty, 2 + i as u8));
    }
    match shape.subfunction {
        Subfunction::Math => inst = inst.with_math_function(MathFunction::Pow),
        Subfunction::Send => {
            inst = inst.with_send(SendDescriptor {
                sfid: SharedFunction::Dc0,
                desc: 0x0214_0000,
                ex_desc: 0x0a,
            });
        }
        Subfunction::None => {}
    }
    if shape.jip {
        inst = inst.with_jip(16);
    }
    if shape.uip {
        inst = inst.with_uip(32);
    }
    inst
}

#[test]
fn test_every_live_op_roundtrips_on_every_platform() {
    for platform in Platform::ALL {
        for spec in resolver::table_for(platform).live() {
            let slots = spec.format.shape().srcs;
            let mut checked = 0usize;
            for pair in spec.types {
                let members: Vec<DataType> = if !pair.src.is_empty() {
                    pair.src.iter().collect()
                } else if !pair.dst.is_empty() {
                    pair.dst.iter().collect()
                } else {
                    vec![DataType::Ud]
                };
                for ty in members {
                    let dst_ty = if pair.dst.contains(ty) {
                        ty
                    } else {
                        pair.dst.iter().next().unwrap_or(ty)
                    };
                    let inst = shaped(spec, dst_ty, ty);
                    let mut variants = vec![inst.clone()];
                    if slots.last() == Some(&OperandSlot::RegOrImm) && ty.bits() <= 32 {
                        let mut with_imm = inst;
                        if let Some(last) = with_imm.srcs.last_mut() {
                            *last = Operand::imm(ty, 1);
                        }
                        variants.push(with_imm);
                    }
                    for inst in variants.into_iter().filter(is_legal) {
                        assert_eq!(roundtrip(&inst), inst, "{platform} {}", spec.op);
                        checked += 1;
                    }
                }
            }
            assert!(checked > 0, "{platform} {}: no legal instance", spec.op);
        }
    }
}

fn basic_type() -> impl Strategy<Value = DataType> {
    prop::sample::select(vec![
        DataType::Ud,
        DataType::D,
        DataType::Uw,
        DataType::W,
        DataType::F,
    ])
}

fn exec_size() -> impl Strategy<Value = ExecSize> {
    prop::sample::select(ExecSize::ALL.to_vec())
}

fn predicate() -> impl Strategy<Value = Option<Predicate>> {
    prop::option::of(
        (prop::sample::select(PredCtrl::ALL.to_vec()), any::<bool>())
            .prop_map(|(ctrl, inverse)| Predicate { ctrl, inverse }),
    )
}

fn flag_modifier() -> impl Strategy<Value = Option<FlagModifier>> {
    prop::option::of(prop::sample::select(FlagModifier::ALL.to_vec()))
}

prop_compose! {
    fn add_like()(
        op in prop::sample::select(vec![Op::Add, Op::Mul, Op::Sel, Op::Avg]),
        ty in basic_type(),
        exec in exec_size(),
        regs in (0u8..=127, 0u8..=127, 0u8..=127),
        subregs in (0u8..32, 0u8..32, 0u8..32),
        pred in predicate(),
        modifier in flag_modifier(),
        flag in (0u8..2, 0u8..2),
        mods in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        imm in prop::option::of(any::<u64>()),
        controls in (any::<bool>(), any::<bool>()),
    ) -> Instruction {
        let mut inst = Instruction::new(Platform::Gen9, op)
            .with_exec_size(exec)
            .with_flag_reg(FlagReg::new(flag.0, flag.1))
            .with_dst(DstOperand::grf(ty, regs.0, subregs.0));
        let mut src0 = Operand::grf(ty, regs.1, subregs.1);
        src0.mods.neg = mods.0;
        src0.mods.abs = mods.1;
        inst = inst.with_src(src0);
        let src1 = match imm {
            Some(seed) => {
                let max = if ty.bits() == 16 { u64::from(u16::MAX) } else { u64::from(u32::MAX) };
                Operand::imm(ty, seed % (max + 1))
            }
            None => {
                let mut reg = Operand::grf(ty, regs.2, subregs.2);
                reg.mods.neg = mods.2;
                reg.mods.abs = mods.3;
                reg
            }
        };
        inst = inst.with_src(src1);
        inst.predicate = pred;
        inst.flag_modifier = modifier;
        inst.saturate = controls.0;
        inst.no_mask = controls.1;
        inst
    }
}

proptest! {
    #[test]
    fn prop_legal_basic_instructions_roundtrip(inst in add_like()) {
        prop_assume!(is_legal(&inst));
        let encoding = encode(&inst).unwrap();
        let decoded = decode(encoding.as_bytes(), inst.platform).unwrap();
        prop_assert_eq!(decoded, inst);
    }

    #[test]
    fn prop_ternary_immediates_roundtrip(value in i16::MIN..=i16::MAX, slot in 0usize..2) {
        let imm = Operand::imm(DataType::D, u64::from(i32::from(value) as u32));
        let reg = src(DataType::D, 3);
        let (src0, src2) = if slot == 0 { (imm, reg) } else { (reg, imm) };
        let inst = Instruction::new(Platform::Gen8, Op::Bfe)
            .with_dst(dst(DataType::D, 1))
            .with_src(src0)
            .with_src(src(DataType::D, 2))
            .with_src(src2);
        let encoding = encode(&inst).unwrap();
        prop_assert_eq!(decode(encoding.as_bytes(), Platform::Gen8).unwrap(), inst);
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::array::uniform16(any::<u8>())) {
        for platform in Platform::ALL {
            if let Ok(inst) = decode(&bytes, platform) {
                // Anything accepted is canonical.
                let encoding = encode(&inst).unwrap();
                prop_assert_eq!(encoding.as_bytes(), &bytes);
            }
        }
    }
}
