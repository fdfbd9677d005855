//! # Encoder Tests
//!
//! Exact bit placement for each layout family, and the range checks that
//! reject values instead of truncating them.

use pretty_assertions::assert_eq;
use xeisa_core::IsaError;
use xeisa_core::isa::{
    DataType, DstOperand, Encoding, ExecSize, FlagModifier, FlagReg, Instruction, MathFunction,
    Modifier, Op, Operand, Platform, PredCtrl, Predicate, RegRef, SendDescriptor, SharedFunction,
    encode,
};

use crate::common::{add_d_imm, binary, dst, init_tracing, null_dst, src, unary, word_of};

fn out_of_range(inst: &Instruction) -> (&'static str, u64, u32) {
    match encode(inst) {
        Err(IsaError::OperandOutOfRange { field, value, bits }) => (field, value, bits),
        other => panic!("expected an out-of-range error, got {other:?}"),
    }
}

#[test]
fn test_basic_binary_with_immediate() {
    init_tracing();
    let expected: u128 = 0x40
        | 3 << 21 // exec size 8
        | 1 << 35 // dst grf
        | 1 << 37 // dst :d
        | 1 << 41 // src0 grf
        | 1 << 43 // src0 :d
        | 10 << 53
        | 11 << 69
        | 3 << 89 // src1 immediate
        | 1 << 91 // src1 :d
        | 1 << 96;
    let encoding = encode(&add_d_imm()).unwrap();
    assert_eq!(encoding.word(), expected);
    assert_eq!(encoding.as_bytes().len(), Encoding::LEN);
    assert_eq!(encoding.as_bytes()[0], 0x40);
}

#[test]
fn test_header_controls() {
    let cmp = Instruction::new(Platform::Gen8, Op::Cmp)
        .with_exec_size(ExecSize::Simd16)
        .with_predicate(Predicate {
            ctrl: PredCtrl::Any4h,
            inverse: true,
        })
        .with_flag_modifier(FlagModifier::Ge, FlagReg::new(1, 0))
        .with_no_mask()
        .with_dst(null_dst(DataType::D))
        .with_src(src(DataType::D, 2))
        .with_src(src(DataType::D, 3).absolute());
    let expected: u128 = 0x10
        | 4 << 16 // any4h
        | 1 << 20
        | 4 << 21
        | 4 << 24 // ge
        | 1 << 33
        | 1 << 34
        | 1 << 37
        | 1 << 41
        | 1 << 43
        | 2 << 69
        | 1 << 89
        | 1 << 91
        | 3 << 101
        | 1 << 109;
    assert_eq!(word_of(&cmp), expected);
}

#[test]
fn test_saturate_and_source_negate() {
    let mov = unary(Op::Mov, DataType::F, 4, 5)
        .saturated()
        .with_flag_reg(FlagReg::new(0, 1));
    let mut neg = mov.clone();
    neg.srcs[0] = src(DataType::F, 5).negated();
    let base = word_of(&mov);
    assert_eq!(base >> 31 & 1, 1);
    assert_eq!(base >> 32 & 1, 1);
    assert_eq!(word_of(&neg) ^ base, 1 << 78);
}

#[test]
fn test_sixteen_bit_immediates_are_replicated() {
    let mov = Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::W, 2))
        .with_src(Operand::imm(DataType::W, 0xfffe));
    assert_eq!(word_of(&mov) >> 96, 0xfffe_fffe);
}

#[test]
fn test_unary_sixty_four_bit_immediate() {
    let mov = Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::Df, 4))
        .with_src(Operand::imm(DataType::Df, 1.5f64.to_bits()));
    let word = word_of(&mov);
    assert_eq!((word >> 64) as u64, 1.5f64.to_bits());
    assert_eq!(word >> 41 & 0b11, 3);
    assert_eq!(word >> 43 & 0xf, 10);
}

#[test]
fn test_math_function_in_condition_field() {
    let pow = binary(Op::Math, DataType::F, 1, 2, 3).with_math_function(MathFunction::Pow);
    let word = word_of(&pow);
    assert_eq!(word & 0x7f, 0x38);
    assert_eq!(word >> 24 & 0xf, 10);
}

#[test]
fn test_jump_targets() {
    let if_ = Instruction::new(Platform::Gen8, Op::If)
        .with_exec_size(ExecSize::Simd8)
        .with_predicate(Predicate::NORMAL)
        .with_branch_control()
        .with_jip(32)
        .with_uip(-64);
    let word = word_of(&if_);
    assert_eq!(word & 0x7f, 0x22);
    assert_eq!(word >> 16 & 0xf, 1);
    assert_eq!(word >> 28 & 1, 1);
    assert_eq!((word >> 64) as u32, 32);
    assert_eq!((word >> 96) as u32, (-64i32) as u32);

    let endif = Instruction::new(Platform::Gen8, Op::Endif).with_jip(16);
    assert_eq!(word_of(&endif), 0x25 | 16 << 96);

    let brc = Instruction::new(Platform::Gen8, Op::Brc)
        .with_src(Operand::imm(DataType::D, 48))
        .with_uip(96);
    let word = word_of(&brc);
    assert_eq!((word >> 64) as u32, 48);
    assert_eq!((word >> 96) as u32, 96);
}

#[test]
fn test_send_descriptor() {
    let send = Instruction::new(Platform::Gen9, Op::Sends)
        .with_exec_size(ExecSize::Simd16)
        .with_dst(dst(DataType::Ud, 10))
        .with_src(src(DataType::Ud, 2))
        .with_src(src(DataType::Ud, 4))
        .with_send(SendDescriptor {
            sfid: SharedFunction::Dc1,
            desc: 0x0214_0000,
            ex_desc: 0x8a,
        });
    let word = word_of(&send);
    assert_eq!(word & 0x7f, 0x33);
    assert_eq!(word >> 24 & 0xf, 12);
    assert_eq!(word >> 80 & 0xff, 4);
    assert_eq!(word >> 88 & 0xff, 0x8a);
    assert_eq!((word >> 96) as u32, 0x0214_0000);
}

#[test]
fn test_ternary_layout() {
    let mad = Instruction::new(Platform::Gen8, Op::Mad)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(DstOperand::grf(DataType::F, 5, 4))
        .with_src(src(DataType::F, 6).negated())
        .with_src(Operand::grf(DataType::F, 7, 8).absolute())
        .with_src(src(DataType::F, 8));
    let expected: u128 = 0x5b
        | 3 << 21
        | 1 << 50 // src0 neg
        | 1 << 51 // src1 abs
        | 4 << 56
        | 5 << 61
        | (6 << 5) << 69
        | (7 << 5 | 8) << 85
        | (8 << 5) << 101;
    assert_eq!(word_of(&mad), expected);

    let bfe = Instruction::new(Platform::Gen8, Op::Bfe)
        .with_dst(dst(DataType::D, 1))
        .with_src(Operand::imm(DataType::D, u64::from((-3i32) as u32)))
        .with_src(src(DataType::D, 2))
        .with_src(Operand::imm(DataType::D, 7));
    let word = word_of(&bfe);
    assert_eq!(word >> 35 & 0b11, 0b11);
    assert_eq!(word >> 69 & 0xffff, 0xfffd);
    assert_eq!(word >> 101 & 0xffff, 7);
}

#[test]
fn test_encoding_formats() {
    let encoding = encode(&Instruction::new(Platform::Gen8, Op::Nop)).unwrap();
    assert_eq!(
        encoding.to_string(),
        "7e 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00"
    );
    assert_eq!(
        format!("{encoding:?}"),
        "Encoding(0x0000000000000000000000000000007e)"
    );
    assert_eq!(Encoding::from_slice(&[0; 15]), None);
    assert_eq!(Encoding::from_slice(encoding.as_ref()), Some(encoding));
}

#[test]
fn test_validation_runs_first() {
    let nop = Instruction::new(Platform::Gen8, Op::Nop).with_predicate(Predicate::NORMAL);
    assert_eq!(
        encode(&nop),
        Err(IsaError::UnsupportedModifier {
            op: Op::Nop,
            platform: Platform::Gen8,
            modifier: Modifier::Predicate,
        })
    );
}

#[test]
fn test_register_ranges() {
    let big_dst = binary(Op::Add, DataType::D, 128, 2, 3);
    assert_eq!(out_of_range(&big_dst), ("dst register", 128, 7));

    let mut big_subreg = binary(Op::Add, DataType::D, 1, 2, 3);
    big_subreg.dst = Some(DstOperand::grf(DataType::D, 1, 32));
    assert_eq!(out_of_range(&big_subreg), ("dst sub-register", 32, 5));

    let big_flag = binary(Op::Add, DataType::D, 1, 2, 3).with_flag_reg(FlagReg::new(2, 0));
    assert_eq!(out_of_range(&big_flag), ("flag register", 2, 1));

    let big_src = binary(Op::Add, DataType::D, 1, 200, 3);
    assert_eq!(out_of_range(&big_src), ("src0 register", 200, 7));

    // ARF numbers use the whole byte.
    let arf = Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(DstOperand::new(DataType::Ud, RegRef::arf(0x90, 0)))
        .with_src(src(DataType::Ud, 1));
    assert!(encode(&arf).is_ok());
}

#[test]
fn test_immediate_ranges() {
    let wide_word = Instruction::new(Platform::Gen8, Op::Add)
        .with_dst(dst(DataType::Uw, 1))
        .with_src(src(DataType::Uw, 2))
        .with_src(Operand::imm(DataType::Uw, 0x1_0000));
    assert_eq!(out_of_range(&wide_word), ("src1", 0x1_0000, 16));

    let df_in_binary = Instruction::new(Platform::Gen8, Op::Add)
        .with_dst(dst(DataType::Df, 1))
        .with_src(src(DataType::Df, 2))
        .with_src(Operand::imm(DataType::Df, 2.0f64.to_bits()));
    assert_eq!(out_of_range(&df_in_binary), ("src1", 2.0f64.to_bits(), 32));

    let wide_ternary = Instruction::new(Platform::Gen8, Op::Bfe)
        .with_dst(dst(DataType::D, 1))
        .with_src(Operand::imm(DataType::D, 40_000))
        .with_src(src(DataType::D, 2))
        .with_src(src(DataType::D, 3));
    assert_eq!(out_of_range(&wide_ternary), ("src0", 40_000, 16));

    let float_ternary = Instruction::new(Platform::Gen8, Op::Mad)
        .with_dst(dst(DataType::F, 1))
        .with_src(Operand::imm(DataType::F, 1.0f32.to_bits().into()))
        .with_src(src(DataType::F, 2))
        .with_src(src(DataType::F, 3));
    assert!(matches!(encode(&float_ternary), Err(IsaError::OperandShape { .. })));

    let byte_imm = Instruction::new(Platform::Gen8, Op::Add)
        .with_dst(dst(DataType::B, 1))
        .with_src(src(DataType::B, 2))
        .with_src(Operand::imm(DataType::B, 1));
    assert!(matches!(encode(&byte_imm), Err(IsaError::OperandShape { .. })));
}

#[test]
fn test_split_send_payload_range() {
    let sends = Instruction::new(Platform::Gen9, Op::Sends)
        .with_dst(dst(DataType::Ud, 1))
        .with_src(src(DataType::Ud, 2))
        .with_src(src(DataType::Ud, 200))
        .with_send(SendDescriptor {
            sfid: SharedFunction::Sampler,
            desc: 0,
            ex_desc: 0,
        });
    assert_eq!(out_of_range(&sends), ("src1 register", 200, 7));
}
