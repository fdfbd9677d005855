//! # Disassembler Tests
//!
//! Text produced for each family of instructions, and the presentation
//! switches.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xeisa_core::IsaError;
use xeisa_core::config::{Config, DisasmOptions};
use xeisa_core::isa::{
    DataType, Disassembler, ExecSize, FlagModifier, FlagReg, Instruction, MathFunction, Op,
    Operand, Platform, PredCtrl, Predicate, SendDescriptor, SharedFunction, disassemble,
    format_instruction,
};

use crate::common::{add_d_imm, binary, bytes_of, dst, null_dst, src, unary, word_of};

const PLAIN: DisasmOptions = DisasmOptions {
    print_bytes: false,
    print_description: false,
    hex_immediates: true,
};

#[rstest]
#[case::binary_immediate(add_d_imm(), "add (8|M0) r10.0:d r11.0:d 0x1:d")]
#[case::predicated_compare(
    Instruction::new(Platform::Gen8, Op::Cmp)
        .with_exec_size(ExecSize::Simd16)
        .with_predicate(Predicate { ctrl: PredCtrl::Any4h, inverse: true })
        .with_flag_modifier(FlagModifier::Ge, FlagReg::new(1, 0))
        .with_no_mask()
        .with_dst(null_dst(DataType::D))
        .with_src(src(DataType::D, 2))
        .with_src(src(DataType::D, 3).absolute()),
    "(~f1.0.any4h) cmp (16|M0) (ge)f1.0 null:d r2.0:d (abs)r3.0:d {NoMask}"
)]
#[case::saturated_negated(
    Instruction::new(Platform::Gen8, Op::Mov)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(dst(DataType::F, 4))
        .with_src(src(DataType::F, 5).negated())
        .saturated(),
    "mov (8|M0) (sat)r4.0:f -r5.0:f"
)]
#[case::math(
    unary(Op::Math, DataType::F, 1, 2).with_math_function(MathFunction::Inv),
    "math.inv (8|M0) r1.0:f r2.0:f"
)]
#[case::ternary(
    binary(Op::Mad, DataType::F, 1, 2, 3).with_src(src(DataType::F, 4).negated()),
    "mad (8|M0) r1.0:f r2.0:f r3.0:f -r4.0:f"
)]
#[case::jump(
    Instruction::new(Platform::Gen8, Op::If)
        .with_exec_size(ExecSize::Simd8)
        .with_predicate(Predicate::NORMAL)
        .with_branch_control()
        .with_jip(32)
        .with_uip(64),
    "(f0.0) if (8|M0) 32 64 {BranchCtl}"
)]
#[case::send(
    Instruction::new(Platform::Gen8, Op::Send)
        .with_exec_size(ExecSize::Simd16)
        .with_dst(dst(DataType::Ud, 10))
        .with_src(src(DataType::Ud, 2))
        .with_send(SendDescriptor {
            sfid: SharedFunction::Dc1,
            desc: 0x0214_0000,
            ex_desc: 0x0a,
        }),
    "send.dc1 (16|M0) r10.0:ud r2.0:ud 0x02140000 0x0a"
)]
#[case::nullary(Instruction::new(Platform::Gen8, Op::Nop), "nop (1|M0)")]
fn test_format_instruction(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(format_instruction(&inst, &PLAIN), text);
}

#[test]
fn test_typed_immediates() {
    let options = DisasmOptions {
        hex_immediates: false,
        ..PLAIN
    };
    let cmp = Instruction::new(Platform::Gen8, Op::Cmp)
        .with_dst(null_dst(DataType::D))
        .with_src(src(DataType::D, 2))
        .with_src(Operand::imm(DataType::D, 0xffff_ffff))
        .with_flag_modifier(FlagModifier::Lt, FlagReg::F0_0);
    assert_eq!(
        format_instruction(&cmp, &options),
        "cmp (1|M0) (lt)f0.0 null:d r2.0:d -1:d"
    );
    let mov = Instruction::new(Platform::Gen8, Op::Mov)
        .with_dst(dst(DataType::F, 1))
        .with_src(Operand::imm(DataType::F, u64::from(0.5f32.to_bits())));
    assert_eq!(format_instruction(&mov, &options), "mov (1|M0) r1.0:f 0.5:f");
}

#[test]
fn test_description_and_bytes() {
    let options = DisasmOptions {
        print_bytes: true,
        print_description: true,
        hex_immediates: true,
    };
    let bytes = bytes_of(word_of(&add_d_imm()));
    assert_eq!(
        disassemble(&bytes, Platform::Gen8, &options).unwrap(),
        "40 00 60 00 28 0a 40 01 60 01 00 0e 01 00 00 00 | \
         add (8|M0) r10.0:d r11.0:d 0x1:d  // Addition"
    );
    assert_eq!(
        format_instruction(&add_d_imm(), &options),
        disassemble(&bytes, Platform::Gen8, &options).unwrap()
    );
}

#[test]
fn test_unencodable_instruction_prints_without_bytes() {
    let options = DisasmOptions {
        print_bytes: true,
        ..PLAIN
    };
    let too_big = binary(Op::Add, DataType::D, 200, 1, 2);
    assert_eq!(
        format_instruction(&too_big, &options),
        "add (8|M0) r200.0:d r1.0:d r2.0:d"
    );
}

#[test]
fn test_disassemble_stream() {
    let mut stream = bytes_of(word_of(&add_d_imm())).to_vec();
    stream.extend_from_slice(&[0; 16]);
    let disassembler = Disassembler::new(Platform::Gen8, PLAIN);
    assert_eq!(
        disassembler.disassemble_all(&stream).unwrap(),
        vec![
            "add (8|M0) r10.0:d r11.0:d 0x1:d".to_string(),
            "illegal (1|M0)".to_string(),
        ]
    );

    stream.extend_from_slice(&[0; 3]);
    assert!(matches!(
        disassembler.disassemble_all(&stream),
        Err(IsaError::MalformedEncoding { .. })
    ));
    assert_eq!(disassembler.disassemble_all(&[]).unwrap(), Vec::<String>::new());
}

#[test]
fn test_disassembler_from_config() {
    let config = Config::from_json(r#"{ "model": { "default_platform": "SKL" } }"#).unwrap();
    let disassembler = Disassembler::from_config(&config);
    assert_eq!(disassembler.platform(), Platform::Gen9);
    let sends = [0x33u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    assert!(disassembler.disassemble_all(&sends).is_ok());
}
