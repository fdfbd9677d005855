//! Builders and setup shared by the unit tests.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use xeisa_core::isa::{
    DataType, DstOperand, ExecSize, Instruction, Op, Operand, Platform, RegRef,
};

static INIT: Once = Once::new();

/// Installs a test-friendly `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// `r{num}.0` destination of type `ty`.
pub fn dst(ty: DataType, num: u8) -> DstOperand {
    DstOperand::grf(ty, num, 0)
}

/// `r{num}.0` source of type `ty`.
pub fn src(ty: DataType, num: u8) -> Operand {
    Operand::grf(ty, num, 0)
}

/// The `null` destination.
pub fn null_dst(ty: DataType) -> DstOperand {
    DstOperand::new(ty, RegRef::NULL)
}

/// `op (8|M0) r{d}:ty r{s0}:ty r{s1}:ty` on Gen8.
pub fn binary(op: Op, ty: DataType, d: u8, s0: u8, s1: u8) -> Instruction {
    Instruction::new(Platform::Gen8, op)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(dst(ty, d))
        .with_src(src(ty, s0))
        .with_src(src(ty, s1))
}

/// `op (8|M0) r{d}:ty r{s}:ty` on Gen8.
pub fn unary(op: Op, ty: DataType, d: u8, s: u8) -> Instruction {
    Instruction::new(Platform::Gen8, op)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(dst(ty, d))
        .with_src(src(ty, s))
}

/// `add (8|M0) r10.0:d r11.0:d 1:d` on Gen8.
pub fn add_d_imm() -> Instruction {
    Instruction::new(Platform::Gen8, Op::Add)
        .with_exec_size(ExecSize::Simd8)
        .with_dst(dst(DataType::D, 10))
        .with_src(src(DataType::D, 11))
        .with_src(Operand::imm(DataType::D, 1))
}

/// Encodes `inst` and returns the native word.
pub fn word_of(inst: &Instruction) -> u128 {
    xeisa_core::encode(inst).expect("instruction encodes").word()
}

/// Little-endian bytes of a native word.
pub fn bytes_of(word: u128) -> [u8; 16] {
    word.to_le_bytes()
}
