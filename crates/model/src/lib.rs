//! Gen-family GPU instruction set model.
//!
//! This crate describes which operations exist on each supported hardware
//! generation and how they are legally formed and encoded:
//! 1. **Tables:** one static operation table per generation, indexed by
//!    operation ordinal, with opcode, format, legal type pairs and attributes.
//! 2. **Resolution:** forward lookup by operation and reverse lookup by opcode.
//! 3. **Validation:** operand shape, type legality and modifier gating.
//! 4. **Codec:** a bit-exact 128-bit native encoder and decoder.
//! 5. **Disassembly:** assembly-style text for decoded or built instructions.
//!
//! ```
//! use xeisa_core::isa::{DataType, DstOperand, Instruction, Op, Operand, Platform};
//!
//! let add = Instruction::new(Platform::Gen8, Op::Add)
//!     .with_dst(DstOperand::grf(DataType::D, 10, 0))
//!     .with_src(Operand::grf(DataType::D, 11, 0))
//!     .with_src(Operand::imm(DataType::D, 1));
//! let bytes = xeisa_core::encode(&add).unwrap();
//! assert_eq!(xeisa_core::decode(bytes.as_bytes(), Platform::Gen8).unwrap(), add);
//! ```

/// Common types (bit-sets, errors).
pub mod common;
/// Consumer configuration (default platform, disassembly options).
pub mod config;
/// Operation model, tables, validation and codec.
pub mod isa;

/// Error returned by every fallible operation.
pub use crate::common::error::IsaError;
/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::{Config, DisasmOptions};
/// Logical operation identifier.
pub use crate::isa::op::Op;
/// Hardware generation.
pub use crate::isa::platform::Platform;
/// Instruction handed to the validator and encoder.
pub use crate::isa::instruction::Instruction;
/// Core entry points.
pub use crate::isa::{decode, disassemble, encode, validate};
