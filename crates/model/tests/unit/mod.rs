//! # Unit Components
//!
//! One module per component of the model, bottom-up: containers, tables and
//! resolution first, then legality, the codec and the text and configuration
//! layers on top.




/// Disassembly text.
pub mod disasm;

/// Native encoder: exact bit placement and range errors.
pub mod encode;

/// Forward and reverse table resolution, including concurrent first use.
pub mod resolver;

/// Encode/decode round trips over hand-picked and generated instructions.
pub mod roundtrip;
