//! Common building blocks shared by the model and the codec.
//!
//! 1. **Bit-sets:** Typed sets over closed enumerations (`TypeSet`, `AttributeSet`).
//! 2. **Error Handling:** The [`IsaError`] taxonomy returned by every public operation.

/// Typed bit-set container.
pub mod bitset;

/// Error types for lookup, validation, encoding and decoding.
pub mod error;

pub use bitset::{BitIndex, BitSet};
pub use error::IsaError;
