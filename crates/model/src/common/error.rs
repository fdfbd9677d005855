//! Error taxonomy for the operation model and the native codec.
//!
//! Every public operation returns its failure explicitly as an [`IsaError`].
//! All variants are recoverable from the model's point of view: the caller
//! decides whether an error is fatal to compilation or merely disqualifies
//! one candidate instruction or encoding attempt. Nothing here is
//! non-deterministic, so there is no retry classification.

use thiserror::Error;

use crate::isa::instruction::Modifier;
use crate::isa::op::Op;
use crate::isa::platform::Platform;
use crate::isa::types::DataType;

/// Failure of a lookup, validation, encoding or decoding request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IsaError {
    /// The operation has no live table entry on the requested platform.
    #[error("{op} is not supported on {platform}")]
    UnsupportedOnPlatform {
        /// Requested operation.
        op: Op,
        /// Requested platform.
        platform: Platform,
    },

    /// No legal (destination, source) type pair accepts the operand types.
    #[error("{op} on {platform}: no legal type pair accepts {}", render_types(.dst, .srcs))]
    TypeMismatch {
        /// Operation being checked.
        op: Op,
        /// Platform the operation was resolved on.
        platform: Platform,
        /// Destination type, if the instruction has a destination.
        dst: Option<DataType>,
        /// Source operand types in operand order.
        srcs: Vec<DataType>,
    },

    /// The instruction requests a modifier its operation does not support.
    #[error("{op} on {platform} does not support {modifier}")]
    UnsupportedModifier {
        /// Operation being checked.
        op: Op,
        /// Platform the operation was resolved on.
        platform: Platform,
        /// The offending modifier.
        modifier: Modifier,
    },

    /// The operand list does not fit the structural contract of the format.
    #[error("{op} on {platform}: {reason}")]
    OperandShape {
        /// Operation being checked.
        op: Op,
        /// Platform the operation was resolved on.
        platform: Platform,
        /// What part of the contract was violated.
        reason: String,
    },

    /// The opcode field does not resolve to exactly one live operation.
    #[error("opcode {opcode:#04x} does not name a live operation on {platform}")]
    UnknownOpcode {
        /// Platform whose table was consulted.
        platform: Platform,
        /// Raw opcode field.
        opcode: u8,
    },

    /// The bit pattern is truncated or structurally inconsistent.
    #[error("malformed {platform} encoding: {reason}")]
    MalformedEncoding {
        /// Platform the bytes were decoded for.
        platform: Platform,
        /// What made the encoding unusable.
        reason: String,
    },

    /// A register, sub-register or immediate does not fit its field.
    #[error("{field} value {value:#x} does not fit in {bits} bits")]
    OperandOutOfRange {
        /// Name of the field being packed.
        field: &'static str,
        /// The value that was rejected.
        value: u64,
        /// Width of the field, or of the usable range, in bits.
        bits: u32,
    },

    /// A configuration document could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl IsaError {
    /// Shorthand for a [`IsaError::MalformedEncoding`].
    pub(crate) fn malformed(platform: Platform, reason: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            platform,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors raised while decoding raw bytes.
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOpcode { .. } | Self::MalformedEncoding { .. }
        )
    }
}

#[allow(clippy::ref_option)]
fn render_types(dst: &Option<DataType>, srcs: &[DataType]) -> String {
    let dst = dst.map_or_else(|| "-".to_string(), |t| t.to_string());
    let srcs: Vec<String> = srcs.iter().map(ToString::to_string).collect();
    format!("{dst} <- {}", srcs.join(","))
}
