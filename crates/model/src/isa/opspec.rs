//! Per-platform operation descriptors.

use std::fmt;

use crate::isa::attrs::{Attr, AttributeSet};
use crate::isa::format::Format;
use crate::isa::op::Op;
use crate::isa::platform::Platform;
use crate::isa::types::TypePair;

/// Immutable description of one operation on one platform.
///
/// Tables hold exactly one `OpSpec` per [`Op`] ordinal. Slots for operations
/// that do not exist on the platform hold a placeholder: `op` is
/// [`Op::Invalid`], the format is [`Format::Invalid`] and `types` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpSpec {
    /// Operation this entry describes (`Invalid` for placeholders).
    pub op: Op,
    /// Platform owning the table.
    pub platform: Platform,
    /// Value of the opcode field.
    pub opcode: u8,
    /// Canonical mnemonic.
    pub mnemonic: Option<&'static str>,
    /// Human-readable description.
    pub description: Option<&'static str>,
    /// Binary layout class.
    pub format: Format,
    /// Legal (destination, source) type pairs, in match order.
    pub types: &'static [TypePair],
    /// Supported modifiers and classification bits.
    pub attrs: AttributeSet,
}

impl OpSpec {
    /// Placeholder for a slot with no live operation.
    pub const fn placeholder(platform: Platform) -> Self {
        Self {
            op: Op::Invalid,
            platform,
            opcode: 0,
            mnemonic: None,
            description: None,
            format: Format::Invalid,
            types: &[],
            attrs: AttributeSet::NONE,
        }
    }

    /// Live entry.
    pub const fn live(
        op: Op,
        platform: Platform,
        opcode: u8,
        description: &'static str,
        format: Format,
        types: &'static [TypePair],
        attrs: AttributeSet,
    ) -> Self {
        Self {
            op,
            platform,
            opcode,
            mnemonic: Some(op.mnemonic()),
            description: Some(description),
            format,
            types,
            attrs,
        }
    }

    /// Returns `true` for slots with no live operation.
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.op, Op::Invalid)
    }

    /// Returns `true` if the entry carries `attr`.
    pub fn supports(&self, attr: Attr) -> bool {
        self.attrs.contains(attr)
    }
}

impl fmt::Display for OpSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            return write!(f, "{}: <invalid>", self.platform);
        }
        write!(
            f,
            "{} {:#04x} {} [{}]",
            self.mnemonic.unwrap_or_default(),
            self.opcode,
            self.format,
            self.attrs
        )
    }
}
