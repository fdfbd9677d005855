//! Gen9 operation table.
//!
//! Gen9 keeps every Gen8 encoding and adds the split sends, which carry a
//! second payload register in the extended descriptor word.

use crate::isa::format::Format;
use crate::isa::op::{Op, TABLE_LEN};
use crate::isa::opspec::OpSpec;
use crate::isa::platform::Platform;
use crate::isa::tables::{UNTYPED, attrs, gen8};

const fn derive() -> [OpSpec; TABLE_LEN] {
    let mut table = gen8::TABLE;
    let mut i = 0;
    while i < TABLE_LEN {
        table[i].platform = Platform::Gen9;
        i += 1;
    }
    table[Op::Sends.ordinal()] = OpSpec::live(
        Op::Sends,
        Platform::Gen9,
        0x33,
        "Split Send Message",
        Format::SendBinary,
        UNTYPED,
        attrs::PRED,
    );
    table[Op::Sendsc.ordinal()] = OpSpec::live(
        Op::Sendsc,
        Platform::Gen9,
        0x34,
        "Conditional Split Send Message",
        Format::SendBinary,
        UNTYPED,
        attrs::PRED,
    );
    table
}

/// Gen9 operation table, indexed by [`Op`] ordinal.
pub static OPSPECS: [OpSpec; TABLE_LEN] = derive();
