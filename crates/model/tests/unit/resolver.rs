//! # Resolver Tests
//!
//! Forward lookup, reverse lookup by opcode, and the one-time construction
//! of the reverse index.

use std::thread;

use pretty_assertions::assert_eq;
use xeisa_core::IsaError;
use xeisa_core::isa::{Format, Op, Platform, resolver};

use crate::common::init_tracing;

#[test]
fn test_resolve_and_lookup_agree() {
    for platform in Platform::ALL {
        for op in Op::ALL {
            let slot = resolver::lookup(platform, op);
            match resolver::resolve(platform, op) {
                Some(spec) => {
                    assert!(std::ptr::eq(spec, slot));
                    assert!(resolver::is_supported(platform, op));
                }
                None => {
                    assert!(slot.is_placeholder());
                    assert!(!resolver::is_supported(platform, op));
                }
            }
        }
    }
}

#[test]
fn test_reverse_lookup_inverts_forward() {
    init_tracing();
    for platform in Platform::ALL {
        for spec in resolver::table_for(platform).live() {
            assert_eq!(
                resolver::reverse_lookup(platform, spec.opcode, spec.format),
                Ok(spec.op)
            );
            assert_eq!(resolver::candidates(platform, spec.opcode), &[spec.op]);
        }
    }
}

#[test]
fn test_reverse_lookup_misses() {
    assert_eq!(
        resolver::reverse_lookup(Platform::Gen8, 0x40, Format::SendUnary),
        Err(IsaError::UnknownOpcode {
            platform: Platform::Gen8,
            opcode: 0x40
        })
    );
    assert_eq!(
        resolver::reverse_lookup(Platform::Gen8, 0x33, Format::SendBinary),
        Err(IsaError::UnknownOpcode {
            platform: Platform::Gen8,
            opcode: 0x33
        })
    );
    assert_eq!(
        resolver::reverse_lookup(Platform::Gen9, 0x33, Format::SendBinary),
        Ok(Op::Sends)
    );
    assert!(resolver::candidates(Platform::Gen9, 0x7f).is_empty());
}

#[test]
fn test_placeholders_are_not_indexed() {
    // Placeholders carry opcode 0, which belongs to `illegal`.
    assert_eq!(resolver::candidates(Platform::Gen8, 0x00), &[Op::Illegal]);
    assert_eq!(
        resolver::reverse_lookup(Platform::Gen8, 0x00, Format::Invalid),
        Err(IsaError::UnknownOpcode {
            platform: Platform::Gen8,
            opcode: 0
        })
    );
}

#[test]
fn test_reverse_index_shared_across_threads() {
    init_tracing();
    let table = resolver::table_for(Platform::Gen9);
    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| std::ptr::from_ref(table.reverse()) as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(table.reverse().len(), table.live().count());
    assert!(!table.reverse().is_empty());
}
