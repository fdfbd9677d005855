//! Platform resolution.
//!
//! Maps a [`Platform`] to its operation table and answers the questions the
//! rest of the crate asks of it:
//! 1. **Forward lookup:** the entry for an [`Op`] (placeholder or live).
//! 2. **Support query:** whether an operation is live on a platform.
//! 3. **Reverse lookup:** which operation an opcode field names. The reverse
//!    index is built once per table on first use and shared afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::common::error::IsaError;
use crate::isa::format::Format;
use crate::isa::op::{Op, TABLE_LEN};
use crate::isa::opspec::OpSpec;
use crate::isa::platform::Platform;
use crate::isa::tables::{gen8, gen9};

/// Opcode-keyed view of one table.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    by_opcode: HashMap<u8, Vec<Op>>,
    by_key: HashMap<(u8, Format), Option<Op>>,
}

impl ReverseIndex {
    fn build(platform: Platform, entries: &[OpSpec]) -> Self {
        let mut index = Self::default();
        for spec in entries.iter().filter(|s| !s.is_placeholder()) {
            index
                .by_opcode
                .entry(spec.opcode)
                .or_default()
                .push(spec.op);
            let slot = index
                .by_key
                .entry((spec.opcode, spec.format))
                .or_insert(Some(spec.op));
            if *slot != Some(spec.op) {
                warn!(
                    %platform,
                    opcode = spec.opcode,
                    format = %spec.format,
                    op = %spec.op,
                    "ambiguous opcode; decoding it will fail"
                );
                *slot = None;
            }
        }
        for (opcode, ops) in &index.by_opcode {
            if ops.len() > 1 {
                warn!(%platform, opcode, count = ops.len(), "opcode shared by several operations");
            }
        }
        debug!(%platform, opcodes = index.by_opcode.len(), "reverse index built");
        index
    }

    /// Operation keyed by `(opcode, format)`, if exactly one matches.
    pub fn get(&self, opcode: u8, format: Format) -> Option<Op> {
        self.by_key.get(&(opcode, format)).copied().flatten()
    }

    /// Every live operation whose opcode field is `opcode`.
    pub fn candidates(&self, opcode: u8) -> &[Op] {
        self.by_opcode
            .get(&opcode)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct opcodes in use.
    pub fn len(&self) -> usize {
        self.by_opcode.len()
    }

    /// Returns `true` if the table has no live entries.
    pub fn is_empty(&self) -> bool {
        self.by_opcode.is_empty()
    }
}

/// One platform's operation table plus its lazily built reverse index.
pub struct OpSpecTable {
    platform: Platform,
    entries: &'static [OpSpec; TABLE_LEN],
    reverse: OnceLock<ReverseIndex>,
}

impl OpSpecTable {
    const fn new(platform: Platform, entries: &'static [OpSpec; TABLE_LEN]) -> Self {
        Self {
            platform,
            entries,
            reverse: OnceLock::new(),
        }
    }

    /// Platform owning the table.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Every slot, indexed by [`Op`] ordinal.
    pub const fn entries(&self) -> &'static [OpSpec; TABLE_LEN] {
        self.entries
    }

    /// Entry for `op`; a placeholder when `op` is not live here.
    pub const fn get(&self, op: Op) -> &'static OpSpec {
        &self.entries[op.ordinal()]
    }

    /// Live entries in ordinal order.
    pub fn live(&self) -> impl Iterator<Item = &'static OpSpec> {
        self.entries.iter().filter(|s| !s.is_placeholder())
    }

    /// Reverse index, built on first call.
    pub fn reverse(&self) -> &ReverseIndex {
        self.reverse
            .get_or_init(|| ReverseIndex::build(self.platform, self.entries))
    }
}

impl fmt::Debug for OpSpecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpSpecTable")
            .field("platform", &self.platform)
            .field("live", &self.live().count())
            .field("indexed", &self.reverse.get().is_some())
            .finish()
    }
}

static GEN8: OpSpecTable = OpSpecTable::new(Platform::Gen8, &gen8::OPSPECS);
static GEN9: OpSpecTable = OpSpecTable::new(Platform::Gen9, &gen9::OPSPECS);

/// Table owned by `platform`.
pub fn table_for(platform: Platform) -> &'static OpSpecTable {
    match platform {
        Platform::Gen8 => &GEN8,
        Platform::Gen9 => &GEN9,
    }
}

/// Slot for `op` on `platform`, placeholder or live.
pub fn lookup(platform: Platform, op: Op) -> &'static OpSpec {
    table_for(platform).get(op)
}

/// Live entry for `op` on `platform`, or `None` if the slot is a placeholder.
pub fn resolve(platform: Platform, op: Op) -> Option<&'static OpSpec> {
    let spec = lookup(platform, op);
    (!spec.is_placeholder()).then_some(spec)
}

/// Returns `true` if `op` has a live entry on `platform`.
pub fn is_supported(platform: Platform, op: Op) -> bool {
    !lookup(platform, op).is_placeholder()
}

/// Operation named by `opcode` in the given `format`.
///
/// # Errors
///
/// [`IsaError::UnknownOpcode`] if no live entry, or more than one, matches.
pub fn reverse_lookup(platform: Platform, opcode: u8, format: Format) -> Result<Op, IsaError> {
    table_for(platform)
        .reverse()
        .get(opcode, format)
        .ok_or(IsaError::UnknownOpcode { platform, opcode })
}

/// Live operations on `platform` whose opcode field is `opcode`.
pub fn candidates(platform: Platform, opcode: u8) -> &'static [Op] {
    table_for(platform).reverse().candidates(opcode)
}
