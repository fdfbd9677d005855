//! Hardware generations.
//!
//! The set of generations is closed and known at build time; each variant
//! owns exactly one operation table (see [`crate::isa::resolver::table_for`]).

use std::fmt;

use serde::Deserialize;

/// One hardware generation with its own opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// Gen8 (Broadwell-class) execution units.
    #[default]
    #[serde(alias = "Gen8", alias = "gen8", alias = "BDW")]
    Gen8,
    /// Gen9 (Skylake-class) execution units; adds split sends.
    #[serde(alias = "Gen9", alias = "gen9", alias = "SKL")]
    Gen9,
}

impl Platform {
    /// Every supported platform, oldest first.
    pub const ALL: [Self; 2] = [Self::Gen8, Self::Gen9];

    /// Upper-case platform name as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gen8 => "GEN8",
            Self::Gen9 => "GEN9",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
