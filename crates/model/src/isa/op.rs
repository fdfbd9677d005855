//! Generation-independent operation identifiers.
//!
//! [`Op`] ordinals are a stable contract: per-platform tables are indexed by
//! them, so the numbering (including its gaps at 55, 69, 73 and 74, which
//! belonged to retired mnemonics) must never change.

use std::fmt;

use crate::isa::platform::Platform;
use crate::isa::resolver;

/// Highest valid operation ordinal.
pub const TOTAL_OPS: usize = 85;

/// Length of every per-platform table (`TOTAL_OPS` plus the invalid slot).
pub const TABLE_LEN: usize = TOTAL_OPS + 1;

/// An operation mnemonic, independent of hardware generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Op {
    /// No operation classified. Occupies ordinal 0 and every placeholder slot.
    Invalid = 0,
    /// `add`
    Add = 1,
    /// `add3`
    Add3 = 2,
    /// `addc`
    Addc = 3,
    /// `and`
    And = 4,
    /// `asr`
    Asr = 5,
    /// `avg`
    Avg = 6,
    /// `bfe`
    Bfe = 7,
    /// `bfi1`
    Bfi1 = 8,
    /// `bfi2`
    Bfi2 = 9,
    /// `bfn`
    Bfn = 10,
    /// `bfrev`
    Bfrev = 11,
    /// `brc`
    Brc = 12,
    /// `brd`
    Brd = 13,
    /// `break`
    Break = 14,
    /// `call`
    Call = 15,
    /// `calla`
    Calla = 16,
    /// `cbit`
    Cbit = 17,
    /// `cmp`
    Cmp = 18,
    /// `cmpn`
    Cmpn = 19,
    /// `cont`
    Cont = 20,
    /// `csel`
    Csel = 21,
    /// `dim`
    Dim = 22,
    /// `dp2`
    Dp2 = 23,
    /// `dp3`
    Dp3 = 24,
    /// `dp4`
    Dp4 = 25,
    /// `dp4a`
    Dp4a = 26,
    /// `dpas`
    Dpas = 27,
    /// `dpasw`
    Dpasw = 28,
    /// `dph`
    Dph = 29,
    /// `else`
    Else = 30,
    /// `endif`
    Endif = 31,
    /// `f16to32`
    F16to32 = 32,
    /// `f32to16`
    F32to16 = 33,
    /// `fbh`
    Fbh = 34,
    /// `fbl`
    Fbl = 35,
    /// `frc`
    Frc = 36,
    /// `goto`
    Goto = 37,
    /// `halt`
    Halt = 38,
    /// `if`
    If = 39,
    /// `illegal`
    Illegal = 40,
    /// `jmpi`
    Jmpi = 41,
    /// `join`
    Join = 42,
    /// `line`
    Line = 43,
    /// `lrp`
    Lrp = 44,
    /// `lzd`
    Lzd = 45,
    /// `mac`
    Mac = 46,
    /// `mach`
    Mach = 47,
    /// `macl`
    Macl = 48,
    /// `mad`
    Mad = 49,
    /// `madm`
    Madm = 50,
    /// `math`
    Math = 51,
    /// `mov`
    Mov = 52,
    /// `movi`
    Movi = 53,
    /// `mul`
    Mul = 54,
    /// `nop`
    Nop = 56,
    /// `not`
    Not = 57,
    /// `or`
    Or = 58,
    /// `pln`
    Pln = 59,
    /// `ret`
    Ret = 60,
    /// `rndd`
    Rndd = 61,
    /// `rnde`
    Rnde = 62,
    /// `rndu`
    Rndu = 63,
    /// `rndz`
    Rndz = 64,
    /// `rol`
    Rol = 65,
    /// `ror`
    Ror = 66,
    /// `sad2`
    Sad2 = 67,
    /// `sada2`
    Sada2 = 68,
    /// `sel`
    Sel = 70,
    /// `send`
    Send = 71,
    /// `sendc`
    Sendc = 72,
    /// `sends`
    Sends = 75,
    /// `sendsc`
    Sendsc = 76,
    /// `shl`
    Shl = 77,
    /// `shr`
    Shr = 78,
    /// `smov`
    Smov = 79,
    /// `srnd`
    Srnd = 80,
    /// `subb`
    Subb = 81,
    /// `sync`
    Sync = 82,
    /// `wait`
    Wait = 83,
    /// `while`
    While = 84,
    /// `xor`
    Xor = 85,
}

impl Op {
    /// Every live operation, in ordinal order.
    pub const ALL: [Self; 81] = [
        Self::Add,
        Self::Add3,
        Self::Addc,
        Self::And,
        Self::Asr,
        Self::Avg,
        Self::Bfe,
        Self::Bfi1,
        Self::Bfi2,
        Self::Bfn,
        Self::Bfrev,
        Self::Brc,
        Self::Brd,
        Self::Break,
        Self::Call,
        Self::Calla,
        Self::Cbit,
        Self::Cmp,
        Self::Cmpn,
        Self::Cont,
        Self::Csel,
        Self::Dim,
        Self::Dp2,
        Self::Dp3,
        Self::Dp4,
        Self::Dp4a,
        Self::Dpas,
        Self::Dpasw,
        Self::Dph,
        Self::Else,
        Self::Endif,
        Self::F16to32,
        Self::F32to16,
        Self::Fbh,
        Self::Fbl,
        Self::Frc,
        Self::Goto,
        Self::Halt,
        Self::If,
        Self::Illegal,
        Self::Jmpi,
        Self::Join,
        Self::Line,
        Self::Lrp,
        Self::Lzd,
        Self::Mac,
        Self::Mach,
        Self::Macl,
        Self::Mad,
        Self::Madm,
        Self::Math,
        Self::Mov,
        Self::Movi,
        Self::Mul,
        Self::Nop,
        Self::Not,
        Self::Or,
        Self::Pln,
        Self::Ret,
        Self::Rndd,
        Self::Rnde,
        Self::Rndu,
        Self::Rndz,
        Self::Rol,
        Self::Ror,
        Self::Sad2,
        Self::Sada2,
        Self::Sel,
        Self::Send,
        Self::Sendc,
        Self::Sends,
        Self::Sendsc,
        Self::Shl,
        Self::Shr,
        Self::Smov,
        Self::Srnd,
        Self::Subb,
        Self::Sync,
        Self::Wait,
        Self::While,
        Self::Xor,
    ];

    /// Dense ordinal used to index the per-platform tables.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Maps an ordinal back to its operation.
    ///
    /// Returns `None` for ordinal 0, for the retired gaps and for anything
    /// above [`TOTAL_OPS`].
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        let op = match ordinal {
            1 => Self::Add,
            2 => Self::Add3,
            3 => Self::Addc,
            4 => Self::And,
            5 => Self::Asr,
            6 => Self::Avg,
            7 => Self::Bfe,
            8 => Self::Bfi1,
            9 => Self::Bfi2,
            10 => Self::Bfn,
            11 => Self::Bfrev,
            12 => Self::Brc,
            13 => Self::Brd,
            14 => Self::Break,
            15 => Self::Call,
            16 => Self::Calla,
            17 => Self::Cbit,
            18 => Self::Cmp,
            19 => Self::Cmpn,
            20 => Self::Cont,
            21 => Self::Csel,
            22 => Self::Dim,
            23 => Self::Dp2,
            24 => Self::Dp3,
            25 => Self::Dp4,
            26 => Self::Dp4a,
            27 => Self::Dpas,
            28 => Self::Dpasw,
            29 => Self::Dph,
            30 => Self::Else,
            31 => Self::Endif,
            32 => Self::F16to32,
            33 => Self::F32to16,
            34 => Self::Fbh,
            35 => Self::Fbl,
            36 => Self::Frc,
            37 => Self::Goto,
            38 => Self::Halt,
            39 => Self::If,
            40 => Self::Illegal,
            41 => Self::Jmpi,
            42 => Self::Join,
            43 => Self::Line,
            44 => Self::Lrp,
            45 => Self::Lzd,
            46 => Self::Mac,
            47 => Self::Mach,
            48 => Self::Macl,
            49 => Self::Mad,
            50 => Self::Madm,
            51 => Self::Math,
            52 => Self::Mov,
            53 => Self::Movi,
            54 => Self::Mul,
            56 => Self::Nop,
            57 => Self::Not,
            58 => Self::Or,
            59 => Self::Pln,
            60 => Self::Ret,
            61 => Self::Rndd,
            62 => Self::Rnde,
            63 => Self::Rndu,
            64 => Self::Rndz,
            65 => Self::Rol,
            66 => Self::Ror,
            67 => Self::Sad2,
            68 => Self::Sada2,
            70 => Self::Sel,
            71 => Self::Send,
            72 => Self::Sendc,
            75 => Self::Sends,
            76 => Self::Sendsc,
            77 => Self::Shl,
            78 => Self::Shr,
            79 => Self::Smov,
            80 => Self::Srnd,
            81 => Self::Subb,
            82 => Self::Sync,
            83 => Self::Wait,
            84 => Self::While,
            85 => Self::Xor,
            _ => return None,
        };
        Some(op)
    }

    /// Canonical lower-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Add => "add",
            Self::Add3 => "add3",
            Self::Addc => "addc",
            Self::And => "and",
            Self::Asr => "asr",
            Self::Avg => "avg",
            Self::Bfe => "bfe",
            Self::Bfi1 => "bfi1",
            Self::Bfi2 => "bfi2",
            Self::Bfn => "bfn",
            Self::Bfrev => "bfrev",
            Self::Brc => "brc",
            Self::Brd => "brd",
            Self::Break => "break",
            Self::Call => "call",
            Self::Calla => "calla",
            Self::Cbit => "cbit",
            Self::Cmp => "cmp",
            Self::Cmpn => "cmpn",
            Self::Cont => "cont",
            Self::Csel => "csel",
            Self::Dim => "dim",
            Self::Dp2 => "dp2",
            Self::Dp3 => "dp3",
            Self::Dp4 => "dp4",
            Self::Dp4a => "dp4a",
            Self::Dpas => "dpas",
            Self::Dpasw => "dpasw",
            Self::Dph => "dph",
            Self::Else => "else",
            Self::Endif => "endif",
            Self::F16to32 => "f16to32",
            Self::F32to16 => "f32to16",
            Self::Fbh => "fbh",
            Self::Fbl => "fbl",
            Self::Frc => "frc",
            Self::Goto => "goto",
            Self::Halt => "halt",
            Self::If => "if",
            Self::Illegal => "illegal",
            Self::Jmpi => "jmpi",
            Self::Join => "join",
            Self::Line => "line",
            Self::Lrp => "lrp",
            Self::Lzd => "lzd",
            Self::Mac => "mac",
            Self::Mach => "mach",
            Self::Macl => "macl",
            Self::Mad => "mad",
            Self::Madm => "madm",
            Self::Math => "math",
            Self::Mov => "mov",
            Self::Movi => "movi",
            Self::Mul => "mul",
            Self::Nop => "nop",
            Self::Not => "not",
            Self::Or => "or",
            Self::Pln => "pln",
            Self::Ret => "ret",
            Self::Rndd => "rndd",
            Self::Rnde => "rnde",
            Self::Rndu => "rndu",
            Self::Rndz => "rndz",
            Self::Rol => "rol",
            Self::Ror => "ror",
            Self::Sad2 => "sad2",
            Self::Sada2 => "sada2",
            Self::Sel => "sel",
            Self::Send => "send",
            Self::Sendc => "sendc",
            Self::Sends => "sends",
            Self::Sendsc => "sendsc",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Smov => "smov",
            Self::Srnd => "srnd",
            Self::Subb => "subb",
            Self::Sync => "sync",
            Self::Wait => "wait",
            Self::While => "while",
            Self::Xor => "xor",
        }
    }

    /// Human-readable description, taken from the first platform on which
    /// the operation is live.
    pub fn description(self) -> Option<&'static str> {
        Platform::ALL
            .iter()
            .find_map(|p| resolver::resolve(*p, self).and_then(|spec| spec.description))
    }

    /// Platforms on which the operation is live.
    pub fn platforms(self) -> impl Iterator<Item = Platform> {
        Platform::ALL
            .into_iter()
            .filter(move |p| resolver::is_supported(*p, self))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
