//! Assembly-style rendering.
//!
//! Lines follow the layout
//! `[(~f0.0.any2h)] mnemonic[.fc|.sfid] (exec|M0) [(mod)fX.Y] [(sat)]dst src... [jip [uip]] [desc ex_desc] [{NoMask,BranchCtl}]`,
//! optionally prefixed by the instruction bytes and followed by the
//! operation description.

use std::fmt::Write as _;

use crate::common::error::IsaError;
use crate::config::{Config, DisasmOptions};
use crate::isa::decode::decode;
use crate::isa::encode::{Encoding, encode};
use crate::isa::instruction::{DstOperand, Instruction, Operand, OperandKind, RegFile, RegRef};
use crate::isa::platform::Platform;
use crate::isa::resolver;
use crate::isa::types::DataType;

/// Renders `inst` as one line of assembly.
///
/// With [`DisasmOptions::print_bytes`] the instruction is encoded for the
/// prefix; instructions that do not encode are printed without it.
pub fn format_instruction(inst: &Instruction, options: &DisasmOptions) -> String {
    let bytes = if options.print_bytes {
        encode(inst).ok()
    } else {
        None
    };
    render(inst, bytes.as_ref(), options)
}

/// Decodes the instruction at the start of `bytes` and renders it.
///
/// # Errors
///
/// Any error from [`decode`].
pub fn disassemble(
    bytes: &[u8],
    platform: Platform,
    options: &DisasmOptions,
) -> Result<String, IsaError> {
    let inst = decode(bytes, platform)?;
    let encoding = Encoding::from_slice(bytes);
    Ok(render(&inst, encoding.as_ref().filter(|_| options.print_bytes), options))
}

/// Disassembles whole instruction streams for one platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disassembler {
    platform: Platform,
    options: DisasmOptions,
}

impl Disassembler {
    /// Disassembler for `platform` with the given presentation.
    pub const fn new(platform: Platform, options: DisasmOptions) -> Self {
        Self { platform, options }
    }

    /// Disassembler for the configured default platform.
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.model.default_platform, config.disasm)
    }

    /// Target platform.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// One line per 16-byte instruction in `stream`.
    ///
    /// # Errors
    ///
    /// The first decoding failure; a trailing partial instruction is
    /// [`IsaError::MalformedEncoding`].
    pub fn disassemble_all(&self, stream: &[u8]) -> Result<Vec<String>, IsaError> {
        stream
            .chunks(Encoding::LEN)
            .map(|chunk| disassemble(chunk, self.platform, &self.options))
            .collect()
    }
}

fn render(inst: &Instruction, bytes: Option<&Encoding>, options: &DisasmOptions) -> String {
    let mut line = String::new();
    if let Some(bytes) = bytes {
        let _ = write!(line, "{bytes} | ");
    }
    if let Some(pred) = inst.predicate {
        let inv = if pred.inverse { "~" } else { "" };
        let _ = write!(line, "({inv}{}{}) ", inst.flag_reg, pred.ctrl.suffix());
    }
    line.push_str(inst.op.mnemonic());
    if let Some(function) = inst.math_function {
        let _ = write!(line, ".{}", function.name());
    }
    if let Some(send) = inst.send {
        let _ = write!(line, ".{}", send.sfid.name());
    }
    let _ = write!(line, " ({}|M0)", inst.exec_size.lanes());
    if let Some(modifier) = inst.flag_modifier {
        let _ = write!(line, " ({}){}", modifier.name(), inst.flag_reg);
    }

    let mut operands = Vec::with_capacity(4);
    if let Some(dst) = inst.dst {
        let sat = if inst.saturate { "(sat)" } else { "" };
        operands.push(format!("{sat}{}", dst_text(dst)));
    }
    operands.extend(inst.srcs.iter().map(|src| src_text(src, options)));
    operands.extend(inst.jip.map(|jip| jip.to_string()));
    operands.extend(inst.uip.map(|uip| uip.to_string()));
    if let Some(send) = inst.send {
        operands.push(format!("{:#010x}", send.desc));
        operands.push(format!("{:#04x}", send.ex_desc));
    }
    for operand in operands {
        line.push(' ');
        line.push_str(&operand);
    }

    let mut flags = Vec::with_capacity(2);
    if inst.no_mask {
        flags.push("NoMask");
    }
    if inst.branch_control {
        flags.push("BranchCtl");
    }
    if !flags.is_empty() {
        let _ = write!(line, " {{{}}}", flags.join(","));
    }

    if options.print_description {
        let description = resolver::resolve(inst.platform, inst.op).and_then(|s| s.description);
        if let Some(description) = description {
            let _ = write!(line, "  // {description}");
        }
    }
    line
}

fn reg_text(reg: RegRef) -> String {
    match reg.file {
        RegFile::Grf => format!("r{}.{}", reg.num, reg.subreg),
        RegFile::Arf if reg.is_null() => "null".to_string(),
        RegFile::Arf => {
            let kind = match reg.num >> 4 {
                0x1 => "a",
                0x2 => "acc",
                0x3 => "f",
                0x4 => "ce",
                0x5 => "msg",
                0x6 => "sp",
                0x7 => "sr",
                0x8 => "cr",
                0x9 => "n",
                0xa => "ip",
                0xb => "tdr",
                0xc => "tm",
                0xd => "fc",
                0xf => "dbg",
                _ => return format!("arf{}.{}", reg.num, reg.subreg),
            };
            format!("{kind}{}.{}", reg.num & 0xf, reg.subreg)
        }
    }
}

fn dst_text(dst: DstOperand) -> String {
    format!("{}:{}", reg_text(dst.reg), dst.ty)
}

fn src_text(src: &Operand, options: &DisasmOptions) -> String {
    match src.kind {
        OperandKind::Register(reg) => {
            let neg = if src.mods.neg { "-" } else { "" };
            let body = format!("{}:{}", reg_text(reg), src.ty);
            if src.mods.abs {
                format!("{neg}(abs){body}")
            } else {
                format!("{neg}{body}")
            }
        }
        OperandKind::Immediate(raw) => {
            format!("{}:{}", immediate_text(raw, src.ty, options.hex_immediates), src.ty)
        }
    }
}

fn immediate_text(raw: u64, ty: DataType, hex: bool) -> String {
    if hex {
        return format!("{raw:#x}");
    }
    match ty {
        DataType::B => (raw as u8 as i8).to_string(),
        DataType::W => (raw as u16 as i16).to_string(),
        DataType::D => (raw as u32 as i32).to_string(),
        DataType::Q => (raw as i64).to_string(),
        DataType::F => format!("{:?}", f32::from_bits(raw as u32)),
        DataType::Df => format!("{:?}", f64::from_bits(raw)),
        // Raw bits.
        DataType::Hf => format!("{raw:#06x}"),
        DataType::Ub | DataType::Uw | DataType::Ud | DataType::Uq => raw.to_string(),
    }
}
