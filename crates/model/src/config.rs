//! Configuration for model consumers.
//!
//! This module defines the settings a tool built on the model reads at
//! startup. It provides:
//! 1. **Defaults:** the platform assumed when none is given and the
//!    disassembly presentation switches.
//! 2. **Structures:** [`Config`] with a `model` and a `disasm` section.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]); every field
//! is optional and falls back to [`Config::default()`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::IsaError;
use crate::isa::platform::Platform;

/// Default configuration constants.
mod defaults {
    /// Print the raw instruction bytes before the assembly text.
    pub const PRINT_BYTES: bool = false;

    /// Append the operation description as a trailing comment.
    pub const PRINT_DESCRIPTION: bool = false;

    /// Render immediates in hexadecimal rather than as typed values.
    pub const HEX_IMMEDIATES: bool = true;
}

/// Top-level configuration.
///
/// # Example
///
/// ```
/// use xeisa_core::config::Config;
/// use xeisa_core::isa::Platform;
///
/// let json = r#"{
///     "model": { "default_platform": "GEN9" },
///     "disasm": { "print_bytes": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.model.default_platform, Platform::Gen9);
/// assert!(config.disasm.print_bytes);
/// assert!(config.disasm.hex_immediates);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Operation model settings
    #[serde(default)]
    pub model: ModelConfig,
    /// Disassembly presentation
    #[serde(default)]
    pub disasm: DisasmOptions,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// [`IsaError::Config`] if the document is not valid JSON or names an
    /// unknown section, field or platform.
    pub fn from_json(json: &str) -> Result<Self, IsaError> {
        serde_json::from_str(json).map_err(|e| IsaError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`IsaError::Config`] if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IsaError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| IsaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

/// Operation model settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Platform assumed by tools when the input does not name one
    #[serde(default)]
    pub default_platform: Platform,
}

/// Disassembly presentation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisasmOptions {
    /// Prefix each line with the instruction bytes
    #[serde(default = "DisasmOptions::default_print_bytes")]
    pub print_bytes: bool,

    /// Append `// description` to each line
    #[serde(default = "DisasmOptions::default_print_description")]
    pub print_description: bool,

    /// Hexadecimal immediates; otherwise integers print in decimal and
    /// `f`/`df` immediates as floating point
    #[serde(default = "DisasmOptions::default_hex_immediates")]
    pub hex_immediates: bool,
}

impl DisasmOptions {
    const fn default_print_bytes() -> bool {
        defaults::PRINT_BYTES
    }

    const fn default_print_description() -> bool {
        defaults::PRINT_DESCRIPTION
    }

    const fn default_hex_immediates() -> bool {
        defaults::HEX_IMMEDIATES
    }
}

impl Default for DisasmOptions {
    fn default() -> Self {
        Self {
            print_bytes: defaults::PRINT_BYTES,
            print_description: defaults::PRINT_DESCRIPTION,
            hex_immediates: defaults::HEX_IMMEDIATES,
        }
    }
}
