//! Code128 symbol encoding.
//!
//! Symbol construction (start code, checksum, stop pattern) is done by the
//! `barcoders` crate; this module picks the character set and turns the
//! module sequence into bar runs for layout.

use barcoders::sym::code128::Code128;

use crate::error::{LabelError, Result};

/// Prefix selecting Code128 character set B (ASCII 32..=127).
const CHARSET_B: char = 'Ɓ';

/// Prefix selecting Code128 character set C (digit pairs).
const CHARSET_C: char = 'Ć';

/// Shortest all-digit value worth switching to set C for.
const MIN_SET_C_DIGITS: usize = 4;

/// Characters accepted in a barcode value: printable ASCII.
///
/// `barcoders` reads `À`, `Ɓ` and `Ć` anywhere in its input as character
/// set switches, so everything outside this range is rejected up front.
const SUPPORTED: std::ops::RangeInclusive<char> = ' '..='~';

/// Code128 character set used for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSet {
    B,
    C,
}

/// Choose the denser set C for even-length digit strings, set B otherwise.
pub fn character_set_for(value: &str) -> CharacterSet {
    let all_digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if all_digits && value.len() >= MIN_SET_C_DIGITS && value.len() % 2 == 0 {
        CharacterSet::C
    } else {
        CharacterSet::B
    }
}

/// An encoded Code128 symbol as a sequence of modules.
///
/// `true` is a bar module, `false` a space module. Quiet zones are not
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    modules: Vec<bool>,
}

/// A run of adjacent bar modules: starting module index and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRun {
    pub start: usize,
    pub len: usize,
}

impl Symbol {
    /// Encode `value` as Code128.
    pub fn encode(value: &str) -> Result<Self> {
        let unsupported = value.chars().enumerate().find(|(_, c)| !SUPPORTED.contains(c));
        if let Some((position, c)) = unsupported {
            return Err(LabelError::Barcode {
                value: value.escape_debug().to_string(),
                reason: format!(
                    "unsupported character '{}' at position {}",
                    c.escape_unicode(),
                    position + 1
                ),
            });
        }

        let prefix = match character_set_for(value) {
            CharacterSet::B => CHARSET_B,
            CharacterSet::C => CHARSET_C,
        };
        let barcode = Code128::new(format!("{prefix}{value}")).map_err(|e| LabelError::Barcode {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        let modules = barcode.encode().into_iter().map(|m| m == 1).collect();
        Ok(Self { modules })
    }

    /// Total number of modules, bars and spaces.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Collapse adjacent bar modules into runs, left to right.
    pub fn bar_runs(&self) -> Vec<BarRun> {
        let mut runs: Vec<BarRun> = Vec::new();
        for (i, &bar) in self.modules.iter().enumerate() {
            if !bar {
                continue;
            }
            match runs.last_mut() {
                Some(run) if run.start + run.len == i => run.len += 1,
                _ => runs.push(BarRun { start: i, len: 1 }),
            }
        }
        runs
    }
}
