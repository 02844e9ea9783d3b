//! Splits an instruction word into its opcode and per-parameter addressing modes.

use smallvec::SmallVec;

use super::error::{IsaError, IsaResult};
use super::mode::AddressingMode;
use super::opcode::Opcode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    word: i64,
    opcode: Opcode,
    modes: SmallVec<[AddressingMode; 3]>,
}

impl Instruction {
    pub fn decode(word: i64) -> IsaResult<Self> {
        let code = word.rem_euclid(100);
        let opcode = match Opcode::from_code(code) {
            Some(opcode) if word >= 0 => opcode,
            _ => return Err(IsaError::InvalidOpcode { word, opcode: code }),
        };
        let mut digits = word / 100;
        let mut modes = SmallVec::new();
        for param in 1..=opcode.param_count() {
            let digit = digits % 10;
            digits /= 10;
            let mode = AddressingMode::from_digit(digit).ok_or(IsaError::InvalidMode {
                word,
                param,
                digit,
            })?;
            modes.push(mode);
        }
        if opcode.writes_last_param() && modes.last() == Some(&AddressingMode::Immediate) {
            return Err(IsaError::ImmediateWrite {
                param: opcode.param_count(),
            });
        }
        Ok(Self {
            word,
            opcode,
            modes,
        })
    }

    pub fn word(&self) -> i64 {
        self.word
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Addressing mode of the 1-based parameter `param`. Parameters the opcode
    /// does not declare report position mode.
    pub fn mode(&self, param: usize) -> AddressingMode {
        param
            .checked_sub(1)
            .and_then(|idx| self.modes.get(idx))
            .copied()
            .unwrap_or_default()
    }

    pub fn modes(&self) -> &[AddressingMode] {
        &self.modes
    }

    pub fn param_count(&self) -> usize {
        self.opcode.param_count()
    }

    /// Number of words the instruction occupies, opcode included.
    pub fn width(&self) -> usize {
        1 + self.param_count()
    }
}
