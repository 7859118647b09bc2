//! # Stax Instruction Wire Format
//!
//! Each instruction is one byte:
//!
//! ```text
//! bit 7      relative flag
//! bits 6-5   operand size: 00 word, 01 byte, 10 short, 11 reserved
//! bits 4-0   opcode (0x00-0x1F)
//! ```
//!
//! The reserved size encoding 0b11 has no assigned meaning and decodes to
//! an error; the runtime surfaces it as an `INVALID_INSTRUCTION` fault.

use crate::error::DecodeError;
use crate::opcode::Opcode;
use crate::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask selecting the opcode field.
pub const OPCODE_MASK: u8 = 0x1F;

/// Shift of the operand-size field.
pub const SIZE_SHIFT: u8 = 5;

/// Mask selecting the operand-size field.
pub const SIZE_MASK: u8 = 0x60;

/// The relative-addressing flag bit.
pub const RELATIVE_FLAG: u8 = 0x80;

/// Operand size selected by bits 6-5 of an instruction byte.
///
/// Selects the width of a `lit` immediate, a `fetch`/`store` access, or
/// the source width of `sext`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandSize {
    /// 4 bytes (size bits 00)
    Word,
    /// 1 byte (size bits 01)
    Byte,
    /// 2 bytes (size bits 10)
    Short,
}

impl OperandSize {
    /// Operand width in bytes.
    #[inline]
    pub fn width(self) -> Word {
        match self {
            OperandSize::Word => 4,
            OperandSize::Byte => 1,
            OperandSize::Short => 2,
        }
    }

    /// Encoded field value (before shifting into bits 6-5).
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            OperandSize::Word => 0b00,
            OperandSize::Byte => 0b01,
            OperandSize::Short => 0b10,
        }
    }

    /// Operand size for a 2-bit field value. 0b11 is reserved.
    pub fn from_bits(bits: u8) -> Option<OperandSize> {
        match bits & 0b11 {
            0b00 => Some(OperandSize::Word),
            0b01 => Some(OperandSize::Byte),
            0b10 => Some(OperandSize::Short),
            _ => None,
        }
    }

    /// Mnemonic suffix (empty for the word default).
    pub fn suffix(self) -> &'static str {
        match self {
            OperandSize::Word => "",
            OperandSize::Byte => ".b",
            OperandSize::Short => ".s",
        }
    }
}

/// A decoded instruction byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub size: OperandSize,
    pub relative: bool,
}

impl Instruction {
    /// Word-sized, absolute instruction for an opcode.
    pub fn plain(opcode: Opcode) -> Instruction {
        Instruction {
            opcode,
            size: OperandSize::Word,
            relative: false,
        }
    }

    /// Split an instruction byte into opcode, operand size, and relative
    /// flag. Fails on the reserved size encoding 0b11.
    pub fn decode(byte: u8) -> Result<Instruction, DecodeError> {
        let size = OperandSize::from_bits((byte & SIZE_MASK) >> SIZE_SHIFT)
            .ok_or(DecodeError::ReservedSizeBits(byte))?;
        Ok(Instruction {
            opcode: Opcode::from_bits(byte & OPCODE_MASK),
            size,
            relative: byte & RELATIVE_FLAG != 0,
        })
    }

    /// Encode back into an instruction byte.
    pub fn encode(&self) -> u8 {
        let mut byte = self.opcode.to_u8() | (self.size.bits() << SIZE_SHIFT);
        if self.relative {
            byte |= RELATIVE_FLAG;
        }
        byte
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.opcode.mnemonic(), self.size.suffix())?;
        if self.relative {
            write!(f, ".r")?;
        }
        Ok(())
    }
}
