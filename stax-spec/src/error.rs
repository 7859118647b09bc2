//! # Error Types for the Stax ISA

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Both operand-size bits set: no opcode assigns this encoding a
    /// meaning.
    #[error("reserved operand-size bits 0b11 in instruction byte {0:#04x}")]
    ReservedSizeBits(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_byte() {
        let err = DecodeError::ReservedSizeBits(0x61);
        assert_eq!(
            err.to_string(),
            "reserved operand-size bits 0b11 in instruction byte 0x61"
        );
    }
}
