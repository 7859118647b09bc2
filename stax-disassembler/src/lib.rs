//! # Stax Disassembler
//!
//! Disassemble raw Stax program images into readable listings.
//!
//! The sweep is linear: one instruction per byte, with `lit` consuming
//! its immediate from the stream. Instructions and data share the
//! address space, so data regions render as whatever instructions their
//! bytes spell; bytes that decode to nothing (reserved size bits) render
//! as `.byte` lines and the sweep continues. Pass the slice you care
//! about, typically the image as produced by the assembler rather than
//! the whole 64 KiB arena.
//!
//! ## Example
//!
//! ```rust
//! use stax_disassembler::disassemble;
//!
//! // lit.b 53 ; add
//! let listing = disassemble(&[0x21, 53, 0x18]);
//! assert!(listing.contains("lit.b"));
//! assert!(listing.contains("add"));
//! ```

use stax_spec::{Instruction, Opcode, Word};
use std::fmt::Write;

/// Render one instruction with an optional immediate.
pub fn render(inst: &Instruction, imm: Option<Word>) -> String {
    match imm {
        Some(value) => format!("{inst} {value:#x}"),
        None => inst.to_string(),
    }
}

/// One decoded line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Image address of the first byte.
    pub addr: usize,
    /// The bytes the line covers.
    pub bytes: Vec<u8>,
    /// Rendered text (mnemonic with suffixes, or a `.byte` directive).
    pub text: String,
}

/// Decode a whole image into lines.
pub fn decode_lines(image: &[u8]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < image.len() {
        let line = decode_at(image, addr);
        addr += line.bytes.len();
        lines.push(line);
    }
    lines
}

/// Decode the instruction at `addr`.
///
/// Undecodable bytes, and a `lit` whose immediate runs past the end of
/// the image, come back as `.byte` lines so a sweep never gets stuck.
pub fn decode_at(image: &[u8], addr: usize) -> Line {
    let byte = image[addr];
    let raw_line = || Line {
        addr,
        bytes: vec![byte],
        text: format!(".byte {byte:#04x}"),
    };

    let inst = match Instruction::decode(byte) {
        Ok(inst) => inst,
        Err(_) => return raw_line(),
    };

    if inst.opcode != Opcode::Lit {
        return Line {
            addr,
            bytes: vec![byte],
            text: render(&inst, None),
        };
    }

    let width = inst.size.width() as usize;
    if addr + 1 + width > image.len() {
        return raw_line();
    }

    let operand = &image[addr + 1..addr + 1 + width];
    let mut value: Word = 0;
    for (i, &b) in operand.iter().enumerate() {
        value |= (b as Word) << (8 * i);
    }

    let mut bytes = vec![byte];
    bytes.extend_from_slice(operand);
    Line {
        addr,
        bytes,
        text: render(&inst, Some(value)),
    }
}

/// Disassemble an image into a printable listing.
pub fn disassemble(image: &[u8]) -> String {
    let mut out = String::new();
    for line in decode_lines(image) {
        let mut hex = String::new();
        for b in &line.bytes {
            let _ = write!(hex, "{b:02x} ");
        }
        let _ = writeln!(out, "{:04x}:  {:<16}{}", line.addr, hex, line.text);
    }
    out
}
