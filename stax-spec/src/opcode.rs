//! # Stax Opcode Definitions
//!
//! Opcodes are 5 bits (0x00-0x1F) and fill the space exactly: every one
//! of the 32 values is assigned.
//!
//! ## Opcode Groups
//!
//! - 0x00-0x01: nop, lit
//! - 0x02-0x07: stack shuffling (dup, drop, swap, over, rot, nip)
//! - 0x08-0x0D: control flow (call, ccall, ret, cret, jmp, cjmp)
//! - 0x0E-0x0F: stack transfer (wtr, rtw)
//! - 0x10-0x13: comparison (eq, neq, lt, gt)
//! - 0x14-0x17: bitwise and shift (and, or, xor, shift)
//! - 0x18-0x1B: arithmetic (add, sub, mul, divmod)
//! - 0x1C-0x1F: memory, sign-extension, host call (fetch, store, sext, trap)

use serde::{Deserialize, Serialize};

/// Instruction opcode (5 bits, values 0x00-0x1F).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// NOP: no effect
    Nop = 0x00,
    /// LIT: push an immediate read from the instruction stream
    Lit = 0x01,
    /// DUP: (a) -> (a, a)
    Dup = 0x02,
    /// DROP: (a) -> ()
    Drop = 0x03,
    /// SWAP: (a, b) -> (b, a)
    Swap = 0x04,
    /// OVER: (a, b) -> (a, b, a)
    Over = 0x05,
    /// ROT: (a, b, c) -> (b, c, a)
    Rot = 0x06,
    /// NIP: (a, b) -> (b)
    Nip = 0x07,
    /// CALL: push pc onto return stack, jump to popped target
    Call = 0x08,
    /// CCALL: pop flag then target; call when flag is nonzero
    Ccall = 0x09,
    /// RET: pop return stack into pc
    Ret = 0x0A,
    /// CRET: pop flag; return when flag is nonzero
    Cret = 0x0B,
    /// JMP: jump to popped target
    Jmp = 0x0C,
    /// CJMP: pop flag then target; jump when flag is nonzero
    Cjmp = 0x0D,
    /// WTR: move top of working stack onto return stack
    Wtr = 0x0E,
    /// RTW: move top of return stack onto working stack
    Rtw = 0x0F,
    /// EQ: (a, b) -> (a == b)
    Eq = 0x10,
    /// NEQ: (a, b) -> (a != b)
    Neq = 0x11,
    /// LT: (a, b) -> (a < b), unsigned
    Lt = 0x12,
    /// GT: (a, b) -> (a > b), unsigned
    Gt = 0x13,
    /// AND: bitwise and
    And = 0x14,
    /// OR: bitwise or
    Or = 0x15,
    /// XOR: bitwise xor
    Xor = 0x16,
    /// SHIFT: logical shift by a signed amount (sign selects direction)
    Shift = 0x17,
    /// ADD: wrapping add
    Add = 0x18,
    /// SUB: wrapping subtract
    Sub = 0x19,
    /// MUL: wrapping multiply
    Mul = 0x1A,
    /// DIVMOD: (a, b) -> (a mod b, a / b), unsigned
    Divmod = 0x1B,
    /// FETCH: load from memory at a popped address
    Fetch = 0x1C,
    /// STORE: store a popped value at a popped address
    Store = 0x1D,
    /// SEXT: sign-extend from byte or short
    Sext = 0x1E,
    /// TRAP: invoke a host service by popped selector
    Trap = 0x1F,
}

/// Assembly mnemonics, indexed by opcode value.
pub const MNEMONICS: [&str; Opcode::COUNT] = [
    "nop", "lit", "dup", "drop", "swap", "over", "rot", "nip", "call", "ccall", "ret", "cret",
    "jmp", "cjmp", "wtr", "rtw", "eq", "neq", "lt", "gt", "and", "or", "xor", "shift", "add",
    "sub", "mul", "divmod", "fetch", "store", "sext", "trap",
];

impl Opcode {
    /// Opcode width in bits.
    pub const BITS: usize = 5;

    /// Number of opcodes; fills the 5-bit space exactly.
    pub const COUNT: usize = 32;

    /// All opcodes in encoding order. `ALL[v]` is the opcode with value `v`.
    pub const ALL: [Opcode; Opcode::COUNT] = [
        Opcode::Nop,
        Opcode::Lit,
        Opcode::Dup,
        Opcode::Drop,
        Opcode::Swap,
        Opcode::Over,
        Opcode::Rot,
        Opcode::Nip,
        Opcode::Call,
        Opcode::Ccall,
        Opcode::Ret,
        Opcode::Cret,
        Opcode::Jmp,
        Opcode::Cjmp,
        Opcode::Wtr,
        Opcode::Rtw,
        Opcode::Eq,
        Opcode::Neq,
        Opcode::Lt,
        Opcode::Gt,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Shift,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Divmod,
        Opcode::Fetch,
        Opcode::Store,
        Opcode::Sext,
        Opcode::Trap,
    ];

    /// Opcode for a 5-bit value. Every value is assigned, so this is total
    /// over the masked input.
    #[inline]
    pub fn from_bits(bits: u8) -> Opcode {
        Opcode::ALL[(bits & 0x1F) as usize]
    }

    /// Encoded opcode value.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        MNEMONICS[self as usize]
    }

    /// Look an opcode up by its mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Opcode> {
        MNEMONICS
            .iter()
            .position(|&m| m == name)
            .map(|i| Opcode::ALL[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_discriminants() {
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(op.to_u8() as usize, i);
            assert_eq!(Opcode::from_bits(i as u8), *op);
        }
    }

    #[test]
    fn from_bits_masks_high_bits() {
        // Mode bits above the opcode field must not change the result
        assert_eq!(Opcode::from_bits(0x1F | 0x80), Opcode::Trap);
        assert_eq!(Opcode::from_bits(0x01 | 0x20), Opcode::Lit);
    }

    #[test]
    fn mnemonic_roundtrip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
        assert_eq!(Opcode::from_mnemonic("frobnicate"), None);
    }

    #[test]
    fn mnemonics_are_unique() {
        for (i, a) in MNEMONICS.iter().enumerate() {
            for b in &MNEMONICS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
