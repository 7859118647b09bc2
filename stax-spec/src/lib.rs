//! # Stax ISA Specification
//!
//! Core types and wire format for the Stax virtual machine: a minimal
//! stack-based bytecode VM with a 32-opcode instruction set.
//!
//! ## Key Features
//! - 32-bit words; arithmetic wraps modulo 2^32
//! - 64 KiB flat byte-addressable memory, little-endian
//! - Two 256-word LIFO stacks (working and return)
//! - One-byte instructions: 5-bit opcode, 2-bit operand size, relative flag
//! - Closed set of eight fault interrupts

pub mod error;
pub mod instruction;
pub mod interrupt;
pub mod opcode;

pub use error::DecodeError;
pub use instruction::{Instruction, OperandSize};
pub use interrupt::{Interrupt, INTERRUPT_NAMES};
pub use opcode::{Opcode, MNEMONICS};

/// Memory capacity in bytes.
pub const MEM_SIZE: usize = 65536;

/// Capacity of each stack, in words.
pub const STACK_SIZE: usize = 256;

/// The VM's only data type (32-bit unsigned).
pub type Word = u32;

/// Signed view of a word, used where an opcode explicitly treats a word
/// as signed (shift amount, sign-extension).
pub type SWord = i32;

// Build-time self-checks: a broken table or a wrong word width is a
// defect in the build, not a misbehaving program.
const _: () = assert!(core::mem::size_of::<Word>() == 4);
const _: () = assert!(core::mem::size_of::<SWord>() == 4);
const _: () = assert!(Opcode::COUNT == 32);
const _: () = assert!(Interrupt::COUNT == 8);
const _: () = assert!(MNEMONICS.len() == Opcode::COUNT);
const _: () = assert!(INTERRUPT_NAMES.len() == Interrupt::COUNT);
