//! # Stax Fault Interrupts
//!
//! The closed set of runtime fault causes. An interrupt has no state
//! beyond its identity; raising one reports its name through the host
//! diagnostic sink and, under current policy, ends the run. The runtime
//! surfaces faults as tagged step outcomes so the embedding host decides
//! what to do with them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime fault cause.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interrupt {
    /// `divmod` with a zero divisor
    DivByZero = 0,
    /// Pop from an empty working stack
    WstUnderflow = 1,
    /// Push onto a full working stack
    WstOverflow = 2,
    /// Pop from an empty return stack
    RstUnderflow = 3,
    /// Push onto a full return stack
    RstOverflow = 4,
    /// Memory access extending past the end of memory
    MemoryAccessError = 5,
    /// Unassigned instruction encoding, or an opcode/mode combination
    /// with no meaning
    InvalidInstruction = 6,
    /// `trap` with an unassigned selector
    InvalidTrap = 7,
}

/// Diagnostic names, indexed by cause.
pub const INTERRUPT_NAMES: [&str; Interrupt::COUNT] = [
    "DIV_BY_ZERO",
    "WST_UNDERFLOW",
    "WST_OVERFLOW",
    "RST_UNDERFLOW",
    "RST_OVERFLOW",
    "MEMORY_ACCESS_ERROR",
    "INVALID_INSTRUCTION",
    "INVALID_TRAP",
];

impl Interrupt {
    /// Number of fault causes.
    pub const COUNT: usize = 8;

    /// Diagnostic name reported to the host sink.
    pub fn name(self) -> &'static str {
        INTERRUPT_NAMES[self as usize]
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for Interrupt {}
