//! Trap dispatch
//!
//! `trap` is the only channel from a program to host-provided behavior.
//! The popped selector picks a service; each service consumes its own
//! arguments through the VM's public pop operation, so a missing
//! argument faults exactly like any other working-stack underflow.

use crate::execute::Control;
use crate::host::Host;
use crate::vm::Vm;
use stax_spec::{Interrupt, Word};

/// Halt service: pops an exit status and ends the run.
pub const TRAP_HALT: Word = 0;

/// Character-output service: pops a character word and emits it.
pub const TRAP_PUTC: Word = 1;

pub(crate) fn dispatch(vm: &mut Vm, host: &mut dyn Host) -> Result<Control, Interrupt> {
    let selector = vm.pop()?;
    match selector {
        TRAP_HALT => {
            let status = vm.pop()?;
            Ok(Control::Halt(status))
        }
        TRAP_PUTC => {
            let ch = vm.pop()?;
            host.putc(ch);
            Ok(Control::Continue)
        }
        _ => {
            tracing::debug!(selector, "unassigned trap selector");
            Err(Interrupt::InvalidTrap)
        }
    }
}
