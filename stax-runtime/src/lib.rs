//! # Stax Runtime
//!
//! Execute Stax program images: a minimal stack-based bytecode VM with
//! 64 KiB of flat memory, two 256-word stacks, and a 32-opcode
//! instruction set.
//!
//! ## Features
//!
//! - **Checked memory**: every access bounds-checked, little-endian
//! - **Two stacks**: working and return, each with its own fault pair
//! - **Cooperative execution**: `exec` runs a caller-bounded number of
//!   steps so an embedding host can time-slice
//! - **Tagged outcomes**: the core never terminates the host process;
//!   halts and faults are returned to the caller
//!
//! ## Example
//!
//! ```rust,no_run
//! use stax_runtime::{Outcome, StdHost, Vm};
//!
//! let image = std::fs::read("program.img").unwrap();
//! let mut vm = Vm::new();
//! vm.load(&image).unwrap();
//! let mut host = StdHost;
//! match vm.run(&mut host) {
//!     Outcome::Halted(status) => println!("exit status {status}"),
//!     Outcome::Fault(cause) => eprintln!("faulted: {cause}"),
//!     Outcome::Pending => unreachable!("run does not suspend"),
//! }
//! ```

pub mod error;
mod execute;
pub mod host;
pub mod memory;
pub mod stack;
mod trap;
pub mod vm;

pub use error::RuntimeError;
pub use host::{Host, RecordingHost, StdHost};
pub use memory::Memory;
pub use stack::{Stack, StackRole};
pub use trap::{TRAP_HALT, TRAP_PUTC};
pub use vm::{Outcome, Vm};

/// Load an image into a fresh VM and run it to completion.
pub fn run_image(image: &[u8], host: &mut dyn Host) -> Result<Outcome, RuntimeError> {
    let mut vm = Vm::new();
    vm.load(image)?;
    Ok(vm.run(host))
}
