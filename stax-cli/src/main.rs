//! Command-line entry point for the Stax toolchain.
//!
//! `stax asm` assembles source into a raw image, `stax dis` lists one,
//! and `stax run` boots a VM, loads the image at address 0, and drives
//! the execution loop. The process exit status is the program's halt
//! status; a fault exits nonzero after the cause has gone to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stax_runtime::{Outcome, StdHost, Vm};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stax", version, about = "Stax virtual machine toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble a source file into a program image
    Asm {
        /// Assembly source file
        input: PathBuf,

        /// Where to write the image (defaults to the input with `.img`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Disassemble a program image to stdout
    Dis {
        /// Program image file
        image: PathBuf,
    },

    /// Run a program image
    Run {
        /// Program image file
        image: PathBuf,

        /// Decode-dispatch cycles per execution slice
        #[arg(long, default_value_t = 1 << 20)]
        fuel: u64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("stax: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Asm { input, output } => {
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let image = stax_assembler::assemble(&source)
                .with_context(|| format!("assembling {}", input.display()))?;
            let output = output.unwrap_or_else(|| input.with_extension("img"));
            std::fs::write(&output, &image)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("{}: {} bytes", output.display(), image.len());
            Ok(ExitCode::SUCCESS)
        }

        Command::Dis { image } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("reading {}", image.display()))?;
            print!("{}", stax_disassembler::disassemble(&bytes));
            Ok(ExitCode::SUCCESS)
        }

        Command::Run { image, fuel } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("reading {}", image.display()))?;
            let mut vm = Vm::new();
            vm.load(&bytes)
                .with_context(|| format!("loading {}", image.display()))?;

            let mut host = StdHost;
            loop {
                match vm.exec(&mut host, fuel) {
                    Outcome::Pending => continue,
                    Outcome::Halted(status) => {
                        tracing::debug!(status, "program halted");
                        return Ok(ExitCode::from(status as u8));
                    }
                    Outcome::Fault(_) => {
                        // Cause already reported through the diag sink.
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }
}
