//! End-to-end integration tests for the Stax toolchain
//!
//! These tests verify the complete workflow:
//! 1. Assemble source text into a raw image
//! 2. Execute the image in the VM
//! 3. Observe host effects (character output, diagnostics, exit status)
//!
//! Trap conventions: selector 0 halts with a popped status, selector 1
//! emits a popped character.

use stax_assembler::assemble;
use stax_runtime::{Outcome, RecordingHost, Vm};
use stax_spec::Interrupt;

fn boot(source: &str) -> (Vm, RecordingHost) {
    let image = assemble(source).expect("assembly failed");
    let mut vm = Vm::new();
    vm.load(&image).expect("load failed");
    (vm, RecordingHost::new())
}

#[test]
fn sized_literals_add_up_to_a_character() {
    // 16-bit 45 plus 8-bit 53 is 98, the ASCII 'b': exercises both
    // literal widths, the adder, and the putc path together.
    let source = r#"
        lit.s 45
        lit.b 53
        add
        lit.b 1
        trap
        lit.b 0
        lit.b 0
        trap
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0));
    assert_eq!(host.chars, vec![98]);
    assert_eq!(host.output_string(), "b");
}

#[test]
fn call_returns_to_the_instruction_after_the_call() {
    let source = r#"
        lit emit_a
        call
        lit.b 98        # 'b', printed only after the subroutine returns
        lit.b 1
        trap
        lit.b 0
        lit.b 0
        trap

        emit_a:
            lit.b 97    # 'a'
            lit.b 1
            trap
            ret
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0));
    assert_eq!(host.output_string(), "ab");
    // The call/ret pair leaves the return stack depth unchanged.
    assert!(vm.rst().is_empty());
}

#[test]
fn relative_jmp_with_offset_zero_lands_on_the_next_instruction() {
    let source = r#"
        lit 0
        jmp.r
        lit.b 121       # 'y': must execute immediately after the jump
        lit.b 1
        trap
        lit.b 0
        lit.b 0
        trap
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0));
    assert_eq!(host.output_string(), "y");
}

#[test]
fn string_walk_prints_from_memory() {
    // Walks a zero-terminated string with fetch.b, printing until the
    // terminator: loops, comparisons, conditional jumps, and data
    // directives in one program.
    let source = r#"
        lit msg
    loop:
        dup
        fetch.b
        dup
        lit.b 0
        eq
        lit end
        swap
        cjmp
        lit.b 1
        trap
        lit.b 1
        add
        lit loop
        jmp
    end:
        drop
        drop
        lit.b 0
        lit.b 0
        trap

    msg:
        .ascii "hi"
        .byte 10 0
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0));
    assert_eq!(host.output_string(), "hi\n");
}

#[test]
fn store_then_fetch_round_trips_through_memory() {
    let source = r#"
        lit 0x6F6B      # "ko" little-endian
        lit 0x9000
        store
        lit 0x9000
        fetch.b         # 'k'
        lit.b 1
        trap
        lit 0x9001
        fetch.b         # 'o'
        lit.b 1
        trap
        lit.b 0
        lit.b 0
        trap
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0));
    assert_eq!(host.output_string(), "ko");
}

#[test]
fn divmod_by_zero_ends_the_run_with_a_diagnostic() {
    let source = r#"
        lit.b 7
        lit.b 0
        divmod
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Fault(Interrupt::DivByZero));
    assert_eq!(host.diags, vec!["DIV_BY_ZERO"]);
    // The dividend is still there; nothing was pushed.
    assert_eq!(vm.wst().as_slice(), &[7]);
}

#[test]
fn sext_widens_a_negative_byte() {
    // sign-extend 0xF0, then shift right 4 logically: 0x0FFFFFFF
    let source = r#"
        lit.b 0xF0
        sext.b
        lit -4
        shift
        lit.b 0
        trap
    "#;

    let (mut vm, mut host) = boot(source);
    assert_eq!(vm.run(&mut host), Outcome::Halted(0x0FFF_FFFF));
}

#[test]
fn disassembly_of_an_assembled_image_names_every_instruction() {
    let source = "lit.s 45\nlit.b 53\nadd\nlit.b 1\ntrap\n";
    let image = assemble(source).unwrap();
    let listing = stax_disassembler::disassemble(&image);

    for expected in ["lit.s 0x2d", "lit.b 0x35", "add", "lit.b 0x1", "trap"] {
        assert!(listing.contains(expected), "missing {expected}:\n{listing}");
    }
}

#[test]
fn budget_slicing_preserves_program_behavior() {
    let source = r#"
        lit.s 45
        lit.b 53
        add
        lit.b 1
        trap
        lit.b 0
        lit.b 0
        trap
    "#;

    let (mut vm, mut host) = boot(source);
    // Single-step the whole program; every slice but the last suspends.
    let mut slices = 0;
    let outcome = loop {
        match vm.exec(&mut host, 1) {
            Outcome::Pending => slices += 1,
            outcome => break outcome,
        }
    };

    assert_eq!(outcome, Outcome::Halted(0));
    assert_eq!(slices, 7);
    assert_eq!(host.output_string(), "b");
}
