//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary CPU state and memory contents, then runs a few
//! instructions and interrupts. Nothing the input does may panic.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Cpu, FlatMemory, MemoryBus, Status, Vector};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    irq_vector: u16,
    nmi_vector: u16,
}

/// Host actions interleaved with execution
#[derive(Debug, Arbitrary)]
enum Action {
    Step,
    Clock,
    Irq,
    Nmi,
    Reset,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    actions: Vec<Action>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.set_vector(Vector::IrqBrk, input.memory.irq_vector);
    memory.set_vector(Vector::Nmi, input.memory.nmi_vector);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }

    let pc = input.cpu_state.pc;
    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = Cpu::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(pc);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    for action in input.actions.iter().take(64) {
        let before = cpu.cycles();
        match action {
            Action::Step => {
                let cost = cpu.step();
                assert!((2..=8).contains(&cost));
                assert!(cpu.is_idle());
            }
            Action::Clock => {
                cpu.clock();
                assert_eq!(cpu.cycles(), before + 1);
            }
            Action::Irq => {
                cpu.irq();
            }
            Action::Nmi => cpu.nmi(),
            Action::Reset => {
                cpu.reset();
                assert_eq!(cpu.sp(), 0xFD);
            }
        }
    }
});
