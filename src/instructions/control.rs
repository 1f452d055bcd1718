//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation, including the undocumented variants

use crate::addressing::Operand;
use crate::cpu::Vector;
use crate::{Cpu, MemoryBus, Status};

/// Executes the JMP (Jump) instruction.
///
/// The indirect form has already been resolved, page-wrap bug included.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    if let Some(target) = operand.address() {
        cpu.pc = target;
    }
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (return address minus one),
/// high byte first, then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    if let Some(target) = operand.address() {
        cpu.push_word(cpu.pc.wrapping_sub(1));
        cpu.pc = target;
    }
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    0
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is a two-byte instruction: the pushed return address skips the padding
/// byte after the opcode. The pushed status has Break and Unused set and the
/// Interrupt Disable value from before the BRK.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.push_word(cpu.pc.wrapping_add(1));
    cpu.push(cpu.status.pushed_by_software());

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.pc = cpu.memory.read_word(Vector::IrqBrk.address());
    0
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status first, then PCL, then PCH. Break and Unused are cleared in the
/// restored status.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let pulled = Status::from_bits_retain(cpu.pull());
    cpu.status = pulled - (Status::BREAK | Status::UNUSED);
    cpu.pc = cpu.pull_word();
    0
}

/// Executes NOP and its undocumented variants.
///
/// Operand bytes have already been consumed. The absolute,X forms owe a cycle
/// on a page cross.
pub(crate) fn nop(operand: Operand) -> u8 {
    operand.page_penalty()
}
