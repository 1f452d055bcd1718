//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. The stack lives at 0x0100-0x01FF and grows downward;
//! SP wraps within the page.

use crate::{Cpu, MemoryBus, Status};

/// Executes PHA (Push Accumulator).
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.push(cpu.a);
    0
}

/// Executes PHP (Push Processor Status).
///
/// The pushed copy has Break and Unused set. Break is then cleared in the live
/// status.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.push(cpu.status.pushed_by_software());
    cpu.status.remove(Status::BREAK);
    0
}

/// Executes PLA (Pull Accumulator).
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.a = cpu.pull();
    cpu.status.set_zn(cpu.a);
    0
}

/// Executes PLP (Pull Processor Status).
///
/// Break is dropped and Unused forced on in the live copy.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let pulled = Status::from_bits_retain(cpu.pull());
    cpu.status = (pulled - Status::BREAK) | Status::UNUSED;
    0
}
