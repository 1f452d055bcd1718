//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy a register and update Z and N.
//! TXS copies X into SP and leaves the flags alone.

use crate::{Cpu, MemoryBus};

/// Executes TAX (Transfer Accumulator to X).
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    0
}

/// Executes TAY (Transfer Accumulator to Y).
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    0
}

/// Executes TXA (Transfer X to Accumulator).
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    0
}

/// Executes TYA (Transfer Y to Accumulator).
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    0
}

/// Executes TSX (Transfer Stack Pointer to X).
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    0
}

/// Executes TXS (Transfer X to Stack Pointer).
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.sp = cpu.x;
    0
}
