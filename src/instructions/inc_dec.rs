//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory; INX, INY, DEX, DEY modify index registers. All wrap
//! at 8 bits and update Z and N. Carry and Overflow are never affected.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// Executes INC (Increment Memory).
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.status.set_zn(result);
    0
}

/// Executes DEC (Decrement Memory).
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.status.set_zn(result);
    0
}

/// Executes INX (Increment X Register).
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    0
}

/// Executes INY (Increment Y Register).
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    0
}

/// Executes DEX (Decrement X Register).
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    0
}

/// Executes DEY (Decrement Y Register).
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    0
}
