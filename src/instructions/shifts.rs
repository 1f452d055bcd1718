//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR work on the accumulator in implied mode and on memory
//! otherwise. The bit shifted out lands in Carry; Z and N follow the result.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus, Status};

/// Executes ASL (Arithmetic Shift Left).
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    finish(cpu, operand, value << 1, value & 0x80 != 0)
}

/// Executes LSR (Logical Shift Right).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    finish(cpu, operand, value >> 1, value & 0x01 != 0)
}

/// Executes ROL (Rotate Left) through Carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    let carry_in = u8::from(cpu.status.contains(Status::CARRY));
    finish(cpu, operand, (value << 1) | carry_in, value & 0x80 != 0)
}

/// Executes ROR (Rotate Right) through Carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    let carry_in = u8::from(cpu.status.contains(Status::CARRY)) << 7;
    finish(cpu, operand, (value >> 1) | carry_in, value & 0x01 != 0)
}

fn finish<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, result: u8, carry_out: bool) -> u8 {
    cpu.write_operand(operand, result);
    cpu.status.set(Status::CARRY, carry_out);
    cpu.status.set_zn(result);
    0
}
