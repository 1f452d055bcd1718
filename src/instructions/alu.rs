//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry (the Decimal flag is ignored)
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: register comparisons
//! - BIT: bit test

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus, Status};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates C, Z, V, N.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
    operand.page_penalty()
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computed as ADC of the operand's one's complement, so Carry set means no
/// borrow occurred.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value ^ 0xFF);
    operand.page_penalty()
}

fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let carry_in = u16::from(cpu.status.contains(Status::CARRY));

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    // Overflow: both inputs share a sign the result does not
    let overflow = (!(a ^ value) & (a ^ result) & 0x80) != 0;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status.set(Status::OVERFLOW, overflow);
    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.a &= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.a |= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.a ^= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Sets C if A >= operand, and Z/N from A - operand. A is unchanged.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    let register = cpu.a;
    compare(cpu, register, value);
    operand.page_penalty()
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    let register = cpu.x;
    compare(cpu, register, value);
    0
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);
    let register = cpu.y;
    compare(cpu, register, value);
    0
}

fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, value: u8) {
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects A AND operand. N and V are copied from bits 7 and 6 of the
/// operand itself. A is unchanged.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    let value = cpu.read_operand(operand);

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    0
}
