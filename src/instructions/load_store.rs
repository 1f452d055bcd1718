//! # Load and Store Instructions
//!
//! Loads (LDA, LDX, LDY) update Z and N and owe a cycle on an indexed page
//! cross. Stores (STA, STX, STY) affect no flags and never owe extra cycles.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// Executes LDA (Load Accumulator).
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.a = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes LDX (Load X Register).
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.x = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.x);
    operand.page_penalty()
}

/// Executes LDY (Load Y Register).
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.y = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.y);
    operand.page_penalty()
}

/// Executes STA (Store Accumulator).
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.write_operand(operand, cpu.a);
    0
}

/// Executes STX (Store X Register).
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.write_operand(operand, cpu.x);
    0
}

/// Executes STY (Store Y Register).
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> u8 {
    cpu.write_operand(operand, cpu.y);
    0
}
