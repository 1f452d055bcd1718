//! # Flag Instructions
//!
//! Single-flag set/clear operations: CLC, SEC, CLI, SEI, CLD, SED, CLV.
//! None of them touch any other flag.

use crate::{Cpu, MemoryBus, Status};

/// Executes CLC (Clear Carry Flag).
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::CARRY);
    0
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::CARRY);
    0
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
    0
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    0
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::DECIMAL);
    0
}

/// Executes SED (Set Decimal Mode).
///
/// The flag is stored but ADC/SBC stay binary.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::DECIMAL);
    0
}

/// Executes CLV (Clear Overflow Flag).
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::OVERFLOW);
    0
}
