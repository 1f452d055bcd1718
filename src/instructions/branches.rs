//! # Branch Instructions
//!
//! All eight conditional branches test one status flag against an expected
//! value. The relative offset is applied to the PC after the branch
//! instruction has been read.
//!
//! Cycle costs on top of the base 2:
//! - Not taken: +0
//! - Taken, same page: +1
//! - Taken, target on a different page: +2

use crate::addressing::{page_crossed, Operand, Target};
use crate::{Cpu, MemoryBus, Status};

/// Branches if `flag` currently equals `expected`.
///
/// BCC/BCS test Carry, BNE/BEQ Zero, BPL/BMI Negative and BVC/BVS Overflow.
pub(crate) fn branch_if<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    operand: Operand,
    flag: Status,
    expected: bool,
) -> u8 {
    let Target::Relative(offset) = operand.target else {
        return 0;
    };

    if cpu.status.contains(flag) != expected {
        return 0;
    }

    let target = cpu.pc.wrapping_add_signed(offset as i16);
    let extra = if page_crossed(cpu.pc, target) { 2 } else { 1 };
    cpu.pc = target;
    extra
}
