//! # Addressing Modes
//!
//! This module defines the 12 addressing modes supported by the 6502 processor
//! and resolves them into operands.
//!
//! Resolution consumes operand bytes from the instruction stream (advancing the
//! program counter) and produces an [`Operand`]: the accumulator, an effective
//! address, or a signed branch offset. Indexed modes also report whether the
//! index pushed the address onto a different page, which costs an extra cycle
//! for the instructions that honour it.

use crate::{Cpu, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand bytes. Instructions that need a value operate on the accumulator.
    ///
    /// Examples: CLC, RTS, ASL A
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap bug: JMP ($10FF) reads its target from
    /// $10FF and $1000, never $1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size including the opcode byte.
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// Where an instruction's operand lives, resolved for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// Operand is the accumulator (implied mode).
    Accumulator,
    /// Operand is the byte at this effective address.
    Address(u16),
    /// Signed branch offset, applied to the PC after the instruction.
    Relative(i8),
}

/// A resolved operand plus the page-crossing signal from its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operand {
    pub target: Target,
    pub page_crossed: bool,
}

impl Operand {
    fn at(addr: u16) -> Self {
        Self {
            target: Target::Address(addr),
            page_crossed: false,
        }
    }

    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            target: Target::Address(addr),
            page_crossed: page_crossed(base, addr),
        }
    }

    /// Effective address, if the operand lives in memory.
    pub fn address(&self) -> Option<u16> {
        match self.target {
            Target::Address(addr) => Some(addr),
            _ => None,
        }
    }

    /// Extra cycle owed by instructions that honour the page-crossing penalty.
    pub fn page_penalty(&self) -> u8 {
        u8::from(self.page_crossed)
    }
}

/// True if the two addresses lie in different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Resolves `mode` against the instruction stream at the CPU's PC.
///
/// The PC is advanced past the operand bytes.
pub(crate) fn resolve<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> Operand {
    match mode {
        AddressingMode::Implied => Operand {
            target: Target::Accumulator,
            page_crossed: false,
        },
        AddressingMode::Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            Operand::at(addr)
        }
        AddressingMode::ZeroPage => Operand::at(cpu.next_byte() as u16),
        AddressingMode::ZeroPageX => {
            let base = cpu.next_byte();
            Operand::at(base.wrapping_add(cpu.x) as u16)
        }
        AddressingMode::ZeroPageY => {
            let base = cpu.next_byte();
            Operand::at(base.wrapping_add(cpu.y) as u16)
        }
        AddressingMode::Relative => Operand {
            target: Target::Relative(cpu.next_byte() as i8),
            page_crossed: false,
        },
        AddressingMode::Absolute => Operand::at(cpu.next_word()),
        AddressingMode::AbsoluteX => {
            let base = cpu.next_word();
            Operand::indexed(base, base.wrapping_add(cpu.x as u16))
        }
        AddressingMode::AbsoluteY => {
            let base = cpu.next_word();
            Operand::indexed(base, base.wrapping_add(cpu.y as u16))
        }
        AddressingMode::Indirect => {
            let ptr = cpu.next_word();

            // NMOS bug: the high byte never comes from the next page
            let hi_addr = if ptr & 0x00FF == 0x00FF {
                ptr & 0xFF00
            } else {
                ptr.wrapping_add(1)
            };
            let lo = cpu.memory.read(ptr) as u16;
            let hi = cpu.memory.read(hi_addr) as u16;
            Operand::at((hi << 8) | lo)
        }
        AddressingMode::IndirectX => {
            let zp = cpu.next_byte().wrapping_add(cpu.x);
            Operand::at(zero_page_word(cpu, zp))
        }
        AddressingMode::IndirectY => {
            let zp = cpu.next_byte();
            let base = zero_page_word(cpu, zp);
            Operand::indexed(base, base.wrapping_add(cpu.y as u16))
        }
    }
}

/// Reads a pointer stored in zero page; the high byte wraps to $00 after $FF.
fn zero_page_word<M: MemoryBus>(cpu: &Cpu<M>, zp: u8) -> u16 {
    let lo = cpu.memory.read(zp as u16) as u16;
    let hi = cpu.memory.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Vector};

    fn cpu_with(program: &[u8]) -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.set_vector(Vector::Reset, 0x0400);
        memory.load(0x0400, program).unwrap();
        Cpu::new(memory)
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(AddressingMode::Implied.instruction_size(), 1);
        assert_eq!(AddressingMode::Relative.instruction_size(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_size(), 2);
        assert_eq!(AddressingMode::Indirect.instruction_size(), 3);
        assert_eq!(AddressingMode::AbsoluteY.instruction_size(), 3);
    }

    #[test]
    fn test_immediate_points_at_pc() {
        let mut cpu = cpu_with(&[0x42]);
        let operand = resolve(&mut cpu, AddressingMode::Immediate);

        assert_eq!(operand.target, Target::Address(0x0400));
        assert_eq!(cpu.pc, 0x0401);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_with(&[0xF0]);
        cpu.x = 0x20;

        let operand = resolve(&mut cpu, AddressingMode::ZeroPageX);
        assert_eq!(operand.target, Target::Address(0x0010));
        assert!(!operand.page_crossed);
    }

    #[test]
    fn test_absolute_y_reports_page_cross() {
        let mut cpu = cpu_with(&[0xF0, 0x12, 0x10, 0x12]);
        cpu.y = 0x20;

        let crossed = resolve(&mut cpu, AddressingMode::AbsoluteY);
        assert_eq!(crossed.target, Target::Address(0x1310));
        assert!(crossed.page_crossed);

        let same_page = resolve(&mut cpu, AddressingMode::AbsoluteY);
        assert_eq!(same_page.target, Target::Address(0x1230));
        assert!(!same_page.page_crossed);
        assert_eq!(cpu.pc, 0x0404);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_with(&[0xFF, 0x30]);
        cpu.memory.write(0x30FF, 0x80);
        cpu.memory.write(0x3000, 0x50);
        cpu.memory.write(0x3100, 0x40);

        let operand = resolve(&mut cpu, AddressingMode::Indirect);
        assert_eq!(operand.target, Target::Address(0x5080));
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_with(&[0xFE]);
        cpu.x = 0x01;
        cpu.memory.write(0x00FF, 0x34);
        cpu.memory.write(0x0000, 0x12);

        let operand = resolve(&mut cpu, AddressingMode::IndirectX);
        assert_eq!(operand.target, Target::Address(0x1234));
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let mut cpu = cpu_with(&[0x40]);
        cpu.y = 0x10;
        cpu.memory.write(0x0040, 0xF8);
        cpu.memory.write(0x0041, 0x20);

        let operand = resolve(&mut cpu, AddressingMode::IndirectY);
        assert_eq!(operand.target, Target::Address(0x2108));
        assert!(operand.page_crossed);
    }

    #[test]
    fn test_relative_is_sign_extended() {
        let mut cpu = cpu_with(&[0xFE]);
        let operand = resolve(&mut cpu, AddressingMode::Relative);
        assert_eq!(operand.target, Target::Relative(-2));
    }
}
