//! Property-based tests for addressing mode calculations.
//!
//! These tests verify effective addresses and the edge cases that make 6502
//! addressing tricky: zero-page wraparound, page-crossing penalties and the
//! indirect JMP page bug.

use cpu6502::{Cpu, FlatMemory, MemoryBus, Vector};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    Cpu::new(memory)
}

/// Data addresses that never collide with the program or the vectors
fn data_address() -> impl Strategy<Value = u16> {
    0x0200u16..0x7F00
}

// ========== Zero Page Addressing ==========

proptest! {
    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().write(base.wrapping_add(x) as u16, value);

        // LDA $base,X
        cpu.memory_mut().write(0x8000, 0xB5);
        cpu.memory_mut().write(0x8001, base);

        prop_assert_eq!(cpu.step(), 4);
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp,X) pointer bytes both come from zero page
    #[test]
    fn prop_indirect_x_pointer_in_zero_page(
        zp in any::<u8>(),
        x in any::<u8>(),
        target in data_address(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let ptr = zp.wrapping_add(x);
        cpu.memory_mut().write(ptr as u16, target as u8);
        cpu.memory_mut().write(ptr.wrapping_add(1) as u16, (target >> 8) as u8);
        cpu.memory_mut().write(target, value);

        // LDA ($zp,X)
        cpu.memory_mut().write(0x8000, 0xA1);
        cpu.memory_mut().write(0x8001, zp);

        prop_assert_eq!(cpu.step(), 6);
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp),Y adds Y after dereferencing and charges page crosses
    #[test]
    fn prop_indirect_y(
        zp in any::<u8>(),
        y in any::<u8>(),
        base in data_address(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().write(zp as u16, base as u8);
        cpu.memory_mut().write(zp.wrapping_add(1) as u16, (base >> 8) as u8);
        let effective = base.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, value);

        // LDA ($zp),Y
        cpu.memory_mut().write(0x8000, 0xB1);
        cpu.memory_mut().write(0x8001, zp);

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), 5 + crossed as u8);
        prop_assert_eq!(cpu.a(), value);
    }
}

// ========== Absolute Indexed Addressing ==========

proptest! {
    /// Property: absolute,X loads pay one cycle exactly when the page changes
    #[test]
    fn prop_absolute_x_page_penalty(base in data_address(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let effective = base.wrapping_add(x as u16);
        cpu.memory_mut().write(effective, value);

        // LDA $base,X
        cpu.memory_mut().load(0x8000, &[0xBD, base as u8, (base >> 8) as u8]).unwrap();

        let crossed = (base & 0xFF00) != (effective & 0xFF00);
        prop_assert_eq!(cpu.step(), 4 + crossed as u8);
        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: absolute,Y stores never pay the page penalty
    #[test]
    fn prop_absolute_y_store_fixed_cost(base in data_address(), y in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.set_a(value);

        // STA $base,Y
        cpu.memory_mut().load(0x8000, &[0x99, base as u8, (base >> 8) as u8]).unwrap();

        prop_assert_eq!(cpu.step(), 5);
        prop_assert_eq!(cpu.memory().read(base.wrapping_add(y as u16)), value);
    }
}

// ========== Indirect JMP ==========

proptest! {
    /// Property: JMP ($xxFF) takes its high byte from $xx00
    #[test]
    fn prop_jmp_indirect_page_bug(page in 0x02u8..0x7F, lo in any::<u8>(), hi in any::<u8>()) {
        let mut cpu = setup_cpu();
        let ptr = (page as u16) << 8 | 0xFF;
        cpu.memory_mut().write(ptr, lo);
        cpu.memory_mut().write(ptr & 0xFF00, hi);
        cpu.memory_mut().write(ptr.wrapping_add(1), hi.wrapping_add(1));

        // JMP ($ptr)
        cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, page]).unwrap();

        prop_assert_eq!(cpu.step(), 5);
        prop_assert_eq!(cpu.pc(), (hi as u16) << 8 | lo as u16);
    }
}
