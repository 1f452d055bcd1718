//! Tests for CPU construction and reset.

use cpu6502::{Cpu, FlatMemory, MemoryBus, Status, Vector};

#[test]
fn test_new_cpu_is_reset() {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0xC000);
    let cpu = Cpu::new(memory);

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.status(), Status::UNUSED);
    assert_eq!(cpu.cycles_remaining(), 8);
    assert_eq!(cpu.cycles(), 0);
    assert!(!cpu.is_idle());
}

#[test]
fn test_reset_vector_is_little_endian() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = Cpu::new(memory);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_zeroed_memory_resets_to_address_zero() {
    let cpu = Cpu::new(FlatMemory::new());
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_reset_clears_registers_and_flags() {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    let mut cpu = Cpu::new(memory);

    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x44);
    cpu.set_pc(0x5555);
    cpu.set_status(Status::all());
    cpu.step();

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.status(), Status::UNUSED);
    assert_eq!(cpu.cycles_remaining(), 8);
}

#[test]
fn test_reset_picks_up_new_vector() {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    let mut cpu = Cpu::new(memory);

    cpu.memory_mut().set_vector(Vector::Reset, 0xE000);
    cpu.reset();

    assert_eq!(cpu.pc(), 0xE000);
}

#[test]
fn test_reset_does_not_touch_memory() {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.write(0x01FD, 0xAA);
    let mut cpu = Cpu::new(memory);

    cpu.reset();

    assert_eq!(cpu.memory().read(0x01FD), 0xAA);
}

#[test]
fn test_cpu_borrowing_memory() {
    let mut memory = FlatMemory::new();
    memory.set_vector(Vector::Reset, 0x8000);
    memory.load(0x8000, &[0xA9, 0x42, 0x85, 0x10]).unwrap(); // LDA #$42 / STA $10

    {
        let mut cpu = Cpu::new(&mut memory);
        cpu.step();
        cpu.step();
    }

    assert_eq!(memory.read(0x0010), 0x42);
}
